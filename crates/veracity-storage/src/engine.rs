//! ValidationStore: owns the SQLite connection and implements IValidationStore.

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use chrono::Utc;
use rusqlite::Connection;
use uuid::Uuid;

use veracity_core::config::{defaults, StorageConfig};
use veracity_core::errors::{StorageError, VeracityResult};
use veracity_core::models::{Modality, StoredValidation, ValidationRecord, VerdictCounts};
use veracity_core::traits::IValidationStore;

use crate::queries::validation_crud;
use crate::{migrations, pragmas, to_storage_err};

/// SQLite-backed validation store. One serialized connection.
pub struct ValidationStore {
    conn: Mutex<Connection>,
}

impl ValidationStore {
    /// Open (or create) a store backed by a file on disk.
    pub fn open(path: &Path) -> VeracityResult<Self> {
        Self::open_with_timeout(path, defaults::DEFAULT_BUSY_TIMEOUT_MS)
    }

    pub fn from_config(config: &StorageConfig) -> VeracityResult<Self> {
        Self::open_with_timeout(Path::new(&config.db_path), config.busy_timeout_ms)
    }

    fn open_with_timeout(path: &Path, busy_timeout_ms: u32) -> VeracityResult<Self> {
        let conn = Connection::open(path).map_err(|e| {
            to_storage_err(format!("failed to open {}: {e}", path.display()))
        })?;
        pragmas::apply_pragmas(&conn, busy_timeout_ms)?;
        Self::initialize(conn)
    }

    /// Open an in-memory store (for testing).
    pub fn open_in_memory() -> VeracityResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| to_storage_err(e.to_string()))?;
        Self::initialize(conn)
    }

    fn initialize(conn: Connection) -> VeracityResult<Self> {
        let applied = migrations::run_migrations(&conn)?;
        tracing::debug!(applied, "validation store ready");
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Current schema version.
    pub fn schema_version(&self) -> VeracityResult<u32> {
        migrations::current_version(&*self.lock()?)
    }

    fn lock(&self) -> VeracityResult<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| {
            StorageError::Unavailable {
                reason: "connection lock poisoned".to_string(),
            }
            .into()
        })
    }
}

impl IValidationStore for ValidationStore {
    fn insert(&self, record: &ValidationRecord) -> VeracityResult<String> {
        let id = Uuid::new_v4().to_string();
        validation_crud::insert_validation(&*self.lock()?, &id, record, Utc::now())?;
        Ok(id)
    }

    fn get(&self, id: &str) -> VeracityResult<Option<StoredValidation>> {
        validation_crud::get_validation(&*self.lock()?, id)
    }

    fn recent(&self, limit: usize) -> VeracityResult<Vec<StoredValidation>> {
        validation_crud::recent_validations(&*self.lock()?, limit)
    }

    fn verdict_counts(&self, modality: Modality) -> VeracityResult<VerdictCounts> {
        validation_crud::verdict_counts(&*self.lock()?, modality)
    }
}
