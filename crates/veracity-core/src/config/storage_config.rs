use serde::{Deserialize, Serialize};

use super::defaults;

/// What to do when the result was computed but could not be persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersistenceFailurePolicy {
    /// Fail the whole call, except for a URL that failed to parse.
    #[default]
    Fatal,
    /// Return the computed result and carry the failure alongside it.
    Report,
}

/// Storage subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub db_path: String,
    /// Characters of raw input kept in `input_data`.
    pub input_truncate_chars: usize,
    pub busy_timeout_ms: u32,
    pub persistence_failure: PersistenceFailurePolicy,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            db_path: defaults::DEFAULT_DB_FILENAME.to_string(),
            input_truncate_chars: defaults::DEFAULT_INPUT_TRUNCATE_CHARS,
            busy_timeout_ms: defaults::DEFAULT_BUSY_TIMEOUT_MS,
            persistence_failure: PersistenceFailurePolicy::default(),
        }
    }
}
