//! Versioned schema migrations, tracked in `schema_version`.

mod v001_validations;

use rusqlite::{params, Connection};

use veracity_core::errors::{StorageError, VeracityResult};

use crate::to_storage_err;

type Migration = fn(&Connection) -> VeracityResult<()>;

/// Every migration in order. Versions are 1-based and contiguous.
const MIGRATIONS: &[(u32, Migration)] = &[(1, v001_validations::migrate)];

/// Latest schema version this build knows about.
pub const LATEST_VERSION: u32 = MIGRATIONS.len() as u32;

/// Apply every migration newer than the recorded schema version.
/// Returns how many were applied.
pub fn run_migrations(conn: &Connection) -> VeracityResult<usize> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_version (
            version     INTEGER PRIMARY KEY,
            applied_at  TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;

    let current = current_version(conn)?;
    let mut applied = 0;
    for &(version, migrate) in MIGRATIONS.iter().filter(|(v, _)| *v > current) {
        migrate(conn).map_err(|e| StorageError::MigrationFailed {
            version,
            reason: e.to_string(),
        })?;
        conn.execute(
            "INSERT INTO schema_version (version) VALUES (?1)",
            params![version],
        )
        .map_err(|e| StorageError::MigrationFailed {
            version,
            reason: e.to_string(),
        })?;
        tracing::info!(version, "applied schema migration");
        applied += 1;
    }
    Ok(applied)
}

/// Highest applied version, 0 for a fresh database.
pub fn current_version(conn: &Connection) -> VeracityResult<u32> {
    conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM schema_version",
        [],
        |row| row.get(0),
    )
    .map_err(|e| to_storage_err(e.to_string()))
}
