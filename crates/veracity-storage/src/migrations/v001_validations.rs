//! v001: validations.

use rusqlite::Connection;

use veracity_core::errors::VeracityResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> VeracityResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS validations (
            id                TEXT PRIMARY KEY,
            input_type        TEXT NOT NULL,
            input_data        TEXT NOT NULL,
            input_hash        TEXT NOT NULL,
            result            TEXT NOT NULL,
            confidence_score  REAL NOT NULL,
            details           TEXT NOT NULL,
            created_at        TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_validations_created ON validations(created_at);
        CREATE INDEX IF NOT EXISTS idx_validations_type ON validations(input_type, result);
        CREATE INDEX IF NOT EXISTS idx_validations_hash ON validations(input_hash);
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
