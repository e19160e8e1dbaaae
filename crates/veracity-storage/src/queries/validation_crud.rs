//! Insert and read back validation rows.

use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};

use veracity_core::errors::{StorageError, VeracityResult};
use veracity_core::models::{Modality, StoredValidation, ValidationRecord, Verdict, VerdictCounts};

use crate::to_storage_err;

const COLUMNS: &str =
    "id, input_type, input_data, input_hash, result, confidence_score, details, created_at";

/// Insert `record` under `id` at `created_at`.
pub fn insert_validation(
    conn: &Connection,
    id: &str,
    record: &ValidationRecord,
    created_at: DateTime<Utc>,
) -> VeracityResult<()> {
    let details = serde_json::to_string(&record.details).map_err(|e| {
        StorageError::SerializationError {
            message: e.to_string(),
        }
    })?;
    conn.execute(
        "INSERT INTO validations (id, input_type, input_data, input_hash, result,
                                  confidence_score, details, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            id,
            record.input_type.as_str(),
            record.input_data,
            record.input_hash,
            record.result.as_str(),
            record.confidence_score,
            details,
            created_at.to_rfc3339_opts(SecondsFormat::Micros, true),
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

pub fn get_validation(conn: &Connection, id: &str) -> VeracityResult<Option<StoredValidation>> {
    let raw = conn
        .query_row(
            &format!("SELECT {COLUMNS} FROM validations WHERE id = ?1"),
            params![id],
            RawRow::from_row,
        )
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;
    raw.map(RawRow::into_stored).transpose()
}

/// Newest first; ties broken by id for a stable order.
pub fn recent_validations(conn: &Connection, limit: usize) -> VeracityResult<Vec<StoredValidation>> {
    let mut stmt = conn
        .prepare(&format!(
            "SELECT {COLUMNS} FROM validations ORDER BY created_at DESC, id DESC LIMIT ?1"
        ))
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map(params![limit as i64], RawRow::from_row)
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut out = Vec::new();
    for row in rows {
        let raw = row.map_err(|e| to_storage_err(e.to_string()))?;
        out.push(raw.into_stored()?);
    }
    Ok(out)
}

pub fn verdict_counts(conn: &Connection, modality: Modality) -> VeracityResult<VerdictCounts> {
    let mut stmt = conn
        .prepare(
            "SELECT result, COUNT(*) FROM validations WHERE input_type = ?1 GROUP BY result",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map(params![modality.as_str()], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?))
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut counts = VerdictCounts::default();
    for row in rows {
        let (result, count) = row.map_err(|e| to_storage_err(e.to_string()))?;
        match parse_column::<Verdict>("result", &result)? {
            Verdict::Authentic => counts.authentic = count as u64,
            Verdict::Fake => counts.fake = count as u64,
        }
    }
    Ok(counts)
}

/// Row as stored, before text columns are parsed.
struct RawRow {
    id: String,
    input_type: String,
    input_data: String,
    input_hash: String,
    result: String,
    confidence_score: f64,
    details: String,
    created_at: String,
}

impl RawRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            input_type: row.get(1)?,
            input_data: row.get(2)?,
            input_hash: row.get(3)?,
            result: row.get(4)?,
            confidence_score: row.get(5)?,
            details: row.get(6)?,
            created_at: row.get(7)?,
        })
    }

    fn into_stored(self) -> VeracityResult<StoredValidation> {
        let details = serde_json::from_str(&self.details).map_err(|e| {
            StorageError::SerializationError {
                message: format!("details of {}: {e}", self.id),
            }
        })?;
        let created_at = DateTime::parse_from_rfc3339(&self.created_at)
            .map_err(|e| to_storage_err(format!("created_at of {}: {e}", self.id)))?
            .with_timezone(&Utc);
        Ok(StoredValidation {
            input_type: parse_column("input_type", &self.input_type)?,
            result: parse_column("result", &self.result)?,
            id: self.id,
            input_data: self.input_data,
            input_hash: self.input_hash,
            confidence_score: self.confidence_score,
            details,
            created_at,
        })
    }
}

fn parse_column<T>(column: &str, value: &str) -> VeracityResult<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value
        .parse()
        .map_err(|e| to_storage_err(format!("bad {column} value {value:?}: {e}")))
}
