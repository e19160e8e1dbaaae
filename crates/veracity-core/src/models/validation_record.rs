use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::{Modality, ValidationInput, ValidationResult, Verdict};

/// Row handed to the persistence collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationRecord {
    pub input_type: Modality,
    /// Raw input, truncated to the configured character limit.
    pub input_data: String,
    /// blake3 of the untruncated input.
    pub input_hash: String,
    pub result: Verdict,
    pub confidence_score: f64,
    /// `{analysis: [...findings], ...metadata}`.
    pub details: serde_json::Value,
}

impl ValidationRecord {
    /// Build the persisted shape of `result` for `input`.
    pub fn new(
        input: &ValidationInput,
        result: &ValidationResult,
        truncate_chars: usize,
    ) -> serde_json::Result<Self> {
        let mut details = serde_json::Map::new();
        details.insert(
            "analysis".to_string(),
            serde_json::to_value(&result.findings)?,
        );
        if let serde_json::Value::Object(fields) = serde_json::to_value(&result.metadata)? {
            details.extend(fields);
        }
        Ok(Self {
            input_type: input.modality(),
            input_data: input.truncated(truncate_chars),
            input_hash: input.fingerprint(),
            result: result.verdict,
            confidence_score: result.confidence_score.value(),
            details: serde_json::Value::Object(details),
        })
    }
}

/// A record read back from storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredValidation {
    pub id: String,
    pub input_type: Modality,
    pub input_data: String,
    pub input_hash: String,
    pub result: Verdict,
    pub confidence_score: f64,
    pub details: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

/// A computed result together with the outcome of persisting it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RecordedValidation {
    /// Identifier assigned by the store, if the write succeeded.
    pub id: Option<String>,
    pub result: ValidationResult,
    /// Why the write failed, when failures are reported rather than raised.
    pub persistence_error: Option<String>,
}

/// Verdict tallies for one modality.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerdictCounts {
    pub authentic: u64,
    pub fake: u64,
}

impl VerdictCounts {
    pub fn total(&self) -> u64 {
        self.authentic + self.fake
    }
}
