use serde::Serialize;
use veracity_core::models::{ConfidenceScore, RecordedValidation, ValidationMetadata, Verdict};

#[derive(Debug, Serialize)]
pub struct ValidationResponse {
    /// Absent when the result was not persisted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub result: Verdict,
    pub confidence_score: ConfidenceScore,
    pub details: ValidationDetails,
}

#[derive(Debug, Serialize)]
pub struct ValidationDetails {
    pub message: String,
    pub analysis: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patterns_detected: Option<usize>,
    pub metadata: ValidationMetadata,
}

impl From<RecordedValidation> for ValidationResponse {
    fn from(recorded: RecordedValidation) -> Self {
        let result = recorded.result;
        Self {
            id: recorded.id,
            result: result.verdict,
            confidence_score: result.confidence_score,
            details: ValidationDetails {
                message: result.message,
                analysis: result.findings,
                patterns_detected: result.metadata.patterns_detected(),
                metadata: result.metadata,
            },
        }
    }
}
