use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::{ConfidenceScore, Modality, Verdict};

/// Outcome of validating one input. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ValidationResult {
    pub verdict: Verdict,
    /// Clamped, jittered score (0–100, 2 decimals).
    pub confidence_score: ConfidenceScore,
    pub message: String,
    /// Rule findings in evaluation order.
    pub findings: Vec<String>,
    pub metadata: ValidationMetadata,
}

impl ValidationResult {
    pub fn modality(&self) -> Modality {
        self.metadata.modality()
    }

    pub fn is_authentic(&self) -> bool {
        self.verdict.is_authentic()
    }
}

/// Modality-specific audit fields, stored verbatim by persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "modality", rename_all = "snake_case")]
pub enum ValidationMetadata {
    Text(TextMetadata),
    Image(ImageMetadata),
    Video(VideoMetadata),
    Url(UrlMetadata),
}

impl ValidationMetadata {
    pub fn modality(&self) -> Modality {
        match self {
            Self::Text(_) => Modality::Text,
            Self::Image(_) => Modality::Image,
            Self::Video(_) => Modality::Video,
            Self::Url(_) => Modality::Url,
        }
    }

    /// True for a generic URL that failed to parse and was scored on the early-exit path.
    pub fn is_unparsed_url(&self) -> bool {
        matches!(self, Self::Url(url) if url.protocol.is_none())
    }

    /// Number of suspicious-phrase patterns that fired (text only).
    pub fn patterns_detected(&self) -> Option<usize> {
        match self {
            Self::Text(t) => Some(t.patterns_detected),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TextMetadata {
    /// Length in characters.
    pub length: usize,
    /// Uppercase-letter ratio, rounded to 2 decimals.
    pub caps_ratio: f64,
    /// One entry per pattern that fired, with its occurrence count.
    pub suspicious_patterns: Vec<String>,
    pub patterns_detected: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UrlMetadata {
    /// Host with any leading `www.` removed. Absent when the URL did not parse.
    pub domain: Option<String>,
    /// URL scheme. Absent when the URL did not parse.
    pub protocol: Option<String>,
    pub is_trusted_domain: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ImageMetadata {
    pub has_valid_extension: bool,
    pub is_trusted_domain: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VideoMetadata {
    pub has_valid_extension: bool,
    pub is_trusted_domain: bool,
    pub has_suspicious_indicators: bool,
}
