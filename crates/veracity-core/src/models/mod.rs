mod confidence_score;
mod input;
mod probe;
mod validation_record;
mod validation_result;
mod verdict;

pub use confidence_score::ConfidenceScore;
pub use input::{Modality, ValidationInput};
pub use probe::{ProbeOutcome, ProbePolicy, RedirectPolicy};
pub use validation_record::{RecordedValidation, StoredValidation, ValidationRecord, VerdictCounts};
pub use validation_result::{
    ImageMetadata, TextMetadata, UrlMetadata, ValidationMetadata, ValidationResult, VideoMetadata,
};
pub use verdict::Verdict;
