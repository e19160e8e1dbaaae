use crate::errors::VeracityResult;
use crate::models::{Modality, StoredValidation, ValidationRecord, VerdictCounts};

/// Persistence collaborator for validation results.
pub trait IValidationStore: Send + Sync {
    /// Persist `record`, returning the assigned identifier.
    fn insert(&self, record: &ValidationRecord) -> VeracityResult<String>;

    fn get(&self, id: &str) -> VeracityResult<Option<StoredValidation>>;

    /// Most recent records first.
    fn recent(&self, limit: usize) -> VeracityResult<Vec<StoredValidation>>;

    fn verdict_counts(&self, modality: Modality) -> VeracityResult<VerdictCounts>;
}
