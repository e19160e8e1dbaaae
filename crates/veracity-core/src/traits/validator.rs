use crate::errors::VeracityResult;
use crate::models::{ValidationInput, ValidationResult};

/// Authenticity scoring of a single input.
pub trait IValidator: Send + Sync {
    /// Run every rule for the input's modality and return the aggregated result.
    fn validate(&self, input: &ValidationInput) -> VeracityResult<ValidationResult>;
}
