//! Validation followed by persistence of the result.

use std::sync::Arc;

use veracity_core::config::{PersistenceFailurePolicy, StorageConfig};
use veracity_core::errors::{VeracityErrorCode, VeracityResult};
use veracity_core::models::{RecordedValidation, ValidationInput};
use veracity_core::traits::{IValidationStore, IValidator};
use veracity_observability::events;

use crate::builder::build_record;

/// Wraps a validator and writes every successful result to a store.
///
/// Under [`PersistenceFailurePolicy::Fatal`] a failed write fails the call.
/// Under [`PersistenceFailurePolicy::Report`] the computed result is returned
/// with the failure attached. A URL that failed to parse is always handled as
/// under `Report`.
pub struct RecordingValidator {
    validator: Arc<dyn IValidator>,
    store: Arc<dyn IValidationStore>,
    policy: PersistenceFailurePolicy,
    truncate_chars: usize,
}

impl RecordingValidator {
    pub fn new(
        validator: Arc<dyn IValidator>,
        store: Arc<dyn IValidationStore>,
        policy: PersistenceFailurePolicy,
        truncate_chars: usize,
    ) -> Self {
        Self {
            validator,
            store,
            policy,
            truncate_chars,
        }
    }

    pub fn from_config(
        validator: Arc<dyn IValidator>,
        store: Arc<dyn IValidationStore>,
        config: &StorageConfig,
    ) -> Self {
        Self::new(
            validator,
            store,
            config.persistence_failure,
            config.input_truncate_chars,
        )
    }

    pub fn store(&self) -> &Arc<dyn IValidationStore> {
        &self.store
    }

    /// Validate `input`, then persist the result.
    ///
    /// Rejected input is never persisted.
    pub fn validate_and_record(&self, input: &ValidationInput) -> VeracityResult<RecordedValidation> {
        let result = self.validator.validate(input)?;
        let modality = input.modality();

        let written = build_record(input, &result, self.truncate_chars)
            .and_then(|record| self.store.insert(&record));

        match written {
            Ok(id) => {
                events::validation_recorded(modality, &id);
                Ok(RecordedValidation {
                    id: Some(id),
                    result,
                    persistence_error: None,
                })
            }
            Err(err) => {
                let fatal = self.policy == PersistenceFailurePolicy::Fatal
                    && !result.metadata.is_unparsed_url();
                events::persistence_failed(modality, &err.tagged_string(), fatal);
                if fatal {
                    return Err(err);
                }
                Ok(RecordedValidation {
                    id: None,
                    result,
                    persistence_error: Some(err.to_string()),
                })
            }
        }
    }
}
