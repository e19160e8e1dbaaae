use std::sync::Arc;

use veracity_core::config::{StorageConfig, VeracityConfig};
use veracity_core::errors::VeracityResult;
use veracity_core::traits::{IValidationStore, IValidator};
use veracity_scoring::{aggregation, RecordingValidator, ValidationEngine};
use veracity_storage::ValidationStore;

#[derive(Clone)]
pub struct AppState {
    pub recorder: Arc<RecordingValidator>,
    pub store: Arc<dyn IValidationStore>,
}

impl AppState {
    pub fn new(
        validator: Arc<dyn IValidator>,
        store: Arc<dyn IValidationStore>,
        storage: &StorageConfig,
    ) -> Self {
        let recorder = RecordingValidator::from_config(validator, store.clone(), storage);
        Self {
            recorder: Arc::new(recorder),
            store,
        }
    }

    /// Wire the live prober, jitter source, and SQLite store from `config`.
    ///
    /// Builds a blocking HTTP client, so call it outside the async runtime.
    pub fn from_config(config: &VeracityConfig) -> VeracityResult<Self> {
        let prober = veracity_probe::from_config(&config.probe)?;
        let jitter = aggregation::from_config(&config.scoring);
        let engine = Arc::new(ValidationEngine::new(prober, jitter));
        let store = Arc::new(ValidationStore::from_config(&config.storage)?);
        Ok(Self::new(engine, store, &config.storage))
    }
}
