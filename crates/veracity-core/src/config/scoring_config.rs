use serde::{Deserialize, Serialize};

use super::defaults;

/// Score aggregation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Apply the bounded random jitter. Disabling it makes scores equal the clamped raw score.
    pub jitter_enabled: bool,
    /// Seed for a reproducible jitter sequence. `None` draws from entropy.
    pub jitter_seed: Option<u64>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            jitter_enabled: defaults::DEFAULT_JITTER_ENABLED,
            jitter_seed: None,
        }
    }
}
