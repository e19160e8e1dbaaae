use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Liveness prober configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeConfig {
    /// When false, every probe resolves to a failure and is scored as one.
    pub enabled: bool,
    /// Upper bound on any single probe, including policies with no explicit timeout.
    pub max_timeout_ms: u64,
    /// Redirect hops followed under the follow policy.
    pub max_redirects: usize,
    pub user_agent: String,
    /// Honor `HTTP_PROXY`/`HTTPS_PROXY` from the environment.
    pub use_system_proxy: bool,
}

impl ProbeConfig {
    pub fn max_timeout(&self) -> Duration {
        Duration::from_millis(self.max_timeout_ms)
    }
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            enabled: defaults::DEFAULT_PROBE_ENABLED,
            max_timeout_ms: defaults::DEFAULT_PROBE_MAX_TIMEOUT_MS,
            max_redirects: defaults::DEFAULT_PROBE_MAX_REDIRECTS,
            user_agent: defaults::DEFAULT_PROBE_USER_AGENT.to_string(),
            use_system_proxy: defaults::DEFAULT_PROBE_USE_SYSTEM_PROXY,
        }
    }
}
