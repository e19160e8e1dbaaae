//! Deterministic prober returning preconfigured outcomes.

use std::collections::HashMap;
use std::sync::Mutex;

use veracity_core::models::{ProbeOutcome, ProbePolicy};
use veracity_core::traits::ILivenessProber;

/// Returns `default` for every URL unless an override matches exactly.
/// Records each call so tests can assert on the policy used.
#[derive(Debug)]
pub struct StaticProber {
    default: ProbeOutcome,
    overrides: HashMap<String, ProbeOutcome>,
    calls: Mutex<Vec<(String, ProbePolicy)>>,
}

impl StaticProber {
    pub fn new(default: ProbeOutcome) -> Self {
        Self {
            default,
            overrides: HashMap::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Reachable with the given status and content type.
    pub fn reachable(status: u16, content_type: Option<&str>) -> Self {
        Self::new(ProbeOutcome::Reachable {
            status,
            content_type: content_type.map(str::to_string),
        })
    }

    pub fn unreachable(status: u16) -> Self {
        Self::new(ProbeOutcome::Unreachable { status })
    }

    pub fn failing(reason: &str) -> Self {
        Self::new(ProbeOutcome::failed(reason))
    }

    pub fn with_override(mut self, url: impl Into<String>, outcome: ProbeOutcome) -> Self {
        self.overrides.insert(url.into(), outcome);
        self
    }

    /// Every `(url, policy)` probed so far, in call order.
    pub fn calls(&self) -> Vec<(String, ProbePolicy)> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|calls| calls.len()).unwrap_or(0)
    }
}

impl ILivenessProber for StaticProber {
    fn probe(&self, url: &str, policy: &ProbePolicy) -> ProbeOutcome {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push((url.to_string(), *policy));
        }
        self.overrides
            .get(url)
            .cloned()
            .unwrap_or_else(|| self.default.clone())
    }
}
