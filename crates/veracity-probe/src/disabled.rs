use veracity_core::models::{ProbeOutcome, ProbePolicy};
use veracity_core::traits::ILivenessProber;

/// Prober used when network checks are switched off in config.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledProber;

impl ILivenessProber for DisabledProber {
    fn probe(&self, _url: &str, _policy: &ProbePolicy) -> ProbeOutcome {
        ProbeOutcome::failed("probing disabled")
    }
}
