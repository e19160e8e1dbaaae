use crate::models::{ProbeOutcome, ProbePolicy};

/// Capability: can check whether a remote URL is reachable.
///
/// Implementations never raise. Timeouts, DNS failures, refused
/// connections, and unparsable URLs all resolve to `ProbeOutcome::Failed`.
pub trait ILivenessProber: Send + Sync {
    /// Issue a header-only check against `url` under `policy`.
    fn probe(&self, url: &str, policy: &ProbePolicy) -> ProbeOutcome;
}
