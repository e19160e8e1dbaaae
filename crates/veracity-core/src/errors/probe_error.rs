use super::error_code::{self, VeracityErrorCode};

/// Errors raised while setting up the liveness prober.
///
/// Probing itself never fails: every network failure resolves to
/// `ProbeOutcome::Failed` and is scored, not raised.
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("failed to build HTTP client: {reason}")]
    ClientBuild { reason: String },
}

impl VeracityErrorCode for ProbeError {
    fn error_code(&self) -> &'static str {
        error_code::PROBE_ERROR
    }
}
