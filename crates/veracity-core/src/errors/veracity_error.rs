use super::error_code::{self, VeracityErrorCode};
use super::{ConfigError, ProbeError, StorageError};
use crate::models::Modality;

/// Top-level error for every fallible Veracity operation.
///
/// Malformed URLs and failed liveness probes are not errors: both are
/// absorbed into scoring. Only rejected input and infrastructure failures
/// surface here.
#[derive(Debug, thiserror::Error)]
pub enum VeracityError {
    #[error("{reason}")]
    InvalidInput { modality: Modality, reason: String },

    #[error("storage error: {0}")]
    StorageError(#[from] StorageError),

    #[error("config error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("probe error: {0}")]
    ProbeError(#[from] ProbeError),

    #[error("internal failure: {reason}")]
    Internal { reason: String },
}

/// Convenience alias used across the workspace.
pub type VeracityResult<T> = Result<T, VeracityError>;

impl VeracityError {
    /// Rejection of empty or whitespace-only input for `modality`.
    pub fn empty_input(modality: Modality) -> Self {
        Self::InvalidInput {
            modality,
            reason: modality.required_message().to_string(),
        }
    }

    /// Whether the caller caused the failure (maps to a 4xx at a transport boundary).
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }

    /// Message that is safe to hand to an external caller.
    ///
    /// Client errors keep their text; everything else collapses to a
    /// generic message so internal details never leak.
    pub fn safe_message(&self) -> String {
        if self.is_client_error() {
            self.to_string()
        } else {
            "Internal server error".to_string()
        }
    }
}

impl VeracityErrorCode for VeracityError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidInput { .. } => error_code::INVALID_INPUT,
            Self::StorageError(e) => e.error_code(),
            Self::ConfigError(e) => e.error_code(),
            Self::ProbeError(e) => e.error_code(),
            Self::Internal { .. } => error_code::INTERNAL_ERROR,
        }
    }
}
