//! VeracityErrorCode trait for transport-boundary conversion.

/// Every error enum implements this to provide a stable, structured
/// error code string for HTTP and log consumers.
pub trait VeracityErrorCode {
    /// Returns the error code string (e.g., "INVALID_INPUT").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted boundary string: `[ERROR_CODE] message`.
    fn tagged_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

// Error code constants for the transport boundary.
pub const INVALID_INPUT: &str = "INVALID_INPUT";
pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
pub const MIGRATION_FAILED: &str = "MIGRATION_FAILED";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const PROBE_ERROR: &str = "PROBE_ERROR";
pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
