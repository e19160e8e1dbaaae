//! Error handling for Veracity.
//! One error enum per subsystem, `thiserror` only, wrapped by [`VeracityError`].

pub mod config_error;
pub mod error_code;
pub mod probe_error;
pub mod storage_error;
pub mod veracity_error;

pub use config_error::ConfigError;
pub use error_code::VeracityErrorCode;
pub use probe_error::ProbeError;
pub use storage_error::StorageError;
pub use veracity_error::{VeracityError, VeracityResult};
