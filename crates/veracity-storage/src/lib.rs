//! # veracity-storage
//!
//! SQLite persistence for validation results: one `validations` table,
//! versioned migrations, and the [`ValidationStore`] implementation of
//! `IValidationStore`.

pub mod engine;
pub mod migrations;
pub mod pragmas;
pub mod queries;

pub use engine::ValidationStore;

use veracity_core::errors::{StorageError, VeracityError};

/// Wrap a rusqlite failure message as a [`VeracityError`].
pub(crate) fn to_storage_err(message: String) -> VeracityError {
    StorageError::SqliteError { message }.into()
}
