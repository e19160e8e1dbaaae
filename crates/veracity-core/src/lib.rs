//! # veracity-core
//!
//! Foundation crate for the Veracity authenticity scorer.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::VeracityConfig;
pub use errors::{VeracityError, VeracityResult};
pub use models::{
    ConfidenceScore, Modality, ProbeOutcome, ProbePolicy, ValidationInput, ValidationMetadata,
    ValidationResult, Verdict,
};
