//! # veracity-observability
//!
//! Structured logging for the scorer: subscriber setup plus one helper
//! per loggable event so field names stay consistent across crates.

pub mod tracing_setup;

pub use tracing_setup::events;
pub use tracing_setup::{init_tracing, init_tracing_with_filter};
