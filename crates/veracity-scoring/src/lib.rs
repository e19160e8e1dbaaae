//! # veracity-scoring
//!
//! Rule-based authenticity scoring for text, image URLs, video URLs, and
//! generic URLs.
//!
//! ## Pipeline
//! 1. **Rules**: one declarative table per modality, evaluated in order by a
//!    single shared evaluator. Every rule runs; only a URL that fails to parse
//!    stops evaluation early.
//! 2. **Aggregation**: baseline + deltas, plus a bounded jitter drawn from an
//!    injectable source, clamped to [0, 100] and rounded.
//! 3. **Result building**: verdict message, findings in evaluation order, and
//!    modality metadata for audit.
//!
//! [`RecordingValidator`] adds the persistence step on top of [`ValidationEngine`].

pub mod aggregation;
pub mod builder;
pub mod engine;
pub mod evaluator;
pub mod recording;
pub mod rules;

pub use aggregation::{aggregate, Aggregate};
pub use engine::{Assessment, ValidationEngine};
pub use evaluator::{evaluate, Evaluation};
pub use recording::RecordingValidator;
pub use rules::{rule_set, RuleHit, RuleSet};
