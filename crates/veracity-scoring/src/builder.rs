//! Turns an evaluation and its aggregate into the public result shapes.

use veracity_core::errors::{StorageError, VeracityResult};
use veracity_core::models::{ValidationInput, ValidationRecord, ValidationResult};

use crate::aggregation::Aggregate;
use crate::evaluator::Evaluation;
use crate::rules::RuleSet;

/// Build the caller-facing result.
pub fn build_result(rule_set: &RuleSet, evaluation: &Evaluation, aggregate: &Aggregate) -> ValidationResult {
    let message = evaluation
        .message_override
        .unwrap_or_else(|| rule_set.messages.for_verdict(aggregate.verdict));
    ValidationResult {
        verdict: aggregate.verdict,
        confidence_score: aggregate.confidence_score,
        message: message.to_string(),
        findings: evaluation.findings(),
        metadata: evaluation.metadata.clone(),
    }
}

/// Build the row handed to the store, keeping at most `truncate_chars` of the input.
pub fn build_record(
    input: &ValidationInput,
    result: &ValidationResult,
    truncate_chars: usize,
) -> VeracityResult<ValidationRecord> {
    ValidationRecord::new(input, result, truncate_chars).map_err(|e| {
        StorageError::SerializationError {
            message: e.to_string(),
        }
        .into()
    })
}
