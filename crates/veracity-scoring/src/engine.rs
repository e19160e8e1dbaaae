//! [`ValidationEngine`]: the entry point that scores one input end to end.

use std::sync::Arc;

use veracity_core::errors::VeracityResult;
use veracity_core::models::{ValidationInput, ValidationResult};
use veracity_core::traits::{IJitterSource, ILivenessProber, IValidator};
use veracity_observability::events;

use crate::aggregation::{aggregate, Aggregate};
use crate::builder::build_result;
use crate::evaluator::{evaluate, Evaluation};
use crate::rules::rule_set;

/// Intermediate and final values for one validation.
#[derive(Debug, Clone, PartialEq)]
pub struct Assessment {
    pub evaluation: Evaluation,
    pub aggregate: Aggregate,
    pub result: ValidationResult,
}

/// Scores inputs against the per-modality rule tables.
///
/// Holds no per-call state; one engine serves concurrent callers.
#[derive(Clone)]
pub struct ValidationEngine {
    prober: Arc<dyn ILivenessProber>,
    jitter: Arc<dyn IJitterSource>,
}

impl ValidationEngine {
    pub fn new(prober: Arc<dyn ILivenessProber>, jitter: Arc<dyn IJitterSource>) -> Self {
        Self { prober, jitter }
    }

    /// Rule evaluation only: raw score, hits, metadata. No jitter is drawn.
    pub fn score(&self, input: &ValidationInput) -> VeracityResult<Evaluation> {
        if let Err(err) = input.validate() {
            events::input_rejected(input.modality(), &err.to_string());
            return Err(err);
        }
        let rules = rule_set(input.modality());
        Ok(evaluate(rules, input.as_str(), self.prober.as_ref()))
    }

    /// Full pipeline, keeping the intermediate values.
    pub fn assess(&self, input: &ValidationInput) -> VeracityResult<Assessment> {
        let evaluation = self.score(input)?;
        let rules = rule_set(evaluation.modality);
        let draw = self.jitter.sample(rules.jitter_max);
        let aggregate = aggregate(evaluation.raw_score, draw, rules.jitter_max);
        let result = build_result(rules, &evaluation, &aggregate);

        events::validation_completed(
            evaluation.modality,
            aggregate.verdict,
            aggregate.raw_score,
            aggregate.confidence_score.value(),
            result.findings.len(),
        );

        Ok(Assessment {
            evaluation,
            aggregate,
            result,
        })
    }
}

impl std::fmt::Debug for ValidationEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidationEngine").finish_non_exhaustive()
    }
}

impl IValidator for ValidationEngine {
    fn validate(&self, input: &ValidationInput) -> VeracityResult<ValidationResult> {
        self.assess(input).map(|assessment| assessment.result)
    }
}
