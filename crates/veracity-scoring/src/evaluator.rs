//! Shared rule evaluator.
//!
//! Walks one [`RuleSet`] over one raw input. Rules run in table order and
//! every rule runs; the parse gate is the only step that can stop evaluation.

use ::url::Url;
use veracity_core::models::{Modality, ProbeOutcome, ValidationMetadata};
use veracity_core::traits::ILivenessProber;
use veracity_observability::events;

use crate::rules::{RuleHit, RuleSet, Subject, SubjectFacts};

/// Everything the rules produced for one input, before jitter.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub modality: Modality,
    pub baseline: f64,
    /// Baseline plus every delta, unclamped.
    pub raw_score: f64,
    /// Fired rules in evaluation order.
    pub hits: Vec<RuleHit>,
    pub metadata: ValidationMetadata,
    /// The parse gate rejected the input.
    pub early_exit: bool,
    /// Replaces the verdict message when set.
    pub message_override: Option<&'static str>,
    pub probe: Option<ProbeOutcome>,
}

impl Evaluation {
    pub fn findings(&self) -> Vec<String> {
        self.hits.iter().map(|hit| hit.finding.clone()).collect()
    }

    fn finish(rule_set: &RuleSet, subject: &Subject<'_>, hits: Vec<RuleHit>, early_exit: bool) -> Self {
        let raw_score = rule_set.baseline + hits.iter().map(|hit| hit.delta).sum::<f64>();
        Self {
            modality: rule_set.modality,
            baseline: rule_set.baseline,
            raw_score,
            metadata: (rule_set.metadata)(subject, &hits),
            hits,
            early_exit,
            message_override: rule_set
                .parse_gate
                .filter(|_| early_exit)
                .map(|gate| gate.invalid_message),
            probe: subject.probe.clone(),
        }
    }
}

/// Evaluate `rule_set` over `raw`, probing through `prober` when the set asks for it.
pub fn evaluate(rule_set: &RuleSet, raw: &str, prober: &dyn ILivenessProber) -> Evaluation {
    let mut hits = Vec::with_capacity(rule_set.rules.len() + 1);

    let url = match rule_set.parse_gate {
        Some(gate) => match Url::parse(raw) {
            Ok(url) => {
                hits.push(RuleHit::new(gate.rule_id, gate.valid.to_effect()));
                Some(url)
            }
            Err(err) => {
                events::early_exit(rule_set.modality, &err.to_string());
                hits.push(RuleHit::new(gate.rule_id, gate.invalid.to_effect()));
                let subject = Subject {
                    raw,
                    url: None,
                    facts: SubjectFacts::default(),
                    probe: None,
                };
                return Evaluation::finish(rule_set, &subject, hits, true);
            }
        },
        None => None,
    };

    let facts = (rule_set.derive_facts)(raw, url.as_ref());
    let probe = rule_set.probe_policy.map(|policy| {
        let outcome = prober.probe(raw, &policy);
        events::probe_completed(rule_set.modality, &outcome);
        outcome
    });
    let subject = Subject {
        raw,
        url,
        facts,
        probe,
    };

    for rule in rule_set.rules {
        if let Some(effect) = (rule.check)(&subject) {
            hits.push(RuleHit::new(rule.id, effect));
        }
    }

    Evaluation::finish(rule_set, &subject, hits, false)
}
