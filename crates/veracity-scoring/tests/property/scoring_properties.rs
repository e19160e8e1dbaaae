use std::sync::Arc;

use proptest::prelude::*;
use veracity_core::models::{ProbeOutcome, ValidationInput, Verdict};
use veracity_probe::StaticProber;
use veracity_scoring::aggregation::FixedJitter;
use veracity_scoring::rules::rule_set;
use veracity_scoring::{aggregate, ValidationEngine};

fn probe_outcome() -> impl Strategy<Value = ProbeOutcome> {
    prop_oneof![
        (200u16..400, prop::option::of("(image|video|text)/[a-z]{2,6}")).prop_map(
            |(status, content_type)| ProbeOutcome::Reachable {
                status,
                content_type,
            }
        ),
        (400u16..600).prop_map(|status| ProbeOutcome::Unreachable { status }),
        "[a-z ]{1,20}".prop_map(|reason| ProbeOutcome::failed(reason)),
    ]
}

fn any_input() -> impl Strategy<Value = ValidationInput> {
    prop_oneof![
        ".{1,200}".prop_map(ValidationInput::Text),
        "https?://[a-z.]{1,40}/[a-zA-Z0-9./?=-]{0,40}".prop_map(ValidationInput::ImageUrl),
        "https?://[a-z.]{1,40}/[a-zA-Z0-9./?=-]{0,40}".prop_map(ValidationInput::VideoUrl),
        "[a-z]{0,6}:?/{0,2}[a-z0-9.-]{1,40}/?[a-z0-9-]{0,20}".prop_map(ValidationInput::GenericUrl),
    ]
}

proptest! {
    #[test]
    fn score_is_always_in_range(
        input in any_input(),
        outcome in probe_outcome(),
        draw in -50.0f64..50.0,
    ) {
        prop_assume!(!input.as_str().trim().is_empty());
        let engine = ValidationEngine::new(
            Arc::new(StaticProber::new(outcome)),
            Arc::new(FixedJitter(draw)),
        );
        let assessment = engine.assess(&input).unwrap();
        let score = assessment.result.confidence_score.value();
        prop_assert!((0.0..=100.0).contains(&score));
        prop_assert_eq!(assessment.result.verdict, Verdict::from_score(score));
    }

    #[test]
    fn jitter_never_exceeds_modality_bound(
        input in any_input(),
        draw in -50.0f64..50.0,
    ) {
        prop_assume!(!input.as_str().trim().is_empty());
        let max = rule_set(input.modality()).jitter_max;
        let agg = aggregate(0.0, draw, max);
        prop_assert!(agg.jitter >= 0.0 && agg.jitter <= max);
    }

    #[test]
    fn findings_do_not_depend_on_jitter(
        text in ".{1,120}",
        a in 0.0f64..10.0,
        b in 0.0f64..10.0,
    ) {
        prop_assume!(!text.trim().is_empty());
        let input = ValidationInput::Text(text);
        let prober = Arc::new(StaticProber::failing("unused"));
        let first = ValidationEngine::new(prober.clone(), Arc::new(FixedJitter(a)))
            .assess(&input)
            .unwrap();
        let second = ValidationEngine::new(prober, Arc::new(FixedJitter(b)))
            .assess(&input)
            .unwrap();
        prop_assert_eq!(first.aggregate.raw_score, second.aggregate.raw_score);
        prop_assert_eq!(first.result.findings, second.result.findings);
    }

    #[test]
    fn raw_score_is_baseline_plus_deltas(input in any_input(), outcome in probe_outcome()) {
        prop_assume!(!input.as_str().trim().is_empty());
        let engine = ValidationEngine::new(
            Arc::new(StaticProber::new(outcome)),
            Arc::new(FixedJitter(0.0)),
        );
        let evaluation = engine.score(&input).unwrap();
        let sum: f64 = evaluation.hits.iter().map(|hit| hit.delta).sum();
        prop_assert!((evaluation.raw_score - (evaluation.baseline + sum)).abs() < 1e-9);
    }
}
