use proptest::prelude::*;
use veracity_core::models::{ConfidenceScore, Verdict};

fn any_score_input() -> impl Strategy<Value = f64> {
    prop_oneof![
        -1_000.0f64..1_000.0,
        -1e12f64..1e12,
        Just(f64::NAN),
        Just(f64::INFINITY),
        Just(f64::NEG_INFINITY),
    ]
}

proptest! {
    #[test]
    fn score_is_clamped_to_range(raw in any_score_input()) {
        let value = ConfidenceScore::new(raw).value();
        prop_assert!((0.0..=100.0).contains(&value), "{raw} -> {value}");
    }

    #[test]
    fn score_has_at_most_two_decimals(raw in any_score_input()) {
        let value = ConfidenceScore::new(raw).value();
        let scaled = value * 100.0;
        prop_assert!((scaled - scaled.round()).abs() < 1e-6, "{raw} -> {value}");
        prop_assert_eq!(ConfidenceScore::new(value).value(), value);
    }

    #[test]
    fn verdict_follows_rounded_score(raw in any_score_input()) {
        let score = ConfidenceScore::new(raw);
        let expected = if score.value() > 50.0 { Verdict::Authentic } else { Verdict::Fake };
        prop_assert_eq!(score.verdict(), expected);
    }

    #[test]
    fn clamping_preserves_order(a in -200.0f64..200.0, b in -200.0f64..200.0) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(ConfidenceScore::new(low).value() <= ConfidenceScore::new(high).value());
    }
}
