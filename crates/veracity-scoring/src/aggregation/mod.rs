//! Score aggregation: raw score plus bounded jitter, clamped and rounded.

pub mod jitter;

pub use jitter::{from_config, FixedJitter, NoJitter, SeededJitter, UniformJitter};

use veracity_core::models::{ConfidenceScore, Verdict};

/// Final numbers for one input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aggregate {
    pub raw_score: f64,
    /// The jitter actually applied, within `[0, max]`.
    pub jitter: f64,
    pub confidence_score: ConfidenceScore,
    /// Derived from the reported score, so both always agree.
    pub verdict: Verdict,
}

/// Combine `raw_score` with a jitter `draw` bounded by `max`.
///
/// Draws outside `[0, max]` are clamped into it; non-finite draws count as 0.
pub fn aggregate(raw_score: f64, draw: f64, max: f64) -> Aggregate {
    let max = if max.is_finite() { max.max(0.0) } else { 0.0 };
    let jitter = if draw.is_finite() {
        draw.clamp(0.0, max)
    } else {
        0.0
    };
    let confidence_score = ConfidenceScore::new(raw_score + jitter);
    Aggregate {
        raw_score,
        jitter,
        confidence_score,
        verdict: confidence_score.verdict(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_above_range_clamps_to_max() {
        let agg = aggregate(110.0, 7.3, 10.0);
        assert_eq!(agg.confidence_score.value(), 100.0);
        assert_eq!(agg.verdict, Verdict::Authentic);
    }

    #[test]
    fn raw_below_range_clamps_to_zero() {
        let agg = aggregate(-40.0, 3.0, 10.0);
        assert_eq!(agg.confidence_score.value(), 0.0);
        assert_eq!(agg.verdict, Verdict::Fake);
    }

    #[test]
    fn out_of_bounds_draws_are_clamped() {
        assert_eq!(aggregate(40.0, 25.0, 10.0).jitter, 10.0);
        assert_eq!(aggregate(40.0, -3.0, 10.0).jitter, 0.0);
        assert_eq!(aggregate(40.0, f64::NAN, 10.0).jitter, 0.0);
    }

    #[test]
    fn verdict_uses_rounded_score() {
        assert_eq!(aggregate(50.0, 0.0, 10.0).verdict, Verdict::Fake);
        assert_eq!(aggregate(50.0, 0.01, 10.0).verdict, Verdict::Authentic);
        // 50.004 rounds to 50.00
        assert_eq!(aggregate(50.0, 0.004, 10.0).verdict, Verdict::Fake);
    }
}
