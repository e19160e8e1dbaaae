use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::constants::{SCORE_DECIMALS, SCORE_MAX, SCORE_MIN};
use crate::models::Verdict;

/// Reported confidence, clamped to [0, 100] and rounded to 2 decimals.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConfidenceScore(f64);

impl ConfidenceScore {
    /// Clamp into [0, 100], then round. NaN collapses to 0.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self(SCORE_MIN);
        }
        let clamped = value.clamp(SCORE_MIN, SCORE_MAX);
        let factor = 10f64.powi(SCORE_DECIMALS);
        Self((clamped * factor).round() / factor)
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn verdict(self) -> Verdict {
        Verdict::from_score(self.0)
    }
}

impl fmt::Display for ConfidenceScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl From<f64> for ConfidenceScore {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_and_rounds() {
        assert_eq!(ConfidenceScore::new(110.0).value(), 100.0);
        assert_eq!(ConfidenceScore::new(-4.2).value(), 0.0);
        assert_eq!(ConfidenceScore::new(61.23456).value(), 61.23);
        assert_eq!(ConfidenceScore::new(f64::NAN).value(), 0.0);
    }

    #[test]
    fn display_keeps_two_decimals() {
        assert_eq!(ConfidenceScore::new(50.0).to_string(), "50.00");
    }
}
