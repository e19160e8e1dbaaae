use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::constants::VERDICT_THRESHOLD;

/// Binary authenticity classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Authentic,
    Fake,
}

impl Verdict {
    /// `Authentic` iff `score` is strictly above the threshold.
    pub fn from_score(score: f64) -> Self {
        if score > VERDICT_THRESHOLD {
            Self::Authentic
        } else {
            Self::Fake
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Authentic => "authentic",
            Self::Fake => "fake",
        }
    }

    pub fn is_authentic(self) -> bool {
        self == Self::Authentic
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Verdict {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "authentic" => Ok(Self::Authentic),
            "fake" => Ok(Self::Fake),
            other => Err(format!("unknown verdict: {other}")),
        }
    }
}
