use std::time::Duration;

use serde::{Deserialize, Serialize};

/// How a liveness probe treats HTTP redirects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RedirectPolicy {
    /// Follow redirects and classify the final response.
    Follow,
    /// Do not follow; a 3xx response is itself the answer.
    Manual,
}

/// Per-modality request policy for a liveness probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbePolicy {
    pub redirects: RedirectPolicy,
    /// Explicit timeout. `None` defers to the prober's own upper bound.
    pub timeout: Option<Duration>,
}

impl ProbePolicy {
    pub const fn follow() -> Self {
        Self {
            redirects: RedirectPolicy::Follow,
            timeout: None,
        }
    }

    pub const fn manual(timeout: Duration) -> Self {
        Self {
            redirects: RedirectPolicy::Manual,
            timeout: Some(timeout),
        }
    }

    /// Whether a response with `status` counts as reachable under this policy.
    pub fn accepts_status(&self, status: u16) -> bool {
        match self.redirects {
            RedirectPolicy::Follow => (200..300).contains(&status),
            RedirectPolicy::Manual => (200..400).contains(&status),
        }
    }
}

/// Classified result of a header-only remote check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ProbeOutcome {
    Reachable {
        status: u16,
        content_type: Option<String>,
    },
    Unreachable {
        status: u16,
    },
    Failed {
        reason: String,
    },
}

impl ProbeOutcome {
    /// Classify a completed response under `policy`.
    pub fn from_response(policy: &ProbePolicy, status: u16, content_type: Option<String>) -> Self {
        if policy.accepts_status(status) {
            Self::Reachable {
                status,
                content_type,
            }
        } else {
            Self::Unreachable { status }
        }
    }

    pub fn failed(reason: impl Into<String>) -> Self {
        Self::Failed {
            reason: reason.into(),
        }
    }

    pub fn is_reachable(&self) -> bool {
        matches!(self, Self::Reachable { .. })
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Reachable { status, .. } | Self::Unreachable { status } => Some(*status),
            Self::Failed { .. } => None,
        }
    }

    /// Content type of a reachable response, if the server sent one.
    pub fn content_type(&self) -> Option<&str> {
        match self {
            Self::Reachable { content_type, .. } => content_type.as_deref(),
            _ => None,
        }
    }
}
