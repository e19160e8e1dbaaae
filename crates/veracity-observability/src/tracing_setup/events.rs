//! Structured log events for key scoring operations.
//!
//! Each function emits a `tracing` event with structured fields.

use veracity_core::models::{Modality, ProbeOutcome, Verdict};

/// Log a completed validation.
pub fn validation_completed(
    modality: Modality,
    verdict: Verdict,
    raw_score: f64,
    confidence_score: f64,
    findings: usize,
) {
    tracing::info!(
        event = "validation_completed",
        modality = %modality,
        verdict = %verdict,
        raw_score = raw_score,
        confidence_score = confidence_score,
        findings = findings,
        "validation completed"
    );
}

/// Log input rejected before any rule ran.
pub fn input_rejected(modality: Modality, reason: &str) {
    tracing::info!(
        event = "input_rejected",
        modality = %modality,
        reason = %reason,
        "input rejected"
    );
}

/// Log a URL that failed to parse and took the early-exit path.
pub fn early_exit(modality: Modality, reason: &str) {
    tracing::debug!(
        event = "early_exit",
        modality = %modality,
        reason = %reason,
        "rule evaluation stopped early"
    );
}

/// Log a liveness probe result.
pub fn probe_completed(modality: Modality, outcome: &ProbeOutcome) {
    match outcome {
        ProbeOutcome::Failed { reason } => tracing::warn!(
            event = "probe_failed",
            modality = %modality,
            reason = %reason,
            "liveness probe failed"
        ),
        other => tracing::debug!(
            event = "probe_completed",
            modality = %modality,
            reachable = other.is_reachable(),
            status = ?other.status(),
            content_type = ?other.content_type(),
            "liveness probe completed"
        ),
    }
}

/// Log a result that was computed but not persisted.
pub fn persistence_failed(modality: Modality, error: &str, fatal: bool) {
    tracing::error!(
        event = "persistence_failed",
        modality = %modality,
        error = %error,
        fatal = fatal,
        "failed to persist validation result"
    );
}

/// Log a persisted validation record.
pub fn validation_recorded(modality: Modality, id: &str) {
    tracing::debug!(
        event = "validation_recorded",
        modality = %modality,
        id = %id,
        "validation recorded"
    );
}
