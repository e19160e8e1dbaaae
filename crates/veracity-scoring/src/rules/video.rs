//! Video URL rules: file extension, streaming platform, piracy indicators, liveness.

use std::sync::LazyLock;

use ::url::Url;
use regex::Regex;
use veracity_core::constants::{MEDIA_BASELINE, VIDEO_JITTER_MAX};
use veracity_core::models::{Modality, ProbeOutcome, ProbePolicy, ValidationMetadata, VideoMetadata};

use super::{is_match, Effect, Rule, RuleHit, RuleSet, Subject, SubjectFacts, VerdictMessages};

/// Streaming platforms trusted by substring match.
pub const TRUSTED_PLATFORMS: &[&str] = &[
    "youtube.com",
    "youtu.be",
    "vimeo.com",
    "cloudinary.com",
    "wistia.com",
    "vidyard.com",
    "streamable.com",
];

rule_pattern!(EXTENSION_RE, r"(?i)\.(mp4|mov|avi|mkv|webm|flv|wmv|m4v)(\?.*)?$");

// ASCII word boundaries: "freeé" still reads as "free".
rule_pattern!(RE_PIRACY_TERMS, r"(?i)(?-u:\b)(free|download|crack|hack)(?-u:\b)");
rule_pattern!(RE_ARCHIVE_OR_EXECUTABLE, r"(?i)\.(exe|zip|rar)(?-u:\b)");
rule_pattern!(RE_KNOWN_BAD_DOMAIN, r"(?i)suspicious-domain\.xyz");

static SUSPICIOUS_INDICATORS: [&LazyLock<Option<Regex>>; 3] = [
    &RE_PIRACY_TERMS,
    &RE_ARCHIVE_OR_EXECUTABLE,
    &RE_KNOWN_BAD_DOMAIN,
];

pub static RULE_SET: RuleSet = RuleSet {
    modality: Modality::Video,
    baseline: MEDIA_BASELINE,
    jitter_max: VIDEO_JITTER_MAX,
    probe_policy: Some(ProbePolicy::follow()),
    parse_gate: None,
    derive_facts,
    metadata,
    messages: VerdictMessages {
        authentic: "Video appears to be authentic and from a reliable source",
        fake: "Video shows signs of manipulation or untrusted source",
    },
    rules: &[
        Rule::new("video.extension", extension),
        Rule::new("video.trusted_platform", trusted_platform),
        Rule::new("video.suspicious_indicators", suspicious_indicators),
        Rule::probe("video.liveness", liveness),
    ],
};

fn derive_facts(raw: &str, _url: Option<&Url>) -> SubjectFacts {
    let lowered = raw.to_ascii_lowercase();
    SubjectFacts {
        has_valid_extension: is_match(&EXTENSION_RE, raw),
        is_trusted_domain: TRUSTED_PLATFORMS
            .iter()
            .any(|platform| lowered.contains(platform)),
        has_suspicious_indicators: SUSPICIOUS_INDICATORS
            .iter()
            .any(|pattern| is_match(pattern, raw)),
        char_count: raw.chars().count(),
        ..SubjectFacts::default()
    }
}

fn metadata(subject: &Subject<'_>, _hits: &[RuleHit]) -> ValidationMetadata {
    ValidationMetadata::Video(VideoMetadata {
        has_valid_extension: subject.facts.has_valid_extension,
        is_trusted_domain: subject.facts.is_trusted_domain,
        has_suspicious_indicators: subject.facts.has_suspicious_indicators,
    })
}

/// A trusted platform page without a file extension is not penalized here.
fn extension(subject: &Subject<'_>) -> Option<Effect> {
    if subject.facts.has_valid_extension {
        Some(Effect::new(20.0, "Valid video file extension detected"))
    } else if !subject.facts.is_trusted_domain {
        Some(Effect::new(-10.0, "No standard video extension found"))
    } else {
        None
    }
}

fn trusted_platform(subject: &Subject<'_>) -> Option<Effect> {
    Some(Effect::either(
        subject.facts.is_trusted_domain,
        (30.0, "Video hosted on trusted streaming platform"),
        (-5.0, "Video hosted on unknown platform"),
    ))
}

fn suspicious_indicators(subject: &Subject<'_>) -> Option<Effect> {
    subject
        .facts
        .has_suspicious_indicators
        .then(|| Effect::new(-30.0, "Suspicious patterns detected in URL"))
}

fn liveness(subject: &Subject<'_>) -> Option<Effect> {
    match subject.probe.as_ref()? {
        ProbeOutcome::Reachable {
            content_type: Some(ct),
            ..
        } if ct.starts_with("video/") || ct.contains("html") => Some(Effect::new(
            15.0,
            format!("Accessible URL with content-type: {ct}"),
        )),
        ProbeOutcome::Reachable { .. } => {
            Some(Effect::new(-10.0, "Unexpected content-type for video"))
        }
        ProbeOutcome::Unreachable { .. } => Some(Effect::new(
            -20.0,
            "Video URL not accessible or returns error",
        )),
        ProbeOutcome::Failed { .. } => Some(Effect::new(
            -15.0,
            "Failed to verify video accessibility",
        )),
    }
}
