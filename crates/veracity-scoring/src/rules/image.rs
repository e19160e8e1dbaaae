//! Image URL rules: file extension, hosting domain, liveness with content type.

use ::url::Url;
use veracity_core::constants::{IMAGE_JITTER_MAX, MEDIA_BASELINE};
use veracity_core::models::{ImageMetadata, Modality, ProbeOutcome, ProbePolicy, ValidationMetadata};

use super::{is_match, Effect, Rule, RuleHit, RuleSet, Subject, SubjectFacts, VerdictMessages};

/// Image hosts trusted by substring match.
pub const TRUSTED_HOSTS: &[&str] = &[
    "pexels.com",
    "unsplash.com",
    "githubusercontent.com",
    "cloudinary.com",
    "imgur.com",
];

rule_pattern!(EXTENSION_RE, r"(?i)\.(jpg|jpeg|png|gif|webp|bmp|svg)(\?.*)?$");

pub static RULE_SET: RuleSet = RuleSet {
    modality: Modality::Image,
    baseline: MEDIA_BASELINE,
    jitter_max: IMAGE_JITTER_MAX,
    probe_policy: Some(ProbePolicy::follow()),
    parse_gate: None,
    derive_facts,
    metadata,
    messages: VerdictMessages {
        authentic: "Image appears to be authentic and from a reliable source",
        fake: "Image shows signs of manipulation or untrusted source",
    },
    rules: &[
        Rule::new("image.extension", extension),
        Rule::new("image.trusted_host", trusted_host),
        Rule::probe("image.liveness", liveness),
    ],
};

fn derive_facts(raw: &str, _url: Option<&Url>) -> SubjectFacts {
    let lowered = raw.to_ascii_lowercase();
    SubjectFacts {
        has_valid_extension: is_match(&EXTENSION_RE, raw),
        is_trusted_domain: TRUSTED_HOSTS.iter().any(|host| lowered.contains(host)),
        char_count: raw.chars().count(),
        ..SubjectFacts::default()
    }
}

fn metadata(subject: &Subject<'_>, _hits: &[RuleHit]) -> ValidationMetadata {
    ValidationMetadata::Image(ImageMetadata {
        has_valid_extension: subject.facts.has_valid_extension,
        is_trusted_domain: subject.facts.is_trusted_domain,
    })
}

fn extension(subject: &Subject<'_>) -> Option<Effect> {
    Some(Effect::either(
        subject.facts.has_valid_extension,
        (20.0, "Valid image file extension detected"),
        (-15.0, "No standard image extension found"),
    ))
}

fn trusted_host(subject: &Subject<'_>) -> Option<Effect> {
    Some(Effect::either(
        subject.facts.is_trusted_domain,
        (25.0, "Image hosted on trusted domain"),
        (-10.0, "Image hosted on unknown domain"),
    ))
}

fn liveness(subject: &Subject<'_>) -> Option<Effect> {
    match subject.probe.as_ref()? {
        ProbeOutcome::Reachable {
            content_type: Some(ct),
            ..
        } if ct.starts_with("image/") => {
            Some(Effect::new(15.0, format!("Valid content-type: {ct}")))
        }
        ProbeOutcome::Reachable { .. } => Some(Effect::new(
            -20.0,
            "Invalid or missing image content-type",
        )),
        ProbeOutcome::Unreachable { .. } => Some(Effect::new(-25.0, "Image URL not accessible")),
        ProbeOutcome::Failed { .. } => Some(Effect::new(
            -20.0,
            "Failed to verify image accessibility",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_ignores_query_and_case() {
        assert!(derive_facts("https://cdn.test/a/photo.JPG?w=200", None).has_valid_extension);
        assert!(derive_facts("https://cdn.test/a/photo.webp", None).has_valid_extension);
        assert!(!derive_facts("https://cdn.test/a/photo.png/view", None).has_valid_extension);
        assert!(!derive_facts("https://cdn.test/a/photo", None).has_valid_extension);
    }

    #[test]
    fn trusted_host_is_a_substring_check() {
        assert!(derive_facts("https://i.imgur.com/abc.gif", None).is_trusted_domain);
        assert!(
            derive_facts("https://raw.githubusercontent.com/o/r/main/logo.svg", None)
                .is_trusted_domain
        );
        assert!(!derive_facts("https://images.example.net/a.png", None).is_trusted_domain);
    }
}
