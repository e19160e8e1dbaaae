//! Generic URL rules: domain reputation, protocol, deception patterns, liveness.

use std::sync::LazyLock;

use ::url::Url;
use regex::Regex;
use veracity_core::constants::{MEDIA_BASELINE, URL_JITTER_MAX, URL_PROBE_TIMEOUT};
use veracity_core::models::{Modality, ProbeOutcome, ProbePolicy, UrlMetadata, ValidationMetadata};

use super::{
    is_match, Effect, ParseGate, Rule, RuleHit, RuleSet, StaticEffect, Subject, SubjectFacts,
    VerdictMessages,
};

/// Well-known domains; subdomains of these are trusted too.
pub const TRUSTED_DOMAINS: &[&str] = &[
    "google.com",
    "youtube.com",
    "facebook.com",
    "twitter.com",
    "x.com",
    "linkedin.com",
    "github.com",
    "stackoverflow.com",
    "wikipedia.org",
    "amazon.com",
    "microsoft.com",
    "apple.com",
    "cloudflare.com",
    "supabase.com",
    "vercel.com",
    "netlify.com",
    "mozilla.org",
];

pub const SUSPICIOUS_TLDS: &[&str] = &[".xyz", ".top", ".click", ".loan", ".win", ".bid"];

/// Domains longer than this are penalized.
const MAX_DOMAIN_LENGTH: usize = 30;

rule_pattern!(RE_CREDENTIAL_WORDS, r"(?i)login|signin|verify|account|secure|update");
rule_pattern!(RE_BRAND_NAMES, r"(?i)paypal|amazon|apple|microsoft|netflix");
rule_pattern!(RE_IPV4, r"[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}");
rule_pattern!(RE_REPEATED_HYPHENS, r"-{2,}");
rule_pattern!(RE_LONG_DIGIT_RUN, r"[0-9]{5,}");

static DECEPTION_PATTERNS: [&LazyLock<Option<Regex>>; 5] = [
    &RE_CREDENTIAL_WORDS,
    &RE_BRAND_NAMES,
    &RE_IPV4,
    &RE_REPEATED_HYPHENS,
    &RE_LONG_DIGIT_RUN,
];

pub static RULE_SET: RuleSet = RuleSet {
    modality: Modality::Url,
    baseline: MEDIA_BASELINE,
    jitter_max: URL_JITTER_MAX,
    probe_policy: Some(ProbePolicy::manual(URL_PROBE_TIMEOUT)),
    parse_gate: Some(ParseGate {
        rule_id: "url.parse",
        valid: StaticEffect {
            delta: 10.0,
            finding: "Valid URL format",
        },
        invalid: StaticEffect {
            delta: -30.0,
            finding: "Invalid URL format",
        },
        invalid_message: "Invalid URL format detected",
    }),
    derive_facts,
    metadata,
    messages: VerdictMessages {
        authentic: "URL appears to be safe and trustworthy",
        fake: "URL shows signs of potential phishing or malicious activity",
    },
    rules: &[
        Rule::new("url.trusted_domain", trusted_domain),
        Rule::new("url.suspicious_tld", suspicious_tld),
        Rule::new("url.protocol", protocol),
        Rule::new("url.deception_patterns", deception_patterns),
        Rule::new("url.domain_length", domain_length),
        Rule::probe("url.liveness", liveness),
    ],
};

fn derive_facts(_raw: &str, url: Option<&Url>) -> SubjectFacts {
    let Some(url) = url else {
        return SubjectFacts::default();
    };
    let host = url.host_str().unwrap_or_default();
    let domain = host.strip_prefix("www.").unwrap_or(host).to_string();
    SubjectFacts {
        is_trusted_domain: is_trusted_domain(&domain),
        protocol: Some(url.scheme().to_string()),
        domain: Some(domain),
        ..SubjectFacts::default()
    }
}

fn metadata(subject: &Subject<'_>, _hits: &[RuleHit]) -> ValidationMetadata {
    ValidationMetadata::Url(UrlMetadata {
        domain: subject.facts.domain.clone(),
        protocol: subject.facts.protocol.clone(),
        is_trusted_domain: subject.facts.is_trusted_domain,
    })
}

/// Exact match or subdomain match against [`TRUSTED_DOMAINS`].
pub fn is_trusted_domain(domain: &str) -> bool {
    TRUSTED_DOMAINS.iter().any(|trusted| {
        domain == *trusted
            || domain
                .strip_suffix(trusted)
                .is_some_and(|prefix| prefix.ends_with('.'))
    })
}

/// Number of deception patterns matching anywhere in `raw`.
pub fn count_deception_patterns(raw: &str) -> usize {
    DECEPTION_PATTERNS
        .iter()
        .filter(|pattern| is_match(pattern, raw))
        .count()
}

fn domain<'a>(subject: &'a Subject<'_>) -> &'a str {
    subject.facts.domain.as_deref().unwrap_or_default()
}

fn trusted_domain(subject: &Subject<'_>) -> Option<Effect> {
    Some(Effect::either(
        subject.facts.is_trusted_domain,
        (30.0, "Domain is on trusted whitelist"),
        (-5.0, "Domain not on trusted whitelist"),
    ))
}

fn suspicious_tld(subject: &Subject<'_>) -> Option<Effect> {
    let domain = domain(subject);
    SUSPICIOUS_TLDS
        .iter()
        .any(|tld| domain.ends_with(tld))
        .then(|| Effect::new(-25.0, "Suspicious top-level domain detected"))
}

fn protocol(subject: &Subject<'_>) -> Option<Effect> {
    match subject.facts.protocol.as_deref() {
        Some("https") => Some(Effect::new(15.0, "Secure HTTPS protocol")),
        _ => Some(Effect::new(-15.0, "Insecure HTTP protocol")),
    }
}

fn deception_patterns(subject: &Subject<'_>) -> Option<Effect> {
    match count_deception_patterns(subject.raw) {
        0 => None,
        n @ 1..=2 => Some(Effect::new(
            -10.0,
            format!("{n} potential suspicious pattern(s)"),
        )),
        n => Some(Effect::new(
            -20.0,
            format!("{n} suspicious patterns detected in URL"),
        )),
    }
}

fn domain_length(subject: &Subject<'_>) -> Option<Effect> {
    (domain(subject).chars().count() > MAX_DOMAIN_LENGTH)
        .then(|| Effect::new(-10.0, "Unusually long domain name"))
}

fn liveness(subject: &Subject<'_>) -> Option<Effect> {
    match subject.probe.as_ref()? {
        ProbeOutcome::Reachable { .. } => Some(Effect::new(
            10.0,
            "URL is accessible and responds correctly",
        )),
        ProbeOutcome::Unreachable { status } if *status >= 400 => Some(Effect::new(
            -15.0,
            format!("URL returns error status: {status}"),
        )),
        ProbeOutcome::Unreachable { .. } => None,
        ProbeOutcome::Failed { .. } => Some(Effect::new(
            -10.0,
            "Unable to verify URL accessibility",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trusted_domain_matches_exact_and_subdomains_only() {
        assert!(is_trusted_domain("github.com"));
        assert!(is_trusted_domain("gist.github.com"));
        assert!(!is_trusted_domain("evilgithub.com"));
        assert!(!is_trusted_domain("github.com.evil.xyz"));
    }

    #[test]
    fn www_prefix_is_stripped() {
        let url = Url::parse("https://www.wikipedia.org/wiki/Rust").unwrap();
        let facts = derive_facts(url.as_str(), Some(&url));
        assert_eq!(facts.domain.as_deref(), Some("wikipedia.org"));
        assert_eq!(facts.protocol.as_deref(), Some("https"));
        assert!(facts.is_trusted_domain);
    }

    #[test]
    fn deception_patterns_are_counted_once_each() {
        assert_eq!(count_deception_patterns("https://example.org/docs"), 0);
        assert_eq!(
            count_deception_patterns("http://192.168.10.20/paypal-login--secure/1234567"),
            5
        );
        assert_eq!(count_deception_patterns("https://shop.test/account/update"), 1);
    }

    #[test]
    fn every_non_https_scheme_is_reported_as_insecure_http() {
        for raw in ["http://example.org", "ftp://files.example.org/a.txt", "mailto:someone@example.org"] {
            let url = Url::parse(raw).unwrap();
            let facts = derive_facts(raw, Some(&url));
            let subject = Subject {
                raw,
                url: Some(url.clone()),
                facts,
                probe: None,
            };
            let effect = protocol(&subject).unwrap();
            assert_eq!(effect.delta, -15.0);
            assert_eq!(effect.finding, "Insecure HTTP protocol");
        }
    }
}
