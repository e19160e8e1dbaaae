//! Declarative rule tables, one per modality.
//!
//! A [`RuleSet`] bundles everything that differs between modalities: the
//! baseline, the jitter bound, the probe policy, how facts are derived from the
//! raw input, and the ordered table of [`Rule`]s. The shared evaluator in
//! [`crate::evaluator`] is the only code that walks these tables.

/// Compiled once on first use. A pattern that fails to compile matches nothing.
macro_rules! rule_pattern {
    ($name:ident, $regex_str:expr) => {
        static $name: std::sync::LazyLock<Option<regex::Regex>> =
            std::sync::LazyLock::new(|| regex::Regex::new($regex_str).ok());
    };
}

pub mod image;
pub mod text;
pub mod url;
pub mod video;

use ::url::Url;
use regex::Regex;
use veracity_core::models::{Modality, ProbeOutcome, ProbePolicy, ValidationMetadata, Verdict};

/// Score change and finding produced by one rule.
#[derive(Debug, Clone, PartialEq)]
pub struct Effect {
    pub delta: f64,
    pub finding: String,
}

impl Effect {
    pub fn new(delta: f64, finding: impl Into<String>) -> Self {
        Self {
            delta,
            finding: finding.into(),
        }
    }

    /// `pass` when `condition` holds, otherwise `fail`.
    pub fn either(condition: bool, pass: (f64, &str), fail: (f64, &str)) -> Self {
        let (delta, finding) = if condition { pass } else { fail };
        Self::new(delta, finding)
    }
}

/// A rule that fired, tagged with its table id.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleHit {
    pub rule_id: &'static str,
    pub delta: f64,
    pub finding: String,
}

impl RuleHit {
    pub fn new(rule_id: &'static str, effect: Effect) -> Self {
        Self {
            rule_id,
            delta: effect.delta,
            finding: effect.finding,
        }
    }
}

/// A check over the subject. `None` means the rule fired with no effect.
pub type RuleCheck = fn(&Subject<'_>) -> Option<Effect>;

/// One table entry.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub id: &'static str,
    /// Reads `Subject::probe`; otherwise a pure function of the input.
    pub requires_probe: bool,
    pub check: RuleCheck,
}

impl Rule {
    pub const fn new(id: &'static str, check: RuleCheck) -> Self {
        Self {
            id,
            requires_probe: false,
            check,
        }
    }

    pub const fn probe(id: &'static str, check: RuleCheck) -> Self {
        Self {
            id,
            requires_probe: true,
            check,
        }
    }
}

/// Fixed effect used by the URL parse gate.
#[derive(Debug, Clone, Copy)]
pub struct StaticEffect {
    pub delta: f64,
    pub finding: &'static str,
}

impl StaticEffect {
    pub fn to_effect(self) -> Effect {
        Effect::new(self.delta, self.finding)
    }
}

/// Parse step run before the table. Failure is terminal for the input.
#[derive(Debug, Clone, Copy)]
pub struct ParseGate {
    pub rule_id: &'static str,
    pub valid: StaticEffect,
    pub invalid: StaticEffect,
    /// Replaces the verdict message on the early-exit path.
    pub invalid_message: &'static str,
}

/// The authentic/fake message pair for a modality.
#[derive(Debug, Clone, Copy)]
pub struct VerdictMessages {
    pub authentic: &'static str,
    pub fake: &'static str,
}

impl VerdictMessages {
    pub fn for_verdict(&self, verdict: Verdict) -> &'static str {
        match verdict {
            Verdict::Authentic => self.authentic,
            Verdict::Fake => self.fake,
        }
    }
}

/// Values derived once from the raw input and shared by several rules.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubjectFacts {
    pub domain: Option<String>,
    pub protocol: Option<String>,
    pub is_trusted_domain: bool,
    pub has_valid_extension: bool,
    pub has_suspicious_indicators: bool,
    /// Length in characters.
    pub char_count: usize,
    pub caps_ratio: f64,
}

/// Everything a rule may look at.
#[derive(Debug, Clone)]
pub struct Subject<'a> {
    pub raw: &'a str,
    /// Present only for modalities with a parse gate, after it passed.
    pub url: Option<Url>,
    pub facts: SubjectFacts,
    /// Present only for modalities with a probe policy.
    pub probe: Option<ProbeOutcome>,
}

pub type FactDeriver = fn(&str, Option<&Url>) -> SubjectFacts;
pub type MetadataBuilder = fn(&Subject<'_>, &[RuleHit]) -> ValidationMetadata;

/// Complete scoring definition for one modality.
#[derive(Debug, Clone, Copy)]
pub struct RuleSet {
    pub modality: Modality,
    pub baseline: f64,
    pub jitter_max: f64,
    pub probe_policy: Option<ProbePolicy>,
    pub parse_gate: Option<ParseGate>,
    pub derive_facts: FactDeriver,
    pub metadata: MetadataBuilder,
    pub messages: VerdictMessages,
    pub rules: &'static [Rule],
}

/// The rule set for `modality`.
pub fn rule_set(modality: Modality) -> &'static RuleSet {
    match modality {
        Modality::Text => &text::RULE_SET,
        Modality::Image => &image::RULE_SET,
        Modality::Video => &video::RULE_SET,
        Modality::Url => &url::RULE_SET,
    }
}

/// "1 occurrence", "3 occurrences".
pub(crate) fn occurrences(count: usize) -> String {
    if count == 1 {
        "1 occurrence".to_string()
    } else {
        format!("{count} occurrences")
    }
}

/// Ratio rounded to 2 decimals for reporting.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Non-overlapping matches of `pattern` in `haystack`.
pub(crate) fn count_matches(pattern: &Option<Regex>, haystack: &str) -> usize {
    pattern
        .as_ref()
        .map_or(0, |re| re.find_iter(haystack).count())
}

pub(crate) fn is_match(pattern: &Option<Regex>, haystack: &str) -> bool {
    pattern.as_ref().is_some_and(|re| re.is_match(haystack))
}
