//! Text rules: suspicious phrasing, length, and capitalization.

use ::url::Url;
use veracity_core::constants::{TEXT_BASELINE, TEXT_JITTER_MAX};
use veracity_core::models::{Modality, TextMetadata, ValidationMetadata};

use super::{count_matches, occurrences, round2, Effect, Rule, RuleHit, RuleSet, Subject, SubjectFacts, VerdictMessages};

/// Penalty per occurrence of any suspicious pattern.
const PATTERN_PENALTY: f64 = -10.0;

/// Shortest and longest text considered normal, in characters.
const MIN_LENGTH: usize = 20;
const MAX_LENGTH: usize = 5_000;

/// Uppercase ratio above which text is penalized.
const CAPS_RATIO_LIMIT: f64 = 0.5;

/// URLs in one text before it counts as link-heavy.
const LINK_HEAVY_THRESHOLD: usize = 3;

/// Identical consecutive characters that count as a run.
const CHARACTER_RUN_LENGTH: usize = 11;

/// Rule ids with this prefix feed `TextMetadata::suspicious_patterns`.
pub const PATTERN_RULE_PREFIX: &str = "text.pattern.";

// Word boundaries are ASCII-only, so keywords touching non-ASCII letters still count.
rule_pattern!(
    URGENCY_RE,
    r"(?i)(?-u:\b)(click here|act now|limited time|urgent|congratulations)(?-u:\b)"
);
rule_pattern!(
    ACCOUNT_RE,
    r"(?i)(?-u:\b)(verify your account|suspended|confirm identity)(?-u:\b)"
);
rule_pattern!(
    PRIZE_RE,
    r"(?i)(?-u:\b)(winner|prize|free money|lottery)(?-u:\b)"
);
rule_pattern!(LINK_RE, r"(?i)https?://\S+");

pub static RULE_SET: RuleSet = RuleSet {
    modality: Modality::Text,
    baseline: TEXT_BASELINE,
    jitter_max: TEXT_JITTER_MAX,
    probe_policy: None,
    parse_gate: None,
    derive_facts,
    metadata,
    messages: VerdictMessages {
        authentic: "Text appears to be authentic and trustworthy",
        fake: "Text shows signs of manipulation or suspicious patterns",
    },
    rules: &[
        Rule::new("text.pattern.urgency", urgency_phrasing),
        Rule::new("text.pattern.account", account_phrasing),
        Rule::new("text.pattern.prize", prize_phrasing),
        Rule::new("text.pattern.links", link_heavy),
        Rule::new("text.pattern.character_run", character_runs),
        Rule::new("text.length", length),
        Rule::new("text.caps_ratio", caps_ratio),
    ],
};

fn derive_facts(raw: &str, _url: Option<&Url>) -> SubjectFacts {
    let char_count = raw.chars().count();
    let uppercase = raw.chars().filter(char::is_ascii_uppercase).count();
    let caps_ratio = if char_count == 0 {
        0.0
    } else {
        uppercase as f64 / char_count as f64
    };
    SubjectFacts {
        char_count,
        caps_ratio,
        ..SubjectFacts::default()
    }
}

fn metadata(subject: &Subject<'_>, hits: &[RuleHit]) -> ValidationMetadata {
    let suspicious_patterns: Vec<String> = hits
        .iter()
        .filter(|hit| hit.rule_id.starts_with(PATTERN_RULE_PREFIX))
        .map(|hit| hit.finding.clone())
        .collect();
    ValidationMetadata::Text(TextMetadata {
        length: subject.facts.char_count,
        caps_ratio: round2(subject.facts.caps_ratio),
        patterns_detected: suspicious_patterns.len(),
        suspicious_patterns,
    })
}

fn pattern_effect(label: &str, count: usize) -> Option<Effect> {
    (count > 0).then(|| {
        Effect::new(
            PATTERN_PENALTY * count as f64,
            format!("{label}: {}", occurrences(count)),
        )
    })
}

fn urgency_phrasing(subject: &Subject<'_>) -> Option<Effect> {
    pattern_effect(
        "Urgency or clickbait phrasing",
        count_matches(&URGENCY_RE, subject.raw),
    )
}

fn account_phrasing(subject: &Subject<'_>) -> Option<Effect> {
    pattern_effect(
        "Account verification phrasing",
        count_matches(&ACCOUNT_RE, subject.raw),
    )
}

fn prize_phrasing(subject: &Subject<'_>) -> Option<Effect> {
    pattern_effect(
        "Prize or lottery phrasing",
        count_matches(&PRIZE_RE, subject.raw),
    )
}

fn link_heavy(subject: &Subject<'_>) -> Option<Effect> {
    let links = count_matches(&LINK_RE, subject.raw);
    pattern_effect(
        "Link-heavy text",
        usize::from(links >= LINK_HEAVY_THRESHOLD),
    )
}

fn character_runs(subject: &Subject<'_>) -> Option<Effect> {
    pattern_effect(
        "Repeated character run",
        count_character_runs(subject.raw, CHARACTER_RUN_LENGTH),
    )
}

fn length(subject: &Subject<'_>) -> Option<Effect> {
    let count = subject.facts.char_count;
    let in_range = (MIN_LENGTH..=MAX_LENGTH).contains(&count);
    Some(Effect::new(
        if in_range { 10.0 } else { -10.0 },
        if in_range {
            format!("Text length within expected range ({count} characters)")
        } else {
            format!("Text length outside expected range ({count} characters)")
        },
    ))
}

fn caps_ratio(subject: &Subject<'_>) -> Option<Effect> {
    let ratio = subject.facts.caps_ratio;
    (ratio > CAPS_RATIO_LIMIT).then(|| {
        Effect::new(
            -20.0,
            format!("Excessive capitalization (ratio {:.2})", ratio),
        )
    })
}

/// Count maximal runs of at least `min_len` identical characters.
///
/// Comparison is case-insensitive; line breaks never belong to a run.
pub fn count_character_runs(text: &str, min_len: usize) -> usize {
    let mut runs = 0;
    let mut current: Option<char> = None;
    let mut run_len = 0;

    for ch in text.chars() {
        if is_line_terminator(ch) {
            current = None;
            run_len = 0;
            continue;
        }
        match current {
            Some(prev) if same_letter(prev, ch) => run_len += 1,
            _ => {
                current = Some(ch);
                run_len = 1;
            }
        }
        // Count each run once, the moment it reaches the minimum.
        if run_len == min_len {
            runs += 1;
        }
    }
    runs
}

fn same_letter(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

fn is_line_terminator(ch: char) -> bool {
    matches!(ch, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_are_counted_once_each() {
        assert_eq!(count_character_runs(&"!".repeat(11), 11), 1);
        assert_eq!(count_character_runs(&"!".repeat(10), 11), 0);
        assert_eq!(count_character_runs(&"a".repeat(40), 11), 1);
        let two = format!("{} and {}", "z".repeat(12), "?".repeat(15));
        assert_eq!(count_character_runs(&two, 11), 2);
    }

    #[test]
    fn runs_ignore_case_and_break_on_newlines() {
        assert_eq!(count_character_runs("aAaAaAaAaAa", 11), 1);
        let split = format!("{}\n{}", "x".repeat(6), "x".repeat(6));
        assert_eq!(count_character_runs(&split, 11), 0);
    }

    #[test]
    fn caps_ratio_counts_ascii_uppercase_over_all_chars() {
        let facts = derive_facts("ABcd", None);
        assert_eq!(facts.char_count, 4);
        assert!((facts.caps_ratio - 0.5).abs() < f64::EPSILON);
        assert_eq!(derive_facts("", None).caps_ratio, 0.0);
    }

    #[test]
    fn link_heavy_needs_three_links() {
        let subject = |raw| Subject {
            raw,
            url: None,
            facts: SubjectFacts::default(),
            probe: None,
        };
        assert!(link_heavy(&subject("see http://a.test and https://b.test")).is_none());
        let hit = link_heavy(&subject("http://a.test http://b.test https://c.test")).unwrap();
        assert_eq!(hit.delta, -10.0);
        assert_eq!(hit.finding, "Link-heavy text: 1 occurrence");
    }

    fn subject_for(raw: &str) -> Subject<'_> {
        Subject {
            raw,
            url: None,
            facts: derive_facts(raw, None),
            probe: None,
        }
    }

    #[test]
    fn keywords_next_to_non_ascii_letters_still_count() {
        let hit = prize_phrasing(&subject_for("You are the winnerñ of our draw today")).unwrap();
        assert_eq!(hit.delta, -10.0);
        assert_eq!(hit.finding, "Prize or lottery phrasing: 1 occurrence");
        assert!(urgency_phrasing(&subject_for("éurgentè notice")).is_some());
        assert!(prize_phrasing(&subject_for("the winners were announced")).is_none());
    }

    #[test]
    fn each_occurrence_of_a_pattern_is_penalized() {
        let hit = urgency_phrasing(&subject_for("urgent: reply now, this is urgent")).unwrap();
        assert_eq!(hit.delta, -20.0);
        assert_eq!(hit.finding, "Urgency or clickbait phrasing: 2 occurrences");
    }

    #[test]
    fn length_bounds_are_inclusive() {
        let at_min = "a".repeat(4) + &" abcd".repeat(3) + " ";
        assert_eq!(at_min.chars().count(), 20);
        assert_eq!(length(&subject_for(&at_min)).unwrap().delta, 10.0);

        let below = &at_min[..19];
        assert_eq!(length(&subject_for(below)).unwrap().delta, -10.0);

        let at_max = "abcd ".repeat(1_000);
        assert_eq!(at_max.chars().count(), 5_000);
        let effect = length(&subject_for(&at_max)).unwrap();
        assert_eq!(effect.delta, 10.0);
        assert_eq!(effect.finding, "Text length within expected range (5000 characters)");

        let above = at_max + "x";
        let effect = length(&subject_for(&above)).unwrap();
        assert_eq!(effect.delta, -10.0);
        assert_eq!(effect.finding, "Text length outside expected range (5001 characters)");
    }
}
