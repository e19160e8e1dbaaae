//! Golden scoring cases from `test-fixtures/golden/`, run with jitter disabled.

use std::sync::Arc;

use serde::Deserialize;
use test_fixtures::load_fixture;
use veracity_core::models::{ProbeOutcome, ValidationInput, Verdict};
use veracity_probe::StaticProber;
use veracity_scoring::aggregation::NoJitter;
use veracity_scoring::ValidationEngine;

#[derive(Debug, Deserialize)]
struct GoldenFile {
    cases: Vec<GoldenCase>,
}

#[derive(Debug, Deserialize)]
struct GoldenCase {
    name: String,
    input: ValidationInput,
    probe: Option<ProbeOutcome>,
    expected: Expected,
}

#[derive(Debug, Deserialize)]
struct Expected {
    raw_score: f64,
    confidence_score: f64,
    verdict: Verdict,
    message: String,
    findings: Vec<String>,
    probe_called: bool,
}

fn run_golden(file: &str) {
    let golden: GoldenFile = load_fixture(file);
    for case in golden.cases {
        let default = case
            .probe
            .clone()
            .unwrap_or_else(|| ProbeOutcome::failed("no probe expected"));
        let prober = Arc::new(StaticProber::new(default));
        let engine = ValidationEngine::new(prober.clone(), Arc::new(NoJitter));

        let assessment = engine
            .assess(&case.input)
            .unwrap_or_else(|e| panic!("{}: {e}", case.name));

        assert_eq!(
            assessment.aggregate.raw_score, case.expected.raw_score,
            "{}: raw score",
            case.name
        );
        assert_eq!(
            assessment.result.confidence_score.value(),
            case.expected.confidence_score,
            "{}: confidence score",
            case.name
        );
        assert_eq!(assessment.result.verdict, case.expected.verdict, "{}", case.name);
        assert_eq!(assessment.result.message, case.expected.message, "{}", case.name);
        assert_eq!(assessment.result.findings, case.expected.findings, "{}", case.name);
        assert_eq!(
            prober.call_count() > 0,
            case.expected.probe_called,
            "{}: probe call",
            case.name
        );
    }
}

#[test]
fn golden_text() {
    run_golden("golden/text.json");
}

#[test]
fn golden_image() {
    run_golden("golden/image.json");
}

#[test]
fn golden_video() {
    run_golden("golden/video.json");
}

#[test]
fn golden_url() {
    run_golden("golden/url.json");
}
