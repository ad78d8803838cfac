// Test utility module for failmap integration tests
#![allow(dead_code)]

use failmap::{AnalysisRequest, AnalysisResult, ErrorType, Language, RuleEngine};
use once_cell::sync::Lazy;

static ENGINE: Lazy<RuleEngine> =
    Lazy::new(|| RuleEngine::standard().expect("standard catalog compiles"));

/// Engine over the standard catalog, built once per test binary.
pub fn engine() -> &'static RuleEngine {
    &ENGINE
}

pub fn analyze(code: &str, language: Language, error_type: ErrorType) -> AnalysisResult {
    let request = AnalysisRequest::new(code, language, error_type).expect("valid request");
    engine().analyze(&request)
}

pub fn analyze_with_constraints(
    code: &str,
    language: Language,
    error_type: ErrorType,
    constraints: &str,
) -> AnalysisResult {
    let request = AnalysisRequest::new(code, language, error_type)
        .expect("valid request")
        .with_constraints(constraints);
    engine().analyze(&request)
}

pub fn finding_ids(result: &AnalysisResult) -> Vec<String> {
    result.findings().map(|finding| finding.id.clone()).collect()
}
