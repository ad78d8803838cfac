//! End-to-end scenarios against the standard catalog.

mod common;

use common::{analyze, analyze_with_constraints, finding_ids};
use failmap::rules::predicate::matches;
use failmap::rules::DefectKind;
use failmap::{
    parse_constraints, AnalysisRequest, AnalysisSummary, Confidence, ErrorType, Language, Rule,
    RuleEngine, RuleTable, Severity, SizeBucket, SpaceComplexity, TimeComplexity, Topic,
    NO_RULE_MATCHED,
};
use indoc::indoc;
use pretty_assertions::assert_eq;

#[test]
fn test_nested_loops_under_large_constraints() {
    let code = indoc! {"
        int main() {
            int n = read();
            long long ans = 0;
            for (int i = 0; i < n; i++) {
                for (int j = 0; j < n; j++) {
                    ans += a[i] * a[j];
                }
            }
            return 0;
        }
    "};
    let result = analyze_with_constraints(
        code,
        Language::Cpp,
        ErrorType::TimeLimitExceeded,
        "1 <= n <= 2*10^5",
    );

    assert_eq!(result.primary_finding.id, "TLE_NESTED_LOOP");
    assert_eq!(result.primary_finding.confidence, Confidence::High);
    assert_eq!(result.primary_finding.severity, Severity::High);
    assert_eq!(result.primary_finding.current_complexity.as_deref(), Some("O(n²)"));
    assert_eq!(result.time_complexity, TimeComplexity::Quadratic);
}

#[test]
fn test_nested_loops_need_large_input() {
    let code = "for (int i = 0; i < n; i++) { for (int j = 0; j < n; j++) { s++; } }";
    let result = analyze_with_constraints(code, Language::Cpp, ErrorType::TimeLimitExceeded, "n <= 100");
    assert!(!finding_ids(&result).contains(&"TLE_NESTED_LOOP".to_string()));
}

#[test]
fn test_unguarded_stack_pop_is_critical() {
    let code = indoc! {"
        stack<int> st;
        st.push(1);
        st.pop();
        int x = st.top();
    "};
    let result = analyze(code, Language::Cpp, ErrorType::RuntimeError);

    assert_eq!(result.primary_finding.id, "STACK_EMPTY_ACCESS");
    assert_eq!(result.primary_finding.confidence, Confidence::High);
    assert_eq!(result.primary_finding.severity, Severity::Critical);
    assert_eq!(result.primary_finding.topic, "stack");
}

#[test]
fn test_unguarded_queue_front_is_critical() {
    let code = indoc! {"
        queue<int> q;
        q.push(1);
        q.pop();
        int x = q.front();
    "};
    let result = analyze(code, Language::Cpp, ErrorType::RuntimeError);

    assert_eq!(result.primary_finding.id, "QUEUE_EMPTY_ACCESS");
    assert_eq!(result.primary_finding.severity, Severity::Critical);
    assert!(finding_ids(&result).contains(&"RE_QUEUE_EMPTY_ACCESS".to_string()));
}

#[test]
fn test_guarded_stack_is_not_flagged() {
    let code = indoc! {"
        stack<int> st;
        if (!st.empty()) {
            st.pop();
        }
    "};
    let result = analyze(code, Language::Cpp, ErrorType::RuntimeError);
    assert!(!finding_ids(&result).contains(&"STACK_EMPTY_ACCESS".to_string()));
}

#[test]
fn test_unmatched_submission_falls_back_with_complexity() {
    let code = indoc! {"
        int main() {
            unordered_map<int, int> seen;
            for (int i = 0; i < n; i++) {
                seen[x] = i;
            }
        }
    "};
    let result = analyze(code, Language::Cpp, ErrorType::MemoryLimitExceeded);

    assert_eq!(result.primary_finding.id, NO_RULE_MATCHED);
    assert_eq!(result.primary_finding.confidence, Confidence::Low);
    assert!(result.secondary_findings.is_empty());
    assert_eq!(result.time_complexity, TimeComplexity::Linear);
    assert_eq!(result.space_complexity, SpaceComplexity::Linear);

    let summary = AnalysisSummary::from_result(&result);
    assert!(!summary.has_errors);
    assert_eq!(summary.score, 100);
}

#[test]
fn test_priority_one_hundred_beats_seventy_five() {
    let rule = |id: &str, priority: u8| {
        Rule::new(id, Topic::Custom, DefectKind::Custom)
            .when(priority, ErrorType::WrongAnswer, matches("answer"))
            .explain(Confidence::Medium, "reason", "fix")
    };
    let table = RuleTable::builder()
        .rule(rule("SEVENTY_FIVE", 75))
        .rule(rule("ONE_HUNDRED", 100))
        .build()
        .unwrap();
    let engine = RuleEngine::new(table);
    let request = AnalysisRequest::new("print(answer)", Language::Python, ErrorType::WrongAnswer).unwrap();
    let result = engine.analyze(&request);

    assert_eq!(result.primary_finding.id, "ONE_HUNDRED");
    assert_eq!(finding_ids(&result), vec!["ONE_HUNDRED", "SEVENTY_FIVE"]);
}

#[test]
fn test_json_wire_shape() {
    let result = analyze(
        "stack<int> st; st.pop();",
        Language::Cpp,
        ErrorType::RuntimeError,
    );
    let value = serde_json::to_value(&result).unwrap();

    assert_eq!(value["errorType"], "RE");
    assert_eq!(value["primaryFinding"]["severity"], "Critical");
    assert!(value["secondaryFindings"].is_array());
    assert!(value["timeComplexity"].is_string());
    assert!(value["spaceComplexity"].is_string());
    assert!(value.get("faultedRules").is_none());
}

#[test]
fn test_constraint_buckets() {
    let large = parse_constraints("n <= 1e5");
    assert_eq!(large.bound("n"), Some(100_000));
    assert_eq!(large.size, SizeBucket::Large);

    assert_eq!(parse_constraints("n <= 10^6").size, SizeBucket::VeryLarge);
    assert_eq!(parse_constraints("").size, SizeBucket::Unknown);
}

#[test]
fn test_python_recursion_limit() {
    let code = indoc! {"
        def dfs(node):
            for child in graph[node]:
                dfs(child)
    "};
    let result = analyze(code, Language::Python, ErrorType::RuntimeError);
    assert!(
        result.findings().any(|finding| finding.id.contains("RECURSION")
            || finding.id == "RE_STACK_OVERFLOW"),
        "expected a recursion finding, got {:?}",
        finding_ids(&result)
    );
}
