use super::{RE, TLE};
use crate::core::Confidence::{High, Medium};
use crate::core::Language;
use crate::rules::predicate::{absent, all, language, matches, signal, Signal};
use crate::rules::{DefectKind, Rule, Topic};

pub fn rules() -> Vec<Rule> {
    vec![
        Rule::new("PYTHON_RECURSION_LIMIT", Topic::Language, DefectKind::UnboundedRecursion)
            .when(95, RE, all([language(Language::Python), signal(Signal::Recursion)]))
            .explain(
                High,
                "Python recursion depth exceeded.",
                "Convert recursion to iterative solution.",
            )
            .topics(["Python Recursion"])
            .problems(["DFS Traversal"]),
        Rule::new("JAVA_SLOW_IO", Topic::Language, DefectKind::SlowIo)
            .when(85, TLE, all([language(Language::Java), matches("Scanner")]))
            .explain(Medium, "Scanner is slow for large input.", "Use BufferedReader instead.")
            .complexity("O(n)", "O(n)")
            .topics(["Fast IO"])
            .problems(["Fast Input Output"]),
        Rule::new("CPP_SLOW_IO", Topic::Language, DefectKind::SlowIo)
            .when(
                80,
                TLE,
                all([language(Language::Cpp), matches("cin"), absent("sync_with_stdio")]),
            )
            .explain(
                Medium,
                "cin without fast IO can cause TLE.",
                "Enable fast IO using ios::sync_with_stdio(false).",
            )
            .complexity("O(n)", "O(n)")
            .topics(["Fast IO"])
            .problems(["Large Input Handling"]),
    ]
}
