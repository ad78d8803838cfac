use super::{MLE, OVERFLOW};
use crate::core::Confidence::High;
use crate::rules::predicate::{matches, signal, Signal};
use crate::rules::{DefectKind, Rule, Topic};

pub fn rules() -> Vec<Rule> {
    vec![
        Rule::new("OVERFLOW_INT_USAGE", Topic::Resources, DefectKind::Overflow)
            .when(100, OVERFLOW, signal(Signal::IntForLargeNumbers))
            .explain(
                High,
                "Integer overflow due to large arithmetic operations.",
                "Use long / long long.",
            )
            .topics(["Overflow Prevention"])
            .problems(["Reverse Integer"]),
        Rule::new("MLE_LARGE_2D_ARRAY", Topic::Resources, DefectKind::MemoryOveruse)
            .when(100, MLE, matches(r"\[\s*n\s*\]\s*\[\s*n\s*\]"))
            .explain(
                High,
                "Large 2D array consumes excessive memory.",
                "Optimize space or use rolling arrays.",
            )
            .complexity("O(n²)", "O(n)")
            .topics(["Space Optimization"])
            .problems(["DP Grid Problems"]),
    ]
}
