use super::{MLE, MULTI_TEST, RE, WA};
use crate::core::Confidence::{High, Low, Medium};
use crate::rules::predicate::{absent, all, matches, signal, Signal};
use crate::rules::{DefectKind, Rule, Topic};

pub fn rules() -> Vec<Rule> {
    vec![
        Rule::new("ARRAY_INDEX_OUT_OF_BOUNDS", Topic::Array, DefectKind::IndexBounds)
            .when(100, RE, all([signal(Signal::ArrayAccess), signal(Signal::UnsafeIndexing)]))
            .explain(High, "Array accessed using invalid index.", "Ensure index stays within bounds.")
            .topics(["Array Indexing"])
            .problems(["Rotate Array"]),
        Rule::new("ARRAY_OFF_BY_ONE", Topic::Array, DefectKind::OffByOne)
            .when(95, WA, all([matches(r"<=\s*n"), signal(Signal::ArrayAccess)]))
            .explain(High, "Loop runs one extra iteration.", "Use < n instead of <= n.")
            .topics(["Loop Boundaries"])
            .problems(["Binary Search"]),
        Rule::new("ARRAY_WRONG_INITIALIZATION", Topic::Array, DefectKind::WrongInitialization)
            .when(95, WA, matches(r"int\s+(max|min)\s*=\s*0"))
            .explain(
                High,
                "Wrong initialization when array has negatives.",
                "Initialize with first element or INT_MIN/INT_MAX.",
            )
            .topics(["Initialization"])
            .problems(["Kadane Algorithm"]),
        Rule::new("ARRAY_EMPTY_NOT_HANDLED", Topic::Array, DefectKind::MissingEdgeCase)
            .when(90, WA, all([signal(Signal::ArrayAccess), absent(r"n\s*==\s*0")]))
            .explain(Medium, "Empty array edge case not handled.", "Check n == 0 before processing.")
            .topics(["Edge Cases"])
            .problems(["Maximum Subarray"]),
        Rule::new("ARRAY_SINGLE_ELEMENT_MISSED", Topic::Array, DefectKind::MissingEdgeCase)
            .when(85, WA, all([signal(Signal::ArrayAccess), absent(r"n\s*==\s*1")]))
            .explain(Low, "Single element array case not handled.", "Handle n == 1 explicitly.")
            .topics(["Edge Cases"])
            .problems(["Best Time to Buy and Sell Stock"]),
        Rule::new("ARRAY_PREFIX_NOT_RESET", Topic::Array, DefectKind::NotReset)
            .when(85, WA, all([matches("prefix|sum"), matches(MULTI_TEST)]))
            .explain(
                Low,
                "Prefix sum not reset between test cases.",
                "Reinitialize prefix sum per test case.",
            )
            .topics(["Prefix Sum"])
            .problems(["Subarray Sum Equals K"]),
        Rule::new("ARRAY_VALUE_OVERWRITE", Topic::Array, DefectKind::WrongTransition)
            .when(80, WA, all([signal(Signal::ArrayAccess), matches(r"=\s*\w+")]))
            .explain(
                Low,
                "Array values overwritten unintentionally.",
                "Preserve original values if needed.",
            )
            .topics(["In-place Algorithms"])
            .problems(["Set Matrix Zeroes"]),
        Rule::new("ARRAY_MEMORY_OVERUSE", Topic::Array, DefectKind::MemoryOveruse)
            .when(100, MLE, all([signal(Signal::ArrayAccess), matches(r"\[\s*1000000\s*\]")]))
            .explain(
                High,
                "Array size too large for memory limit.",
                "Use dynamic allocation or optimize space.",
            )
            .topics(["Space Optimization"])
            .problems(["DP Problems"]),
    ]
}
