use super::WA;
use crate::core::Confidence::{High, Low, Medium};
use crate::rules::predicate::{absent, all, matches, signal, Signal};
use crate::rules::{DefectKind, Rule, Topic};

pub fn rules() -> Vec<Rule> {
    vec![
        Rule::new("WA_INDEX_ERROR", Topic::Correctness, DefectKind::IndexBounds)
            .when(100, WA, signal(Signal::UnsafeIndexing))
            .explain(
                High,
                "Array index out of bounds or off-by-one error.",
                "Validate index boundaries carefully.",
            )
            .topics(["Array Indexing", "Index Handling"])
            .problems(["Rotate Array", "First Missing Positive", "Find Peak Element"]),
        Rule::new("WA_LOOP_BOUNDARY", Topic::Correctness, DefectKind::OffByOne)
            .when(95, WA, all([matches(r"<=\s*n"), signal(Signal::ArrayAccess)]))
            .when(80, WA, matches(r"<=\s*n"))
            .explain(High, "Loop iterates one extra time.", "Use < n instead of <= n.")
            .topics(["Loop Boundaries"])
            .problems(["Binary Search", "Array Traversal"]),
        Rule::new("WA_EMPTY_ARRAY", Topic::Correctness, DefectKind::MissingEdgeCase)
            .when(90, WA, all([signal(Signal::ArrayAccess), absent(r"n\s*==\s*0")]))
            .explain(
                Medium,
                "Empty array edge case not handled.",
                "Add explicit check for n == 0.",
            )
            .topics(["Edge Cases"])
            .problems(["Maximum Subarray"]),
        Rule::new("WA_WRONG_INITIALIZATION", Topic::Correctness, DefectKind::WrongInitialization)
            .when(85, WA, matches(r"int\s+(max|min)\s*=\s*0"))
            .explain(
                High,
                "Incorrect initialization when negative values exist.",
                "Initialize with first element or extreme value.",
            )
            .topics(["Initialization"])
            .problems(["Kadane Algorithm"]),
        Rule::new("WA_FLOAT_COMPARISON", Topic::Correctness, DefectKind::Precision)
            .when(85, WA, all([matches("float|double"), matches("==")]))
            .explain(
                Medium,
                "Direct comparison of floating point values is unreliable.",
                "Use epsilon-based comparison.",
            )
            .topics(["Floating Point Precision"])
            .problems(["Sqrt(x)", "Pow(x, n)"]),
        Rule::new("WA_MISSING_BRACES", Topic::Correctness, DefectKind::ControlFlow)
            .when(80, WA, matches(r"if\s*\(.*\)\s*[^\s{]"))
            .explain(
                Medium,
                "Missing braces may alter control flow unexpectedly.",
                "Always use curly braces for conditionals.",
            )
            .topics(["Control Flow"])
            .problems(["Valid Parentheses"]),
        Rule::new("WA_COMMA_OPERATOR", Topic::Correctness, DefectKind::ControlFlow)
            .when(80, WA, matches(r"if\s*\(.*,.+\)"))
            .explain(
                Medium,
                "Comma operator evaluates only the last expression.",
                "Use logical operators like && or ||.",
            )
            .topics(["Operators"])
            .problems(["Valid Conditions"]),
        Rule::new("WA_INTEGER_DIVISION", Topic::Correctness, DefectKind::Precision)
            .when(75, WA, matches(r"/\s*\w+"))
            .explain(
                Low,
                "Integer division may truncate expected values.",
                "Use floating-point division or cast operands.",
            )
            .topics(["Data Types"])
            .problems(["Average Salary"]),
        Rule::new("WA_EDGE_CASE_MISSING", Topic::Correctness, DefectKind::MissingEdgeCase)
            .when(75, WA, all([absent("if"), signal(Signal::ArrayAccess)]))
            .explain(
                Low,
                "Edge cases like empty or single-element input may not be handled.",
                "Add explicit checks for edge cases.",
            )
            .topics(["Edge Case Handling"])
            .problems(["Maximum Subarray"]),
    ]
}
