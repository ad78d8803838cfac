use super::RE;
use crate::core::Confidence::High;
use crate::rules::predicate::{absent, all, matches, signal, Signal};
use crate::rules::{DefectKind, Rule, Topic};

pub fn rules() -> Vec<Rule> {
    vec![
        Rule::new("RE_INDEX_OUT_OF_BOUNDS", Topic::Runtime, DefectKind::IndexBounds)
            .when(100, RE, signal(Signal::UnsafeIndexing))
            .explain(
                High,
                "Accessing array or string with invalid index.",
                "Ensure index stays within valid bounds.",
            )
            .topics(["Index Safety"])
            .problems(["Rotate Array"]),
        Rule::new("RE_OUT_OF_BOUNDS", Topic::Runtime, DefectKind::IndexBounds)
            .when(100, RE, signal(Signal::UnsafeIndexing))
            .explain(
                High,
                "Array index out of bounds caused runtime error.",
                "Ensure indices stay within valid bounds.",
            )
            .complexity("N/A", "N/A")
            .topics(["Bounds Checking"])
            .problems(["Rotate Array"]),
        Rule::new("RE_STACK_OVERFLOW", Topic::Runtime, DefectKind::UnboundedRecursion)
            .when(100, RE, signal(Signal::Recursion))
            .explain(
                High,
                "Deep or infinite recursion caused stack overflow.",
                "Convert recursion to iterative approach or add base case.",
            )
            .topics(["Recursion"])
            .problems(["DFS Traversal", "Flood Fill"]),
        Rule::new("RE_NULL_POINTER_DEREFERENCE", Topic::Runtime, DefectKind::NullPointer)
            .when(100, RE, all([matches("NULL|nullptr"), matches(r"\*")]))
            .explain(
                High,
                "Dereferencing a null pointer.",
                "Ensure pointer is initialized before use.",
            )
            .topics(["Pointers"])
            .problems(["Linked List Basics"]),
        Rule::new("RE_DIVISION_BY_ZERO", Topic::Runtime, DefectKind::DivisionByZero)
            .when(95, RE, matches(r"/\s*0"))
            .explain(
                High,
                "Division by zero causes runtime crash.",
                "Check denominator before division.",
            )
            .topics(["Math Safety"])
            .problems(["Evaluate Expression"]),
        Rule::new("RE_RECURSION_NO_RETURN", Topic::Runtime, DefectKind::MissingBaseCase)
            .when(95, RE, all([signal(Signal::Recursion), absent("return")]))
            .explain(
                High,
                "Recursive function missing return statement.",
                "Ensure recursion returns value properly.",
            )
            .topics(["Recursion Control"])
            .problems(["Tree Traversal"]),
        Rule::new("RE_STACK_EMPTY_POP", Topic::Runtime, DefectKind::EmptyAccess)
            .when(95, RE, all([matches("stack"), matches(r"pop\(\)"), absent(r"empty\(\)")]))
            .explain(
                High,
                "Stack pop without checking empty state.",
                "Check stack.empty() before pop.",
            )
            .topics(["Stack Safety"])
            .problems(["Min Stack"]),
        Rule::new("RE_QUEUE_EMPTY_ACCESS", Topic::Runtime, DefectKind::EmptyAccess)
            .when(
                95,
                RE,
                all([matches("queue"), matches(r"front\(\)|pop\(\)"), absent(r"empty\(\)")]),
            )
            .explain(High, "Queue accessed while empty.", "Check queue.empty() before access.")
            .topics(["Queue Safety"])
            .problems(["Implement Queue"]),
        Rule::new("RE_NULL_POINTER", Topic::Runtime, DefectKind::NullPointer)
            .when(95, RE, all([matches("NULL|nullptr"), matches(r"\*")]))
            .explain(
                High,
                "Dereferencing a null pointer causes runtime crash.",
                "Ensure pointer is initialized.",
            )
            .complexity("N/A", "N/A")
            .topics(["Pointers"])
            .problems(["Linked List Basics"]),
        Rule::new("RE_STACK_TOP_AFTER_POP", Topic::Runtime, DefectKind::EmptyAccess)
            .when(90, RE, matches(r"pop\(\)\s*;\s*.*top\(\)"))
            .explain(
                High,
                "Accessing stack top after popping last element.",
                "Check stack empty after pop.",
            )
            .topics(["Stack Safety"])
            .problems(["Min Stack"]),
        Rule::new("RE_EMPTY_CONTAINER_ACCESS", Topic::Runtime, DefectKind::EmptyAccess)
            .when(90, RE, all([matches(r"vector<.*>\s+\w+;"), matches(r"\[\s*0\s*\]")]))
            .explain(
                High,
                "Accessing element from empty container.",
                "Check container size before access.",
            )
            .topics(["Defensive Programming"])
            .problems(["Min Stack"]),
    ]
}
