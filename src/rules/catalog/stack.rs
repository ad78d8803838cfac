use super::{MULTI_TEST, RE, WA};
use crate::core::Confidence::{High, Low, Medium};
use crate::rules::predicate::{absent, all, matches, signal, Signal};
use crate::rules::{DefectKind, Rule, Topic};

pub fn rules() -> Vec<Rule> {
    vec![
        Rule::new("STACK_EMPTY_ACCESS", Topic::Stack, DefectKind::EmptyAccess)
            .when(
                100,
                RE,
                all([matches("stack"), matches(r"pop\(\)|top\(\)"), absent(r"empty\(\)")]),
            )
            .explain(
                High,
                "Stack accessed without checking empty state.",
                "Check stack.empty() before pop() or top().",
            )
            .topics(["Stack Safety"])
            .problems(["Min Stack", "Valid Parentheses"]),
        Rule::new("STACK_RECURSION_NO_BASE", Topic::Stack, DefectKind::MissingBaseCase)
            .when(100, RE, all([signal(Signal::Recursion), absent("return")]))
            .explain(
                High,
                "Recursive stack logic lacks terminating return.",
                "Add proper base case and return.",
            )
            .topics(["Recursion", "Stack"])
            .problems(["Reverse Stack"]),
        Rule::new("STACK_TOP_AFTER_POP", Topic::Stack, DefectKind::EmptyAccess)
            .when(95, RE, matches(r"pop\(\)\s*;.*top\(\)"))
            .explain(
                High,
                "Accessing top after popping last element.",
                "Check empty state after pop().",
            )
            .topics(["Stack Safety"])
            .problems(["Min Stack"]),
        Rule::new("STACK_OVERFLOW", Topic::Stack, DefectKind::UnboundedRecursion)
            .when(95, RE, signal(Signal::Recursion))
            .explain(
                High,
                "Deep recursion causes stack overflow.",
                "Convert recursion to iterative approach.",
            )
            .topics(["Recursion"])
            .problems(["DFS Traversal"]),
        Rule::new("STACK_WRONG_POP_CONDITION", Topic::Stack, DefectKind::WrongComparator)
            .when(95, WA, all([matches("stack"), matches(">=|<="), matches("while")]))
            .when(90, WA, all([matches("stack"), matches(">=|<=")]))
            .explain(
                High,
                "Incorrect comparison in monotonic stack pop condition.",
                "Re-evaluate >= / <= condition based on problem.",
            )
            .topics(["Monotonic Stack"])
            .problems(["Next Greater Element", "Daily Temperatures"]),
        Rule::new("STACK_UNBALANCED_OPERATIONS", Topic::Stack, DefectKind::ControlFlow)
            .when(90, WA, all([matches("stack"), matches(r"pop\(\)"), absent(r"push\(\)")]))
            .when(85, WA, all([matches(r"pop\(\)"), absent(r"push\(\)")]))
            .explain(
                Medium,
                "Stack pop operations not balanced with push.",
                "Ensure every pop has a corresponding push.",
            )
            .topics(["Stack Operations"])
            .problems(["Remove K Digits"]),
        Rule::new("STACK_MONOTONIC_LOOP_MISSING", Topic::Stack, DefectKind::WrongApproach)
            .when(
                85,
                WA,
                all([
                    matches("stack"),
                    matches("(?i)monotonic|next greater|prev greater"),
                    absent("while"),
                ]),
            )
            .explain(
                Medium,
                "Monotonic stack requires while-loop popping.",
                "Use while-loop to pop invalid elements.",
            )
            .topics(["Monotonic Stack"])
            .problems(["Daily Temperatures"]),
        Rule::new("STACK_WRONG_POP_ORDER", Topic::Stack, DefectKind::WrongComparator)
            .when(85, WA, all([matches("stack"), matches(">=|<="), matches("while")]))
            .explain(
                Medium,
                "Incorrect comparison while popping elements from stack.",
                "Recheck monotonic stack conditions.",
            )
            .topics(["Monotonic Stack"])
            .problems(["Next Greater Element"]),
        Rule::new("STACK_NOT_RESET", Topic::Stack, DefectKind::NotReset)
            .when(80, WA, all([matches(MULTI_TEST), matches("stack"), absent(r"clear\(\)")]))
            .when(75, WA, all([matches(MULTI_TEST), matches("stack"), absent("clear")]))
            .explain(
                Low,
                "Stack not cleared between test cases.",
                "Clear or reinitialize stack for each test case.",
            )
            .topics(["Multiple Test Cases"])
            .problems(["Largest Rectangle Histogram"]),
        Rule::new("STACK_NOT_INITIALIZED", Topic::Stack, DefectKind::WrongInitialization)
            .when(75, WA, all([matches("stack"), absent(r"push\(")]))
            .explain(
                Low,
                "Stack used without pushing initial elements.",
                "Push initial values before stack operations.",
            )
            .topics(["Initialization"])
            .problems(["Daily Temperatures"]),
    ]
}
