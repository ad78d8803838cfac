use super::{TLE, WA};
use crate::core::Confidence::{High, Medium};
use crate::rules::predicate::{absent, all, matches, signal, Signal};
use crate::rules::{DefectKind, Rule, Topic};

const DP_I: &str = r"\bdp\[\s*i\s*\]";
const DP_PREVIOUS: &str = r"\bdp\[\s*i\s*-\s*1\s*\]";
const TREE_WORDS: &str = "tree|node|left|right";
const GRAPH_WORDS: &str = "graph|adj";
const DP_U: &str = r"\bdp\[\s*u\s*\]";
const DP_START: &str = r"dp\[\s*start\s*\]";

pub fn rules() -> Vec<Rule> {
    let mut rules = base_case_rules();
    rules.extend(transition_rules());
    rules.extend(structured_rules());
    rules
}

fn base_case_rules() -> Vec<Rule> {
    vec![
        Rule::new("DP_BASE_NOT_INITIALIZED", Topic::Dp, DefectKind::MissingBaseCase)
            .when(100, WA, all([matches(DP_I), absent(r"dp\[\s*0\s*\]")]))
            .explain(
                High,
                "DP base case dp[0] not initialized.",
                "Initialize dp[0] before transitions.",
            )
            .topics(["DP Base Case", "Initialization"])
            .problems(["Climbing Stairs"]),
        Rule::new("DP_MISSING_RECURSIVE_BASE", Topic::Dp, DefectKind::MissingBaseCase)
            .when(
                95,
                WA,
                all([signal(Signal::Recursion), absent(r"n\s*==\s*0|n\s*<=\s*1")]),
            )
            .explain(
                High,
                "Recursive DP missing base case.",
                "Handle n == 0 and n == 1 explicitly.",
            )
            .topics(["DP Base Case"])
            .problems(["Fibonacci"]),
        Rule::new("DP_MISSING_BASE_CASE", Topic::Dp, DefectKind::MissingBaseCase)
            .when(
                95,
                WA,
                all([signal(Signal::Recursion), absent(r"n\s*==\s*0"), absent(r"n\s*<=\s*1")]),
            )
            .explain(
                High,
                "Recursive DP solution lacks a proper base case, causing incorrect results for small inputs.",
                "Define base cases such as n == 0 and n == 1 explicitly.",
            )
            .complexity("Correct but logically flawed", "Correct")
            .topics(["Dynamic Programming", "Base Cases"])
            .problems(["Fibonacci", "Climbing Stairs"]),
        Rule::new("DP_2D_BASE_MISSING", Topic::Dp, DefectKind::MissingBaseCase)
            .when(
                95,
                WA,
                all([
                    matches(r"\bdp\[\s*i\s*\]\[\s*j\s*\]"),
                    absent(r"dp\[\s*0\s*\]\[\s*\w+\s*\]|dp\[\s*\w+\s*\]\[\s*0\s*\]"),
                ]),
            )
            .explain(
                High,
                "2D DP missing first row or column initialization.",
                "Initialize dp[0][j] and dp[i][0].",
            )
            .topics(["2D DP"])
            .problems(["LCS", "Edit Distance"]),
        Rule::new("DP_COUNT_BASE_MISSING", Topic::Dp, DefectKind::MissingBaseCase)
            .when(
                95,
                WA,
                all([matches("coin|ways|count"), matches(DP_I), absent(r"dp\[\s*0\s*\]\s*=\s*1")]),
            )
            .explain(High, "Counting DP missing dp[0] = 1.", "Initialize dp[0] = 1.")
            .topics(["Counting DP"])
            .problems(["Coin Change"]),
        Rule::new("DP_BOOLEAN_BASE_MISSING", Topic::Dp, DefectKind::MissingBaseCase)
            .when(
                95,
                WA,
                all([
                    matches("(?i)subset|partition|knapsack"),
                    matches(DP_I),
                    absent(r"dp\[\s*0\s*\]\s*=\s*true"),
                ]),
            )
            .explain(High, "Boolean DP missing dp[0] = true.", "Initialize dp[0] = true.")
            .topics(["Subset DP"])
            .problems(["Partition Equal Subset Sum"]),
        Rule::new("DP_COUNT_MISSING_BASE", Topic::Dp, DefectKind::MissingBaseCase)
            .when(
                90,
                WA,
                all([matches("coin|ways"), matches(DP_I), absent(r"dp\[\s*0\s*\]\s*=\s*1")]),
            )
            .explain(
                High,
                "Counting DP requires dp[0] = 1 to represent one valid way.",
                "Initialize dp[0] = 1.",
            )
            .topics(["Counting DP"])
            .problems(["Coin Change", "Dice Combinations"]),
        Rule::new("DP_INTERVAL_BASE_MISSING", Topic::Dp, DefectKind::MissingBaseCase)
            .when(
                90,
                WA,
                all([matches(r"\bdp\[\s*l\s*\]\[\s*r\s*\]"), absent(r"l\s*==\s*r")]),
            )
            .explain(
                Medium,
                "Interval DP missing base case for l == r.",
                "Handle single-length interval explicitly.",
            )
            .topics(["Interval DP"])
            .problems(["Matrix Chain Multiplication"]),
        Rule::new("DP_INCOMPLETE_BASE_CASE", Topic::Dp, DefectKind::MissingBaseCase)
            .when(
                85,
                WA,
                all([signal(Signal::Recursion), matches(r"n\s*==\s*1"), absent(r"n\s*==\s*0")]),
            )
            .explain(
                Medium,
                "Base case handles n == 1 but misses n == 0, causing failures for edge cases.",
                "Add handling for n == 0 in the base case.",
            )
            .topics(["Edge Cases", "Dynamic Programming"])
            .problems(["Climbing Stairs"]),
        Rule::new("DP_SUBSET_MISSING_BASE", Topic::Dp, DefectKind::MissingBaseCase)
            .when(85, WA, all([matches(DP_I), absent(r"dp\[\s*0\s*\]\s*=\s*true")]))
            .explain(
                High,
                "Subset DP missing base case dp[0] = true.",
                "Initialize dp[0] = true to represent empty subset.",
            )
            .topics(["Subset DP"])
            .problems(["Partition Equal Subset Sum"]),
        Rule::new("DP_INTERVAL_MISSING_BASE", Topic::Dp, DefectKind::MissingBaseCase)
            .when(
                85,
                WA,
                all([matches(r"\bdp\[\s*l\s*\]\[\s*r\s*\]"), absent(r"l\s*==\s*r")]),
            )
            .explain(
                Medium,
                "Interval DP missing base case for single-length intervals.",
                "Handle cases where l == r explicitly.",
            )
            .topics(["Interval DP"])
            .problems(["Matrix Chain Multiplication"]),
    ]
}

fn transition_rules() -> Vec<Rule> {
    vec![
        Rule::new("DP_WRONG_TRANSITION", Topic::Dp, DefectKind::WrongTransition)
            .when(95, WA, all([matches(r"\bdp\[\s*i\s*\]\s*="), absent(DP_PREVIOUS)]))
            .explain(
                High,
                "DP transition does not use previous state.",
                "Verify recurrence relation.",
            )
            .topics(["DP Transition"])
            .problems(["House Robber"]),
        Rule::new("DP_GREEDY_LIKE_TRANSITION", Topic::Dp, DefectKind::WrongTransition)
            .when(90, WA, all([matches(r"\bmin\(|\bmax\("), absent(DP_PREVIOUS)]))
            .explain(
                Medium,
                "DP transition behaves like greedy.",
                "Ensure all states are considered.",
            )
            .topics(["DP vs Greedy"])
            .problems(["Burst Balloons"]),
        Rule::new("DP_NO_MEMOIZATION", Topic::Dp, DefectKind::RedundantWork)
            .when(85, TLE, signal(Signal::Recursion))
            .explain(
                Medium,
                "DP recursion without memoization.",
                "Use memoization or bottom-up DP.",
            )
            .topics(["Memoization"])
            .problems(["Fibonacci"]),
    ]
}

fn structured_rules() -> Vec<Rule> {
    vec![
        Rule::new("DP_TREE_BASE_MISSING", Topic::Dp, DefectKind::MissingBaseCase)
            .when(
                95,
                WA,
                all([matches(TREE_WORDS), signal(Signal::Recursion), absent(super::NULL_ROOT_GUARD)]),
            )
            .explain(
                High,
                "Tree DP missing null node base case.",
                "Add base case for null node.",
            )
            .topics(["Tree DP"])
            .problems(["Binary Tree Maximum Path Sum"]),
        Rule::new("DP_TREE_MISSING_BASE", Topic::Dp, DefectKind::MissingBaseCase)
            .when(
                90,
                WA,
                all([matches(TREE_WORDS), signal(Signal::Recursion), absent(super::NULL_ROOT_GUARD)]),
            )
            .explain(
                High,
                "Tree DP missing base case for null or leaf nodes.",
                "Add base case handling for null nodes.",
            )
            .topics(["Tree DP"])
            .problems(["Binary Tree Maximum Path Sum"]),
        Rule::new("DP_GRAPH_BASE_MISSING", Topic::Dp, DefectKind::MissingBaseCase)
            .when(90, WA, all([matches(GRAPH_WORDS), matches(DP_U), absent(DP_START)]))
            .explain(
                Medium,
                "Graph DP missing starting node initialization.",
                "Initialize dp[start].",
            )
            .topics(["Graph DP"])
            .problems(["Longest Path in DAG"]),
        Rule::new("DP_GRAPH_MISSING_BASE", Topic::Dp, DefectKind::MissingBaseCase)
            .when(85, WA, all([matches(GRAPH_WORDS), matches(DP_U), absent(DP_START)]))
            .explain(
                Medium,
                "Graph DP missing base initialization for starting node.",
                "Initialize dp[start] before traversal.",
            )
            .topics(["Graph DP"])
            .problems(["Longest Path in DAG"]),
    ]
}
