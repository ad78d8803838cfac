use super::{OVERFLOW, RE, WA};
use crate::core::Confidence::{High, Low, Medium};
use crate::rules::predicate::{absent, all, matches};
use crate::rules::{DefectKind, Rule, Topic};

pub fn rules() -> Vec<Rule> {
    vec![
        Rule::new("GREEDY_INSTEAD_OF_DP", Topic::Greedy, DefectKind::WrongApproach)
            .when(
                100,
                WA,
                all([
                    matches("(?i)knapsack|subset|partition|coin|decode"),
                    absent("dp|memo|tabulation"),
                ]),
            )
            .when(
                90,
                WA,
                all([
                    matches("greedy|pick|max|min"),
                    absent("dp|memo"),
                    matches("(?i)subset|knapsack|partition|coin"),
                ]),
            )
            .explain(
                High,
                "Greedy approach used where DP is required.",
                "Reformulate using Dynamic Programming.",
            )
            .topics(["Greedy vs DP"])
            .problems(["0/1 Knapsack", "Decode Ways", "Partition Equal Subset Sum"]),
        Rule::new("GREEDY_INFINITE_LOOP", Topic::Greedy, DefectKind::InfiniteLoop)
            .when(100, RE, all([matches("while"), absent(r"i\+\+|i--|j\+\+|j--")]))
            .when(95, RE, all([matches("while"), absent(r"i\+\+|i--")]))
            .explain(
                High,
                "Greedy loop does not converge.",
                "Ensure loop variables move toward termination.",
            )
            .topics(["Loop Control"])
            .problems(["Gas Station"]),
        Rule::new("GREEDY_LOCAL_OPTIMUM_TRAP", Topic::Greedy, DefectKind::WrongApproach)
            .when(95, WA, all([matches(r"(max|min)\s*\("), absent("backtrack|dp")]))
            .explain(
                High,
                "Local greedy choice does not lead to global optimum.",
                "Use DP or prove greedy correctness.",
            )
            .topics(["Greedy Proof"])
            .problems(["Burst Balloons", "Stock Buy Sell"]),
        Rule::new("GREEDY_MISSING_TIE_BREAKER", Topic::Greedy, DefectKind::WrongComparator)
            .when(90, WA, all([matches("sort"), absent("if.*==")]))
            .explain(
                Medium,
                "Sorting greedy logic missing tie-breaker.",
                "Add secondary sort condition.",
            )
            .topics(["Sorting"])
            .problems(["Meeting Rooms", "Interval Scheduling"]),
        Rule::new("GREEDY_WRONG_APPROACH", Topic::Greedy, DefectKind::WrongApproach)
            .when(
                90,
                WA,
                all([matches("greedy|pick|max|min"), matches("(?i)knapsack|subset|partition")]),
            )
            .explain(High, "Greedy used where DP is required.", "Use DP solution.")
            .topics(["Greedy vs DP"])
            .problems(["0/1 Knapsack"]),
        Rule::new("GREEDY_EDGE_CASE_MISSING", Topic::Greedy, DefectKind::MissingEdgeCase)
            .when(85, WA, all([matches("sort"), absent(r"n\s*==\s*0|n\s*==\s*1")]))
            .explain(
                Low,
                "Greedy fails for small edge cases.",
                "Handle n == 0 and n == 1 explicitly.",
            )
            .topics(["Edge Cases"])
            .problems(["Jump Game", "Gas Station"]),
        Rule::new("GREEDY_WRONG_COMPARATOR", Topic::Greedy, DefectKind::WrongComparator)
            .when(85, WA, all([matches(">=|<="), matches("sort|priority_queue")]))
            .explain(
                Medium,
                "Incorrect comparator used in greedy selection.",
                "Re-evaluate comparator logic.",
            )
            .topics(["Comparators"])
            .problems(["Merge Intervals"]),
        Rule::new("GREEDY_NON_MONOTONIC", Topic::Greedy, DefectKind::WrongApproach)
            .when(80, WA, all([matches("greedy"), matches("backtrack|revert")]))
            .explain(
                Medium,
                "Greedy applied to non-monotonic problem.",
                "Use DP or backtracking.",
            )
            .topics(["Greedy vs Backtracking"])
            .problems(["Word Break", "Decode Ways"]),
        Rule::new("GREEDY_WRONG_COMPARISON", Topic::Greedy, DefectKind::WrongComparator)
            .when(80, WA, all([matches("sort"), matches(">=|<=")]))
            .explain(
                Low,
                "Incorrect comparison operator in greedy selection.",
                "Re-evaluate comparison logic.",
            )
            .topics(["Comparators"])
            .problems(["Interval Merge"]),
        Rule::new("GREEDY_UNJUSTIFIED", Topic::Greedy, DefectKind::WrongApproach)
            .when(75, WA, all([matches("sort|pick|choose"), absent("proof|correct|why")]))
            .explain(
                Low,
                "Greedy choice made without validating correctness.",
                "Provide proof or test greedy logic against counterexamples.",
            )
            .topics(["Greedy Proof"])
            .problems(["Fractional Knapsack"]),
        Rule::new("GREEDY_OVERFLOW", Topic::Greedy, DefectKind::Overflow)
            .when(75, OVERFLOW, matches(r"(sum|profit)\s*\+="))
            .explain(
                Medium,
                "Greedy accumulation may overflow integer.",
                "Use long long or modulo.",
            )
            .topics(["Overflow Prevention"])
            .problems(["Maximum Profit"]),
    ]
}
