use super::TLE;
use crate::core::Confidence::{High, Medium};
use crate::rules::predicate::{absent, all, large_input, matches, signal, Signal};
use crate::rules::{DefectKind, Rule, Topic};

pub fn rules() -> Vec<Rule> {
    vec![
        Rule::new("TLE_NESTED_LOOP", Topic::Performance, DefectKind::RedundantWork)
            .when(100, TLE, all([signal(Signal::NestedLoop), large_input()]))
            .explain(
                High,
                "Nested loops cause O(n²) time complexity, which exceeds the given constraints.",
                "Optimize using HashMap, Prefix Sum, Two Pointers, or Sliding Window.",
            )
            .complexity("O(n²)", "O(n) or O(n log n)")
            .topics(["HashMap", "Prefix Sum", "Sliding Window"])
            .problems(["Subarray Sum Equals K", "Two Sum", "Longest Zero Sum Subarray"]),
        Rule::new("TLE_RECURSION", Topic::Performance, DefectKind::RedundantWork)
            .when(95, TLE, signal(Signal::Recursion))
            .explain(
                Medium,
                "Recursive solution recomputes overlapping subproblems.",
                "Use memoization or bottom-up Dynamic Programming.",
            )
            .complexity("Exponential", "O(n)")
            .topics(["Dynamic Programming", "Memoization"])
            .problems(["Climbing Stairs", "House Robber", "Fibonacci DP"]),
        Rule::new("TLE_SORT_IN_LOOP", Topic::Performance, DefectKind::RedundantWork)
            .when(90, TLE, all([signal(Signal::NestedLoop), matches("sort")]))
            .explain(
                High,
                "Sorting inside a loop increases time complexity significantly.",
                "Move sorting outside the loop or use an optimized data structure.",
            )
            .complexity("O(n² log n)", "O(n log n)")
            .topics(["Sorting", "Optimization"])
            .problems(["Merge Intervals", "K Closest Points"]),
        Rule::new("TLE_MAP_IN_LOOP", Topic::Performance, DefectKind::RedundantWork)
            .when(90, TLE, all([signal(Signal::NestedLoop), matches("map|unordered_map")]))
            .explain(
                High,
                "Map operations inside loops add logarithmic overhead.",
                "Use arrays or reduce nested operations.",
            )
            .complexity("O(n² log n)", "O(n)")
            .topics(["Hashing", "Optimization"])
            .problems(["Frequency Count", "Group Anagrams"]),
        Rule::new("TLE_REPEATED_SUM", Topic::Performance, DefectKind::RedundantWork)
            .when(85, TLE, all([signal(Signal::NestedLoop), matches(r"sum\s*\+=")]))
            .explain(
                Medium,
                "Repeated summation inside loops causes redundant computation.",
                "Precompute prefix sums.",
            )
            .complexity("O(n²)", "O(n)")
            .topics(["Prefix Sum"])
            .problems(["Range Sum Query"]),
        Rule::new("TLE_SLOW_IO", Topic::Performance, DefectKind::SlowIo)
            .when(75, TLE, all([matches("cin"), absent("sync_with_stdio")]))
            .explain(
                Medium,
                "Slow input/output operations detected.",
                "Use fast I/O techniques.",
            )
            .complexity("O(n)", "O(n)")
            .topics(["Fast I/O"])
            .problems(["Fast Input Output"]),
    ]
}
