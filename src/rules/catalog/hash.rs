use super::{MULTI_TEST, RE, TLE, WA};
use crate::core::Confidence::{High, Low, Medium};
use crate::rules::predicate::{absent, all, matches, signal, Signal};
use crate::rules::{DefectKind, Rule, Topic};

pub fn rules() -> Vec<Rule> {
    vec![
        Rule::new("HASH_ACCESS_WITHOUT_CHECK", Topic::Hash, DefectKind::WrongKey)
            .when(
                95,
                RE,
                all([
                    matches("map|unordered_map|hash"),
                    matches(r"\[\s*\w+\s*\]"),
                    absent("find|count"),
                ]),
            )
            .explain(
                High,
                "Hash map accessed without checking key existence.",
                "Check key existence using find() or count() before access.",
            )
            .complexity("N/A", "N/A")
            .topics(["HashMap Safety"])
            .problems(["Two Sum"]),
        Rule::new("HASH_IN_NESTED_LOOP", Topic::Hash, DefectKind::RedundantWork)
            .when(
                90,
                TLE,
                all([signal(Signal::NestedLoop), matches("map|unordered_map")]),
            )
            .explain(
                High,
                "Hash operations inside nested loops increase time complexity.",
                "Reduce nested operations or precompute hash values.",
            )
            .complexity("O(n²)", "O(n)")
            .topics(["Hash Optimization"])
            .problems(["Subarray Sum Equals K"]),
        Rule::new("HASH_WRONG_FREQUENCY", Topic::Hash, DefectKind::WrongTransition)
            .when(85, WA, all([matches("map|unordered_map"), matches(r"\+\+|--")]))
            .explain(
                Medium,
                "Incorrect frequency update logic.",
                "Verify increment/decrement logic.",
            )
            .topics(["Hashing", "Frequency Hashing"])
            .problems(["Valid Anagram"]),
        Rule::new("HASH_WRONG_MAP_TYPE", Topic::Hash, DefectKind::WrongApproach)
            .when(
                80,
                WA,
                all([matches("unordered_map"), matches("(?i)sorted|increasing|decreasing")]),
            )
            .explain(
                Low,
                "unordered_map used where order matters.",
                "Use map or sort keys.",
            )
            .topics(["Map vs Unordered Map"])
            .problems(["Sort Characters by Frequency"]),
        Rule::new("HASH_WRONG_KEY", Topic::Hash, DefectKind::WrongKey)
            .when(80, WA, all([matches("map|unordered_map"), matches(r"i\s*\]")]))
            .explain(
                Medium,
                "Incorrect key used for hashing, leading to wrong mapping.",
                "Verify correct key selection for hash map.",
            )
            .topics(["Hashing"])
            .problems(["Group Anagrams"]),
        Rule::new("HASH_NOT_RESET", Topic::Hash, DefectKind::NotReset)
            .when(
                80,
                WA,
                all([matches(MULTI_TEST), matches("map|unordered_map"), absent("clear")]),
            )
            .explain(
                Low,
                "Hash map not cleared between test cases.",
                "Clear or reinitialize hash map inside test loop.",
            )
            .topics(["Multiple Test Cases"])
            .problems(["Frequency Count"]),
    ]
}
