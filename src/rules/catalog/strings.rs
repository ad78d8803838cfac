use super::WA;
use crate::core::Confidence::{High, Low, Medium};
use crate::rules::predicate::{absent, all, matches};
use crate::rules::{DefectKind, Rule, Topic};

pub fn rules() -> Vec<Rule> {
    vec![
        Rule::new("WA_CHAR_STRING_COMPARE", Topic::String, DefectKind::WrongComparator)
            .when(90, WA, all([matches("string"), matches(r#"==\s*"(?:[^"\\]|\\.)""#)]))
            .explain(
                High,
                "Character compared with string literal.",
                "Use single quotes for characters.",
            )
            .topics(["Strings"])
            .problems(["Valid Anagram"]),
        Rule::new("DP_STRING_MISSING_BASE", Topic::String, DefectKind::MissingBaseCase)
            .when(
                90,
                WA,
                all([
                    matches("string"),
                    matches(r"\bdp\[\s*i\s*\]\[\s*j\s*\]"),
                    absent(r"dp\[\s*0\s*\]\[\s*\w+\s*\]"),
                ]),
            )
            .explain(
                High,
                "String DP requires initialization of first row or column.",
                "Initialize dp[0][j] and dp[i][0] appropriately.",
            )
            .topics(["String DP"])
            .problems(["LCS", "Edit Distance"]),
        Rule::new("WA_CASE_SENSITIVITY", Topic::String, DefectKind::MissingEdgeCase)
            .when(85, WA, all([matches("string"), absent("tolower|toupper")]))
            .explain(Low, "Case sensitivity not handled properly.", "Normalize string case.")
            .topics(["String Normalization"])
            .problems(["Valid Palindrome"]),
        Rule::new("WA_SUBSTRING_BOUNDARY", Topic::String, DefectKind::OffByOne)
            .when(80, WA, matches("substr|substring"))
            .explain(Medium, "Incorrect substring boundaries.", "Verify substring indices.")
            .topics(["Substring"])
            .problems(["Longest Palindromic Substring"]),
    ]
}
