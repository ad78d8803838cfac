mod core;
mod custom;
mod loader;

pub use core::{FailmapConfig, OutputConfig, RulesConfig};
pub use custom::CustomRuleConfig;
pub use loader::{
    directory_ancestors, load_config, load_config_from, load_config_from_path,
    parse_and_validate_config, CONFIG_FILE_NAME,
};

use crate::core::Result;
use crate::rules::{catalog, RuleTable};

/// Standard catalog plus custom rules, minus disabled ids.
///
/// Custom rules come after the standard ones, so on equal priority a
/// standard rule ranks first.
pub fn build_rule_table(config: &FailmapConfig) -> Result<RuleTable> {
    let custom = config
        .custom_rules()
        .iter()
        .map(CustomRuleConfig::to_rule)
        .collect::<Result<Vec<_>>>()?;

    RuleTable::builder()
        .with_rules(catalog::standard_rules())
        .with_rules(custom)
        .disable(config.disabled_rules().iter().cloned())
        .build()
}

/// Template written by `failmap init`.
pub const DEFAULT_CONFIG: &str = r#"# failmap configuration

[rules]
# Rule ids to remove from the standard catalog.
disabled = []

# Additional rules. `pattern` must match the submission; `absent`, when set,
# must not. Priorities range over 0..=100.
#
# [[rules.custom]]
# id = "NO_FAST_IO"
# priority = 80
# error_type = "TLE"
# language = "cpp"
# pattern = "cin\\s*>>"
# absent = "sync_with_stdio"
# confidence = "medium"
# reason = "Unsynced iostreams are slow for large input."
# fix = "Call ios::sync_with_stdio(false) once at startup."
# suggested_topics = ["Fast IO"]
# similar_problems = []

[output]
# terminal | json | markdown
format = "terminal"
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ErrorType;
    use indoc::indoc;

    #[test]
    fn test_default_template_parses() {
        let config = parse_and_validate_config(DEFAULT_CONFIG).unwrap();
        assert!(config.disabled_rules().is_empty());
        assert!(config.custom_rules().is_empty());
        assert_eq!(config.output_format(), Some("terminal"));
    }

    #[test]
    fn test_empty_config_is_default() {
        let config = parse_and_validate_config("").unwrap();
        assert_eq!(config, FailmapConfig::default());
        assert_eq!(config.output_format(), None);
    }

    #[test]
    fn test_invalid_toml_is_rejected() {
        let err = parse_and_validate_config("invalid toml [[ content").unwrap_err();
        assert!(err.contains("Failed to parse"));
    }

    #[test]
    fn test_unknown_output_format_is_rejected() {
        let err = parse_and_validate_config("[output]\nformat = \"xml\"").unwrap_err();
        assert!(err.contains("xml"));
    }

    #[test]
    fn test_build_rule_table_applies_disabled_and_custom() {
        let config = parse_and_validate_config(indoc! {r#"
            [rules]
            disabled = ["STACK_EMPTY_ACCESS"]

            [[rules.custom]]
            id = "LOCAL_RULE"
            priority = 85
            error_type = "WA"
            pattern = "magic"
            reason = "Magic constant."
            fix = "Name it."
        "#})
        .unwrap();

        let standard = RuleTable::standard().unwrap();
        let table = build_rule_table(&config).unwrap();
        assert_eq!(table.len(), standard.len());
        assert!(table.get("STACK_EMPTY_ACCESS").is_none());
        let custom = table.get("LOCAL_RULE").unwrap();
        assert!(custom.applies_to(ErrorType::WrongAnswer));
    }

    #[test]
    fn test_bad_custom_pattern_fails_table_build() {
        let config = parse_and_validate_config(indoc! {r#"
            [[rules.custom]]
            id = "BROKEN"
            priority = 80
            error_type = "RE"
            pattern = "(unclosed"
            reason = "r"
            fix = "f"
        "#})
        .unwrap();
        assert!(build_rule_table(&config).is_err());
    }

    #[test]
    fn test_directory_ancestors_is_bounded() {
        let dirs: Vec<_> = directory_ancestors("/a/b/c/d".into(), 2).collect();
        assert_eq!(dirs.len(), 2);
        assert_eq!(dirs[1], std::path::PathBuf::from("/a/b/c"));
    }
}
