//! User-authored rules from `[[rules.custom]]`.

use serde::{Deserialize, Serialize};

use crate::core::{Confidence, Error, ErrorType, Language, Result};
use crate::rules::predicate::{absent, all, language, matches, Predicate};
use crate::rules::{DefectKind, Rule, Topic};

/// One `[[rules.custom]]` table.
///
/// ```toml
/// [[rules.custom]]
/// id = "NO_FAST_IO"
/// priority = 80
/// error_type = "TLE"
/// language = "cpp"
/// pattern = "cin\\s*>>"
/// absent = "sync_with_stdio"
/// reason = "Unsynced iostreams are slow for large input."
/// fix = "Call ios::sync_with_stdio(false) once at startup."
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CustomRuleConfig {
    pub id: String,
    pub priority: u8,
    pub error_type: String,
    #[serde(default)]
    pub language: Option<String>,
    /// Regex that must match the submission.
    pub pattern: String,
    /// Regex that must not match the submission.
    #[serde(default)]
    pub absent: Option<String>,
    #[serde(default = "default_confidence")]
    pub confidence: String,
    pub reason: String,
    pub fix: String,
    #[serde(default)]
    pub suggested_topics: Vec<String>,
    #[serde(default)]
    pub similar_problems: Vec<String>,
}

fn default_confidence() -> String {
    "medium".to_string()
}

impl CustomRuleConfig {
    /// Convert to an authoring-form [`Rule`]. Patterns are compiled later,
    /// when the table is built.
    pub fn to_rule(&self) -> Result<Rule> {
        if self.priority > 100 {
            return Err(Error::Configuration(format!(
                "custom rule {} has priority {} (expected 0..=100)",
                self.id, self.priority
            )));
        }
        let error_type: ErrorType = self.error_type.parse().map_err(|e: Error| {
            Error::Configuration(format!("custom rule {}: {e}", self.id))
        })?;
        let confidence: Confidence = self.confidence.parse().map_err(|e: Error| {
            Error::Configuration(format!("custom rule {}: {e}", self.id))
        })?;

        let mut parts: Vec<Predicate> = vec![matches(&self.pattern)];
        if let Some(pattern) = &self.absent {
            parts.push(absent(pattern));
        }
        if let Some(name) = &self.language {
            parts.push(language(Language::from_name(name)));
        }

        Ok(Rule::new(self.id.as_str(), Topic::Custom, DefectKind::Custom)
            .when(self.priority, error_type, all(parts))
            .explain(confidence, self.reason.as_str(), self.fix.as_str())
            .topics(self.suggested_topics.iter().cloned())
            .problems(self.similar_problems.iter().cloned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CustomRuleConfig {
        CustomRuleConfig {
            id: "MY_RULE".to_string(),
            priority: 90,
            error_type: "tle".to_string(),
            language: Some("c++".to_string()),
            pattern: "cin".to_string(),
            absent: Some("sync_with_stdio".to_string()),
            confidence: "high".to_string(),
            reason: "slow input".to_string(),
            fix: "sync off".to_string(),
            suggested_topics: vec!["Fast IO".to_string()],
            similar_problems: vec![],
        }
    }

    #[test]
    fn test_custom_rule_converts() {
        let rule = sample().to_rule().unwrap();
        assert_eq!(rule.id, "MY_RULE");
        assert_eq!(rule.topic, Topic::Custom);
        assert_eq!(rule.clauses.len(), 1);
        assert_eq!(rule.clauses[0].priority, 90);
        assert_eq!(rule.clauses[0].error_type, ErrorType::TimeLimitExceeded);
        assert_eq!(rule.payload.confidence, Confidence::High);
        assert_eq!(rule.payload.suggested_topics, vec!["Fast IO".to_string()]);
    }

    #[test]
    fn test_unknown_error_type_is_configuration_error() {
        let mut config = sample();
        config.error_type = "CE".to_string();
        let err = config.to_rule().unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn test_priority_above_hundred_is_rejected() {
        let mut config = sample();
        config.priority = 150;
        assert!(config.to_rule().is_err());
    }
}
