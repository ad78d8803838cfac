use serde::{Deserialize, Serialize};

use super::custom::CustomRuleConfig;

/// Root configuration structure for failmap
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FailmapConfig {
    /// Rule table adjustments
    #[serde(default)]
    pub rules: Option<RulesConfig>,

    /// Output configuration
    #[serde(default)]
    pub output: Option<OutputConfig>,
}

impl FailmapConfig {
    /// Ids removed from the standard table.
    pub fn disabled_rules(&self) -> &[String] {
        self.rules
            .as_ref()
            .map(|rules| rules.disabled.as_slice())
            .unwrap_or_default()
    }

    pub fn custom_rules(&self) -> &[CustomRuleConfig] {
        self.rules
            .as_ref()
            .map(|rules| rules.custom.as_slice())
            .unwrap_or_default()
    }

    /// Output format name from `[output] format`, if set.
    pub fn output_format(&self) -> Option<&str> {
        self.output.as_ref().and_then(|output| output.format.as_deref())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct RulesConfig {
    #[serde(default)]
    pub disabled: Vec<String>,

    #[serde(default)]
    pub custom: Vec<CustomRuleConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OutputConfig {
    /// `terminal`, `json` or `markdown`
    pub format: Option<String>,
}
