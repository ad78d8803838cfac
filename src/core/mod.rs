//! Core request/result types shared by every stage of the analyzer.

pub mod errors;

use crate::complexity::{SpaceComplexity, TimeComplexity};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use errors::{Error, Result};

/// Verdict reported by the judge for the submission under analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ErrorType {
    #[serde(rename = "TLE")]
    TimeLimitExceeded,
    #[serde(rename = "WA")]
    WrongAnswer,
    #[serde(rename = "RE")]
    RuntimeError,
    #[serde(rename = "Overflow")]
    Overflow,
    #[serde(rename = "MLE")]
    MemoryLimitExceeded,
}

impl ErrorType {
    pub const ALL: [ErrorType; 5] = [
        ErrorType::TimeLimitExceeded,
        ErrorType::WrongAnswer,
        ErrorType::RuntimeError,
        ErrorType::Overflow,
        ErrorType::MemoryLimitExceeded,
    ];

    /// Short code used on the wire (`TLE`, `WA`, ...).
    pub fn code(&self) -> &'static str {
        match self {
            ErrorType::TimeLimitExceeded => "TLE",
            ErrorType::WrongAnswer => "WA",
            ErrorType::RuntimeError => "RE",
            ErrorType::Overflow => "Overflow",
            ErrorType::MemoryLimitExceeded => "MLE",
        }
    }

    /// Severity is a function of the verdict alone, never of rule confidence.
    pub fn severity(&self) -> Severity {
        match self {
            ErrorType::RuntimeError => Severity::Critical,
            ErrorType::TimeLimitExceeded => Severity::High,
            ErrorType::WrongAnswer => Severity::Medium,
            ErrorType::Overflow | ErrorType::MemoryLimitExceeded => Severity::Low,
        }
    }
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for ErrorType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        static ALIASES: &[(&[&str], ErrorType)] = &[
            (
                &["tle", "time-limit-exceeded", "time_limit_exceeded"],
                ErrorType::TimeLimitExceeded,
            ),
            (&["wa", "wrong-answer", "wrong_answer"], ErrorType::WrongAnswer),
            (&["re", "runtime-error", "runtime_error"], ErrorType::RuntimeError),
            (&["overflow", "integer-overflow"], ErrorType::Overflow),
            (
                &["mle", "memory-limit-exceeded", "memory_limit_exceeded"],
                ErrorType::MemoryLimitExceeded,
            ),
        ];

        let needle = s.trim().to_ascii_lowercase();
        ALIASES
            .iter()
            .find(|(names, _)| names.contains(&needle.as_str()))
            .map(|(_, error_type)| *error_type)
            .ok_or_else(|| Error::Validation(format!("unrecognized error type '{}'", s.trim())))
    }
}

/// Source language of the submission. Unknown names collapse to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Cpp,
    C,
    Java,
    Python,
    JavaScript,
    TypeScript,
    #[default]
    Other,
}

// Accepts the same aliases as `from_name` ("c++", "py", "js", ...).
impl<'de> Deserialize<'de> for Language {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Self::from_name(&name))
    }
}

impl Language {
    pub fn from_extension(ext: &str) -> Self {
        static EXTENSION_MAP: &[(&[&str], Language)] = &[
            (&["cpp", "cc", "cxx", "hpp", "hh"], Language::Cpp),
            (&["c", "h"], Language::C),
            (&["java"], Language::Java),
            (&["py", "pyw"], Language::Python),
            (&["js", "mjs", "cjs"], Language::JavaScript),
            (&["ts", "mts"], Language::TypeScript),
        ];

        let ext = ext.to_ascii_lowercase();
        EXTENSION_MAP
            .iter()
            .find(|(exts, _)| exts.contains(&ext.as_str()))
            .map(|(_, lang)| *lang)
            .unwrap_or(Language::Other)
    }

    pub fn from_path(path: &std::path::Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_extension)
            .unwrap_or(Language::Other)
    }

    /// Lenient name lookup; never fails.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "cpp" | "c++" | "cxx" | "cplusplus" => Language::Cpp,
            "c" => Language::C,
            "java" => Language::Java,
            "python" | "py" | "python3" => Language::Python,
            "js" | "javascript" | "node" => Language::JavaScript,
            "ts" | "typescript" => Language::TypeScript,
            _ => Language::Other,
        }
    }
}

impl FromStr for Language {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::from_name(s))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Language::Cpp => "cpp",
            Language::C => "c",
            Language::Java => "java",
            Language::Python => "python",
            Language::JavaScript => "javascript",
            Language::TypeScript => "typescript",
            Language::Other => "other",
        };
        f.write_str(name)
    }
}

/// Authoring-time estimate of how likely a rule match is a true positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl FromStr for Confidence {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Confidence::Low),
            "medium" => Ok(Confidence::Medium),
            "high" => Ok(Confidence::High),
            other => Err(Error::Validation(format!("unrecognized confidence '{other}'"))),
        }
    }
}

/// Output-time classification derived from the verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Immutable input to one engine invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    pub code: String,
    #[serde(default)]
    pub language: Language,
    pub error_type: ErrorType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraints: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
}

impl AnalysisRequest {
    /// Build a validated request. Empty (or whitespace-only) code is rejected.
    pub fn new(code: impl Into<String>, language: Language, error_type: ErrorType) -> Result<Self> {
        let request = Self {
            code: code.into(),
            language,
            error_type,
            constraints: None,
            topic: None,
        };
        request.validate()?;
        Ok(request)
    }

    pub fn with_constraints(mut self, constraints: impl Into<String>) -> Self {
        let constraints = constraints.into();
        self.constraints = (!constraints.trim().is_empty()).then_some(constraints);
        self
    }

    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        let topic = topic.into();
        self.topic = (!topic.trim().is_empty()).then_some(topic);
        self
    }

    /// Boundary validation performed by callers before invoking the engine.
    pub fn validate(&self) -> Result<()> {
        if self.code.trim().is_empty() {
            return Err(Error::Validation("code cannot be empty".to_string()));
        }
        Ok(())
    }

    pub fn constraints_text(&self) -> &str {
        self.constraints.as_deref().unwrap_or("")
    }
}

/// One matched rule, decorated with the verdict and derived severity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Finding {
    pub id: String,
    pub topic: String,
    pub confidence: Confidence,
    pub reason: String,
    pub fix: String,
    pub suggested_topics: Vec<String>,
    pub similar_problems: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_complexity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_complexity: Option<String>,
    pub priority: u8,
    pub error_type: ErrorType,
    pub severity: Severity,
}

/// Identifier of the fallback finding returned when no rule matches.
pub const NO_RULE_MATCHED: &str = "NO_RULE_MATCHED";

impl Finding {
    pub fn is_fallback(&self) -> bool {
        self.id == NO_RULE_MATCHED
    }
}

/// The engine's answer for one request. Owned wholly by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub primary_finding: Finding,
    pub secondary_findings: Vec<Finding>,
    pub time_complexity: TimeComplexity,
    pub space_complexity: SpaceComplexity,
    pub error_type: ErrorType,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub faulted_rules: Vec<String>,
}

impl AnalysisResult {
    /// Primary followed by secondary findings, in rank order.
    pub fn findings(&self) -> impl Iterator<Item = &Finding> {
        std::iter::once(&self.primary_finding).chain(self.secondary_findings.iter())
    }

    pub fn is_fallback(&self) -> bool {
        self.primary_finding.is_fallback()
    }
}
