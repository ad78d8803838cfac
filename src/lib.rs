// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod complexity;
pub mod config;
pub mod constraints;
pub mod core;
pub mod engine;
pub mod io;
pub mod observability;
pub mod patterns;
pub mod rules;
pub mod summary;

// Re-export commonly used types
pub use crate::core::{
    AnalysisRequest, AnalysisResult, Confidence, Error, ErrorType, Finding, Language, Result,
    Severity, NO_RULE_MATCHED,
};

pub use crate::complexity::{
    estimate_space_complexity, estimate_time_complexity, SpaceComplexity, TimeComplexity,
};

pub use crate::constraints::{parse_constraints, ParsedConstraints, SizeBucket};

pub use crate::engine::{RuleEngine, MAX_SECONDARY_FINDINGS};

pub use crate::rules::{Rule, RuleTable, Topic};

pub use crate::summary::AnalysisSummary;

pub use crate::config::{build_rule_table, load_config, FailmapConfig};

pub use crate::io::output::{create_writer, AnalysisReport, OutputFormat, OutputWriter};
