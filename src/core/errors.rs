//! Shared error types for the application

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for failmap operations
#[derive(Debug, Error)]
pub enum Error {
    /// Rejected input (empty code, unrecognized verdict)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A rule pattern that does not compile
    #[error("Invalid pattern for rule {rule} ({pattern}): {source}")]
    RulePattern {
        rule: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Duplicate or otherwise malformed rule table entries
    #[error("Rule table error: {0}")]
    RuleTable(String),

    /// File system related errors
    #[error("File system error: {message}")]
    FileSystem {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// TOML errors
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

impl Error {
    /// Create a file system error with path context
    pub fn file_system(
        message: impl Into<String>,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::FileSystem {
            message: message.into(),
            path: Some(path.into()),
            source: Some(source),
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
