use crate::cli::OutputFormat;
use crate::config::build_rule_table;
use crate::core::{AnalysisRequest, ErrorType, Language};
use crate::engine::RuleEngine;
use crate::io::{self, output::AnalysisReport};
use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone)]
pub struct AnalyzeConfig {
    pub path: PathBuf,
    pub error_type: String,
    pub language: Option<String>,
    pub constraints: Option<String>,
    pub topic: Option<String>,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
}

impl AnalyzeConfig {
    fn is_stdin(&self) -> bool {
        self.path.as_os_str() == "-"
    }

    /// Explicit `--language`, else the file extension.
    fn language(&self) -> Language {
        match &self.language {
            Some(name) => Language::from_name(name),
            None if self.is_stdin() => Language::Other,
            None => Language::from_path(&self.path),
        }
    }

    /// Read the source and build a validated request.
    pub fn to_request(&self) -> Result<AnalysisRequest> {
        let error_type: ErrorType = self.error_type.parse()?;
        let code = io::read_source(&self.path)?;
        let mut request = AnalysisRequest::new(code, self.language(), error_type)
            .with_context(|| format!("Cannot analyze {}", self.path.display()))?;
        if let Some(constraints) = &self.constraints {
            request = request.with_constraints(constraints.as_str());
        }
        if let Some(topic) = &self.topic {
            request = request.with_topic(topic.as_str());
        }
        Ok(request)
    }
}

pub fn handle_analyze(config: AnalyzeConfig) -> Result<()> {
    let settings = super::load_settings(config.config.as_deref())?;
    let request = config.to_request()?;
    let engine = RuleEngine::new(build_rule_table(&settings)?);

    info!(
        path = %config.path.display(),
        language = %request.language,
        error_type = %request.error_type,
        rules = engine.table().len(),
        "Analyzing submission"
    );
    let result = engine.analyze(&request);
    info!(primary = %result.primary_finding.id, "Analysis complete");

    let source = (!config.is_stdin()).then(|| config.path.display().to_string());
    let report = AnalysisReport::new(&request, source, result);
    let format = super::resolve_format(config.format, &settings);
    let mut writer = super::open_writer(format, config.output.as_deref())?;
    writer.write_report(&report)?;
    writer.finish()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn config_for(path: PathBuf, error_type: &str) -> AnalyzeConfig {
        AnalyzeConfig {
            path,
            error_type: error_type.to_string(),
            language: None,
            constraints: Some("n <= 2e5".to_string()),
            topic: None,
            format: None,
            output: None,
            config: None,
        }
    }

    #[test]
    fn test_request_infers_language_from_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("solution.py");
        fs::write(&path, "def f(n):\n    return f(n - 1)\n").unwrap();

        let request = config_for(path, "re").to_request().unwrap();
        assert_eq!(request.language, Language::Python);
        assert_eq!(request.error_type, ErrorType::RuntimeError);
        assert_eq!(request.constraints.as_deref(), Some("n <= 2e5"));
    }

    #[test]
    fn test_empty_source_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.cpp");
        fs::write(&path, "   \n").unwrap();
        let err = config_for(path, "WA").to_request().unwrap_err();
        assert!(format!("{err:#}").contains("code cannot be empty"));
    }

    #[test]
    fn test_unknown_error_type_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("main.cpp");
        fs::write(&path, "int main() {}").unwrap();
        assert!(config_for(path, "CE").to_request().is_err());
    }
}
