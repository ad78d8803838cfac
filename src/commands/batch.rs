use crate::cli::{build_thread_pool, OutputFormat};
use crate::config::build_rule_table;
use crate::core::AnalysisRequest;
use crate::engine::RuleEngine;
use crate::io::output::AnalysisReport;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone)]
pub struct BatchConfig {
    pub requests: PathBuf,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub jobs: usize,
}

/// Parse and validate every request before any analysis runs.
pub fn load_requests(path: &Path) -> Result<Vec<AnalysisRequest>> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let requests: Vec<AnalysisRequest> = serde_json::from_str(&contents)
        .with_context(|| format!("{} is not a JSON array of requests", path.display()))?;
    for (index, request) in requests.iter().enumerate() {
        request
            .validate()
            .with_context(|| format!("Request #{index} in {} is invalid", path.display()))?;
    }
    Ok(requests)
}

pub fn handle_batch(config: BatchConfig) -> Result<()> {
    let settings = super::load_settings(config.config.as_deref())?;
    let requests = load_requests(&config.requests)?;
    let engine = RuleEngine::new(build_rule_table(&settings)?);
    let pool = build_thread_pool(config.jobs)?;

    info!(
        requests = requests.len(),
        threads = pool.current_num_threads(),
        "Analyzing batch"
    );
    let results = pool.install(|| engine.analyze_batch(&requests));

    let reports: Vec<_> = requests
        .iter()
        .zip(results)
        .enumerate()
        .map(|(index, (request, result))| {
            AnalysisReport::new(request, Some(format!("#{index}")), result)
        })
        .collect();

    let format = super::resolve_format(config.format, &settings);
    let mut writer = super::open_writer(format, config.output.as_deref())?;
    writer.write_reports(&reports)?;
    writer.finish()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn test_load_requests_validates_each_entry() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("requests.json");
        fs::write(
            &path,
            indoc! {r#"
                [
                  {"code": "int main() {}", "language": "c++", "errorType": "WA"},
                  {"code": "  ", "errorType": "RE"}
                ]
            "#},
        )
        .unwrap();
        let err = load_requests(&path).unwrap_err();
        assert!(format!("{err:#}").contains("Request #1"));
    }

    #[test]
    fn test_load_requests_accepts_aliases() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("requests.json");
        fs::write(
            &path,
            r#"[{"code": "x = 1", "language": "py", "errorType": "MLE", "topic": "dp"}]"#,
        )
        .unwrap();
        let requests = load_requests(&path).unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].language, crate::core::Language::Python);
        assert_eq!(requests[0].topic.as_deref(), Some("dp"));
    }
}
