use crate::core::{AnalysisRequest, AnalysisResult, ErrorType, Language};
use crate::summary::AnalysisSummary;
use crate::io::writers::{JsonWriter, MarkdownWriter, TerminalWriter};
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

impl OutputFormat {
    /// Parse the `[output] format` config value.
    pub fn from_config(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "json" => Some(OutputFormat::Json),
            "markdown" | "md" => Some(OutputFormat::Markdown),
            "terminal" => Some(OutputFormat::Terminal),
            _ => None,
        }
    }
}

/// Request metadata echoed in reports. The code itself is not repeated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub language: Language,
    pub error_type: ErrorType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraints: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
}

/// Everything a writer renders for one analyzed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub request: ReportRequest,
    pub result: AnalysisResult,
    pub summary: AnalysisSummary,
}

impl AnalysisReport {
    pub fn new(request: &AnalysisRequest, source: Option<String>, result: AnalysisResult) -> Self {
        let summary = AnalysisSummary::from_result(&result);
        Self {
            request: ReportRequest {
                source,
                language: request.language,
                error_type: request.error_type,
                constraints: request.constraints.clone(),
                topic: request.topic.clone(),
            },
            result,
            summary,
        }
    }
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()>;

    /// Flush buffered output so a failing sink surfaces as an error instead of
    /// being dropped silently.
    fn finish(&mut self) -> anyhow::Result<()>;

    fn write_reports(&mut self, reports: &[AnalysisReport]) -> anyhow::Result<()> {
        reports.iter().try_for_each(|report| self.write_report(report))
    }
}

pub fn create_writer(format: OutputFormat, out: Box<dyn Write>) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(out)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(out)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(out)),
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::engine::RuleEngine;

    pub fn sample_report() -> AnalysisReport {
        let request = AnalysisRequest::new(
            "stack<int> st; st.push(1); st.pop(); int x = st.top();",
            Language::Cpp,
            ErrorType::RuntimeError,
        )
        .unwrap()
        .with_constraints("n <= 1e5");
        let result = RuleEngine::standard().unwrap().analyze(&request);
        AnalysisReport::new(&request, Some("main.cpp".to_string()), result)
    }

    pub fn fallback_report() -> AnalysisReport {
        let request = AnalysisRequest::new(
            "int main() { return 0; }",
            Language::Cpp,
            ErrorType::MemoryLimitExceeded,
        )
        .unwrap();
        let result = RuleEngine::standard().unwrap().analyze(&request);
        AnalysisReport::new(&request, None, result)
    }

    /// `Write` handle whose bytes stay readable after the writer is boxed.
    #[derive(Clone, Default)]
    pub struct SharedBuffer(pub std::rc::Rc<std::cell::RefCell<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.borrow_mut().write(buf)
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    /// Accepts every write, then fails on flush like a full disk.
    pub struct FullSink;

    impl Write for FullSink {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Err(std::io::Error::other("no space left on device"))
        }
    }

    impl SharedBuffer {
        pub fn contents(&self) -> String {
            String::from_utf8(self.0.borrow().clone()).unwrap()
        }
    }
}
