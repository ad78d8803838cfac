use anyhow::Context;
use crate::io::output::{AnalysisReport, OutputWriter};
use std::io::Write;

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        writeln!(self.writer, "{json}")?;
        Ok(())
    }

    fn finish(&mut self) -> anyhow::Result<()> {
        self.writer.flush().context("Failed to flush report output")
    }

    /// A batch is one JSON array, in input order.
    fn write_reports(&mut self, reports: &[AnalysisReport]) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(reports)?;
        writeln!(self.writer, "{json}")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::output::test_support::{fallback_report, sample_report};

    #[test]
    fn test_json_uses_camel_case_fields() {
        let mut out = Vec::new();
        JsonWriter::new(&mut out).write_report(&sample_report()).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        let primary = &value["result"]["primaryFinding"];
        assert_eq!(primary["severity"], "Critical");
        assert_eq!(primary["errorType"], "RE");
        assert!(primary["suggestedTopics"].is_array());
        assert_eq!(value["request"]["constraints"], "n <= 1e5");
        assert!(value["result"]["timeComplexity"].is_string());
        assert!(value["result"].get("faultedRules").is_none());
    }

    #[test]
    fn test_batch_is_a_single_array() {
        let mut out = Vec::new();
        JsonWriter::new(&mut out)
            .write_reports(&[sample_report(), fallback_report()])
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        let reports = value.as_array().unwrap();
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[1]["result"]["primaryFinding"]["id"], "NO_RULE_MATCHED");
    }
}
