use anyhow::Context;
use crate::core::Finding;
use crate::io::output::{AnalysisReport, OutputWriter};
use std::io::Write;

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        self.write_header(report)?;
        self.write_summary(report)?;
        self.write_finding("Primary Finding", &report.result.primary_finding)?;
        self.write_secondary(report)?;
        Ok(())
    }

    fn finish(&mut self) -> anyhow::Result<()> {
        self.writer.flush().context("Failed to flush report output")
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_header(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        writeln!(self.writer, "# Failmap Analysis Report")?;
        writeln!(self.writer)?;
        if let Some(source) = &report.request.source {
            writeln!(self.writer, "Source: `{source}`")?;
        }
        writeln!(
            self.writer,
            "Verdict: **{}** · Language: {}",
            report.request.error_type, report.request.language
        )?;
        if let Some(constraints) = &report.request.constraints {
            writeln!(self.writer, "Constraints: `{constraints}`")?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_summary(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## Summary")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        self.write_row("Score", &format!("{} / 100", report.summary.score))?;
        self.write_row(
            "Findings",
            &report
                .result
                .findings()
                .filter(|finding| !finding.is_fallback())
                .count()
                .to_string(),
        )?;
        self.write_row("Time complexity", &report.result.time_complexity.to_string())?;
        self.write_row("Space complexity", &report.result.space_complexity.to_string())?;
        if !report.result.faulted_rules.is_empty() {
            self.write_row("Skipped rules", &report.result.faulted_rules.join(", "))?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_row(&mut self, metric: &str, value: &str) -> anyhow::Result<()> {
        writeln!(self.writer, "| {metric} | {value} |")?;
        Ok(())
    }

    fn write_finding(&mut self, title: &str, finding: &Finding) -> anyhow::Result<()> {
        writeln!(self.writer, "## {title}: `{}`", finding.id)?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "- Severity: {} · Confidence: {} · Priority: {}",
            finding.severity, finding.confidence, finding.priority
        )?;
        writeln!(self.writer, "- Reason: {}", finding.reason)?;
        writeln!(self.writer, "- Fix: {}", finding.fix)?;
        if let (Some(current), Some(expected)) =
            (&finding.current_complexity, &finding.expected_complexity)
        {
            writeln!(self.writer, "- Complexity: {current} → {expected}")?;
        }
        if !finding.suggested_topics.is_empty() {
            writeln!(self.writer, "- Topics: {}", finding.suggested_topics.join(", "))?;
        }
        if !finding.similar_problems.is_empty() {
            writeln!(self.writer, "- Practice: {}", finding.similar_problems.join(", "))?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_secondary(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        if report.result.secondary_findings.is_empty() {
            return Ok(());
        }
        writeln!(self.writer, "## Also Consider")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Id | Priority | Confidence | Reason |")?;
        writeln!(self.writer, "|----|----------|------------|--------|")?;
        for finding in &report.result.secondary_findings {
            writeln!(
                self.writer,
                "| `{}` | {} | {} | {} |",
                finding.id, finding.priority, finding.confidence, finding.reason
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}
