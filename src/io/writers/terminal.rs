use anyhow::Context;
use crate::core::{Finding, Severity};
use crate::io::output::{AnalysisReport, OutputWriter};
use colored::*;
use std::io::Write;

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        self.print_header(report)?;
        self.print_finding(&report.result.primary_finding, true)?;
        for finding in &report.result.secondary_findings {
            self.print_finding(finding, false)?;
        }
        self.print_footer(report)?;
        Ok(())
    }

    fn finish(&mut self) -> anyhow::Result<()> {
        self.writer.flush().context("Failed to flush report output")
    }
}

fn severity_label(severity: Severity) -> ColoredString {
    let label = severity.to_string().to_uppercase();
    match severity {
        Severity::Critical => label.red().bold(),
        Severity::High => label.red(),
        Severity::Medium => label.yellow(),
        Severity::Low => label.green(),
    }
}

impl<W: Write> TerminalWriter<W> {
    fn print_header(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", "Failmap Analysis Report".bold().blue())?;
        writeln!(self.writer, "{}", "=======================".blue())?;
        let source = report.request.source.as_deref().unwrap_or("<stdin>");
        writeln!(
            self.writer,
            "  {} ({}, {})",
            source,
            report.request.language,
            report.request.error_type.to_string().bold()
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn print_finding(&mut self, finding: &Finding, primary: bool) -> anyhow::Result<()> {
        let marker = if primary { "▶".bold() } else { "•".dimmed() };
        let id = if primary {
            finding.id.bold()
        } else {
            finding.id.normal()
        };
        writeln!(
            self.writer,
            "{} [{}] {} (priority {}, confidence {})",
            marker,
            severity_label(finding.severity),
            id,
            finding.priority,
            finding.confidence
        )?;
        writeln!(self.writer, "    {}", finding.reason)?;
        writeln!(self.writer, "    {} {}", "fix:".cyan(), finding.fix)?;
        if primary {
            if let (Some(current), Some(expected)) =
                (&finding.current_complexity, &finding.expected_complexity)
            {
                writeln!(self.writer, "    {} {} → {}", "complexity:".cyan(), current, expected)?;
            }
            if !finding.suggested_topics.is_empty() {
                writeln!(
                    self.writer,
                    "    {} {}",
                    "topics:".cyan(),
                    finding.suggested_topics.join(", ")
                )?;
            }
            if !finding.similar_problems.is_empty() {
                writeln!(
                    self.writer,
                    "    {} {}",
                    "practice:".cyan(),
                    finding.similar_problems.join(", ")
                )?;
            }
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn print_footer(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        writeln!(
            self.writer,
            "Estimated time: {}  space: {}",
            report.result.time_complexity.to_string().bold(),
            report.result.space_complexity.to_string().bold()
        )?;
        let score = report.summary.score;
        let score_text = format!("{score}/100");
        let score_text = if score >= 80 {
            score_text.green()
        } else if score >= 50 {
            score_text.yellow()
        } else {
            score_text.red()
        };
        writeln!(self.writer, "Score: {score_text}")?;
        if !report.result.faulted_rules.is_empty() {
            writeln!(
                self.writer,
                "{} {}",
                "Skipped faulty rules:".yellow(),
                report.result.faulted_rules.join(", ")
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::output::test_support::sample_report;

    #[test]
    fn test_terminal_output_lists_findings() {
        colored::control::set_override(false);
        let report = sample_report();
        let mut out = Vec::new();
        TerminalWriter::new(&mut out).write_report(&report).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("▶ [CRITICAL] STACK_EMPTY_ACCESS"));
        for finding in &report.result.secondary_findings {
            assert!(text.contains(&finding.id));
        }
        assert!(text.contains(&format!("Score: {}/100", report.summary.score)));
    }
}
