//! Output formatters: console, JSON and Markdown

use crate::config::OutputFormat;
use crate::error::{AtsError, Result};
use crate::output::report::{ScoreReport, ScoreStatus, Verdict};
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for formatting score reports
pub trait OutputFormatter {
    fn format_report(&self, report: &ScoreReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with optional colors
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for scripting and integration
pub struct JsonFormatter {
    pretty: bool,
}

pub struct MarkdownFormatter {
    include_metadata: bool,
    detailed: bool,
}

/// Report generator that dispatches to the formatter for a format
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str) -> String {
        if self.use_colors {
            format!("\n{} {}\n", "▓".color(Color::Blue).bold(), title.bold())
        } else {
            format!("\n{} {}\n", "▓", title)
        }
    }

    fn verdict_color(verdict: Verdict) -> Color {
        match verdict {
            Verdict::Excellent => Color::Green,
            Verdict::Good => Color::BrightGreen,
            Verdict::Fair => Color::Yellow,
            Verdict::NeedsWork => Color::Red,
        }
    }

    fn format_score_badge(&self, verdict: Verdict) -> String {
        let badge = verdict.label().to_uppercase();
        if self.use_colors {
            format!("[{}]", badge.color(Self::verdict_color(verdict)).bold())
        } else {
            format!("[{}]", badge)
        }
    }

    fn format_keyword_line(&self, keywords: &[String], color: Color) -> String {
        if keywords.is_empty() {
            return String::new();
        }
        format!("  {}\n", self.colorize(&keywords.join(", "), color))
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &ScoreReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("ATS SCORE REPORT"));
        output.push_str(&format!(
            "ATS Score: {}/100 {}\n",
            self.colorize(&report.score.to_string(), Self::verdict_color(report.verdict)),
            self.format_score_badge(report.verdict)
        ));
        output.push_str(&format!(
            "{}\n",
            self.colorize(report.verdict.message(), Color::Cyan)
        ));

        match &report.status {
            ScoreStatus::Scored => {}
            ScoreStatus::EmptyInput => output.push_str(&format!(
                "{}\n",
                self.colorize("Note: the resume or job description is empty.", Color::Yellow)
            )),
            ScoreStatus::Degraded { reason } => output.push_str(&format!(
                "{} {}\n",
                self.colorize("Note: scoring fell back to zero:", Color::Yellow),
                reason
            )),
        }

        output.push_str(&self.format_header(&format!(
            "Matched Keywords: {}",
            report.keywords.matched_count
        )));
        output.push_str(&self.format_keyword_line(&report.keywords.matched_sample, Color::Green));

        output.push_str(&self.format_header(&format!(
            "Missing Keywords: {}",
            report.keywords.missing_count
        )));
        output.push_str(&self.format_keyword_line(&report.keywords.missing_sample, Color::Red));

        if self.detailed {
            if let Some(components) = &report.components {
                output.push_str(&self.format_header("Score Breakdown"));
                output.push_str(&format!(
                    "  TF-IDF similarity: {:.1}% (weight: {:.0}%)\n",
                    components.similarity * 100.0,
                    components.similarity_weight * 100.0
                ));
                output.push_str(&format!(
                    "  Keyword match:     {:.1}% (weight: {:.0}%)\n",
                    components.keyword_match * 100.0,
                    components.keyword_weight * 100.0
                ));
            }

            output.push_str(&self.format_header(&format!(
                "Resume Keywords: {}",
                report.keywords.resume_keywords.len()
            )));
            output.push_str(&self.format_keyword_line(&report.keywords.resume_keywords, Color::White));

            output.push_str(&self.format_header(&format!(
                "Job Keywords: {}",
                report.keywords.job_keywords.len()
            )));
            output.push_str(&self.format_keyword_line(&report.keywords.job_keywords, Color::White));
        }

        output.push_str(&format!(
            "\n{}\n",
            self.colorize(
                &format!(
                    "Generated {} by ats-scorer v{}",
                    report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
                    report.metadata.scorer_version
                ),
                Color::BrightBlack
            )
        ));

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &ScoreReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool, detailed: bool) -> Self {
        Self {
            include_metadata,
            detailed,
        }
    }

    fn keyword_list(keywords: &[String]) -> String {
        if keywords.is_empty() {
            "_none_".to_string()
        } else {
            format!("`{}`", keywords.join("`, `"))
        }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &ScoreReport) -> Result<String> {
        let mut output = String::new();

        output.push_str("# ATS Score Report\n\n");

        if self.include_metadata {
            let resume_name = Path::new(&report.metadata.resume_file)
                .file_name()
                .map(|name| name.to_string_lossy().to_string())
                .unwrap_or_else(|| report.metadata.resume_file.clone());
            output.push_str(&format!(
                "**Generated:** {} | **Resume:** `{}` | **Job:** `{}`\n\n",
                report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
                resume_name,
                report.metadata.job_source
            ));
        }

        output.push_str(&format!(
            "## ATS Score: {}/100 ({})\n\n",
            report.score,
            report.verdict.label()
        ));
        output.push_str(&format!("{}\n\n", report.verdict.message()));

        if let ScoreStatus::Degraded { reason } = &report.status {
            output.push_str(&format!("> Scoring fell back to zero: {}\n\n", reason));
        } else if report.status == ScoreStatus::EmptyInput {
            output.push_str("> The resume or job description is empty.\n\n");
        }

        if self.detailed {
            if let Some(components) = &report.components {
                output.push_str("| Component | Value | Weight |\n");
                output.push_str("|-----------|-------|--------|\n");
                output.push_str(&format!(
                    "| TF-IDF similarity | {:.1}% | {:.0}% |\n",
                    components.similarity * 100.0,
                    components.similarity_weight * 100.0
                ));
                output.push_str(&format!(
                    "| Keyword match | {:.1}% | {:.0}% |\n\n",
                    components.keyword_match * 100.0,
                    components.keyword_weight * 100.0
                ));
            }
        }

        output.push_str(&format!(
            "### Matched Keywords ({})\n\n{}\n\n",
            report.keywords.matched_count,
            Self::keyword_list(&report.keywords.matched_sample)
        ));
        output.push_str(&format!(
            "### Missing Keywords ({})\n\n{}\n",
            report.keywords.missing_count,
            Self::keyword_list(&report.keywords.missing_sample)
        ));

        if self.include_metadata {
            output.push_str(&format!(
                "\n---\n\n*Generated by ats-scorer v{}*\n",
                report.metadata.scorer_version
            ));
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self::with_options(true, false, true)
    }

    pub fn with_options(use_colors: bool, detailed: bool, pretty_json: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(true, detailed),
        }
    }

    pub fn generate_report(&self, report: &ScoreReport, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    if let Some(parent) = file_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(file_path, content).map_err(|e| {
        AtsError::OutputFormatting(format!(
            "Failed to write report to {}: {}",
            file_path.display(),
            e
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::keywords::KeywordSet;
    use crate::processing::scorer::{Assessment, ScoreCard};

    fn sample_report() -> ScoreReport {
        let resume: KeywordSet = ["aws", "django", "python"].iter().map(|s| s.to_string()).collect();
        let job: KeywordSet = ["django", "framework", "python"].iter().map(|s| s.to_string()).collect();
        let assessment = Assessment::Scored(ScoreCard {
            score: 62,
            similarity: 0.5,
            keyword_match: 2.0 / 3.0,
            resume_keywords: resume,
            job_keywords: job,
        });
        ScoreReport::from_assessment(&assessment, 10, "/tmp/cv.pdf", "job.txt")
    }

    #[test]
    fn test_console_without_colors() {
        let output = ConsoleFormatter::new(false, false)
            .format_report(&sample_report())
            .unwrap();

        assert!(output.contains("ATS Score: 62/100 [GOOD]"));
        assert!(output.contains("Good! Minor improvements needed."));
        assert!(output.contains("Matched Keywords: 2"));
        assert!(output.contains("django, python"));
        assert!(output.contains("Missing Keywords: 1"));
        assert!(output.contains("framework"));
        assert!(!output.contains("Score Breakdown"));
    }

    #[test]
    fn test_console_detailed() {
        let output = ConsoleFormatter::new(false, true)
            .format_report(&sample_report())
            .unwrap();

        assert!(output.contains("Score Breakdown"));
        assert!(output.contains("TF-IDF similarity: 50.0% (weight: 60%)"));
        assert!(output.contains("Resume Keywords: 3"));
    }

    #[test]
    fn test_json_roundtrip() {
        let report = sample_report();
        let json = JsonFormatter::new(false).format_report(&report).unwrap();
        let parsed: ScoreReport = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.score, report.score);
        assert_eq!(parsed.keywords, report.keywords);
        assert_eq!(parsed.metadata, report.metadata);
        assert!(json.contains("\"verdict\":\"good\""));
        assert!(json.contains("\"kind\":\"scored\""));
    }

    #[test]
    fn test_markdown() {
        let output = MarkdownFormatter::new(true, false)
            .format_report(&sample_report())
            .unwrap();

        assert!(output.contains("## ATS Score: 62/100 (Good)"));
        assert!(output.contains("`cv.pdf`"));
        assert!(output.contains("### Matched Keywords (2)\n\n`django`, `python`"));
    }

    #[test]
    fn test_generator_dispatch() {
        let generator = ReportGenerator::with_options(false, false, true);
        let report = sample_report();

        let json = generator.generate_report(&report, &OutputFormat::Json).unwrap();
        assert!(json.trim_start().starts_with('{'));

        let markdown = generator.generate_report(&report, &OutputFormat::Markdown).unwrap();
        assert!(markdown.starts_with("# ATS Score Report"));
    }

    #[test]
    fn test_save_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reports").join("cv.md");

        save_report_to_file("# report", &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# report");
    }
}
