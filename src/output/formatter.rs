//! Output formatters for evaluation reports

use crate::config::{OutputConfig, OutputFormat};
use crate::error::{Result, WorkfitError};
use crate::output::report::EvaluationReport;
use colored::Colorize;
use std::fmt::Write as _;

/// Trait for rendering evaluation reports
pub trait OutputFormatter {
    fn format_report(&self, report: &EvaluationReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colored, tiered presentation
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
    top_matches: usize,
}

/// JSON formatter for structured consumers
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for shareable summaries
pub struct MarkdownFormatter {
    top_matches: usize,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool, top_matches: usize) -> Self {
        Self {
            use_colors,
            detailed,
            top_matches,
        }
    }

    fn paint_rate(&self, rate: f64, text: String) -> String {
        if !self.use_colors {
            return text;
        }
        if rate >= 80.0 {
            text.green().to_string()
        } else if rate >= 60.0 {
            text.cyan().to_string()
        } else {
            text.yellow().to_string()
        }
    }

    fn paint_score(&self, score: f64, text: String) -> String {
        if !self.use_colors {
            return text;
        }
        if score >= 1.5 {
            text.green().to_string()
        } else if score < 1.0 {
            text.yellow().to_string()
        } else {
            text
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &EvaluationReport) -> Result<String> {
        // Writing into a String cannot fail; results are discarded.
        let mut out = String::new();

        let _ = writeln!(out, "Evaluation for {}", report.respondent);
        let _ = writeln!(
            out,
            "Strategy: {} | Generated: {} | {}ms",
            report.strategy,
            report.generated_at.format("%Y-%m-%d %H:%M UTC"),
            report.processing_time_ms
        );

        let _ = writeln!(out, "\nSkill profile:");
        for (skill, score) in report.profile.iter() {
            let line = format!("  {:<20} {:.1}", skill.label(), score);
            let _ = writeln!(out, "{}", self.paint_score(score, line));
        }

        if !report.strengths.is_empty() {
            let names: Vec<&str> = report.strengths.iter().map(|s| s.label()).collect();
            let _ = writeln!(out, "\nStrengths: {}", names.join(", "));
        }

        let _ = writeln!(out, "\nTop job matches:");
        if report.matches.is_empty() {
            let _ = writeln!(out, "  (catalog was empty)");
        }
        for (rank, result) in report.matches.iter().take(self.top_matches).enumerate() {
            let line = format!(
                "  {:>2}. {:<28} {:<16} {:>5.1}%  ({}/{} skills)",
                rank + 1,
                result.job.name,
                result.job.category,
                result.match_rate,
                result.matched_skills,
                result.total_skills
            );
            let _ = writeln!(out, "{}", self.paint_rate(result.match_rate, line));

            if self.detailed {
                if !result.job.description.is_empty() {
                    let _ = writeln!(out, "      {}", result.job.description);
                }
                if !result.job.salary.is_empty() {
                    let _ = writeln!(out, "      Salary: {}", result.job.salary);
                }
                if !result.job.support.is_empty() {
                    let _ = writeln!(out, "      Support: {}", result.job.support);
                }
            }
        }

        Ok(out)
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
    fn format_report(&self, report: &EvaluationReport) -> Result<String> {
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
    pub fn new(top_matches: usize) -> Self {
        Self { top_matches }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &EvaluationReport) -> Result<String> {
        let mut out = String::new();

        let _ = writeln!(out, "# Evaluation: {}\n", report.respondent);
        let _ = writeln!(
            out,
            "Generated {} with the `{}` analyzer.\n",
            report.generated_at.format("%Y-%m-%d %H:%M UTC"),
            report.strategy
        );

        let _ = writeln!(out, "## Skill profile\n");
        let _ = writeln!(out, "| Skill | Score |");
        let _ = writeln!(out, "|-------|-------|");
        for (skill, score) in report.profile.iter() {
            let _ = writeln!(out, "| {} | {:.1} |", skill.label(), score);
        }

        if !report.strengths.is_empty() {
            let names: Vec<&str> = report.strengths.iter().map(|s| s.label()).collect();
            let _ = writeln!(out, "\n**Strengths:** {}\n", names.join(", "));
        }

        let _ = writeln!(out, "## Top matches\n");
        let _ = writeln!(out, "| # | Job | Category | Match | Skills met |");
        let _ = writeln!(out, "|---|-----|----------|-------|------------|");
        for (rank, result) in report.matches.iter().take(self.top_matches).enumerate() {
            let _ = writeln!(
                out,
                "| {} | {} | {} | {:.1}% | {}/{} |",
                rank + 1,
                result.job.name,
                result.job.category,
                result.match_rate,
                result.matched_skills,
                result.total_skills
            );
        }

        Ok(out)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

/// Dispatches to the formatter a requested format needs.
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

impl ReportGenerator {
    pub fn new(config: &OutputConfig) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(
                config.color_output,
                config.detailed,
                config.top_matches,
            ),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(config.top_matches),
        }
    }

    pub fn generate(&self, report: &EvaluationReport, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
        }
    }

    /// Render and write to a file.
    pub fn save(
        &self,
        report: &EvaluationReport,
        format: OutputFormat,
        path: &std::path::Path,
    ) -> Result<()> {
        let content = self.generate(report, format)?;
        std::fs::write(path, content).map_err(|e| {
            WorkfitError::OutputFormatting(format!(
                "Failed to write report to {}: {}",
                path.display(),
                e
            ))
        })
    }
}
