//! Output formatting for parsed reports, diagnostics and batch summaries.

use report_score_core::{ParsedReport, Severity};
use serde::{Deserialize, Serialize};

use crate::parser::{ParseDiagnostics, glyph_for};
use crate::report::{BatchSummary, ParseRun};

/// Supported output formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
    Markdown,
    Table,
}

/// Formats a parsed report in the requested output format.
pub fn format_report(report: &ParsedReport, format: OutputFormat) -> Result<String, String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(report)
            .map_err(|e| format!("JSON serialization failed: {e}")),
        OutputFormat::Yaml => {
            serde_yaml::to_string(report).map_err(|e| format!("YAML serialization failed: {e}"))
        }
        OutputFormat::Markdown => Ok(report_to_markdown(report)),
        OutputFormat::Table => Ok(report_to_table(report)),
    }
}

/// Formats a parse run (model plus diagnostics).
pub fn format_run(run: &ParseRun, format: OutputFormat) -> Result<String, String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(run)
            .map_err(|e| format!("JSON serialization failed: {e}")),
        OutputFormat::Yaml => {
            serde_yaml::to_string(run).map_err(|e| format!("YAML serialization failed: {e}"))
        }
        OutputFormat::Markdown => Ok(format!(
            "{}{}",
            report_to_markdown(&run.report),
            diagnostics_to_markdown(&run.diagnostics)
        )),
        OutputFormat::Table => Ok(format!(
            "{}{}",
            report_to_table(&run.report),
            diagnostics_to_table(&run.diagnostics)
        )),
    }
}

/// Formats a batch summary.
pub fn format_batch(summary: &BatchSummary, format: OutputFormat) -> Result<String, String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(summary)
            .map_err(|e| format!("JSON serialization failed: {e}")),
        OutputFormat::Yaml => {
            serde_yaml::to_string(summary).map_err(|e| format!("YAML serialization failed: {e}"))
        }
        OutputFormat::Markdown => Ok(batch_to_markdown(summary)),
        OutputFormat::Table => Ok(batch_to_table(summary)),
    }
}

fn report_to_markdown(report: &ParsedReport) -> String {
    let mut out = String::new();

    out.push_str("# Code Quality Report\n\n");

    if report.parse_error {
        out.push_str("The report could not be parsed. Raw content:\n\n```text\n");
        out.push_str(report.raw_content.as_deref().unwrap_or_default());
        out.push_str("\n```\n");
        return out;
    }

    out.push_str(&format!(
        "**Quality Score:** {} ({})\n\n",
        report.quality_score, report.quality_grade
    ));
    out.push_str(&format!(
        "Analyzed {} files, found {} issues.\n\n",
        report.total_files, report.total_issues
    ));

    out.push_str("## Severity\n\n");
    out.push_str("| Severity | Count |\n");
    out.push_str("|----------|-------|\n");
    for severity in Severity::ALL {
        out.push_str(&format!(
            "| {} | {} |\n",
            severity.label(),
            report.severity_stats.get(severity)
        ));
    }
    out.push('\n');

    if !report.type_stats.is_empty() {
        out.push_str("## Issue Types\n\n");
        out.push_str("| Type | Count |\n");
        out.push_str("|------|-------|\n");
        for entry in &report.type_stats {
            out.push_str(&format!("| {} | {} |\n", entry.label, entry.count));
        }
        out.push('\n');
    }

    if !report.file_stats.is_empty() {
        out.push_str("## Files\n\n");
        out.push_str("| File | Critical | High | Medium | Low | Total |\n");
        out.push_str("|------|----------|------|--------|-----|-------|\n");
        for stat in &report.file_stats {
            out.push_str(&format!(
                "| `{}` | {} | {} | {} | {} | {} |\n",
                stat.file, stat.critical, stat.high, stat.medium, stat.low, stat.total
            ));
        }
        out.push('\n');
    }

    if !report.issues.is_empty() {
        out.push_str("## Issues\n\n");
        for issue in &report.issues {
            out.push_str(&format!(
                "- {} **{}** `{}:{}`: {}\n",
                glyph_for(issue.severity),
                issue.issue_type,
                issue.file,
                issue.line,
                issue.description
            ));
        }
        out.push('\n');
    }

    out
}

fn report_to_table(report: &ParsedReport) -> String {
    let mut out = String::new();

    if report.parse_error {
        out.push_str("PARSE ERROR (raw content follows)\n");
        out.push_str(report.raw_content.as_deref().unwrap_or_default());
        out.push('\n');
        return out;
    }

    out.push_str(&format!(
        "Score: {} ({})  Files: {}  Issues: {}\n",
        report.quality_score, report.quality_grade, report.total_files, report.total_issues
    ));
    let s = &report.severity_stats;
    out.push_str(&format!(
        "  critical={} high={} medium={} low={}\n",
        s.critical, s.high, s.medium, s.low
    ));

    if !report.file_stats.is_empty() {
        out.push_str("\nFiles:\n");
        let max_name = report
            .file_stats
            .iter()
            .map(|stat| stat.file.len())
            .max()
            .unwrap_or(4);
        for stat in &report.file_stats {
            out.push_str(&format!(
                "  {:<width$}  C={} H={} M={} L={} total={}\n",
                stat.file,
                stat.critical,
                stat.high,
                stat.medium,
                stat.low,
                stat.total,
                width = max_name
            ));
        }
    }

    if !report.issues.is_empty() {
        out.push_str("\nIssues:\n");
        for issue in &report.issues {
            out.push_str(&format!(
                "  {:<8} {:<24} {}:{}  {}\n",
                issue.severity, issue.issue_type, issue.file, issue.line, issue.description
            ));
        }
    }

    out
}

fn diagnostics_to_markdown(diagnostics: &ParseDiagnostics) -> String {
    let mut out = String::new();

    out.push_str("## Parse Diagnostics\n\n");
    out.push_str(&format!(
        "- **Coverage:** {:.2} ({} of {} lines)\n",
        diagnostics.coverage(),
        diagnostics.recognized_lines,
        diagnostics.relevant_lines
    ));
    if let Some(ref failure) = diagnostics.failure {
        out.push_str(&format!("- **Failure:** {failure}\n"));
    }

    if !diagnostics.skipped.is_empty() {
        out.push_str("\n| Line | Section | Kind | Text |\n");
        out.push_str("|------|---------|------|------|\n");
        for entry in &diagnostics.skipped {
            out.push_str(&format!(
                "| {} | {:?} | {:?} | `{}` |\n",
                entry.line, entry.section, entry.kind, entry.text
            ));
        }
    }

    out
}

fn diagnostics_to_table(diagnostics: &ParseDiagnostics) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "\ncoverage={:.2} recognized={} relevant={} skipped={}\n",
        diagnostics.coverage(),
        diagnostics.recognized_lines,
        diagnostics.relevant_lines,
        diagnostics.skipped.len()
    ));
    for warning in diagnostics.warnings() {
        out.push_str(&format!("  warning: {warning}\n"));
    }
    out
}

fn batch_to_markdown(summary: &BatchSummary) -> String {
    let mut out = String::new();

    out.push_str("# Batch Quality Summary\n\n");
    out.push_str(&format!(
        "- **Generated:** {}\n- **Policy:** {}\n\n",
        summary.generated_at, summary.policy
    ));
    out.push_str("| Report | Score | Grade | Issues | Files |\n");
    out.push_str("|--------|-------|-------|--------|-------|\n");
    for entry in &summary.entries {
        if entry.parse_error {
            out.push_str(&format!(
                "| `{}` | - | - | - | - |\n",
                entry.source
            ));
        } else {
            out.push_str(&format!(
                "| `{}` | {} | {} | {} | {} |\n",
                entry.source,
                entry.quality_score,
                entry.quality_grade,
                entry.total_issues,
                entry.total_files
            ));
        }
    }

    out
}

fn batch_to_table(summary: &BatchSummary) -> String {
    let mut out = String::new();
    for entry in &summary.entries {
        if entry.parse_error {
            out.push_str(&format!(
                "{:<40} FAIL  {}\n",
                entry.source,
                entry.failure.as_deref().unwrap_or("parse error")
            ));
        } else {
            out.push_str(&format!(
                "{:<40} {:>3} {:<2}  issues={} files={}\n",
                entry.source,
                entry.quality_score,
                entry.quality_grade.as_str(),
                entry.total_issues,
                entry.total_files
            ));
        }
    }
    out
}
