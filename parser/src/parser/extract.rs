//! Per-section line extractors.
//!
//! Each extractor inspects one line and folds whatever it recognizes into
//! [`ReportDrafts`]. Extractors never fail: a line that does not fit is
//! reported back as an [`Outcome`] so the caller can record a diagnostic.

use report_score_core::{FileStat, Issue, Severity, SeverityStats, TypeCount};

use super::PATTERNS;
use super::diagnostics::DiagnosticKind;
use super::glyph;
use super::util::{clean_file_name, truncate_description};

/// Result of offering a line to an extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Matched,
    Skipped(DiagnosticKind),
    /// Not this extractor's concern; no diagnostic.
    Ignored,
}

/// Counts declared on the summary line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeclaredSummary {
    pub files: u64,
    pub issues: u64,
}

/// Accumulators filled while walking the report.
#[derive(Debug, Clone, Default)]
pub struct ReportDrafts {
    pub summary: Option<DeclaredSummary>,
    pub no_issues_marker: bool,
    /// Severity rows from the breakdown section; `None` until one matched.
    pub severity: Option<SeverityStats>,
    pub types: Vec<TypeCount>,
    pub files: Vec<FileStat>,
    /// Index into `files` that indented severity rows update.
    pub file_cursor: Option<usize>,
    pub issues: Vec<Issue>,
}

/// Summary line and the "no issues found" marker. Offered any line its
/// section's extractor did not match, in every section.
pub fn extract_summary(line: &str, drafts: &mut ReportDrafts) -> Outcome {
    if PATTERNS.no_issues.is_match(line) {
        drafts.no_issues_marker = true;
        return Outcome::Matched;
    }

    let Some(caps) = PATTERNS.summary.captures(line) else {
        return Outcome::Ignored;
    };
    if drafts.summary.is_some() {
        return Outcome::Skipped(DiagnosticKind::RepeatedSummary);
    }
    let (Ok(files), Ok(issues)) = (caps[1].parse::<u64>(), caps[2].parse::<u64>()) else {
        return Outcome::Skipped(DiagnosticKind::LineSkipped);
    };

    drafts.summary = Some(DeclaredSummary { files, issues });
    Outcome::Matched
}

/// `<Label> : <count>` rows of the severity breakdown.
pub fn extract_severity_row(line: &str, drafts: &mut ReportDrafts) -> Outcome {
    let Some(caps) = PATTERNS.severity_row.captures(line) else {
        return Outcome::Skipped(DiagnosticKind::LineSkipped);
    };
    let (Some(severity), Ok(count)) = (Severity::from_label(&caps[1]), caps[2].parse::<u64>())
    else {
        return Outcome::Skipped(DiagnosticKind::LineSkipped);
    };

    drafts
        .severity
        .get_or_insert_with(SeverityStats::default)
        .set(severity, count);
    Outcome::Matched
}

/// `<label> : <count>` rows of the type breakdown. A repeated label keeps
/// its position and takes the later count.
pub fn extract_type_row(line: &str, drafts: &mut ReportDrafts) -> Outcome {
    let Some(caps) = PATTERNS.type_row.captures(line) else {
        return Outcome::Skipped(DiagnosticKind::LineSkipped);
    };
    let label = caps[1].trim();
    let Ok(count) = caps[2].parse::<u64>() else {
        return Outcome::Skipped(DiagnosticKind::LineSkipped);
    };

    match drafts.types.iter_mut().find(|entry| entry.label == label) {
        Some(entry) => entry.count = count,
        None => drafts.types.push(TypeCount::new(label, count)),
    }
    Outcome::Matched
}

/// File headers and the indented severity rows beneath them.
pub fn extract_file_row(line: &str, drafts: &mut ReportDrafts) -> Outcome {
    if let Some(caps) = PATTERNS.file_header.captures(line) {
        let name = clean_file_name(&caps[1]);
        let Ok(total) = caps[2].parse::<u64>() else {
            drafts.file_cursor = None;
            return Outcome::Skipped(DiagnosticKind::LineSkipped);
        };

        if drafts.files.iter().any(|stat| stat.file == name) {
            // Rows under a repeated header must not land on another file.
            drafts.file_cursor = None;
            return Outcome::Skipped(DiagnosticKind::DuplicateFile);
        }

        drafts.files.push(FileStat::new(&name, total));
        drafts.file_cursor = Some(drafts.files.len() - 1);
        return Outcome::Matched;
    }

    let Some(caps) = PATTERNS.file_severity_row.captures(line) else {
        return Outcome::Skipped(DiagnosticKind::LineSkipped);
    };
    let (Some(severity), Ok(count)) = (Severity::from_label(&caps[1]), caps[2].parse::<u64>())
    else {
        return Outcome::Skipped(DiagnosticKind::LineSkipped);
    };

    let Some(stat) = drafts
        .file_cursor
        .and_then(|idx| drafts.files.get_mut(idx))
    else {
        return Outcome::Skipped(DiagnosticKind::SectionAmbiguous);
    };
    stat.set(severity, count);
    Outcome::Matched
}

/// Detailed issue lines:
/// `<marker> <glyph> [<Type>] <path>:<line> - <description> [metadata]`.
pub fn extract_issue(line: &str, drafts: &mut ReportDrafts) -> Outcome {
    match parse_issue_line(line) {
        Some(issue) => {
            drafts.issues.push(issue);
            Outcome::Matched
        }
        None => Outcome::Skipped(DiagnosticKind::LineSkipped),
    }
}

pub fn parse_issue_line(line: &str) -> Option<Issue> {
    let body = glyph::strip_alert_marker(line);
    let (severity, rest) = glyph::split_severity_glyph(body)?;
    let caps = PATTERNS.issue_body.captures(rest)?;

    let line_number = caps[3].parse::<u32>().ok().filter(|n| *n >= 1)?;

    Some(Issue {
        severity,
        issue_type: caps[1].to_string(),
        file: clean_file_name(&caps[2]),
        line: line_number,
        description: truncate_description(&caps[4]).to_string(),
    })
}
