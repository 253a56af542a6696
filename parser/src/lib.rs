//! Static-analysis report parsing and quality scoring.
//!
//! This crate turns the plain-text report printed by the Java analyzer into
//! a typed [`ParsedReport`]: the individual issues, per-severity, per-type
//! and per-file counts, totals, and a 0–100 quality score with a letter
//! grade. Parsing is a single pure pass with no I/O and no shared state, so
//! it is safe to call from many threads at once.
//!
//! # Main entry points
//!
//! - [`parse`]: parse report text with the default scoring policy.
//! - [`parse_with_policy`]: same, with an explicit [`ScoringPolicy`].
//! - [`parse_with_report`]: same, plus per-line [`ParseDiagnostics`].
//! - [`parse_bytes`]: parse raw uploaded bytes that may not be UTF-8.
//! - [`parse_batch`]: parse many reports in parallel into a
//!   [`BatchSummary`](report::BatchSummary).
//!
//! None of these fail. Text that cannot be read as a report yields a model
//! with `parse_error` set and the original text in `raw_content`.
//!
//! # Example
//!
//! ```
//! use report_score_parser::parse;
//!
//! let text = "\
//! SUMMARY
//! -------
//! Analyzed 11 files, found 18 issues
//!
//! SEVERITY BREAKDOWN
//! ------------------
//! Critical : 4
//! High : 5
//! Medium : 9
//! ";
//!
//! let report = parse(text);
//! assert!(!report.parse_error);
//! assert_eq!(report.total_issues, 18);
//! assert_eq!(report.total_files, 11);
//! assert_eq!(report.severity_stats.critical, 4);
//! ```
//!
//! [`ParseDiagnostics`]: parser::ParseDiagnostics

pub mod config;
pub mod error;
pub mod output;
pub mod parser;
pub mod report;

use rayon::prelude::*;
use tracing::warn;

use report_score_core::{ParsedReport, ScoringPolicy};

use error::ParseFailure;
use parser::{ParseDiagnostics, ReportParser};
use report::{BatchEntry, BatchSummary, ParseRun};

/// Parses report text with the default [`ScoringPolicy`].
///
/// # Examples
///
/// ```
/// use report_score_core::QualityGrade;
/// use report_score_parser::parse;
///
/// let report = parse("Analyzed 0 files, found 0 issues");
/// assert_eq!(report.total_issues, 0);
/// assert_eq!(report.quality_score, 100);
/// assert_eq!(report.quality_grade, QualityGrade::APlus);
///
/// let garbage = parse("\u{0}\u{7f}\u{1}");
/// assert!(garbage.parse_error);
/// assert_eq!(garbage.raw_content.as_deref(), Some("\u{0}\u{7f}\u{1}"));
/// ```
pub fn parse(text: &str) -> ParsedReport {
    parse_with_policy(text, ScoringPolicy::default())
}

/// Parses report text, scoring it with `policy`.
pub fn parse_with_policy(text: &str, policy: ScoringPolicy) -> ParsedReport {
    parse_with_report(text, policy).report
}

/// Parses report text and returns the model together with diagnostics.
///
/// # Examples
///
/// ```
/// use report_score_core::ScoringPolicy;
/// use report_score_parser::parse_with_report;
/// use report_score_parser::parser::DiagnosticKind;
///
/// let text = "\
/// FILE-WISE BREAKDOWN
///   High : 2
/// File: Foo.java (Total: 2)
///   High : 2
/// ";
///
/// let run = parse_with_report(text, ScoringPolicy::FlatCount);
/// assert_eq!(run.report.file_stats.len(), 1);
/// assert_eq!(run.diagnostics.count(DiagnosticKind::SectionAmbiguous), 1);
/// ```
pub fn parse_with_report(text: &str, policy: ScoringPolicy) -> ParseRun {
    let mut parser = ReportParser::new(text).with_policy(policy);
    match parser.parse() {
        Ok(report) => ParseRun {
            policy,
            report,
            diagnostics: parser.diagnostics().clone(),
        },
        Err(failure) => fallback_run(text, policy, parser.diagnostics().clone(), &failure),
    }
}

/// Parses raw bytes, falling back to a lossy rendering when they are not
/// UTF-8.
pub fn parse_bytes(bytes: &[u8], policy: ScoringPolicy) -> ParseRun {
    match std::str::from_utf8(bytes) {
        Ok(text) => parse_with_report(text, policy),
        Err(err) => {
            let failure = ParseFailure::InvalidUtf8 {
                valid_up_to: err.valid_up_to(),
            };
            let lossy = String::from_utf8_lossy(bytes);
            fallback_run(&lossy, policy, ParseDiagnostics::default(), &failure)
        }
    }
}

/// Parses many reports in parallel.
///
/// Each input is a `(source, bytes)` pair; the source is only used to label
/// the entry. Entries come back sorted by source.
pub fn parse_batch<S, B>(inputs: &[(S, B)], policy: ScoringPolicy) -> BatchSummary
where
    S: AsRef<str> + Sync,
    B: AsRef<[u8]> + Sync,
{
    let mut entries: Vec<BatchEntry> = inputs
        .par_iter()
        .map(|(source, bytes)| {
            let run = parse_bytes(bytes.as_ref(), policy);
            BatchEntry::from_run(source.as_ref(), &run)
        })
        .collect();
    entries.sort_by(|a, b| a.source.cmp(&b.source));

    BatchSummary {
        generated_at: chrono::Utc::now().to_rfc3339(),
        policy,
        entries,
    }
}

fn fallback_run(
    raw: &str,
    policy: ScoringPolicy,
    mut diagnostics: ParseDiagnostics,
    failure: &ParseFailure,
) -> ParseRun {
    warn!(%failure, "Report could not be parsed; falling back to raw text");
    diagnostics.failure = Some(failure.to_string());
    ParseRun {
        policy,
        report: ParsedReport::fallback(raw),
        diagnostics,
    }
}
