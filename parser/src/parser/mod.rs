//! Analyzer report parser.
//!
//! This module turns the plain-text report printed by the Java analyzer into
//! a [`ParsedReport`]. The report is a sequence of titled sections:
//!
//! - a free-form preamble carrying the `Analyzed N files, found M issues`
//!   summary line;
//! - **SEVERITY BREAKDOWN**: `Critical : 4` rows;
//! - **ISSUE TYPE BREAKDOWN**: `<label> : <count>` rows;
//! - **FILE-WISE BREAKDOWN**: `File: <path> (Total: n)` headers followed by
//!   indented severity rows;
//! - **DETAILED ISSUES**: one emoji-tagged line per finding.
//!
//! # Architecture
//!
//! Parsing is a single fold over the normalized lines. A forward-only
//! [`sections::SectionRouter`] tags each line with its section, the
//! matching extractor folds it into draft accumulators, and the reconciler
//! settles disagreements between the breakdown sections and the issue list
//! before the configured [`ScoringPolicy`] scores the result.
//!
//! Most consumers should use [`parse`](crate::parse) or
//! [`parse_with_report`](crate::parse_with_report) rather than driving
//! [`ReportParser`] directly.

mod diagnostics;
mod extract;
mod glyph;
mod normalize;
mod reconcile;
mod sections;
mod util;

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use tracing::debug;

use report_score_core::{ParsedReport, ScoringPolicy, grade_for_score, score_report};

use crate::error::ParseFailure;
use extract::{Outcome, ReportDrafts};
use sections::{Route, SectionRouter};

pub use diagnostics::{DiagnosticKind, LineDiagnostic, ParseDiagnostics};
pub use extract::parse_issue_line;
pub use glyph::{ALERT_MARKER, SEVERITY_GLYPHS, glyph_for};
pub use util::{UNKNOWN_FILE, basename, clean_file_name, truncate_description};

/// Report region a line belongs to. Declared in report order; the router
/// only ever moves to a later variant.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Unclassified,
    Severity,
    Types,
    Files,
    Issues,
}

#[derive(Debug, Clone)]
pub(super) struct IndexedLine {
    pub(super) index: usize,
    pub(super) text: String,
}

/// Regex patterns for report lines.
static PATTERNS: LazyLock<ReportPatterns> = LazyLock::new(ReportPatterns::new);

struct ReportPatterns {
    // Summary
    summary: Regex,
    no_issues: Regex,

    // Breakdown rows
    severity_row: Regex,
    type_row: Regex,
    file_header: Regex,
    file_severity_row: Regex,

    // Detailed issues, after the severity glyph
    issue_body: Regex,
}

impl ReportPatterns {
    fn new() -> Self {
        // Constant patterns; a failed expect() is a typo here, not bad input.
        Self {
            // Analyzed 11 files, found 18 issues (...)
            summary: Regex::new(r"(?i)analyzed\s+(\d+)\s+files?\s*,\s*found\s+(\d+)\s+issues?")
                .expect("static regex must compile"),
            no_issues: Regex::new(r"(?i)\bno issues found\b").expect("static regex must compile"),

            // Critical : 4
            severity_row: Regex::new(r"(?i)^\s*(critical|high|medium|low)\s*:\s*(\d+)\s*$")
                .expect("static regex must compile"),
            // Deficient Encapsulation : 3
            type_row: Regex::new(r"^\s*([^:]+?)\s*:\s*(\d+)\s*$").expect("static regex must compile"),
            // File: src/Foo.java (Total: 5)
            file_header: Regex::new(r"^\s*File:\s*(.+?)\s*\(Total:\s*(\d+)\)\s*$")
                .expect("static regex must compile"),
            //   Medium : 5   (indentation required)
            file_severity_row: Regex::new(r"^\s+([A-Za-z]+)\s*:\s*(\d+)\s*$")
                .expect("static regex must compile"),

            // [LongMethod] src/Foo.java:10 - Method too long | Suggestions: ...
            issue_body: Regex::new(r"^\[([A-Za-z0-9]+)\]\s+(.+?):(\d+)\s+-\s*(.*)$")
                .expect("static regex must compile"),
        }
    }
}

/// Parser for analyzer report text.
pub struct ReportParser {
    raw_output: String,
    policy: ScoringPolicy,
    diagnostics: ParseDiagnostics,
}

impl ReportParser {
    /// Creates a parser for the given report text using the default policy.
    pub fn new(report: &str) -> Self {
        Self {
            raw_output: report.to_string(),
            policy: ScoringPolicy::default(),
            diagnostics: ParseDiagnostics::default(),
        }
    }

    /// Selects the scoring policy.
    pub fn with_policy(mut self, policy: ScoringPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> ScoringPolicy {
        self.policy
    }

    pub fn diagnostics(&self) -> &ParseDiagnostics {
        &self.diagnostics
    }

    /// Parses the report.
    ///
    /// Individual lines that fit no pattern are skipped and recorded in
    /// [`diagnostics`](Self::diagnostics); an error is returned only when
    /// the text as a whole cannot be treated as a report. Running `parse`
    /// again starts from fresh diagnostics and yields the same result.
    pub fn parse(&mut self) -> Result<ParsedReport, ParseFailure> {
        self.diagnostics = ParseDiagnostics::default();

        if self.raw_output.trim().is_empty() {
            return Err(ParseFailure::EmptyReport);
        }

        let normalized = normalize::normalize_report_text(&self.raw_output)?;
        let lines = normalize::to_indexed_lines(&normalized);
        self.diagnostics.total_lines = lines.len();

        let mut router = SectionRouter::new();
        let mut drafts = ReportDrafts::default();
        for line in &lines {
            self.process_line(line, &mut router, &mut drafts);
        }
        self.diagnostics.sections_seen = router.visited().to_vec();

        if self.diagnostics.recognized_lines == 0 {
            return Err(ParseFailure::Unrecognized);
        }

        let stats = reconcile::reconcile(drafts);
        let quality_score = score_report(
            self.policy,
            &stats.severity_stats,
            stats.total_issues,
            stats.total_files,
        );
        let quality_grade = grade_for_score(quality_score);
        debug!(
            policy = %self.policy,
            issues = stats.issues.len(),
            total_issues = stats.total_issues,
            total_files = stats.total_files,
            score = quality_score,
            grade = %quality_grade,
            skipped = self.diagnostics.skipped.len(),
            "Parsed report"
        );

        Ok(ParsedReport {
            issues: stats.issues,
            file_stats: stats.file_stats,
            severity_stats: stats.severity_stats,
            type_stats: stats.type_stats,
            total_files: stats.total_files,
            total_issues: stats.total_issues,
            quality_score,
            quality_grade,
            parse_error: false,
            raw_content: None,
        })
    }

    fn process_line(
        &mut self,
        line: &IndexedLine,
        router: &mut SectionRouter,
        drafts: &mut ReportDrafts,
    ) {
        let text = line.text.as_str();
        if util::is_layout_line(text) {
            return;
        }
        self.diagnostics.relevant_lines += 1;

        let section = match router.route(text) {
            Route::Enter(section) => {
                debug!(line = line.index + 1, ?section, "Entered report section");
                self.diagnostics.recognized_lines += 1;
                return;
            }
            Route::Stale(_) => {
                self.skip(line, router.current(), DiagnosticKind::OutOfOrderHeader);
                return;
            }
            Route::Body(section) => section,
        };

        let section_outcome = match section {
            Section::Unclassified => Outcome::Ignored,
            Section::Severity => extract::extract_severity_row(text, drafts),
            Section::Types => extract::extract_type_row(text, drafts),
            Section::Files => extract::extract_file_row(text, drafts),
            Section::Issues => extract::extract_issue(text, drafts),
        };
        // The summary may appear anywhere, but only on lines the section rejected.
        let outcome = match section_outcome {
            Outcome::Matched => Outcome::Matched,
            rejected => match extract::extract_summary(text, drafts) {
                Outcome::Ignored => rejected,
                summary => summary,
            },
        };

        match outcome {
            Outcome::Matched => self.diagnostics.recognized_lines += 1,
            Outcome::Skipped(kind) => self.skip(line, section, kind),
            Outcome::Ignored => {}
        }
    }

    fn skip(&mut self, line: &IndexedLine, section: Section, kind: DiagnosticKind) {
        debug!(line = line.index + 1, ?section, ?kind, text = %line.text, "Skipped report line");
        self.diagnostics.skipped.push(LineDiagnostic {
            line: line.index + 1,
            section,
            kind,
            text: line.text.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use report_score_core::{QualityGrade, Severity};

    use super::*;

    const SAMPLE_REPORT: &str = "\
JAVA CODE ANALYSIS REPORT
=========================

SUMMARY
-------
Analyzed 3 files, found 4 issues (1 critical, 1 high, 1 medium, 1 low)

SEVERITY BREAKDOWN
------------------
Critical : 1
High : 1
Medium : 1
Low : 1

ISSUE TYPE BREAKDOWN
--------------------
DeficientEncapsulation : 2
LongMethod : 2

FILE-WISE BREAKDOWN
-------------------
File: src/main/java/Account.java (Total: 3)
  Critical : 1
  High : 1
  Low : 1
File: src/main/java/Report.java (Total: 1)
  Medium : 1

DETAILED ISSUES
---------------
\u{1F6A8} \u{1F534} [DeficientEncapsulation] src/main/java/Account.java:3 - Field 'balance' (Risk: 2.10) - Public field exposure | Suggestions: Make it private
\u{1F6A8} \u{1F7E0} [DeficientEncapsulation] src/main/java/Account.java:4 - Field 'owner' [Risk: 1.20]
\u{1F6A8} \u{1F7E1} [LongMethod] src/main/java/Report.java:40 - Method 'render' has 80 statements [Score: 4.00]
\u{1F6A8} \u{26AA}\u{FE0F} [LongMethod] src/main/java/Account.java:90 - Method 'audit' has 31 statements
";

    #[test]
    fn test_parse_sample_report() {
        let mut parser = ReportParser::new(SAMPLE_REPORT);
        let report = parser.parse().expect("sample should parse");

        assert!(!report.parse_error);
        assert_eq!(report.total_files, 3);
        assert_eq!(report.total_issues, 4);
        assert_eq!(report.issues.len(), 4);
        assert_eq!(report.severity_stats.total(), 4);
        assert_eq!(report.type_count("LongMethod"), Some(2));

        let account = report.file_stat("Account.java").unwrap();
        assert_eq!((account.critical, account.high, account.low), (1, 1, 1));
        assert_eq!(account.total, 3);

        assert_eq!(report.issues[1].description, "Field 'owner'");
        assert_eq!(report.issues[3].severity, Severity::Low);

        // 4 issues / 3 files -> base 80; weight 10 + 6 + 3 + 1 = 20 -> penalty 40
        assert_eq!(report.quality_score, 40);
        assert_eq!(report.quality_grade, QualityGrade::F);
    }

    #[test]
    fn test_sample_report_diagnostics() {
        let mut parser = ReportParser::new(SAMPLE_REPORT);
        parser.parse().unwrap();
        let diagnostics = parser.diagnostics();

        assert_eq!(
            diagnostics.sections_seen,
            vec![
                Section::Severity,
                Section::Types,
                Section::Files,
                Section::Issues
            ]
        );
        assert!(diagnostics.skipped.is_empty(), "{:?}", diagnostics.skipped);
        // Title and SUMMARY lines are relevant but unrecognized.
        assert_eq!(diagnostics.relevant_lines, diagnostics.recognized_lines + 2);
    }

    #[test]
    fn test_policy_changes_score() {
        let mut parser = ReportParser::new(SAMPLE_REPORT).with_policy(ScoringPolicy::FlatCount);
        let report = parser.parse().unwrap();
        assert_eq!(parser.policy(), ScoringPolicy::FlatCount);
        // base 80; weight 10 + 6 + 3 = 19 -> penalty 38
        assert_eq!(report.quality_score, 42);
    }

    #[test]
    fn test_out_of_order_header_is_recorded() {
        let text = "\
DETAILED ISSUES
\u{1F6A8} \u{1F7E1} [LongMethod] A.java:1 - long
SEVERITY BREAKDOWN
Critical : 9
";
        let mut parser = ReportParser::new(text);
        let report = parser.parse().unwrap();

        assert_eq!(report.severity_stats.critical, 0);
        assert_eq!(report.severity_stats.medium, 1);
        let kinds: Vec<DiagnosticKind> = parser
            .diagnostics()
            .skipped
            .iter()
            .map(|d| d.kind)
            .collect();
        assert_eq!(
            kinds,
            vec![DiagnosticKind::OutOfOrderHeader, DiagnosticKind::LineSkipped]
        );
        assert_eq!(parser.diagnostics().skipped[0].line, 3);
    }

    #[test]
    fn test_rejects_empty_and_unrecognized_text() {
        assert_eq!(
            ReportParser::new("  \n\n ").parse(),
            Err(ParseFailure::EmptyReport)
        );
        assert_eq!(
            ReportParser::new("lorem ipsum\ndolor sit amet").parse(),
            Err(ParseFailure::Unrecognized)
        );
    }

    #[test]
    fn test_issue_descriptions_quoting_summary_text_stay_issues() {
        let text = "\
Analyzed 1 files, found 2 issues
DETAILED ISSUES
\u{1F6A8} \u{1F7E1} [MagicString] Checker.java:12 - Literal \"No issues found\" repeated 4 times
\u{1F6A8} \u{1F7E0} [HardcodedMessage] Banner.java:7 - Message \"Analyzed 9 files, found 9 issues\" is inlined
";
        let mut parser = ReportParser::new(text);
        let report = parser.parse().unwrap();

        assert_eq!(report.issues.len(), 2);
        assert_eq!(report.severity_stats.total(), 2);
        assert_eq!(report.total_issues, 2);
        assert_eq!(report.total_files, 1);
        assert_eq!(
            report.issues[0].description,
            "Literal \"No issues found\" repeated 4 times"
        );
        assert_eq!(report.issues[1].file, "Banner.java");
        assert!(parser.diagnostics().skipped.is_empty());
    }

    #[test]
    fn test_no_issues_marker_in_issue_section_still_counts() {
        let text = "\
Analyzed 2 files, found 5 issues
DETAILED ISSUES
No issues found! Your code looks clean.
";
        let mut parser = ReportParser::new(text);
        let report = parser.parse().unwrap();

        assert_eq!(report.total_issues, 0);
        assert_eq!(report.quality_score, 100);
        assert!(parser.diagnostics().skipped.is_empty());
    }

    #[test]
    fn test_reparse_resets_diagnostics() {
        let mut parser = ReportParser::new("Analyzed 1 files, found 0 issues\nstray");
        let first = parser.parse().unwrap();
        let first_diagnostics = parser.diagnostics().clone();
        let second = parser.parse().unwrap();
        assert_eq!(first, second);
        assert_eq!(&first_diagnostics, parser.diagnostics());
    }
}
