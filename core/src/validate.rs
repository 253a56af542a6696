//! Parsed report validation.
//!
//! Checks the structural invariants of a [`ParsedReport`] so consumers that
//! receive a model from elsewhere (deserialized JSON, a cache, a test
//! fixture) can reject one that no parser run could have produced.
//!
//! # Examples
//!
//! ```
//! use report_score_core::*;
//!
//! let report = ParsedReport::fallback("not a report");
//! assert!(validate_report(&report).is_empty());
//!
//! let mut bad = report.clone();
//! bad.raw_content = None;
//! assert_eq!(validate_report(&bad), vec![ValidationError::MissingRawContent]);
//! ```

use std::collections::HashSet;

use thiserror::Error;

use crate::{ParsedReport, QualityGrade, grade_for_score};

/// Parsed report validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Quality score above 100.
    #[error("quality score out of range: {0}")]
    ScoreOutOfRange(u8),
    /// Grade does not correspond to the score.
    #[error("grade {grade} does not match score {score}")]
    GradeMismatch { score: u8, grade: QualityGrade },
    /// A fallback report without the original text.
    #[error("parse error set but raw content is missing")]
    MissingRawContent,
    /// An issue with a line number of zero.
    #[error("issue in {0} has line number 0")]
    ZeroLineNumber(String),
    /// An issue with an empty type or file.
    #[error("issue at index {0} has an empty type or file")]
    IncompleteIssue(usize),
    /// Two per-file entries share a basename.
    #[error("duplicate file entry: {0}")]
    DuplicateFile(String),
    /// Two per-type entries share a label.
    #[error("duplicate type entry: {0}")]
    DuplicateType(String),
}

/// Validates a parsed report, returning every violation found.
///
/// Fallback reports (`parse_error` set) are only checked for the presence of
/// raw content, since their statistics are placeholders.
pub fn validate_report(report: &ParsedReport) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if report.parse_error {
        if report.raw_content.is_none() {
            errors.push(ValidationError::MissingRawContent);
        }
        return errors;
    }

    if report.quality_score > 100 {
        errors.push(ValidationError::ScoreOutOfRange(report.quality_score));
    } else if grade_for_score(report.quality_score) != report.quality_grade {
        errors.push(ValidationError::GradeMismatch {
            score: report.quality_score,
            grade: report.quality_grade,
        });
    }

    for (idx, issue) in report.issues.iter().enumerate() {
        if issue.line == 0 {
            errors.push(ValidationError::ZeroLineNumber(issue.file.clone()));
        }
        if issue.issue_type.trim().is_empty() || issue.file.trim().is_empty() {
            errors.push(ValidationError::IncompleteIssue(idx));
        }
    }

    let mut seen_files: HashSet<&str> = HashSet::new();
    for stat in &report.file_stats {
        if !seen_files.insert(stat.file.as_str()) {
            errors.push(ValidationError::DuplicateFile(stat.file.clone()));
        }
    }

    let mut seen_types: HashSet<&str> = HashSet::new();
    for entry in &report.type_stats {
        if !seen_types.insert(entry.label.as_str()) {
            errors.push(ValidationError::DuplicateType(entry.label.clone()));
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use crate::{FileStat, Issue, Severity, SeverityStats, TypeCount};

    use super::*;

    fn clean_report() -> ParsedReport {
        ParsedReport {
            issues: vec![Issue {
                severity: Severity::Medium,
                issue_type: "LongStatement".to_string(),
                file: "LongStatementExample.java".to_string(),
                line: 7,
                description: "Statement too long".to_string(),
            }],
            file_stats: vec![FileStat::new("LongStatementExample.java", 1)],
            severity_stats: SeverityStats {
                medium: 1,
                ..SeverityStats::default()
            },
            type_stats: vec![TypeCount::new("LongStatement", 1)],
            total_files: 1,
            total_issues: 1,
            quality_score: 82,
            quality_grade: QualityGrade::A,
            parse_error: false,
            raw_content: None,
        }
    }

    #[test]
    fn test_validate_accepts_consistent_report() {
        assert!(validate_report(&clean_report()).is_empty());
    }

    #[test]
    fn test_validate_rejects_grade_mismatch() {
        let mut report = clean_report();
        report.quality_grade = QualityGrade::APlus;
        assert_eq!(
            validate_report(&report),
            vec![ValidationError::GradeMismatch {
                score: 82,
                grade: QualityGrade::APlus
            }]
        );
    }

    #[test]
    fn test_validate_rejects_out_of_range_score() {
        let mut report = clean_report();
        report.quality_score = 140;
        assert_eq!(
            validate_report(&report),
            vec![ValidationError::ScoreOutOfRange(140)]
        );
    }

    #[test]
    fn test_validate_reports_every_issue_problem() {
        let mut report = clean_report();
        report.issues[0].line = 0;
        report.issues[0].issue_type.clear();
        report
            .file_stats
            .push(FileStat::new("LongStatementExample.java", 3));
        report.type_stats.push(TypeCount::new("LongStatement", 2));

        let errors = validate_report(&report);
        assert_eq!(
            errors,
            vec![
                ValidationError::ZeroLineNumber("LongStatementExample.java".to_string()),
                ValidationError::IncompleteIssue(0),
                ValidationError::DuplicateFile("LongStatementExample.java".to_string()),
                ValidationError::DuplicateType("LongStatement".to_string()),
            ]
        );
    }

    #[test]
    fn test_validate_fallback_only_checks_raw_content() {
        let mut report = ParsedReport::fallback("raw");
        report.quality_score = 200;
        assert!(validate_report(&report).is_empty());
    }
}
