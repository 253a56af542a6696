//! Reconciliation of redundant report statistics.
//!
//! A report states most numbers twice: once in a breakdown section and once
//! implicitly through the detailed issue list. Precedence:
//!
//! - severity counts: breakdown section when it had any row, else counted
//!   from issues;
//! - total issues: `max(summary, issue count)`, replaced by the severity sum
//!   when the breakdown section had any row;
//! - type and file counts: breakdown section when non-empty, else derived
//!   from issues;
//! - total files: summary, else the number of distinct files.

use report_score_core::{FileStat, Issue, SeverityStats, TypeCount};

use super::extract::ReportDrafts;

/// Final statistics ready for scoring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciled {
    pub issues: Vec<Issue>,
    pub file_stats: Vec<FileStat>,
    pub severity_stats: SeverityStats,
    pub type_stats: Vec<TypeCount>,
    pub total_files: u64,
    pub total_issues: u64,
}

pub fn reconcile(drafts: ReportDrafts) -> Reconciled {
    let ReportDrafts {
        summary,
        no_issues_marker,
        severity,
        types,
        files,
        issues,
        ..
    } = drafts;

    let declared_issues = if no_issues_marker {
        0
    } else {
        summary.map_or(0, |s| s.issues)
    };
    let issue_count = issues.len() as u64;

    let (severity_stats, total_issues) = match severity {
        Some(breakdown) => (breakdown, breakdown.total()),
        None => (
            severity_from_issues(&issues),
            declared_issues.max(issue_count),
        ),
    };

    let type_stats = if types.is_empty() && !issues.is_empty() {
        types_from_issues(&issues)
    } else {
        types
    };

    let file_stats = if files.is_empty() && !issues.is_empty() {
        files_from_issues(&issues)
    } else {
        files
    };

    let declared_files = summary.map_or(0, |s| s.files);
    let total_files = if declared_files == 0 && !file_stats.is_empty() {
        file_stats.len() as u64
    } else {
        declared_files
    };

    Reconciled {
        issues,
        file_stats,
        severity_stats,
        type_stats,
        total_files,
        total_issues,
    }
}

fn severity_from_issues(issues: &[Issue]) -> SeverityStats {
    let mut stats = SeverityStats::default();
    for issue in issues {
        stats.increment(issue.severity);
    }
    stats
}

fn types_from_issues(issues: &[Issue]) -> Vec<TypeCount> {
    let mut types: Vec<TypeCount> = Vec::new();
    for issue in issues {
        match types.iter_mut().find(|entry| entry.label == issue.issue_type) {
            Some(entry) => entry.count += 1,
            None => types.push(TypeCount::new(&issue.issue_type, 1)),
        }
    }
    types
}

fn files_from_issues(issues: &[Issue]) -> Vec<FileStat> {
    let mut files: Vec<FileStat> = Vec::new();
    for issue in issues {
        let idx = match files.iter().position(|stat| stat.file == issue.file) {
            Some(idx) => idx,
            None => {
                files.push(FileStat::new(&issue.file, 0));
                files.len() - 1
            }
        };
        files[idx].record(issue.severity);
    }
    files
}
