//! Report model type definitions.
//!
//! This module defines the normalized data model produced from an analyzer
//! report: individual [`Issue`]s, per-severity, per-type and per-file counts,
//! and the [`ParsedReport`] aggregate that rendering and export layers read.
//! The types serialize with [`serde`] using the camelCase field names the
//! report viewers expect.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Severity of a single finding.
///
/// Variants are declared from most to least severe, so the derived ordering
/// sorts critical findings first.
///
/// # Examples
///
/// ```
/// use report_score_core::Severity;
///
/// assert_eq!(Severity::from_label("critical"), Some(Severity::Critical));
/// assert_eq!(Severity::from_label(" HIGH "), Some(Severity::High));
/// assert_eq!(Severity::from_label("Blocker"), None);
/// assert!(Severity::Critical < Severity::Low);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    /// All severities, most severe first.
    pub const ALL: [Severity; 4] = [
        Severity::Critical,
        Severity::High,
        Severity::Medium,
        Severity::Low,
    ];

    /// Lowercase wire name (`"critical"`, `"high"`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    /// Capitalized label as printed in report breakdown sections.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }

    /// Resolves a breakdown label, ignoring case and surrounding whitespace.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|severity| severity.as_str().eq_ignore_ascii_case(label))
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Issue counts per severity.
///
/// # Examples
///
/// ```
/// use report_score_core::{Severity, SeverityStats};
///
/// let mut stats = SeverityStats::default();
/// stats.increment(Severity::High);
/// stats.set(Severity::Medium, 4);
/// assert_eq!(stats.get(Severity::High), 1);
/// assert_eq!(stats.total(), 5);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityStats {
    pub critical: u64,
    pub high: u64,
    pub medium: u64,
    pub low: u64,
}

impl SeverityStats {
    /// Returns the count for one severity.
    pub fn get(&self, severity: Severity) -> u64 {
        match severity {
            Severity::Critical => self.critical,
            Severity::High => self.high,
            Severity::Medium => self.medium,
            Severity::Low => self.low,
        }
    }

    /// Overwrites the count for one severity.
    pub fn set(&mut self, severity: Severity, count: u64) {
        *self.slot(severity) = count;
    }

    /// Adds one to the count for a severity.
    pub fn increment(&mut self, severity: Severity) {
        let slot = self.slot(severity);
        *slot = slot.saturating_add(1);
    }

    /// Sum over all four severities.
    pub fn total(&self) -> u64 {
        Severity::ALL
            .into_iter()
            .fold(0u64, |acc, severity| acc.saturating_add(self.get(severity)))
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    fn slot(&mut self, severity: Severity) -> &mut u64 {
        match severity {
            Severity::Critical => &mut self.critical,
            Severity::High => &mut self.high,
            Severity::Medium => &mut self.medium,
            Severity::Low => &mut self.low,
        }
    }
}

/// One finding from the detailed issues listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub severity: Severity,
    /// Category token such as `DeficientEncapsulation`, used verbatim.
    #[serde(rename = "type")]
    pub issue_type: String,
    /// File basename, or `Unknown` when the analyzer could not attribute one.
    pub file: String,
    /// 1-based line number.
    pub line: u32,
    /// Finding text with trailing score/risk/suggestion metadata removed.
    pub description: String,
}

/// Per-file severity counts.
///
/// `total` comes from the file header line and is not recomputed from the
/// severity counts; the two may disagree.
///
/// # Examples
///
/// ```
/// use report_score_core::{FileStat, Severity};
///
/// let mut stat = FileStat::new("LongStatementExample.java", 5);
/// stat.set(Severity::Medium, 5);
/// assert_eq!(stat.medium, 5);
/// assert_eq!(stat.total, 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileStat {
    pub file: String,
    pub critical: u64,
    pub high: u64,
    pub medium: u64,
    pub low: u64,
    pub total: u64,
}

impl FileStat {
    /// Creates an entry with zeroed severities and the given total.
    pub fn new(file: &str, total: u64) -> Self {
        Self {
            file: file.to_string(),
            critical: 0,
            high: 0,
            medium: 0,
            low: 0,
            total,
        }
    }

    /// Severity counts of this file as a [`SeverityStats`].
    pub fn severities(&self) -> SeverityStats {
        SeverityStats {
            critical: self.critical,
            high: self.high,
            medium: self.medium,
            low: self.low,
        }
    }

    pub fn set(&mut self, severity: Severity, count: u64) {
        *self.slot(severity) = count;
    }

    /// Counts one issue: bumps the severity and the total.
    pub fn record(&mut self, severity: Severity) {
        let slot = self.slot(severity);
        *slot = slot.saturating_add(1);
        self.total = self.total.saturating_add(1);
    }

    fn slot(&mut self, severity: Severity) -> &mut u64 {
        match severity {
            Severity::Critical => &mut self.critical,
            Severity::High => &mut self.high,
            Severity::Medium => &mut self.medium,
            Severity::Low => &mut self.low,
        }
    }
}

/// Count of issues for one category label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeCount {
    pub label: String,
    pub count: u64,
}

impl TypeCount {
    pub fn new(label: &str, count: u64) -> Self {
        Self {
            label: label.to_string(),
            count,
        }
    }
}

/// Letter grade derived from a quality score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QualityGrade {
    #[serde(rename = "A+")]
    APlus,
    A,
    B,
    C,
    D,
    F,
}

impl QualityGrade {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::APlus => "A+",
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::F => "F",
        }
    }
}

impl fmt::Display for QualityGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Normalized result of parsing one analyzer report.
///
/// Built once per parse call and treated as read-only afterwards. When the
/// input could not be interpreted at all, `parse_error` is set, the
/// statistics are empty and `raw_content` carries the original text so
/// viewers can fall back to showing it verbatim.
///
/// # Examples
///
/// ```
/// use report_score_core::{ParsedReport, QualityGrade};
///
/// let fallback = ParsedReport::fallback("\u{0}\u{1}garbage");
/// assert!(fallback.parse_error);
/// assert_eq!(fallback.raw_content.as_deref(), Some("\u{0}\u{1}garbage"));
/// assert_eq!(fallback.quality_grade, QualityGrade::F);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedReport {
    pub issues: Vec<Issue>,
    /// Per-file counts in the order the files were first seen.
    pub file_stats: Vec<FileStat>,
    pub severity_stats: SeverityStats,
    /// Per-type counts in the order the labels were first seen.
    pub type_stats: Vec<TypeCount>,
    pub total_files: u64,
    pub total_issues: u64,
    pub quality_score: u8,
    pub quality_grade: QualityGrade,
    pub parse_error: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_content: Option<String>,
}

impl ParsedReport {
    /// Builds the plain-text fallback for input that could not be parsed.
    pub fn fallback(raw: &str) -> Self {
        Self {
            issues: Vec::new(),
            file_stats: Vec::new(),
            severity_stats: SeverityStats::default(),
            type_stats: Vec::new(),
            total_files: 0,
            total_issues: 0,
            quality_score: 0,
            quality_grade: QualityGrade::F,
            parse_error: true,
            raw_content: Some(raw.to_string()),
        }
    }

    /// Issues of one severity, in report order.
    pub fn issues_with_severity(&self, severity: Severity) -> impl Iterator<Item = &Issue> {
        self.issues
            .iter()
            .filter(move |issue| issue.severity == severity)
    }

    /// Issues attributed to a file basename, in report order.
    pub fn issues_in_file<'a>(&'a self, file: &'a str) -> impl Iterator<Item = &'a Issue> {
        self.issues.iter().filter(move |issue| issue.file == file)
    }

    /// Looks up the per-file entry for a basename.
    pub fn file_stat(&self, file: &str) -> Option<&FileStat> {
        self.file_stats.iter().find(|stat| stat.file == file)
    }

    /// Looks up the count for a type label.
    pub fn type_count(&self, label: &str) -> Option<u64> {
        self.type_stats
            .iter()
            .find(|entry| entry.label == label)
            .map(|entry| entry.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue(severity: Severity, file: &str) -> Issue {
        Issue {
            severity,
            issue_type: "LongMethod".to_string(),
            file: file.to_string(),
            line: 1,
            description: "too long".to_string(),
        }
    }

    #[test]
    fn test_severity_serializes_lowercase() {
        let json = serde_json::to_string(&Severity::Critical).unwrap();
        assert_eq!(json, "\"critical\"");
        let back: Severity = serde_json::from_str("\"low\"").unwrap();
        assert_eq!(back, Severity::Low);
    }

    #[test]
    fn test_grade_serializes_with_plus_sign() {
        let json = serde_json::to_string(&QualityGrade::APlus).unwrap();
        assert_eq!(json, "\"A+\"");
        assert_eq!(QualityGrade::APlus.to_string(), "A+");
    }

    #[test]
    fn test_file_stat_record_bumps_total() {
        let mut stat = FileStat::new("Foo.java", 0);
        stat.record(Severity::High);
        stat.record(Severity::High);
        stat.record(Severity::Low);
        assert_eq!(stat.high, 2);
        assert_eq!(stat.low, 1);
        assert_eq!(stat.total, 3);
        assert_eq!(stat.severities().total(), 3);
    }

    #[test]
    fn test_severity_stats_total_saturates() {
        let stats = SeverityStats {
            critical: u64::MAX,
            high: 1,
            medium: 0,
            low: 0,
        };
        assert_eq!(stats.total(), u64::MAX);
    }

    #[test]
    fn test_parsed_report_uses_camel_case_fields() {
        let report = ParsedReport::fallback("raw");
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"parseError\":true"));
        assert!(json.contains("\"rawContent\":\"raw\""));
        assert!(json.contains("\"severityStats\""));
    }

    #[test]
    fn test_issue_type_field_is_named_type() {
        let json = serde_json::to_string(&issue(Severity::Medium, "A.java")).unwrap();
        assert!(json.contains("\"type\":\"LongMethod\""));
    }

    #[test]
    fn test_issue_queries() {
        let mut report = ParsedReport::fallback("");
        report.issues = vec![
            issue(Severity::High, "A.java"),
            issue(Severity::Low, "B.java"),
            issue(Severity::High, "B.java"),
        ];
        assert_eq!(report.issues_with_severity(Severity::High).count(), 2);
        assert_eq!(report.issues_in_file("B.java").count(), 2);
        assert!(report.file_stat("A.java").is_none());
    }
}
