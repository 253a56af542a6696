//! Parse runs and batch summaries.

use report_score_core::{ParsedReport, QualityGrade, ScoringPolicy};
use serde::{Deserialize, Serialize};

use crate::parser::ParseDiagnostics;

/// Result of one parse with its diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParseRun {
    pub policy: ScoringPolicy,
    pub report: ParsedReport,
    pub diagnostics: ParseDiagnostics,
}

/// One report in a batch run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchEntry {
    pub source: String,
    pub parse_error: bool,
    pub quality_score: u8,
    pub quality_grade: QualityGrade,
    pub total_issues: u64,
    pub total_files: u64,
    /// Why the report fell back to raw text, when it did.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure: Option<String>,
}

impl BatchEntry {
    pub fn from_run(source: &str, run: &ParseRun) -> Self {
        Self {
            source: source.to_string(),
            parse_error: run.report.parse_error,
            quality_score: run.report.quality_score,
            quality_grade: run.report.quality_grade,
            total_issues: run.report.total_issues,
            total_files: run.report.total_files,
            failure: run.diagnostics.failure.clone(),
        }
    }
}

/// Summary of a batch run over many reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub generated_at: String,
    pub policy: ScoringPolicy,
    /// Entries sorted by source for deterministic output.
    pub entries: Vec<BatchEntry>,
}

impl BatchSummary {
    /// Lowest score among reports that parsed.
    pub fn lowest_score(&self) -> Option<u8> {
        self.entries
            .iter()
            .filter(|entry| !entry.parse_error)
            .map(|entry| entry.quality_score)
            .min()
    }

    /// Entries scoring below `threshold`. Fallbacks score 0, so they are
    /// included for any non-zero threshold.
    pub fn below(&self, threshold: u8) -> Vec<&BatchEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.quality_score < threshold)
            .collect()
    }

    /// Entries that fell back to raw text.
    pub fn failures(&self) -> Vec<&BatchEntry> {
        self.entries.iter().filter(|entry| entry.parse_error).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(source: &str, score: u8, parse_error: bool) -> BatchEntry {
        BatchEntry {
            source: source.to_string(),
            parse_error,
            quality_score: score,
            quality_grade: report_score_core::grade_for_score(score),
            total_issues: 0,
            total_files: 0,
            failure: parse_error.then(|| "report is empty".to_string()),
        }
    }

    fn summary() -> BatchSummary {
        BatchSummary {
            generated_at: "2026-01-01T00:00:00Z".to_string(),
            policy: ScoringPolicy::PerFileRatio,
            entries: vec![
                entry("a.txt", 95, false),
                entry("b.txt", 0, true),
                entry("c.txt", 61, false),
            ],
        }
    }

    #[test]
    fn test_lowest_score_ignores_fallbacks() {
        assert_eq!(summary().lowest_score(), Some(61));
    }

    #[test]
    fn test_below_threshold() {
        let batch = summary();
        let low: Vec<&str> = batch.below(70).iter().map(|e| e.source.as_str()).collect();
        assert_eq!(low, vec!["b.txt", "c.txt"]);
        assert_eq!(batch.failures().len(), 1);
        assert!(batch.below(0).is_empty());
    }

    #[test]
    fn test_entry_omits_missing_failure() {
        let json = serde_json::to_string(&entry("a.txt", 95, false)).unwrap();
        assert!(!json.contains("failure"));
        assert!(json.contains("\"quality_grade\":\"A+\""));
    }
}
