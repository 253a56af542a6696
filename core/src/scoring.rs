//! Quality scoring policies and grade mapping.
//!
//! Two scoring formulas are in circulation for analyzer reports and they do
//! not agree with each other, so the formula is an explicit
//! [`ScoringPolicy`] chosen by the caller.
//!
//! # Examples
//!
//! ```
//! use report_score_core::*;
//!
//! let stats = SeverityStats { critical: 0, high: 1, medium: 2, low: 0 };
//! let per_file = score_report(ScoringPolicy::PerFileRatio, &stats, 3, 10);
//! let flat = score_report(ScoringPolicy::FlatCount, &stats, 3, 10);
//! assert_eq!(per_file, 72);
//! assert_eq!(flat, 61);
//! assert_eq!(grade_for_score(per_file), QualityGrade::B);
//! ```

use serde::{Deserialize, Serialize};

use crate::{QualityGrade, SeverityStats};

/// Maximum deduction contributed by the severity weight.
const MAX_SEVERITY_PENALTY: f64 = 50.0;

/// Score used when issues exist but no file count is known.
const UNKNOWN_FILES_SCORE: u8 = 50;

/// Formula used to turn reconciled statistics into a 0–100 score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringPolicy {
    /// Density-based: issues per analyzed file, plus a severity penalty that
    /// also weighs low findings.
    #[default]
    PerFileRatio,
    /// Count-based: five points per issue, plus a severity penalty that
    /// ignores low findings.
    FlatCount,
}

impl ScoringPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PerFileRatio => "per_file_ratio",
            Self::FlatCount => "flat_count",
        }
    }
}

impl std::fmt::Display for ScoringPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Computes the quality score for reconciled statistics.
///
/// The result is always within `0..=100`.
pub fn score_report(
    policy: ScoringPolicy,
    severity: &SeverityStats,
    total_issues: u64,
    total_files: u64,
) -> u8 {
    if total_issues == 0 {
        return 100;
    }

    let score = match policy {
        ScoringPolicy::PerFileRatio => {
            if total_files == 0 {
                return UNKNOWN_FILES_SCORE;
            }
            let weight = severity_weight(severity, true);
            let issues_per_file = total_issues as f64 / total_files as f64;
            let base = (100.0 - issues_per_file * 15.0).max(0.0);
            let penalty = (weight * 2.0).min(MAX_SEVERITY_PENALTY);
            (base - penalty).max(0.0).round()
        }
        ScoringPolicy::FlatCount => {
            let weight = severity_weight(severity, false);
            let base = (100.0 - total_issues as f64 * 5.0).max(0.0);
            let penalty = (weight * 2.0).min(MAX_SEVERITY_PENALTY);
            (base - penalty).round().max(0.0)
        }
    };

    score.clamp(0.0, 100.0) as u8
}

/// Maps a score to its letter grade.
///
/// # Examples
///
/// ```
/// use report_score_core::{QualityGrade, grade_for_score};
///
/// assert_eq!(grade_for_score(100), QualityGrade::APlus);
/// assert_eq!(grade_for_score(89), QualityGrade::A);
/// assert_eq!(grade_for_score(49), QualityGrade::F);
/// ```
pub fn grade_for_score(score: u8) -> QualityGrade {
    match score {
        90.. => QualityGrade::APlus,
        80..=89 => QualityGrade::A,
        70..=79 => QualityGrade::B,
        60..=69 => QualityGrade::C,
        50..=59 => QualityGrade::D,
        _ => QualityGrade::F,
    }
}

fn severity_weight(severity: &SeverityStats, include_low: bool) -> f64 {
    let low = if include_low { severity.low as f64 } else { 0.0 };
    severity.critical as f64 * 10.0 + severity.high as f64 * 6.0 + severity.medium as f64 * 3.0 + low
}
