//! Core model types and scoring for static-analysis reports.
//!
//! This crate defines the normalized model a report parser produces and the
//! pure functions derived from it:
//!
//! - [`ParsedReport`]: aggregate of issues, per-severity, per-type and
//!   per-file counts, totals, quality score and grade.
//! - [`Issue`]: a single finding with severity, type, file and line.
//! - [`SeverityStats`], [`FileStat`], [`TypeCount`]: count tables.
//! - [`ScoringPolicy`] with [`score_report`] and [`grade_for_score`]: the
//!   0–100 score and its letter grade.
//!
//! Validation ([`validate_report`]) checks a model's structural invariants.
//!
//! # Example
//!
//! ```
//! use report_score_core::*;
//!
//! let severity = SeverityStats { critical: 0, high: 0, medium: 5, low: 0 };
//! let score = score_report(ScoringPolicy::FlatCount, &severity, 5, 1);
//! assert_eq!(score, 45);
//! assert_eq!(grade_for_score(score), QualityGrade::F);
//! ```

mod scoring;
mod types;
mod validate;

pub use scoring::{ScoringPolicy, grade_for_score, score_report};
pub use types::*;
pub use validate::{ValidationError, validate_report};
