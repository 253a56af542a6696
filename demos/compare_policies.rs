//! Scoring policy comparison example.
//!
//! Scores the same severity counts under both policies across a range of
//! project sizes, showing how the per-file ratio rewards larger projects
//! while the flat count does not.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p report-score-demos --example compare_policies
//! ```

use report_score_core::{ScoringPolicy, SeverityStats, grade_for_score, score_report};

fn main() {
    let stats = SeverityStats {
        critical: 0,
        high: 1,
        medium: 2,
        low: 1,
    };
    let total_issues = stats.total();

    println!("{:>6}  {:>14}  {:>10}", "files", "per_file_ratio", "flat_count");
    for total_files in [0, 1, 4, 10, 50] {
        let per_file = score_report(ScoringPolicy::PerFileRatio, &stats, total_issues, total_files);
        let flat = score_report(ScoringPolicy::FlatCount, &stats, total_issues, total_files);
        println!(
            "{:>6}  {:>10} {:<3}  {:>6} {:<3}",
            total_files,
            per_file,
            grade_for_score(per_file),
            flat,
            grade_for_score(flat)
        );
    }
}
