//! Report parsing example.
//!
//! Parses a small analyzer report, prints the score, the per-file
//! breakdown and any skipped lines, then the model as JSON.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p report-score-demos --example parse_report
//! ```

use report_score_core::{ScoringPolicy, Severity};
use report_score_parser::parse_with_report;

const REPORT: &str = "\
SUMMARY
-------
Analyzed 4 files, found 3 issues

SEVERITY BREAKDOWN
------------------
Critical : 1
Medium : 2

FILE-WISE BREAKDOWN
-------------------
File: src/main/java/Account.java (Total: 2)
  Critical : 1
  Medium : 1
File: src/main/java/Ledger.java (Total: 1)
  Medium : 1

DETAILED ISSUES
---------------
\u{1F6A8} \u{1F534} [DeficientEncapsulation] Account.java:3 - Field 'balance' is public | Suggestions: make it private
\u{1F6A8} \u{1F7E1} [MagicNumber] Account.java:27 - Literal 0.015 [Score: 1.20]
\u{1F6A8} \u{1F7E1} [LongStatement] Ledger.java:41 - Statement spans 210 characters
   (continuation lines are skipped)
";

fn main() {
    let run = parse_with_report(REPORT, ScoringPolicy::PerFileRatio);
    let report = &run.report;

    println!(
        "Score {} ({}) for {} issue(s) across {} file(s)",
        report.quality_score, report.quality_grade, report.total_issues, report.total_files
    );

    for severity in Severity::ALL {
        println!("  {:<8} {}", severity, report.severity_stats.get(severity));
    }

    println!("\nPer file:");
    for stat in &report.file_stats {
        println!("  {:<14} total={}", stat.file, stat.total);
    }

    println!("\nSkipped lines:");
    for skipped in &run.diagnostics.skipped {
        println!("  line {}: {:?} {:?}", skipped.line, skipped.kind, skipped.text);
    }

    match serde_json::to_string_pretty(report) {
        Ok(json) => println!("\n{json}"),
        Err(e) => eprintln!("Failed to serialize report: {e}"),
    }
}
