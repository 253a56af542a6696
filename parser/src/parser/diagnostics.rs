//! Per-line diagnostics collected during a parse run.

use serde::{Deserialize, Serialize};

use super::Section;

/// Why a line contributed nothing to the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// A section line did not match its extractor's pattern.
    LineSkipped,
    /// An indented per-file severity row with no file header before it.
    SectionAmbiguous,
    /// A section header for a section already passed.
    OutOfOrderHeader,
    /// A file header whose basename was already listed.
    DuplicateFile,
    /// A summary line after the first one.
    RepeatedSummary,
}

/// One skipped line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineDiagnostic {
    /// 1-based line number in the normalized text.
    pub line: usize,
    pub section: Section,
    pub kind: DiagnosticKind,
    pub text: String,
}

/// Diagnostics for a single parse run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParseDiagnostics {
    pub total_lines: usize,
    /// Lines that are neither blank nor rule lines.
    pub relevant_lines: usize,
    pub recognized_lines: usize,
    /// Sections entered, in order.
    pub sections_seen: Vec<Section>,
    pub skipped: Vec<LineDiagnostic>,
    /// Set when the whole report fell back to raw text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure: Option<String>,
}

impl ParseDiagnostics {
    pub fn coverage(&self) -> f64 {
        if self.relevant_lines == 0 {
            return 0.0;
        }
        self.recognized_lines as f64 / self.relevant_lines as f64
    }

    pub fn count(&self, kind: DiagnosticKind) -> usize {
        self.skipped.iter().filter(|entry| entry.kind == kind).count()
    }

    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        if let Some(ref failure) = self.failure {
            warnings.push(format!("Report fell back to raw text: {failure}"));
        }

        let skipped = self.count(DiagnosticKind::LineSkipped);
        if skipped > 0 {
            warnings.push(format!("Skipped {skipped} lines that matched no pattern"));
        }

        let ambiguous = self.count(DiagnosticKind::SectionAmbiguous);
        if ambiguous > 0 {
            warnings.push(format!(
                "Ignored {ambiguous} per-file severity rows without a file header"
            ));
        }

        let out_of_order = self.count(DiagnosticKind::OutOfOrderHeader);
        if out_of_order > 0 {
            warnings.push(format!("Ignored {out_of_order} out-of-order section headers"));
        }

        let duplicates = self.count(DiagnosticKind::DuplicateFile);
        if duplicates > 0 {
            warnings.push(format!("Ignored {duplicates} repeated file headers"));
        }

        if self.count(DiagnosticKind::RepeatedSummary) > 0 {
            warnings.push("Multiple summary lines; the first one was used".to_string());
        }

        warnings
    }
}
