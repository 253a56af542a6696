//! Severity glyph table for detailed issue lines.
//!
//! Issue lines encode severity as a colored-circle emoji. The low glyph is a
//! two-codepoint sequence (white circle plus variation selector), so the
//! table is kept in descending byte-length order and matched
//! longest-prefix-first against the start of the line.

use report_score_core::Severity;

/// Alert marker the analyzer prints at the start of every issue line.
pub const ALERT_MARKER: &str = "\u{1F6A8}";

/// Exact glyph sequences, longest first.
pub const SEVERITY_GLYPHS: [(&str, Severity); 4] = [
    ("\u{26AA}\u{FE0F}", Severity::Low),
    ("\u{1F534}", Severity::Critical),
    ("\u{1F7E0}", Severity::High),
    ("\u{1F7E1}", Severity::Medium),
];

/// Strips leading whitespace and the alert marker, if present.
pub fn strip_alert_marker(line: &str) -> &str {
    let line = line.trim_start();
    line.strip_prefix(ALERT_MARKER).unwrap_or(line).trim_start()
}

/// Splits a leading severity glyph off `text`.
///
/// Returns the severity and the remainder with leading whitespace removed,
/// or `None` when `text` does not start with a known glyph.
pub fn split_severity_glyph(text: &str) -> Option<(Severity, &str)> {
    SEVERITY_GLYPHS.iter().find_map(|(glyph, severity)| {
        text.strip_prefix(*glyph)
            .map(|rest| (*severity, rest.trim_start()))
    })
}

/// Glyph sequence for a severity.
pub fn glyph_for(severity: Severity) -> &'static str {
    SEVERITY_GLYPHS
        .iter()
        .find(|(_, candidate)| *candidate == severity)
        .map(|(glyph, _)| *glyph)
        .unwrap_or_default()
}
