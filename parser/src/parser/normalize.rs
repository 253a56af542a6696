//! Report-text normalization and binary-content detection.

use regex::Regex;
use std::sync::LazyLock;

use super::IndexedLine;
use crate::error::ParseFailure;

/// Normalizes raw report text for line-by-line parsing.
///
/// Removes a leading byte-order mark and ANSI color escapes, unifies line
/// endings, and trims trailing whitespace. Leading whitespace is kept
/// because per-file severity rows are identified by their indentation.
///
/// Text that still contains control characters (other than tab and form
/// feed) or U+FFFD replacement characters after cleanup is rejected as
/// binary content.
pub fn normalize_report_text(raw: &str) -> Result<String, ParseFailure> {
    static ANSI_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"\x1b\[[0-9;?]*[ -/]*[@-~]").expect("static regex must compile"));

    let without_bom = raw.strip_prefix('\u{FEFF}').unwrap_or(raw);
    let stripped = ANSI_RE.replace_all(without_bom, "");
    let replaced = stripped.replace("\r\n", "\n").replace('\r', "\n");

    let mut normalized: Vec<&str> = Vec::new();
    for (line_idx, line) in replaced.lines().enumerate() {
        if let Some(column) = line.chars().position(is_binary_char) {
            return Err(ParseFailure::BinaryContent {
                line: line_idx + 1,
                column: column + 1,
            });
        }
        normalized.push(line.trim_end());
    }

    Ok(normalized.join("\n"))
}

pub fn to_indexed_lines(normalized: &str) -> Vec<IndexedLine> {
    normalized
        .lines()
        .enumerate()
        .map(|(index, text)| IndexedLine {
            index,
            text: text.to_string(),
        })
        .collect()
}

fn is_binary_char(ch: char) -> bool {
    ch == '\u{FFFD}' || (ch.is_control() && !matches!(ch, '\t' | '\u{0C}'))
}
