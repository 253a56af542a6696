//! Shared helpers for file names and issue descriptions.

/// Placeholder the analyzer prints when a finding has no source file.
const UNKNOWN_FILE_SENTINEL: &str = "UnknownFile";

/// Name used in the model for findings without a source file.
pub const UNKNOWN_FILE: &str = "Unknown";

/// Markers that start auxiliary metadata trailing an issue description.
const DESCRIPTION_METADATA_MARKERS: [&str; 3] = ["|", "[Score:", "[Risk:"];

/// Returns the final path segment, splitting on both `/` and `\`.
///
/// A path ending in a separator has an empty final segment.
pub fn basename(path: &str) -> &str {
    let trimmed = path.trim();
    trimmed.rsplit(['/', '\\']).next().unwrap_or(trimmed).trim()
}

/// Reduces a reported path to the basename used as the file key. The
/// analyzer's unknown-file sentinel and an empty final segment both map to
/// [`UNKNOWN_FILE`].
pub fn clean_file_name(path: &str) -> String {
    let name = basename(path);
    if name.is_empty() || name == UNKNOWN_FILE_SENTINEL {
        UNKNOWN_FILE.to_string()
    } else {
        name.to_string()
    }
}

/// Cuts an issue description at the earliest metadata marker and trims it.
pub fn truncate_description(description: &str) -> &str {
    let cut = DESCRIPTION_METADATA_MARKERS
        .iter()
        .filter_map(|marker| description.find(*marker))
        .min()
        .unwrap_or(description.len());
    description[..cut].trim()
}

/// Returns `true` for lines that carry no content: blanks and rule lines
/// such as `-------` or `=======` under section titles.
pub fn is_layout_line(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty()
        || (trimmed.len() >= 3 && trimmed.chars().all(|ch| matches!(ch, '-' | '=' | '_')))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basename_handles_both_separators() {
        assert_eq!(basename("src/main/java/Foo.java"), "Foo.java");
        assert_eq!(basename(r"C:\proj\Foo.java"), "Foo.java");
        assert_eq!(basename(r"mixed/dir\Bar.java"), "Bar.java");
        assert_eq!(basename("Baz.java"), "Baz.java");
    }

    #[test]
    fn test_basename_of_trailing_separator_is_empty() {
        assert_eq!(basename("src/"), "");
        assert_eq!(basename(r"C:\proj\"), "");
        assert_eq!(clean_file_name("src/main/"), "Unknown");
    }

    #[test]
    fn test_clean_file_name_maps_sentinel() {
        assert_eq!(clean_file_name("UnknownFile"), "Unknown");
        assert_eq!(clean_file_name("/tmp/upload/UnknownFile"), "Unknown");
        assert_eq!(clean_file_name("UnknownFile.java"), "UnknownFile.java");
    }

    #[test]
    fn test_truncate_description_uses_earliest_marker() {
        assert_eq!(
            truncate_description("Long method [Risk: 2.0] [Score: 1.0] | Suggestions: split"),
            "Long method"
        );
        assert_eq!(
            truncate_description("Too many params | Suggestions: [Score: 3]"),
            "Too many params"
        );
        assert_eq!(truncate_description("  plain text  "), "plain text");
    }

    #[test]
    fn test_truncate_description_keeps_parenthesized_risk() {
        assert_eq!(
            truncate_description("Field 'name' (Risk: 1.80) - Public field exposure | Suggestions: x"),
            "Field 'name' (Risk: 1.80) - Public field exposure"
        );
    }

    #[test]
    fn test_layout_lines() {
        assert!(is_layout_line(""));
        assert!(is_layout_line("   "));
        assert!(is_layout_line("------------------"));
        assert!(is_layout_line("======"));
        assert!(!is_layout_line("--"));
        assert!(!is_layout_line("Critical : 3"));
    }
}
