//! Error types for report parsing and configuration.
//!
//! [`ParseFailure`] names the ways a whole report can be rejected. It never
//! escapes the top-level parse functions: they turn it into the raw-text
//! fallback model and record it in the diagnostics. [`ConfigError`] covers
//! loading and saving [`ReportConfig`](crate::config::ReportConfig) files.

use thiserror::Error;

/// Reasons a report is rejected as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseFailure {
    /// Input is empty or whitespace-only.
    #[error("report is empty")]
    EmptyReport,
    /// Raw bytes are not UTF-8.
    #[error("report is not valid UTF-8 (valid up to byte {valid_up_to})")]
    InvalidUtf8 { valid_up_to: usize },
    /// Control characters or replacement characters inside the text.
    #[error("binary content at line {line}, column {column}")]
    BinaryContent { line: usize, column: usize },
    /// No line matched a section header, the summary, or any extractor.
    #[error("no report structure recognized")]
    Unrecognized,
}

/// Errors that can occur while loading or saving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing or serialization failure.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Structurally valid YAML with unusable values.
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Convenience alias for results with [`ConfigError`].
pub type Result<T> = std::result::Result<T, ConfigError>;
