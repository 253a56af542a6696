//! Scoring and output configuration.
//!
//! Defines the YAML-serializable settings that select the scoring policy and
//! how parsed reports are rendered. Every section is optional; missing
//! values fall back to their defaults.
//!
//! # Example YAML
//!
//! ```yaml
//! version: "1.0"
//! scoring:
//!   policy: flat_count
//! output:
//!   format: markdown
//!   include_diagnostics: true
//! ```

use std::io::{BufReader, BufWriter};
use std::path::Path;

use report_score_core::ScoringPolicy;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::output::OutputFormat;

/// Current configuration format version.
pub const CONFIG_VERSION: &str = "1.0";

/// Scoring settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringConfig {
    #[serde(default)]
    pub policy: ScoringPolicy,
}

/// Rendering settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    /// Emit parse diagnostics next to the parsed model.
    #[serde(default)]
    pub include_diagnostics: bool,
}

/// Top-level report configuration.
///
/// # Examples
///
/// ```
/// use report_score_core::ScoringPolicy;
/// use report_score_parser::config::ReportConfig;
///
/// let config: ReportConfig = serde_yaml::from_str("scoring: { policy: flat_count }").unwrap();
/// assert_eq!(config.scoring.policy, ScoringPolicy::FlatCount);
/// assert_eq!(config.version, "1.0");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default)]
    pub scoring: ScoringConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            scoring: ScoringConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

fn default_version() -> String {
    CONFIG_VERSION.to_string()
}

impl ReportConfig {
    /// Loads and validates configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Yaml`] if parsing fails, or [`ConfigError::Invalid`]
    /// if [`validate`](Self::validate) rejects it.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let reader = BufReader::new(file);
        let config: Self = serde_yaml::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves the configuration as YAML.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = BufWriter::new(file);
        serde_yaml::to_writer(writer, self)?;
        Ok(())
    }

    /// Rejects an empty version string.
    pub fn validate(&self) -> Result<()> {
        if self.version.trim().is_empty() {
            return Err(ConfigError::Invalid("version cannot be empty".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_yaml() -> &'static str {
        r#"
version: "1.0"
scoring:
  policy: flat_count
output:
  format: markdown
  include_diagnostics: true
"#
    }

    #[test]
    fn test_parse_full_config() {
        let config: ReportConfig = serde_yaml::from_str(sample_yaml()).unwrap();
        assert_eq!(config.scoring.policy, ScoringPolicy::FlatCount);
        assert_eq!(config.output.format, OutputFormat::Markdown);
        assert!(config.output.include_diagnostics);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config: ReportConfig = serde_yaml::from_str("version: \"1.0\"").unwrap();
        assert_eq!(config, ReportConfig::default());
        assert_eq!(config.scoring.policy, ScoringPolicy::PerFileRatio);
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report-score.yml");

        let mut config = ReportConfig::default();
        config.scoring.policy = ScoringPolicy::FlatCount;
        config.output.format = OutputFormat::Table;
        config.save(&path).unwrap();

        let loaded = ReportConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_rejects_empty_version() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.yml");
        std::fs::write(&path, "version: \"  \"\n").unwrap();

        let err = ReportConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = ReportConfig::load("/nonexistent/report-score.yml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_unknown_policy_is_yaml_error() {
        let result: std::result::Result<ReportConfig, _> =
            serde_yaml::from_str("scoring: { policy: weighted }");
        assert!(result.is_err());
    }
}
