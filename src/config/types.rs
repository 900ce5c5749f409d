//! Configuration types for csvlog-tools operations.
//!
//! The original design buried the delimiter and key column in module-level
//! constants; here they are explicit structures passed into the loader and
//! index builder.

use crate::error::{LogDiffError, Result};
use crate::reports::ReportFormat;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// CSV parsing and matching options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CsvOptions {
    /// Field delimiter used to split lines
    pub delimiter: char,
    /// Column whose value identifies a row across snapshots
    pub key_column: String,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            delimiter: ';',
            key_column: "id".to_string(),
        }
    }
}

impl CsvOptions {
    /// Validate the options before they reach the loader.
    pub fn validate(&self) -> Result<()> {
        if self.key_column.is_empty() {
            return Err(LogDiffError::config("key column must not be empty"));
        }
        if self.delimiter == '\n' || self.delimiter == '\r' {
            return Err(LogDiffError::config(
                "delimiter must not be a line terminator",
            ));
        }
        Ok(())
    }
}

/// Output configuration (format, file, colors)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Report output format
    pub format: ReportFormat,
    /// Output file path (stdout if not specified)
    pub file: Option<PathBuf>,
    /// Disable colored output
    pub no_color: bool,
}

/// Behavior flags
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Exit with a non-zero code when any change is detected
    pub fail_on_change: bool,
    /// Suppress non-essential output
    pub quiet: bool,
}

/// The two snapshot paths of a comparison
#[derive(Debug, Clone)]
pub struct DiffPaths {
    /// Path to the old snapshot
    pub old: PathBuf,
    /// Path to the new snapshot
    pub new: PathBuf,
}

/// Full configuration for one `diff` invocation
#[derive(Debug, Clone)]
pub struct DiffConfig {
    pub paths: DiffPaths,
    pub csv: CsvOptions,
    pub output: OutputConfig,
    pub behavior: BehaviorConfig,
}

/// Settings loadable from a config file.
///
/// CLI flags are layered on top: a flag given on the command line always
/// overrides the file value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// CSV parsing defaults
    pub csv: CsvOptions,
    /// Output defaults
    pub output: OutputConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_documented_contract() {
        let options = CsvOptions::default();
        assert_eq!(options.delimiter, ';');
        assert_eq!(options.key_column, "id");
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_empty_key_column_rejected() {
        let options = CsvOptions {
            key_column: String::new(),
            ..CsvOptions::default()
        };
        assert!(options.validate().is_err());
    }

    #[test]
    fn test_newline_delimiter_rejected() {
        let options = CsvOptions {
            delimiter: '\n',
            ..CsvOptions::default()
        };
        assert!(options.validate().is_err());
    }

    #[test]
    fn test_app_config_from_partial_yaml() {
        let config: AppConfig = serde_yaml::from_str("csv:\n  delimiter: \",\"\n").unwrap();
        assert_eq!(config.csv.delimiter, ',');
        // Unspecified fields keep their defaults
        assert_eq!(config.csv.key_column, "id");
    }
}
