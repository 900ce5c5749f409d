//! Pipeline orchestration for snapshot comparisons.
//!
//! Shared logic for the load → index → diff → report workflow, reducing
//! duplication across CLI command handlers. Each comparison invocation is
//! blocking end-to-end: load both files sequentially, build both indexes,
//! compute the diff, render the report.

use crate::config::DiffConfig;
use crate::diff::{DiffEngine, DiffResult};
use crate::error::Result;
use crate::loader::load_snapshot;
use crate::model::{RowIndex, Snapshot};
use std::io::{IsTerminal as _, Write as _};
use std::path::{Path, PathBuf};

/// Exit codes for CI/CD integration
pub mod exit_codes {
    /// Success - no changes detected (or no --fail-on-change)
    pub const SUCCESS: i32 = 0;
    /// Changes were detected
    pub const CHANGES_DETECTED: i32 = 1;
    /// An error occurred
    pub const ERROR: i32 = 2;
}

/// Where report output is routed.
#[derive(Debug, Clone)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    /// Build a target from an optional file path
    #[must_use]
    pub fn from_option(file: Option<PathBuf>) -> Self {
        file.map_or(Self::Stdout, Self::File)
    }
}

/// Write rendered report text to the target.
pub fn write_output(target: &OutputTarget, content: &str) -> Result<()> {
    match target {
        OutputTarget::Stdout => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            if !content.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
            Ok(())
        }
        OutputTarget::File(path) => {
            std::fs::write(path, content).map_err(|e| crate::error::LogDiffError::io(path, e))
        }
    }
}

/// Decide whether report output should be colored.
///
/// Color is used only for terminal output, and both the `--no-color` flag and
/// the `NO_COLOR` environment variable disable it.
#[must_use]
pub fn should_use_color(no_color_flag: bool, target: &OutputTarget) -> bool {
    if no_color_flag || std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    match target {
        OutputTarget::Stdout => std::io::stdout().is_terminal(),
        OutputTarget::File(_) => false,
    }
}

/// Load one snapshot, logging its shape.
pub fn load_snapshot_with_context(path: &Path, config: &DiffConfig) -> Result<Snapshot> {
    let snapshot = load_snapshot(path, &config.csv)?;
    tracing::debug!(
        file = %path.display(),
        columns = snapshot.header.len(),
        rows = snapshot.row_count(),
        "loaded snapshot"
    );
    Ok(snapshot)
}

/// Index both snapshots and compute the diff.
pub fn compute_diff(config: &DiffConfig, old: &Snapshot, new: &Snapshot) -> Result<DiffResult> {
    let old_index = RowIndex::build(old, &config.csv.key_column)?;
    let new_index = RowIndex::build(new, &config.csv.key_column)?;
    let engine = DiffEngine::new().with_delimiter(config.csv.delimiter);
    Ok(engine.diff(&old_index, &new_index))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_values() {
        assert_eq!(exit_codes::SUCCESS, 0);
        assert_eq!(exit_codes::CHANGES_DETECTED, 1);
        assert_eq!(exit_codes::ERROR, 2);
    }

    #[test]
    fn test_output_target_from_option() {
        assert!(matches!(OutputTarget::from_option(None), OutputTarget::Stdout));
        assert!(matches!(
            OutputTarget::from_option(Some(PathBuf::from("/tmp/report.txt"))),
            OutputTarget::File(_)
        ));
    }

    #[test]
    fn test_file_target_never_colored() {
        let target = OutputTarget::File(PathBuf::from("/tmp/report.txt"));
        assert!(!should_use_color(false, &target));
    }

    #[test]
    fn test_write_output_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.txt");
        write_output(&OutputTarget::File(path.clone()), "hello").unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "hello");
    }
}
