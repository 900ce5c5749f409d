//! Integration tests for csvlog-tools
//!
//! These tests verify end-to-end functionality of snapshot loading, the diff
//! engine, and report generation, and pin down the documented policies:
//! malformed rows abort the load, and the last duplicate key wins.

use csvlog_tools::{
    cli::run_diff,
    config::{BehaviorConfig, CsvOptions, DiffConfig, DiffPaths, OutputConfig},
    load_snapshot, parse_snapshot,
    reports::{ReportFormat, ReportGenerator, SummaryReporter},
    DiffEngine, DiffResult, LogDiffError, RowIndex,
};
use std::path::{Path, PathBuf};

// ============================================================================
// Test Fixtures
// ============================================================================

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

fn fixture_path(name: &str) -> PathBuf {
    Path::new(FIXTURES_DIR).join(name)
}

fn diff_files(old: &Path, new: &Path) -> DiffResult {
    let options = CsvOptions::default();
    let old = load_snapshot(old, &options).expect("Failed to load old snapshot");
    let new = load_snapshot(new, &options).expect("Failed to load new snapshot");
    DiffEngine::new().diff(
        &RowIndex::build(&old, &options.key_column).unwrap(),
        &RowIndex::build(&new, &options.key_column).unwrap(),
    )
}

fn diff_strings(old: &str, new: &str) -> DiffResult {
    let options = CsvOptions::default();
    let old = parse_snapshot(old, Path::new("old.csv"), &options).unwrap();
    let new = parse_snapshot(new, Path::new("new.csv"), &options).unwrap();
    DiffEngine::new().diff(
        &RowIndex::build(&old, &options.key_column).unwrap(),
        &RowIndex::build(&new, &options.key_column).unwrap(),
    )
}

// ============================================================================
// Core scenarios
// ============================================================================

mod scenarios {
    use super::*;

    /// One added row, one changed row, nothing removed.
    #[test]
    fn test_added_and_changed_rows_reported() {
        let result = diff_files(&fixture_path("old.csv"), &fixture_path("new.csv"));

        assert_eq!(result.added.len(), 1);
        assert_eq!(result.added[0].key, "3");
        assert_eq!(result.added[0].row.get("name"), Some("d"));

        assert!(result.removed.is_empty());

        assert_eq!(result.changed.len(), 1);
        let change = &result.changed[0];
        assert_eq!(change.key, "2");
        assert_eq!(change.fields.len(), 1);
        assert_eq!(change.fields[0].column, "name");
        assert_eq!(change.fields[0].old, "b");
        assert_eq!(change.fields[0].new, "c");
    }

    /// Duplicate key: the last occurrence survives, deterministically.
    #[test]
    fn test_duplicate_key_last_wins() {
        let options = CsvOptions::default();
        let snap = parse_snapshot(
            "id;name\n1;first\n1;second\n",
            Path::new("dup.csv"),
            &options,
        )
        .unwrap();
        let index = RowIndex::build(&snap, "id").unwrap();

        assert_eq!(index.len(), 1);
        assert_eq!(index.get("1").unwrap().get("name"), Some("second"));
        assert_eq!(index.duplicate_keys, 1);

        // The surviving row is what the diff sees
        let result = diff_strings("id;name\n1;first\n1;second\n", "id;name\n1;second\n");
        assert!(!result.has_changes());
        assert_eq!(result.summary.duplicate_keys_old, 1);
    }

    /// A snapshot without the key column fails before any diff is attempted.
    #[test]
    fn test_missing_key_column_aborts() {
        let options = CsvOptions::default();
        let snap = load_snapshot(&fixture_path("no_id_column.csv"), &options).unwrap();
        let err = RowIndex::build(&snap, &options.key_column).unwrap_err();

        let display = err.to_string();
        assert!(display.contains("no_id_column.csv"));
        assert!(display.contains("'id'"));
    }

    /// An extra column yields a schema warning; the diff runs over shared columns only.
    #[test]
    fn test_extra_column_reported_and_excluded() {
        let result = diff_strings("id;name\n1;a\n", "id;name;extra\n1;a;x\n");

        assert!(!result.schema.is_match());
        assert_eq!(result.schema.only_in_new, vec!["extra"]);
        assert!(result.changed.is_empty());

        // The extra column never appears in any field diff
        let result = diff_strings("id;name\n1;a\n", "id;name;extra\n1;b;x\n");
        assert_eq!(result.changed.len(), 1);
        assert!(result.changed[0].fields.iter().all(|f| f.column != "extra"));
    }
}

// ============================================================================
// Diff properties
// ============================================================================

mod properties {
    use super::*;

    #[test]
    fn test_idempotence_self_diff_is_empty() {
        let result = diff_files(&fixture_path("old.csv"), &fixture_path("old.csv"));
        assert!(result.added.is_empty());
        assert!(result.removed.is_empty());
        assert!(result.changed.is_empty());
        assert!(!result.has_changes());
    }

    #[test]
    fn test_symmetry_swaps_sections_and_values() {
        let old = "id;name\n1;a\n2;b\n";
        let new = "id;name\n2;c\n3;d\n";
        let forward = diff_strings(old, new);
        let backward = diff_strings(new, old);

        let keys = |entries: &[csvlog_tools::diff::RowEntry]| -> Vec<String> {
            entries.iter().map(|e| e.key.clone()).collect()
        };
        assert_eq!(keys(&forward.added), keys(&backward.removed));
        assert_eq!(keys(&forward.removed), keys(&backward.added));

        assert_eq!(forward.changed.len(), backward.changed.len());
        for (f, b) in forward.changed.iter().zip(&backward.changed) {
            assert_eq!(f.key, b.key);
            assert_eq!(f.fields.len(), b.fields.len());
            for (fd, bd) in f.fields.iter().zip(&b.fields) {
                assert_eq!(fd.column, bd.column);
                assert_eq!(fd.old, bd.new);
                assert_eq!(fd.new, bd.old);
            }
        }
    }

    #[test]
    fn test_determinism_byte_identical_reports() {
        let reporter = SummaryReporter::new().no_color();
        let first = reporter
            .generate_diff_report(&diff_files(&fixture_path("old.csv"), &fixture_path("new.csv")))
            .unwrap();
        let second = reporter
            .generate_diff_report(&diff_files(&fixture_path("old.csv"), &fixture_path("new.csv")))
            .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_new_file_yields_pure_removals() {
        let result = diff_strings("id;name\n1;a\n2;b\n", "id;name\n");
        assert!(result.added.is_empty());
        assert_eq!(result.removed.len(), 2);
        assert!(result.changed.is_empty());
    }
}

// ============================================================================
// Loader policies
// ============================================================================

mod loader_policies {
    use super::*;

    #[test]
    fn test_malformed_row_aborts_comparison() {
        let dir = tempfile::tempdir().unwrap();
        let bad = dir.path().join("bad.csv");
        std::fs::write(&bad, "id;name\n1;a\n2;b;too;many\n").unwrap();

        let err = load_snapshot(&bad, &CsvOptions::default()).unwrap_err();
        let display = err.to_string();
        assert!(display.contains("bad.csv"));
        assert!(display.contains("line 3"));
        assert!(display.contains("expected 2"));
        assert!(display.contains("found 4"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_snapshot(
            Path::new("/definitely/not/here.csv"),
            &CsvOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, LogDiffError::Io { .. }));
    }
}

// ============================================================================
// End-to-end through the CLI handler
// ============================================================================

mod cli_handler {
    use super::*;

    fn diff_config(output_file: PathBuf, fail_on_change: bool) -> DiffConfig {
        DiffConfig {
            paths: DiffPaths {
                old: fixture_path("old.csv"),
                new: fixture_path("new.csv"),
            },
            csv: CsvOptions::default(),
            output: OutputConfig {
                format: ReportFormat::Summary,
                file: Some(output_file),
                no_color: true,
            },
            behavior: BehaviorConfig {
                fail_on_change,
                quiet: true,
            },
        }
    }

    #[test]
    fn test_run_diff_writes_report() {
        let dir = tempfile::tempdir().unwrap();
        let report_path = dir.path().join("report.txt");

        let exit_code = run_diff(diff_config(report_path.clone(), false)).unwrap();
        assert_eq!(exit_code, 0);

        let report = std::fs::read_to_string(&report_path).unwrap();
        assert!(report.contains("Added rows (1):"));
        assert!(report.contains("+ 3: 3;d"));
        assert!(report.contains("name: 'b' -> 'c'"));
        // File output is never colored
        assert!(!report.contains('\x1b'));
    }

    #[test]
    fn test_run_diff_fail_on_change_exit_code() {
        let dir = tempfile::tempdir().unwrap();
        let exit_code = run_diff(diff_config(dir.path().join("report.txt"), true)).unwrap();
        assert_eq!(exit_code, 1);
    }

    #[test]
    fn test_run_diff_self_comparison_exits_zero() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = diff_config(dir.path().join("report.txt"), true);
        config.paths.new = fixture_path("old.csv");

        let exit_code = run_diff(config).unwrap();
        assert_eq!(exit_code, 0);
    }

    #[test]
    fn test_run_diff_json_report_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let report_path = dir.path().join("report.json");
        let mut config = diff_config(report_path.clone(), false);
        config.output.format = ReportFormat::Json;

        run_diff(config).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&report_path).unwrap()).unwrap();
        assert_eq!(value["summary"]["rows_added"], 1);
        assert_eq!(value["summary"]["rows_changed"], 1);
        assert_eq!(value["added"][0]["key"], "3");
    }
}
