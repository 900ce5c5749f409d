//! Diff result structures.

use crate::model::Row;
use serde::{Deserialize, Serialize};

/// Complete result of one snapshot comparison.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[must_use]
pub struct DiffResult {
    /// Summary statistics and comparison metadata
    pub summary: DiffSummary,
    /// Rows present only in the new snapshot, sorted by key
    pub added: Vec<RowEntry>,
    /// Rows present only in the old snapshot, sorted by key
    pub removed: Vec<RowEntry>,
    /// Rows present in both snapshots with at least one differing shared
    /// field, sorted by key
    pub changed: Vec<ChangedRow>,
    /// Columns present in only one of the two headers
    pub schema: SchemaReport,
}

impl DiffResult {
    /// Create an empty diff result
    pub fn new() -> Self {
        Self {
            summary: DiffSummary::default(),
            added: Vec::new(),
            removed: Vec::new(),
            changed: Vec::new(),
            schema: SchemaReport::default(),
        }
    }

    /// Recompute the count fields of the summary from the change lists
    pub fn calculate_summary(&mut self) {
        self.summary.rows_added = self.added.len();
        self.summary.rows_removed = self.removed.len();
        self.summary.rows_changed = self.changed.len();
        self.summary.total_changes =
            self.summary.rows_added + self.summary.rows_removed + self.summary.rows_changed;
    }

    /// Check if there are any row-level changes
    #[must_use]
    pub fn has_changes(&self) -> bool {
        self.summary.total_changes > 0
    }
}

impl Default for DiffResult {
    fn default() -> Self {
        Self::new()
    }
}

/// Summary statistics for the diff
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiffSummary {
    /// Display name of the old snapshot file
    pub old_file: String,
    /// Display name of the new snapshot file
    pub new_file: String,
    /// Distinct keys in the old snapshot
    pub old_rows: usize,
    /// Distinct keys in the new snapshot
    pub new_rows: usize,
    pub rows_added: usize,
    pub rows_removed: usize,
    pub rows_changed: usize,
    pub total_changes: usize,
    /// Duplicate-key overwrites observed while indexing the old snapshot
    pub duplicate_keys_old: usize,
    /// Duplicate-key overwrites observed while indexing the new snapshot
    pub duplicate_keys_new: usize,
    /// Delimiter the snapshots were parsed with; reused to render full rows
    pub delimiter: char,
}

impl Default for DiffSummary {
    fn default() -> Self {
        Self {
            old_file: String::new(),
            new_file: String::new(),
            old_rows: 0,
            new_rows: 0,
            rows_added: 0,
            rows_removed: 0,
            rows_changed: 0,
            total_changes: 0,
            duplicate_keys_old: 0,
            duplicate_keys_new: 0,
            delimiter: ';',
        }
    }
}

/// One added or removed row, with the key it was matched on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RowEntry {
    pub key: String,
    pub row: Row,
}

/// One matched row pair whose shared fields differ.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangedRow {
    pub key: String,
    pub old_row: Row,
    pub new_row: Row,
    /// Differing shared fields, in old-header column order. Never empty.
    pub fields: Vec<FieldDiff>,
}

/// A single column's old/new value pair for one changed row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDiff {
    pub column: String,
    pub old: String,
    pub new: String,
}

/// Column-set mismatch between the two headers.
///
/// Warning-level: the diff proceeds over the shared columns, but the omission
/// is reported rather than silently dropped.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SchemaReport {
    /// Columns present only in the old header, in old-header order
    pub only_in_old: Vec<String>,
    /// Columns present only in the new header, in new-header order
    pub only_in_new: Vec<String>,
}

impl SchemaReport {
    /// Whether the two headers had identical column sets
    #[must_use]
    pub fn is_match(&self) -> bool {
        self.only_in_old.is_empty() && self.only_in_new.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_summary_totals() {
        let mut result = DiffResult::new();
        result.added.push(RowEntry {
            key: "3".to_string(),
            row: Row {
                values: indexmap::indexmap! {"id".to_string() => "3".to_string()},
            },
        });
        result.calculate_summary();
        assert_eq!(result.summary.rows_added, 1);
        assert_eq!(result.summary.total_changes, 1);
        assert!(result.has_changes());
    }

    #[test]
    fn test_empty_result_has_no_changes() {
        let result = DiffResult::new();
        assert!(!result.has_changes());
        assert!(result.schema.is_match());
    }
}
