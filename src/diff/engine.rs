//! The comparison engine.

use super::{ChangedRow, DiffResult, FieldDiff, RowEntry};
use crate::model::RowIndex;
use std::path::Path;

/// Key-based diff engine over two row indexes.
///
/// Comparison is byte-exact string equality on raw field values — no numeric
/// or whitespace normalization. All three output sections are sorted
/// lexicographically by key; shared columns are compared in old-header order.
#[derive(Debug, Clone)]
pub struct DiffEngine {
    /// Delimiter recorded in the result so renderers can reproduce full rows
    delimiter: char,
}

impl DiffEngine {
    /// Create a new diff engine with the default delimiter
    #[must_use]
    pub const fn new() -> Self {
        Self { delimiter: ';' }
    }

    /// Record a different delimiter in the produced summaries
    #[must_use]
    pub const fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Compare two row indexes and produce a [`DiffResult`].
    ///
    /// Empty snapshots are legal: an empty old index yields pure additions,
    /// an empty new index pure removals. Column-set mismatches between the
    /// two headers are recorded in the result's [`SchemaReport`] and warned
    /// about; the field comparison proceeds over the shared columns only.
    ///
    /// [`SchemaReport`]: super::SchemaReport
    pub fn diff(&self, old: &RowIndex, new: &RowIndex) -> DiffResult {
        let mut result = DiffResult::new();

        result.schema.only_in_old = old
            .header
            .iter()
            .filter(|c| !new.header.contains(c))
            .cloned()
            .collect();
        result.schema.only_in_new = new
            .header
            .iter()
            .filter(|c| !old.header.contains(c))
            .cloned()
            .collect();
        if !result.schema.is_match() {
            tracing::warn!(
                only_in_old = ?result.schema.only_in_old,
                only_in_new = ?result.schema.only_in_new,
                "column sets differ, comparing shared columns only"
            );
        }

        let shared_columns: Vec<&String> = old
            .header
            .iter()
            .filter(|c| new.header.contains(c))
            .collect();

        result.added = new
            .entries
            .iter()
            .filter(|(key, _)| !old.contains_key(key))
            .map(|(key, row)| RowEntry {
                key: key.clone(),
                row: row.clone(),
            })
            .collect();
        result.added.sort_by(|a, b| a.key.cmp(&b.key));

        result.removed = old
            .entries
            .iter()
            .filter(|(key, _)| !new.contains_key(key))
            .map(|(key, row)| RowEntry {
                key: key.clone(),
                row: row.clone(),
            })
            .collect();
        result.removed.sort_by(|a, b| a.key.cmp(&b.key));

        for (key, old_row) in &old.entries {
            let Some(new_row) = new.get(key) else {
                continue;
            };
            let fields: Vec<FieldDiff> = shared_columns
                .iter()
                .filter_map(|column| {
                    let old_value = old_row.get(column).unwrap_or_default();
                    let new_value = new_row.get(column).unwrap_or_default();
                    (old_value != new_value).then(|| FieldDiff {
                        column: (*column).clone(),
                        old: old_value.to_string(),
                        new: new_value.to_string(),
                    })
                })
                .collect();
            // Rows identical in every shared field are omitted entirely.
            if !fields.is_empty() {
                result.changed.push(ChangedRow {
                    key: key.clone(),
                    old_row: old_row.clone(),
                    new_row: new_row.clone(),
                    fields,
                });
            }
        }
        result.changed.sort_by(|a, b| a.key.cmp(&b.key));

        result.summary.old_file = display_name(&old.path);
        result.summary.new_file = display_name(&new.path);
        result.summary.old_rows = old.len();
        result.summary.new_rows = new.len();
        result.summary.duplicate_keys_old = old.duplicate_keys;
        result.summary.duplicate_keys_new = new.duplicate_keys;
        result.summary.delimiter = self.delimiter;
        result.calculate_summary();
        result
    }
}

impl Default for DiffEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn display_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |n| n.to_string_lossy().into_owned(),
    )
}
