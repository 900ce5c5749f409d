//! Snapshot and row-index structures.

use super::Row;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One parsed CSV file: the full row set at one point in time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    /// Source file path
    pub path: PathBuf,
    /// Ordered column names from the first line
    pub header: Vec<String>,
    /// Data rows in file order
    pub rows: Vec<Row>,
}

impl Snapshot {
    /// Create an empty snapshot with the given header
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, header: Vec<String>) -> Self {
        Self {
            path: path.into(),
            header,
            rows: Vec::new(),
        }
    }

    /// Number of data rows (the header line is not counted)
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Display name of the source file (file name, or the full path as fallback)
    #[must_use]
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map_or_else(|| self.path.display().to_string(), |n| {
                n.to_string_lossy().into_owned()
            })
    }
}

/// Key → row mapping for one snapshot.
///
/// Built once per comparison and immutable afterward. Insertion order is the
/// file order of the surviving row, so iteration stays deterministic.
#[derive(Debug, Clone)]
pub struct RowIndex {
    /// Source file path (carried for error messages and reporting)
    pub path: PathBuf,
    /// Header of the indexed snapshot
    pub header: Vec<String>,
    /// Key value → row
    pub entries: IndexMap<String, Row>,
    /// Number of duplicate-key overwrites observed while building
    pub duplicate_keys: usize,
}

impl RowIndex {
    /// Number of distinct keys
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the index holds no rows
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a row by key
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Row> {
        self.entries.get(key)
    }

    /// Whether a key is present
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }
}
