//! Row index builder.
//!
//! Turns a [`Snapshot`] into a [`RowIndex`] keyed on the configured key
//! column. Duplicate keys within one file follow a fixed policy: the last row
//! with a given key wins. Every overwrite is logged and counted so the
//! anomaly can be surfaced in the report.

use crate::error::{LogDiffError, Result};
use crate::model::{RowIndex, Snapshot};
use indexmap::IndexMap;

impl RowIndex {
    /// Build a key → row index for one snapshot.
    ///
    /// Fails when `key_column` is absent from the snapshot's header. On
    /// duplicate keys the last occurrence (in file order) survives; each
    /// overwrite increments [`RowIndex::duplicate_keys`] and emits a warning
    /// naming the key.
    pub fn build(snapshot: &Snapshot, key_column: &str) -> Result<Self> {
        if !snapshot.header.iter().any(|c| c == key_column) {
            return Err(LogDiffError::missing_key_column(
                &snapshot.path,
                key_column,
                &snapshot.header,
            ));
        }

        let mut entries = IndexMap::with_capacity(snapshot.rows.len());
        let mut duplicate_keys = 0;
        for row in &snapshot.rows {
            // Presence is guaranteed by the header check and the loader's
            // field-count invariant.
            let key = row.get(key_column).unwrap_or_default().to_string();
            if entries.insert(key.clone(), row.clone()).is_some() {
                duplicate_keys += 1;
                tracing::warn!(
                    file = %snapshot.path.display(),
                    key = %key,
                    "duplicate key in snapshot, keeping the last occurrence"
                );
            }
        }

        Ok(Self {
            path: snapshot.path.clone(),
            header: snapshot.header.clone(),
            entries,
            duplicate_keys,
        })
    }
}
