//! Key-based diff engine for CSV log snapshots.
//!
//! Matches rows between two snapshots on the configured key column and turns
//! matched pairs into field-level change records. The partition is total:
//! every key in the union of both key sets lands in exactly one of `added`,
//! `removed`, or the common set, and a common key appears in `changed` only
//! when at least one shared field differs.

mod engine;
mod result;

pub use engine::DiffEngine;
pub use result::{ChangedRow, DiffResult, DiffSummary, FieldDiff, RowEntry, SchemaReport};
