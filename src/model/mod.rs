//! Core data structures for CSV log snapshots.

mod row;
mod snapshot;

pub use row::Row;
pub use snapshot::{RowIndex, Snapshot};
