//! **Key-based diff and organization for CSV log snapshots.**
//!
//! `csvlog-tools` manages a local folder of CSV log exports: it normalizes
//! filenames with timestamps, sorts files into per-type subfolders, and diffs
//! two versions of the same log type row-by-row on a key column, reporting
//! additions, removals, and field-level changes. It powers both a
//! command-line interface and a Rust library for programmatic use.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: [`Snapshot`] (one parsed CSV file), [`Row`], and
//!   [`RowIndex`] (key → row for one snapshot).
//! - **[`loader`]**: parses a delimited file into a `Snapshot`. Splitting is
//!   strict single-delimiter with no quoting; a field containing the
//!   delimiter is a documented limitation of the export format.
//! - **[`diff`]**: the [`DiffEngine`], which partitions the union of two key
//!   sets into added, removed, and changed rows.
//! - **[`reports`]**: text, Markdown, and JSON renderers for a
//!   [`DiffResult`].
//! - **[`catalog`]**: filename timestamping and per-type folder
//!   organization — the preprocessing the engine assumes has happened.
//! - **[`pipeline`]**: shared orchestration for load → index → diff →
//!   report, plus exit codes and output routing.
//!
//! ## Diffing Two Snapshots
//!
//! ```no_run
//! use std::path::Path;
//! use csvlog_tools::{load_snapshot, CsvOptions, DiffEngine, RowIndex};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let options = CsvOptions::default();
//!     let old = load_snapshot(Path::new("logs/digital/2025-05-01_10-00_digital.csv"), &options)?;
//!     let new = load_snapshot(Path::new("logs/digital/2025-06-01_10-00_digital.csv"), &options)?;
//!
//!     let diff = DiffEngine::new().diff(
//!         &RowIndex::build(&old, &options.key_column)?,
//!         &RowIndex::build(&new, &options.key_column)?,
//!     );
//!
//!     println!("Rows added: {}", diff.added.len());
//!     println!("Rows removed: {}", diff.removed.len());
//!     for change in &diff.changed {
//!         println!("~ {} ({} fields)", change.key, change.fields.len());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Command-Line Interface
//!
//! This documentation is for the library crate. The `csvlog-tools` binary
//! exposes the same functionality as `diff`, `organize`, and `list`
//! subcommands; see the project README.

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // Variable names like `old`/`new` are clear in context
    clippy::similar_names
)]

pub mod catalog;
pub mod cli;
pub mod config;
pub mod diff;
pub mod error;
mod index;
pub mod loader;
pub mod model;
pub mod pipeline;
pub mod reports;

// Re-export main types for convenience
pub use config::{AppConfig, BehaviorConfig, CsvOptions, DiffConfig, DiffPaths, OutputConfig};
pub use diff::{ChangedRow, DiffEngine, DiffResult, DiffSummary, FieldDiff, SchemaReport};
pub use error::{LogDiffError, Result};
pub use loader::{load_snapshot, parse_snapshot};
pub use model::{Row, RowIndex, Snapshot};
pub use reports::{
    JsonReporter, MarkdownReporter, ReportFormat, ReportGenerator, SummaryReporter,
};
