//! CSV snapshot loader.
//!
//! Parses a delimited text file into a [`Snapshot`]: the first line is always
//! the header, every following non-blank line is one data row. Lines are
//! split strictly on the configured delimiter — there is no quoting or escape
//! handling, so a field containing the delimiter itself is a known limitation
//! of the format, not something this loader tries to repair.
//!
//! A data line whose field count differs from the header aborts the load with
//! a malformed-row error naming the file and the 1-based line number. Blank
//! lines are skipped (line numbering still counts them).

use crate::config::CsvOptions;
use crate::error::{LoadErrorKind, LogDiffError, Result};
use crate::model::{Row, Snapshot};
use std::path::Path;

/// Load a snapshot from a file on disk.
///
/// The file handle is scoped to the read and released before parsing begins,
/// on all exit paths.
pub fn load_snapshot(path: &Path, options: &CsvOptions) -> Result<Snapshot> {
    let content = std::fs::read_to_string(path).map_err(|e| LogDiffError::io(path, e))?;
    parse_snapshot(&content, path, options)
}

/// Parse snapshot content that is already in memory.
///
/// `source` is only used for error messages and reporting.
pub fn parse_snapshot(content: &str, source: &Path, options: &CsvOptions) -> Result<Snapshot> {
    let mut lines = content.lines().enumerate();

    let header: Vec<String> = loop {
        match lines.next() {
            Some((_, line)) if line.is_empty() => continue,
            Some((_, line)) => break split_line(line, options.delimiter),
            None => return Err(LogDiffError::load(source, LoadErrorKind::MissingHeader)),
        }
    };

    let mut snapshot = Snapshot::new(source, header);
    for (idx, line) in lines {
        if line.is_empty() {
            continue;
        }
        let fields = split_line(line, options.delimiter);
        if fields.len() != snapshot.header.len() {
            return Err(LogDiffError::malformed_row(
                source,
                idx + 1,
                snapshot.header.len(),
                fields.len(),
            ));
        }
        let row = Row::from_fields(&snapshot.header, fields);
        snapshot.rows.push(row);
    }

    Ok(snapshot)
}

/// Split one line strictly on the delimiter.
fn split_line(line: &str, delimiter: char) -> Vec<String> {
    line.split(delimiter).map(str::to_string).collect()
}
