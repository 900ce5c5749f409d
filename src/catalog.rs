//! Log folder catalog: naming, organization, and discovery.
//!
//! CSV log exports follow the filename contract
//! `YYYY-MM-DD_HH-MM_<logtype>.csv`. This module prepends the timestamp
//! prefix where it is missing (from the file's modification time), moves
//! prefixed files into per-type subfolders, and scans the resulting tree into
//! a catalog of log types and their versions, newest first.
//!
//! These are the preprocessing steps the comparison engine assumes have
//! already happened: by the time two paths reach the diff pipeline they are
//! named, grouped, and readable.

use crate::error::{LogDiffError, Result};
use regex::Regex;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

static PREFIX_AND_TYPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{4}-\d{2}-\d{2}_\d{2}-\d{2})_(.+)\.(?i:csv)$").expect("static regex")
});

static TIMESTAMP_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}_\d{2}-\d{2}_").expect("static regex"));

/// Timestamp format used in filename prefixes. Sorts lexicographically.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M";

/// One discovered version of a log type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogVersion {
    /// Timestamp string from the filename prefix
    pub timestamp: String,
    /// Full path to the snapshot file
    pub path: PathBuf,
}

/// Log type → versions, newest first.
pub type LogCatalog = BTreeMap<String, Vec<LogVersion>>;

/// A performed rename or move, for reporting back to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileAction {
    pub from: PathBuf,
    pub to: PathBuf,
}

/// Extract the timestamp prefix and log type from a filename.
///
/// Returns `None` unless the name matches the full
/// `YYYY-MM-DD_HH-MM_<logtype>.csv` contract.
#[must_use]
pub fn extract_prefix_and_type(filename: &str) -> Option<(String, String)> {
    PREFIX_AND_TYPE
        .captures(filename)
        .map(|caps| (caps[1].to_string(), caps[2].to_string()))
}

/// Check if a filename already starts with a timestamp prefix.
#[must_use]
pub fn has_timestamp_prefix(filename: &str) -> bool {
    TIMESTAMP_PREFIX.is_match(filename)
}

/// Prepend the modification-time prefix to every unprefixed file in `folder`.
///
/// Already-prefixed files are skipped. Name collisions are resolved with a
/// numeric counter between the prefix and the original name. Returns the
/// renames that were performed, in deterministic (name-sorted) order.
pub fn rename_with_timestamp(folder: &Path) -> Result<Vec<FileAction>> {
    let mut actions = Vec::new();

    for path in sorted_entries(folder)? {
        if !path.is_file() {
            continue;
        }
        let Some(original_name) = file_name(&path) else {
            continue;
        };
        if has_timestamp_prefix(&original_name) {
            tracing::debug!(file = %original_name, "skipping, already dated");
            continue;
        }

        let metadata = std::fs::metadata(&path).map_err(|e| LogDiffError::io(&path, e))?;
        let modified = metadata.modified().map_err(|e| LogDiffError::io(&path, e))?;
        let prefix = chrono::DateTime::<chrono::Local>::from(modified)
            .format(TIMESTAMP_FORMAT)
            .to_string();

        let mut new_path = path.with_file_name(format!("{prefix}_{original_name}"));
        let mut counter = 1;
        while new_path.exists() {
            new_path = path.with_file_name(format!("{prefix}_{counter}_{original_name}"));
            counter += 1;
        }

        tracing::info!(from = %original_name, to = %new_path.display(), "renaming");
        std::fs::rename(&path, &new_path).map_err(|e| LogDiffError::io(&path, e))?;
        actions.push(FileAction {
            from: path,
            to: new_path,
        });
    }

    Ok(actions)
}

/// Move every prefixed CSV in `folder` into a `folder/<logtype>/` subfolder.
///
/// Subfolders are created as needed; a name collision in the target gets a
/// counter suffix before the extension. Returns the moves that were
/// performed, in deterministic (name-sorted) order.
pub fn organize_by_type(folder: &Path) -> Result<Vec<FileAction>> {
    let mut actions = Vec::new();

    for path in sorted_entries(folder)? {
        if !path.is_file() {
            continue;
        }
        let Some(name) = file_name(&path) else {
            continue;
        };
        let Some((_, log_type)) = extract_prefix_and_type(&name) else {
            continue;
        };

        let target_folder = folder.join(&log_type);
        std::fs::create_dir_all(&target_folder)
            .map_err(|e| LogDiffError::io(&target_folder, e))?;

        let mut target = target_folder.join(&name);
        let mut counter = 1;
        while target.exists() {
            let stem = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            target = target_folder.join(format!("{stem}_{counter}.csv"));
            counter += 1;
        }

        tracing::info!(from = %name, to = %target.display(), "moving");
        std::fs::rename(&path, &target).map_err(|e| LogDiffError::io(&path, e))?;
        actions.push(FileAction {
            from: path,
            to: target,
        });
    }

    Ok(actions)
}

/// Scan per-type subfolders of `base` into a catalog.
///
/// Only prefixed `.csv` files are listed; versions are sorted newest first
/// (the timestamp format sorts lexicographically). Subfolders without any
/// matching file are omitted.
pub fn scan_log_folders(base: &Path) -> Result<LogCatalog> {
    let mut catalog = LogCatalog::new();

    for subfolder in sorted_entries(base)? {
        if !subfolder.is_dir() {
            continue;
        }
        let Some(log_type) = file_name(&subfolder) else {
            continue;
        };

        let mut versions = Vec::new();
        for path in sorted_entries(&subfolder)? {
            if !path.is_file() {
                continue;
            }
            let Some(name) = file_name(&path) else {
                continue;
            };
            if let Some((timestamp, _)) = extract_prefix_and_type(&name) {
                versions.push(LogVersion { timestamp, path });
            }
        }

        if !versions.is_empty() {
            versions.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
            catalog.insert(log_type, versions);
        }
    }

    Ok(catalog)
}

/// Directory entries sorted by file name, for deterministic traversal.
fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir).map_err(|e| LogDiffError::io(dir, e))?;
    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| LogDiffError::io(dir, e))?;
        paths.push(entry.path());
    }
    paths.sort();
    Ok(paths)
}

fn file_name(path: &Path) -> Option<String> {
    path.file_name().map(|n| n.to_string_lossy().into_owned())
}
