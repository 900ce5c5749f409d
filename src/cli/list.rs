//! List command handler.
//!
//! Prints the available log types and their versions, newest first, as
//! discovered in the per-type subfolders of a logs directory.

use crate::catalog::scan_log_folders;
use anyhow::Result;
use std::path::Path;

/// Run the list command on a logs directory.
pub fn run_list(dir: &Path) -> Result<()> {
    let catalog = scan_log_folders(dir)?;

    if catalog.is_empty() {
        println!("No log files found in {}", dir.display());
        return Ok(());
    }

    for (log_type, versions) in &catalog {
        println!("{log_type}:");
        for version in versions {
            let name = version
                .path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            println!("  {}  {}", version.timestamp, name);
        }
    }

    Ok(())
}
