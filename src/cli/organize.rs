//! Organize command handler.
//!
//! Normalizes filenames with modification-time prefixes, then groups the
//! files into per-log-type subfolders. Together these establish the folder
//! layout the diff pipeline assumes.

use crate::catalog::{organize_by_type, rename_with_timestamp};
use anyhow::Result;
use std::path::Path;

/// Run the organize command on a logs directory.
pub fn run_organize(dir: &Path, quiet: bool) -> Result<()> {
    let renamed = rename_with_timestamp(dir)?;
    let moved = organize_by_type(dir)?;

    if !quiet {
        for action in &renamed {
            println!(
                "renamed: {} -> {}",
                action.from.display(),
                action.to.display()
            );
        }
        for action in &moved {
            println!(
                "moved:   {} -> {}",
                action.from.display(),
                action.to.display()
            );
        }
        if renamed.is_empty() && moved.is_empty() {
            println!("Nothing to organize in {}", dir.display());
        }
    }

    Ok(())
}
