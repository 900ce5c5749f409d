//! Diff command handler.
//!
//! Implements the `diff` subcommand for comparing two snapshots.

use crate::config::DiffConfig;
use crate::pipeline::{
    compute_diff, exit_codes, load_snapshot_with_context, should_use_color, write_output,
    OutputTarget,
};
use crate::reports::reporter_for;
use anyhow::Result;

/// Run the diff command, returning the desired exit code.
///
/// The caller is responsible for calling `std::process::exit()` with the
/// returned code when it is non-zero.
pub fn run_diff(config: DiffConfig) -> Result<i32> {
    config.csv.validate()?;

    let old = load_snapshot_with_context(&config.paths.old, &config)?;
    let new = load_snapshot_with_context(&config.paths.new, &config)?;

    if !config.behavior.quiet {
        tracing::info!(
            "Loaded {} rows from old snapshot, {} from new snapshot",
            old.row_count(),
            new.row_count()
        );
    }

    let result = compute_diff(&config, &old, &new)?;
    let exit_code = determine_exit_code(&config, &result);

    let target = OutputTarget::from_option(config.output.file.clone());
    let colored = should_use_color(config.output.no_color, &target);
    let reporter = reporter_for(config.output.format, colored);
    let report = reporter.generate_diff_report(&result)?;
    write_output(&target, &report)?;

    Ok(exit_code)
}

/// Determine the appropriate exit code based on diff results and config flags.
const fn determine_exit_code(config: &DiffConfig, result: &crate::diff::DiffResult) -> i32 {
    if config.behavior.fail_on_change && result.summary.total_changes > 0 {
        return exit_codes::CHANGES_DETECTED;
    }
    exit_codes::SUCCESS
}
