//! csvlog-tools: key-based diff and organization tool for CSV log snapshots

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use csvlog_tools::{
    cli,
    config::{self, BehaviorConfig, CsvOptions, DiffPaths, OutputConfig},
    reports::ReportFormat,
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Build long version string with format support info
const fn build_long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\nExpected filename format:",
        "\n  YYYY-MM-DD_HH-MM_<logtype>.csv (created by `organize`)",
        "\n\nOutput Formats:",
        "\n  summary, markdown, json",
        "\n\nFeatures:",
        "\n  Key-based row diff, duplicate-key detection, schema warnings"
    )
}

#[derive(Parser)]
#[command(name = "csvlog-tools")]
#[command(version, long_version = build_long_version())]
#[command(about = "Key-based diff and organization tool for CSV log snapshots", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  No changes detected (or no --fail-on-change)
    1  Changes detected (with --fail-on-change)
    2  Error occurred

EXAMPLES:
    # Timestamp-rename exports and group them into per-type subfolders
    csvlog-tools organize logs

    # See which log types and versions are available
    csvlog-tools list logs

    # Compare two versions of the same log type
    csvlog-tools diff logs/digital/2025-05-01_10-00_digital.csv \\
                      logs/digital/2025-06-01_10-00_digital.csv

    # CI check with machine-readable output
    csvlog-tools diff old.csv new.csv -o json --fail-on-change > diff.json")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

// ============================================================================
// Command argument structs
// ============================================================================

/// Arguments for the `diff` subcommand
#[derive(Parser)]
struct DiffArgs {
    /// Path to the old snapshot
    old: PathBuf,

    /// Path to the new snapshot
    new: PathBuf,

    /// Output format
    #[arg(short, long, default_value = "auto")]
    output: ReportFormat,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Field delimiter (overrides config file; default ';')
    #[arg(short, long, env = "CSVLOG_DELIMITER")]
    delimiter: Option<char>,

    /// Key column used to match rows (overrides config file; default 'id')
    #[arg(short, long, env = "CSVLOG_KEY_COLUMN")]
    key_column: Option<String>,

    /// Exit with code 1 if any changes are detected
    #[arg(long)]
    fail_on_change: bool,
}

/// Arguments for the `organize` subcommand
#[derive(Parser)]
struct OrganizeArgs {
    /// Logs directory containing raw CSV exports
    dir: PathBuf,
}

/// Arguments for the `list` subcommand
#[derive(Parser)]
struct ListArgs {
    /// Logs directory with per-type subfolders
    dir: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two CSV log snapshots
    Diff(DiffArgs),

    /// Rename exports with timestamp prefixes and group them by log type
    Organize(OrganizeArgs),

    /// List available log types and their versions
    List(ListArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .csvlog-tools.yaml in the current directory
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    match cli.command {
        Commands::Diff(args) => {
            let (file_config, _) = config::load_or_default(cli.config.as_deref());

            let diff_config = cli::DiffConfig {
                paths: DiffPaths {
                    old: args.old,
                    new: args.new,
                },
                csv: CsvOptions {
                    delimiter: args.delimiter.unwrap_or(file_config.csv.delimiter),
                    key_column: args.key_column.unwrap_or(file_config.csv.key_column),
                },
                output: OutputConfig {
                    format: args.output,
                    file: args.output_file,
                    no_color: cli.no_color || file_config.output.no_color,
                },
                behavior: BehaviorConfig {
                    fail_on_change: args.fail_on_change,
                    quiet: cli.quiet,
                },
            };

            let exit_code = cli::run_diff(diff_config)?;
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
            Ok(())
        }

        Commands::Organize(args) => cli::run_organize(&args.dir, cli.quiet),

        Commands::List(args) => cli::run_list(&args.dir),

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "csvlog-tools", &mut io::stdout());
            Ok(())
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let (app_config, loaded_from) = config::load_or_default(cli.config.as_deref());
                if let Some(path) = &loaded_from {
                    eprintln!("# Loaded from: {}", path.display());
                } else {
                    eprintln!("# No config file found; showing defaults");
                }
                let yaml =
                    serde_yaml::to_string(&app_config).context("failed to serialize config")?;
                print!("{yaml}");
                Ok(())
            }
            ConfigAction::Path => {
                let search_paths: [Option<String>; 3] = [
                    std::env::current_dir()
                        .ok()
                        .map(|p| p.display().to_string()),
                    dirs::config_dir().map(|p| p.join("csvlog-tools").display().to_string()),
                    dirs::home_dir().map(|p| p.display().to_string()),
                ];
                eprintln!("Config file search paths (in order):");
                for path in search_paths.into_iter().flatten() {
                    eprintln!("  {path}");
                }
                eprintln!();
                eprintln!("Recognized file names:");
                for name in &[
                    ".csvlog-tools.yaml",
                    ".csvlog-tools.yml",
                    "csvlog-tools.yaml",
                    "csvlog-tools.yml",
                ] {
                    eprintln!("  {name}");
                }
                eprintln!();
                match config::discover_config_file(cli.config.as_deref()) {
                    Some(path) => eprintln!("Active config file: {}", path.display()),
                    None => eprintln!("No config file found."),
                }
                Ok(())
            }
            ConfigAction::Init => {
                let target = std::env::current_dir()
                    .context("cannot determine current directory")?
                    .join(".csvlog-tools.yaml");
                if target.exists() {
                    anyhow::bail!(
                        "{} already exists. Remove it first to re-initialize.",
                        target.display()
                    );
                }
                std::fs::write(&target, config::generate_example_config())
                    .with_context(|| format!("failed to write {}", target.display()))?;
                eprintln!("Created {}", target.display());
                Ok(())
            }
        },
    }
}
