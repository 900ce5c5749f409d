//! Configuration for csvlog-tools.

mod file;
mod types;

pub use file::{
    discover_config_file, generate_example_config, load_config_file, load_or_default,
    ConfigFileError,
};
pub use types::{AppConfig, BehaviorConfig, CsvOptions, DiffConfig, DiffPaths, OutputConfig};
