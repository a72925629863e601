//! Configuration file loading for country-overlap
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./country-overlap.toml` or `./.country-overlap.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/country-overlap/config.toml`
//! 4. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileConfig, FileDataConfig, FileLoggingConfig, FileMapConfig, FileOutputConfig,
    FileOutputFormat, FileReplConfig,
};
pub use loader::ConfigLoader;
