//! Configuration file loading for wellness-check
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `WELLNESS_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./wellness.toml` or `./.wellness.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/wellness-check/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileInteractiveConfig, FileOutputConfig,
    FileOutputFormat, FileServiceConfig,
};
pub use loader::ConfigLoader;
