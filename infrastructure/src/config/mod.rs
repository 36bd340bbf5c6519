//! Configuration file loading for jury-sim
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `JURY_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./jury.toml` or `./.jury.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/jury-sim/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileOutputConfig, FileOutputFormat, FileSimulationConfig,
    FileTrialConfig,
};
pub use loader::ConfigLoader;
