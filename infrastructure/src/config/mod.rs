//! Configuration file loading for folio
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./folio.toml` or `./.folio.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/folio/config.toml`
//! 4. Fallback: `~/.config/folio/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileContactConfig, FileOutputConfig, FilePortfolioConfig,
    FileReplConfig,
};
pub use loader::ConfigLoader;
