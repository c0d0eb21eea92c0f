//! Configuration file loading for querywright
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment variables `QUERYWRIGHT_*` (nested keys split on `__`)
//! 2. `--config <path>` specified file
//! 3. Project root: `./querywright.toml` or `./.querywright.toml`
//! 4. Global: `$XDG_CONFIG_HOME/querywright/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileAnthropicConfig, FileConfig, FileExtractionConfig, FileGenerationConfig,
    FileLoggingConfig, FileOllamaConfig, FileOpenAiConfig, FileOutputConfig,
    FileProvidersConfig, KNOWN_PROVIDERS,
};
pub use loader::ConfigLoader;

use thiserror::Error;

/// Errors raised while loading configuration files.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),
}
