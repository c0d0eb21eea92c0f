//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod extraction;
mod generation;
mod logging;
mod output;
mod providers;

pub use extraction::FileExtractionConfig;
pub use generation::FileGenerationConfig;
pub use logging::FileLoggingConfig;
pub use output::FileOutputConfig;
pub use providers::{
    FileAnthropicConfig, FileOllamaConfig, FileOpenAiConfig, FileProvidersConfig,
    KNOWN_PROVIDERS,
};

use querywright_application::GenerationParams;
use querywright_domain::ConfigIssue;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Model and timeout
    pub generation: FileGenerationConfig,
    /// Cleaner settings
    pub extraction: FileExtractionConfig,
    /// Provider settings, retries and routing
    pub providers: FileProvidersConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Log destinations
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.generation.parse_model().1);
        issues.extend(self.extraction.parse_fallback().1);
        issues.extend(self.providers.validate());
        issues
    }

    /// Build generation parameters, applying defaults where a field is invalid.
    ///
    /// The prompt style is left at its default; it depends on the provider
    /// the model is routed to.
    pub fn to_generation_params(&self) -> GenerationParams {
        let mut params = GenerationParams::default()
            .with_fallback(self.extraction.parse_fallback().0)
            .with_timeout_seconds(self.generation.timeout_secs);
        if let Some(model) = self.generation.parse_model().0 {
            params = params.with_model(model);
        }
        params
    }
}
