//! Provider configuration from TOML (`[providers]` section)

use querywright_domain::{
    AnthropicProviderConfig, ConfigIssue, ConfigIssueCode, OllamaProviderConfig,
    OpenAiProviderConfig, ProviderConfig, RetryPolicy,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

/// Provider names accepted in `default` and `routing`.
pub const KNOWN_PROVIDERS: &[&str] = &["anthropic", "openai", "ollama"];

/// Anthropic API provider configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAnthropicConfig {
    /// Environment variable name for the API key (default: "ANTHROPIC_API_KEY").
    pub api_key_env: String,
    /// Direct API key (not recommended, use the env var instead).
    pub api_key: Option<String>,
    /// Base URL for the Anthropic API.
    pub base_url: String,
    /// Default max tokens per response.
    pub max_tokens: u32,
    /// Anthropic API version header.
    pub api_version: String,
}

impl Default for FileAnthropicConfig {
    fn default() -> Self {
        let defaults = AnthropicProviderConfig::default();
        Self {
            api_key_env: defaults.api_key_env,
            api_key: defaults.api_key,
            base_url: defaults.base_url,
            max_tokens: defaults.max_tokens,
            api_version: defaults.api_version,
        }
    }
}

/// OpenAI API provider configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOpenAiConfig {
    /// Environment variable name for the API key (default: "OPENAI_API_KEY").
    pub api_key_env: String,
    /// Direct API key (not recommended, use the env var instead).
    pub api_key: Option<String>,
    /// Base URL for the OpenAI API (can be overridden for compatible proxies).
    pub base_url: String,
    /// Default max tokens per response.
    pub max_tokens: u32,
}

impl Default for FileOpenAiConfig {
    fn default() -> Self {
        let defaults = OpenAiProviderConfig::default();
        Self {
            api_key_env: defaults.api_key_env,
            api_key: defaults.api_key,
            base_url: defaults.base_url,
            max_tokens: defaults.max_tokens,
        }
    }
}

/// Ollama provider configuration (OpenAI-compatible endpoint, no key).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOllamaConfig {
    pub base_url: String,
    pub max_tokens: u32,
}

impl Default for FileOllamaConfig {
    fn default() -> Self {
        let defaults = OllamaProviderConfig::default();
        Self {
            base_url: defaults.base_url,
            max_tokens: defaults.max_tokens,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProvidersConfig {
    /// Default provider: "anthropic", "openai", "ollama".
    pub default: Option<String>,
    /// Retries after the first attempt for transient failures.
    pub max_retries: u32,
    /// Delay before the first retry, doubled for each following one.
    pub retry_backoff_ms: u64,
    /// Anthropic API settings.
    pub anthropic: FileAnthropicConfig,
    /// OpenAI API settings.
    pub openai: FileOpenAiConfig,
    /// Ollama settings.
    pub ollama: FileOllamaConfig,
    /// Explicit model → provider routing overrides.
    pub routing: HashMap<String, String>,
}

impl Default for FileProvidersConfig {
    fn default() -> Self {
        let retry = RetryPolicy::default();
        Self {
            default: None,
            max_retries: retry.max_retries,
            retry_backoff_ms: retry.initial_backoff.as_millis() as u64,
            anthropic: FileAnthropicConfig::default(),
            openai: FileOpenAiConfig::default(),
            ollama: FileOllamaConfig::default(),
            routing: HashMap::new(),
        }
    }
}

impl FileProvidersConfig {
    /// Convert to the domain [`ProviderConfig`].
    pub fn to_provider_config(&self) -> ProviderConfig {
        ProviderConfig {
            default: self.default.clone(),
            routing: self.routing.clone(),
            retry: RetryPolicy {
                max_retries: self.max_retries,
                initial_backoff: Duration::from_millis(self.retry_backoff_ms),
            },
            anthropic: AnthropicProviderConfig {
                api_key_env: self.anthropic.api_key_env.clone(),
                api_key: self.anthropic.api_key.clone(),
                base_url: self.anthropic.base_url.clone(),
                max_tokens: self.anthropic.max_tokens,
                api_version: self.anthropic.api_version.clone(),
            },
            openai: OpenAiProviderConfig {
                api_key_env: self.openai.api_key_env.clone(),
                api_key: self.openai.api_key.clone(),
                base_url: self.openai.base_url.clone(),
                max_tokens: self.openai.max_tokens,
            },
            ollama: OllamaProviderConfig {
                base_url: self.ollama.base_url.clone(),
                max_tokens: self.ollama.max_tokens,
            },
        }
    }

    /// Report provider names that no adapter answers to.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if let Some(name) = &self.default {
            issues.extend(unknown_provider("providers.default", name));
        }

        let mut routes: Vec<_> = self.routing.iter().collect();
        routes.sort();
        for (model, name) in routes {
            issues.extend(unknown_provider(&format!("providers.routing.{}", model), name));
        }

        issues
    }
}

fn unknown_provider(field: &str, name: &str) -> Option<ConfigIssue> {
    if KNOWN_PROVIDERS.contains(&name) {
        return None;
    }
    Some(ConfigIssue::warning(
        ConfigIssueCode::InvalidEnumValue {
            field: field.to_string(),
            value: name.to_string(),
            valid_values: KNOWN_PROVIDERS.iter().map(|s| s.to_string()).collect(),
        },
        format!("{}: unknown provider '{}', ignored", field, name),
    ))
}
