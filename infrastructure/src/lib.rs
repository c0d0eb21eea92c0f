//! Infrastructure layer for querywright
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: HTTP provider adapters, the routing gateway,
//! configuration file loading and the JSONL generation log.

pub mod config;
pub mod logging;
pub mod providers;

// Re-export commonly used types
pub use config::{
    ConfigError, ConfigLoader, FileConfig, FileExtractionConfig, FileGenerationConfig,
    FileLoggingConfig, FileOutputConfig, FileProvidersConfig,
};
pub use logging::JsonlGenerationLogger;
pub use providers::{
    ProviderAdapter, ProviderKind, anthropic::AnthropicAdapter, http::HttpTransport,
    openai::OpenAiAdapter, routing::RoutingGateway,
};
