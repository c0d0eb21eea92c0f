//! Application layer for querywright
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::GenerationParams;
pub use ports::{
    generation_logger::{GenerationEvent, GenerationLogger, NoGenerationLogger},
    llm_gateway::{GatewayError, LlmGateway, LlmSession},
    progress::{GenerationProgress, NoProgress},
};
pub use use_cases::generate_query::{
    DEFAULT_PROJECT, FailureCause, GenerateQueryUseCase, GeneratedQuery, GenerationFailed,
};
