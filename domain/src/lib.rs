//! Domain layer for querywright
//!
//! This crate contains the core extraction logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Extraction
//!
//! Model output is free-form text with a query somewhere inside it. The
//! [`extraction`] pipeline isolates that query and normalizes it:
//!
//! - **Fenced block**: a ```` ``` ```` block is preferred when present
//! - **Line scanner**: otherwise a line classifier finds the statement bounds
//! - **Normalizer**: exactly one trailing terminator
//! - **Validator**: the mandatory keyword must be present
//!
//! ## Dialect
//!
//! A [`QueryDialect`] holds the injectable keyword tables (start,
//! continuation, conversational markers) and boundary constants. Cypher is
//! the default.

pub mod config;
pub mod core;
pub mod dialect;
pub mod extraction;
pub mod prompt;
pub mod providers;
pub mod util;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use core::{
    error::{DomainError, ExtractionError},
    model::Model,
    phase::GenerationPhase,
    request::GenerationRequest,
};
pub use dialect::{KeywordTable, LANGUAGE_TAG, MANDATORY_KEYWORD, QueryDialect, TERMINATOR};
pub use extraction::{
    ExtractedQuery, ExtractionPath, FallbackPolicy, LineClass, LineScanner, ResponseCleaner,
    clean, extract_fenced, normalize, precheck_raw, scan, validate,
};
pub use prompt::{PromptStyle, QueryPromptTemplate};
pub use providers::{
    AnthropicProviderConfig, OllamaProviderConfig, OpenAiProviderConfig, ProviderConfig,
    RetryPolicy,
};
