//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`]: LLM models that can generate queries
//! - [`request::GenerationRequest`]: a validated question plus optional scope
//! - [`phase::GenerationPhase`]: states of one generation call
//! - [`error::DomainError`] and [`error::ExtractionError`]: domain-level errors

pub mod error;
pub mod model;
pub mod phase;
pub mod request;
