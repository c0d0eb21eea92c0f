//! Application-level configuration.
//!
//! - [`GenerationParams`]: model, prompt style, fallback policy and timeout
//!   for one generation call

pub mod generation_params;

pub use generation_params::GenerationParams;
