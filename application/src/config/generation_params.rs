//! Generation parameters: per-call control for the generate-query use case.
//!
//! [`GenerationParams`] groups the static parameters that control
//! [`GenerateQueryUseCase`](crate::use_cases::generate_query::GenerateQueryUseCase).
//! These are application-layer concerns, not domain policy.

use querywright_domain::{FallbackPolicy, Model, PromptStyle};
use std::time::Duration;

/// Per-call generation parameters.
#[derive(Debug, Clone)]
pub struct GenerationParams {
    /// Model asked to write the query.
    pub model: Model,
    /// System prompt flavor (hosted vs. local models).
    pub prompt_style: PromptStyle,
    /// What the cleaner does when no statement is found.
    pub fallback: FallbackPolicy,
    /// Upper bound on the provider call, `None` for no limit.
    pub timeout: Option<Duration>,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            model: Model::default(),
            prompt_style: PromptStyle::default(),
            fallback: FallbackPolicy::default(),
            timeout: Some(Duration::from_secs(60)),
        }
    }
}

impl GenerationParams {
    // ==================== Builder Methods ====================

    pub fn with_model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }

    pub fn with_prompt_style(mut self, style: PromptStyle) -> Self {
        self.prompt_style = style;
        self
    }

    pub fn with_fallback(mut self, fallback: FallbackPolicy) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the timeout from seconds; `0` disables it.
    pub fn with_timeout_seconds(self, seconds: u64) -> Self {
        let timeout = (seconds > 0).then(|| Duration::from_secs(seconds));
        self.with_timeout(timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let params = GenerationParams::default();
        assert_eq!(params.model, Model::ClaudeSonnet45);
        assert_eq!(params.prompt_style, PromptStyle::Hosted);
        assert_eq!(params.fallback, FallbackPolicy::Reject);
        assert_eq!(params.timeout, Some(Duration::from_secs(60)));
    }

    #[test]
    fn test_builder() {
        let params = GenerationParams::default()
            .with_model(Model::Gpt41)
            .with_prompt_style(PromptStyle::Local)
            .with_fallback(FallbackPolicy::StripPrefix)
            .with_timeout_seconds(0);

        assert_eq!(params.model, Model::Gpt41);
        assert_eq!(params.prompt_style, PromptStyle::Local);
        assert_eq!(params.fallback, FallbackPolicy::StripPrefix);
        assert!(params.timeout.is_none());
    }
}
