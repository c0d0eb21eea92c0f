//! Anthropic Messages API adapter (`POST /v1/messages`).

use super::http::{HttpTransport, endpoint};
use super::{ProviderAdapter, ProviderKind};
use async_trait::async_trait;
use querywright_application::ports::llm_gateway::{GatewayError, LlmSession};
use querywright_domain::providers::resolve_api_key;
use querywright_domain::{AnthropicProviderConfig, Model};
use serde_json::{Value, json};
use std::sync::Arc;

const MESSAGES_PATH: &str = "/v1/messages";

pub struct AnthropicAdapter {
    transport: Arc<HttpTransport>,
    config: AnthropicProviderConfig,
    api_key: String,
}

impl AnthropicAdapter {
    pub fn new(
        config: &AnthropicProviderConfig,
        transport: Arc<HttpTransport>,
    ) -> Result<Self, GatewayError> {
        let api_key = resolve_api_key(config.api_key.as_deref(), &config.api_key_env).ok_or_else(
            || {
                GatewayError::AuthenticationError(format!(
                    "No Anthropic API key (set {})",
                    config.api_key_env
                ))
            },
        )?;
        Ok(Self {
            transport,
            config: config.clone(),
            api_key,
        })
    }

    /// Create the adapter only when an API key is available.
    pub fn try_new(config: &AnthropicProviderConfig, transport: Arc<HttpTransport>) -> Option<Self> {
        Self::new(config, transport).ok()
    }
}

#[async_trait]
impl ProviderAdapter for AnthropicAdapter {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Anthropic
    }

    async fn create_session_with_system_prompt(
        &self,
        model: &Model,
        system_prompt: &str,
    ) -> Result<Box<dyn LlmSession>, GatewayError> {
        Ok(Box::new(AnthropicSession {
            transport: self.transport.clone(),
            url: endpoint(&self.config.base_url, MESSAGES_PATH),
            headers: vec![
                ("x-api-key", self.api_key.clone()),
                ("anthropic-version", self.config.api_version.clone()),
            ],
            model: model.clone(),
            system_prompt: system_prompt.to_string(),
            max_tokens: self.config.max_tokens,
        }))
    }

    async fn available_models(&self) -> Result<Vec<Model>, GatewayError> {
        Ok(vec![
            Model::ClaudeSonnet45,
            Model::ClaudeHaiku45,
            Model::ClaudeOpus41,
        ])
    }
}

pub struct AnthropicSession {
    transport: Arc<HttpTransport>,
    url: String,
    headers: Vec<(&'static str, String)>,
    model: Model,
    system_prompt: String,
    max_tokens: u32,
}

impl AnthropicSession {
    fn request_body(&self, content: &str) -> Value {
        let mut body = json!({
            "model": self.model.as_str(),
            "max_tokens": self.max_tokens,
            "messages": [{"role": "user", "content": content}],
        });
        if !self.system_prompt.is_empty() {
            body["system"] = Value::String(self.system_prompt.clone());
        }
        body
    }
}

#[async_trait]
impl LlmSession for AnthropicSession {
    fn model(&self) -> &Model {
        &self.model
    }

    async fn send(&self, content: &str) -> Result<String, GatewayError> {
        let response = self
            .transport
            .post_json(&self.url, &self.headers, &self.request_body(content))
            .await?;
        parse_response(&response)
    }
}

/// Concatenate the text blocks of a Messages API response.
pub fn parse_response(response: &Value) -> Result<String, GatewayError> {
    let blocks = response["content"].as_array().ok_or_else(|| {
        GatewayError::InvalidResponse("Anthropic response has no content array".to_string())
    })?;

    let text: String = blocks
        .iter()
        .filter(|block| block["type"] == "text")
        .filter_map(|block| block["text"].as_str())
        .collect();

    if text.is_empty() {
        return Err(GatewayError::InvalidResponse(
            "Anthropic response has no text block".to_string(),
        ));
    }
    Ok(text)
}
