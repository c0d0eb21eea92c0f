//! OpenAI Chat Completions adapter (`POST /v1/chat/completions`).
//!
//! Ollama serves the same API, so it is the same adapter without a key.

use super::http::{HttpTransport, endpoint};
use super::{ProviderAdapter, ProviderKind};
use async_trait::async_trait;
use querywright_application::ports::llm_gateway::{GatewayError, LlmSession};
use querywright_domain::providers::resolve_api_key;
use querywright_domain::{Model, OllamaProviderConfig, OpenAiProviderConfig};
use serde_json::{Value, json};
use std::sync::Arc;

const COMPLETIONS_PATH: &str = "/v1/chat/completions";

pub struct OpenAiAdapter {
    kind: ProviderKind,
    transport: Arc<HttpTransport>,
    base_url: String,
    api_key: Option<String>,
    max_tokens: u32,
}

impl OpenAiAdapter {
    pub fn openai(
        config: &OpenAiProviderConfig,
        transport: Arc<HttpTransport>,
    ) -> Result<Self, GatewayError> {
        let api_key = resolve_api_key(config.api_key.as_deref(), &config.api_key_env).ok_or_else(
            || {
                GatewayError::AuthenticationError(format!(
                    "No OpenAI API key (set {})",
                    config.api_key_env
                ))
            },
        )?;
        Ok(Self {
            kind: ProviderKind::OpenAi,
            transport,
            base_url: config.base_url.clone(),
            api_key: Some(api_key),
            max_tokens: config.max_tokens,
        })
    }

    /// Create the OpenAI adapter only when an API key is available.
    pub fn try_openai(config: &OpenAiProviderConfig, transport: Arc<HttpTransport>) -> Option<Self> {
        Self::openai(config, transport).ok()
    }

    pub fn ollama(config: &OllamaProviderConfig, transport: Arc<HttpTransport>) -> Self {
        Self {
            kind: ProviderKind::Ollama,
            transport,
            base_url: config.base_url.clone(),
            api_key: None,
            max_tokens: config.max_tokens,
        }
    }

    fn headers(&self) -> Vec<(&'static str, String)> {
        self.api_key
            .iter()
            .map(|key| ("Authorization", format!("Bearer {}", key)))
            .collect()
    }
}

#[async_trait]
impl ProviderAdapter for OpenAiAdapter {
    fn kind(&self) -> ProviderKind {
        self.kind
    }

    async fn create_session_with_system_prompt(
        &self,
        model: &Model,
        system_prompt: &str,
    ) -> Result<Box<dyn LlmSession>, GatewayError> {
        Ok(Box::new(ChatCompletionsSession {
            transport: self.transport.clone(),
            url: endpoint(&self.base_url, COMPLETIONS_PATH),
            headers: self.headers(),
            model: model.clone(),
            system_prompt: system_prompt.to_string(),
            max_tokens: self.max_tokens,
        }))
    }

    async fn available_models(&self) -> Result<Vec<Model>, GatewayError> {
        match self.kind {
            ProviderKind::OpenAi => Ok(vec![
                Model::Gpt5,
                Model::Gpt5Mini,
                Model::Gpt41,
                Model::Gpt4oMini,
            ]),
            // Local models are whatever the user pulled; nothing to advertise.
            _ => Ok(Vec::new()),
        }
    }
}

pub struct ChatCompletionsSession {
    transport: Arc<HttpTransport>,
    url: String,
    headers: Vec<(&'static str, String)>,
    model: Model,
    system_prompt: String,
    max_tokens: u32,
}

impl ChatCompletionsSession {
    fn request_body(&self, content: &str) -> Value {
        let mut messages = Vec::with_capacity(2);
        if !self.system_prompt.is_empty() {
            messages.push(json!({"role": "system", "content": self.system_prompt}));
        }
        messages.push(json!({"role": "user", "content": content}));

        json!({
            "model": self.model.as_str(),
            "max_tokens": self.max_tokens,
            "messages": messages,
        })
    }
}

#[async_trait]
impl LlmSession for ChatCompletionsSession {
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

/// Extract the first choice's message content.
pub fn parse_response(response: &Value) -> Result<String, GatewayError> {
    response["choices"][0]["message"]["content"]
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| {
            GatewayError::InvalidResponse("Chat completion has no message content".to_string())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use querywright_domain::RetryPolicy;

    fn transport() -> Arc<HttpTransport> {
        Arc::new(HttpTransport::new(RetryPolicy::default()).unwrap())
    }

    #[test]
    fn test_parse_response() {
        let response = json!({
            "choices": [{"message": {"role": "assistant", "content": "MATCH (n) RETURN n;"}}]
        });
        assert_eq!(parse_response(&response).unwrap(), "MATCH (n) RETURN n;");
    }

    #[test]
    fn test_parse_response_without_choices() {
        assert!(matches!(
            parse_response(&json!({"choices": []})),
            Err(GatewayError::InvalidResponse(_))
        ));
        assert!(matches!(
            parse_response(&json!({"choices": [{"message": {"content": null}}]})),
            Err(GatewayError::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_openai_sends_bearer_token() {
        let config = OpenAiProviderConfig {
            api_key: Some("sk-test".to_string()),
            ..Default::default()
        };
        let adapter = OpenAiAdapter::openai(&config, transport()).unwrap();
        assert_eq!(adapter.kind(), ProviderKind::OpenAi);
        assert_eq!(
            adapter.headers(),
            vec![("Authorization", "Bearer sk-test".to_string())]
        );
    }

    #[test]
    fn test_openai_requires_key() {
        let config = OpenAiProviderConfig {
            api_key_env: "QUERYWRIGHT_TEST_NO_SUCH_KEY".to_string(),
            ..Default::default()
        };
        assert!(OpenAiAdapter::try_openai(&config, transport()).is_none());
    }

    #[test]
    fn test_ollama_has_no_key() {
        let adapter = OpenAiAdapter::ollama(&OllamaProviderConfig::default(), transport());
        assert_eq!(adapter.kind(), ProviderKind::Ollama);
        assert!(adapter.headers().is_empty());
    }

    #[tokio::test]
    async fn test_ollama_session_request_body() {
        let adapter = OpenAiAdapter::ollama(&OllamaProviderConfig::default(), transport());
        let model = Model::Custom("llama3.1:8b".to_string());
        let session = ChatCompletionsSession {
            transport: transport(),
            url: endpoint(&adapter.base_url, COMPLETIONS_PATH),
            headers: adapter.headers(),
            model: model.clone(),
            system_prompt: "Write Cypher.".to_string(),
            max_tokens: 1024,
        };

        assert_eq!(session.url, "http://localhost:11434/v1/chat/completions");
        let body = session.request_body("count nodes");
        assert_eq!(body["model"], "llama3.1:8b");
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][1]["content"], "count nodes");

        assert!(adapter.available_models().await.unwrap().is_empty());
    }
}
