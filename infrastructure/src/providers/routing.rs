use super::{ProviderAdapter, ProviderKind};
use async_trait::async_trait;
use querywright_application::ports::llm_gateway::{GatewayError, LlmGateway, LlmSession};
use querywright_domain::{Model, ProviderConfig};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Gateway that sends each model to one of several provider adapters.
///
/// Resolution order:
///  1. the explicit `[providers.routing]` table, by model name
///  2. model family: `claude-*` to Anthropic, `gpt-*`/`o*` to OpenAI
///  3. the configured default provider
///  4. the first registered provider
pub struct RoutingGateway {
    providers: Vec<Arc<dyn ProviderAdapter>>,
    explicit_model_routing: HashMap<String, usize>,
    default_kind: Option<ProviderKind>,
}

impl RoutingGateway {
    pub fn new(providers: Vec<Arc<dyn ProviderAdapter>>, config: &ProviderConfig) -> Self {
        let mut explicit_model_routing = HashMap::new();

        for (model_name, provider_name) in &config.routing {
            let Some(target_kind) = ProviderKind::from_name(provider_name) else {
                continue;
            };
            if let Some(idx) = providers.iter().position(|p| p.kind() == target_kind) {
                explicit_model_routing.insert(model_name.clone(), idx);
            }
        }

        Self {
            providers,
            explicit_model_routing,
            default_kind: config.default.as_deref().and_then(ProviderKind::from_name),
        }
    }

    /// Which provider would serve `model`, if any is registered.
    pub fn provider_for(&self, model: &Model) -> Option<ProviderKind> {
        self.resolve_provider(model).ok().map(|p| p.kind())
    }

    pub fn provider_kinds(&self) -> Vec<ProviderKind> {
        self.providers.iter().map(|p| p.kind()).collect()
    }

    fn resolve_provider(&self, model: &Model) -> Result<&dyn ProviderAdapter, GatewayError> {
        // 1. Explicit routing table
        if let Some(&idx) = self.explicit_model_routing.get(model.as_str()) {
            return Ok(self.providers[idx].as_ref());
        }

        // 2. Model family
        let inferred_kind = if model.is_claude() {
            Some(ProviderKind::Anthropic)
        } else if model.is_gpt() {
            Some(ProviderKind::OpenAi)
        } else {
            None
        };
        if let Some(p) = inferred_kind.and_then(|kind| self.find(kind)) {
            return Ok(p);
        }

        // 3. Default provider
        if let Some(p) = self.default_kind.and_then(|kind| self.find(kind)) {
            return Ok(p);
        }

        // 4. First provider
        self.providers
            .first()
            .map(|p| p.as_ref())
            .ok_or(GatewayError::ModelNotAvailable(format!(
                "No provider configured for {}",
                model
            )))
    }

    fn find(&self, kind: ProviderKind) -> Option<&dyn ProviderAdapter> {
        self.providers
            .iter()
            .find(|p| p.kind() == kind)
            .map(|p| p.as_ref())
    }
}

#[async_trait]
impl LlmGateway for RoutingGateway {
    async fn create_session(&self, model: &Model) -> Result<Box<dyn LlmSession>, GatewayError> {
        self.create_session_with_system_prompt(model, "").await
    }

    async fn create_session_with_system_prompt(
        &self,
        model: &Model,
        system_prompt: &str,
    ) -> Result<Box<dyn LlmSession>, GatewayError> {
        let provider = self.resolve_provider(model)?;
        debug!("Routing {} to {}", model, provider.kind());
        provider
            .create_session_with_system_prompt(model, system_prompt)
            .await
    }

    async fn available_models(&self) -> Result<Vec<Model>, GatewayError> {
        let mut all_models = Vec::new();
        for provider in &self.providers {
            if let Ok(models) = provider.available_models().await {
                all_models.extend(models);
            }
        }
        Ok(all_models)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Adapter that only reports its kind; sessions fail with the kind name.
    struct StubProvider {
        kind: ProviderKind,
        models: Vec<Model>,
    }

    #[async_trait]
    impl ProviderAdapter for StubProvider {
        fn kind(&self) -> ProviderKind {
            self.kind
        }

        async fn create_session_with_system_prompt(
            &self,
            _model: &Model,
            _system_prompt: &str,
        ) -> Result<Box<dyn LlmSession>, GatewayError> {
            Err(GatewayError::RequestFailed(self.kind.to_string()))
        }

        async fn available_models(&self) -> Result<Vec<Model>, GatewayError> {
            Ok(self.models.clone())
        }
    }

    fn stubs(kinds: &[ProviderKind]) -> Vec<Arc<dyn ProviderAdapter>> {
        kinds
            .iter()
            .map(|&kind| {
                Arc::new(StubProvider {
                    kind,
                    models: vec![],
                }) as Arc<dyn ProviderAdapter>
            })
            .collect()
    }

    fn config(default: Option<&str>, routes: &[(&str, &str)]) -> ProviderConfig {
        ProviderConfig {
            default: default.map(str::to_string),
            routing: routes
                .iter()
                .map(|(model, provider)| (model.to_string(), provider.to_string()))
                .collect(),
            ..Default::default()
        }
    }

    fn route(kinds: &[ProviderKind], config: &ProviderConfig, model: Model) -> Option<ProviderKind> {
        RoutingGateway::new(stubs(kinds), config).provider_for(&model)
    }

    fn local_model() -> Model {
        Model::Custom("llama3.1:8b".to_string())
    }

    use ProviderKind::{Anthropic, Ollama, OpenAi};

    #[test]
    fn explicit_table_beats_model_family() {
        let config = config(None, &[("claude-sonnet-4-5", "ollama")]);
        assert_eq!(
            route(&[Ollama, Anthropic], &config, Model::ClaudeSonnet45),
            Some(Ollama)
        );
    }

    #[test]
    fn family_routes_claude_and_gpt() {
        let config = config(None, &[]);
        let kinds = [OpenAi, Anthropic];
        assert_eq!(route(&kinds, &config, Model::ClaudeOpus41), Some(Anthropic));
        assert_eq!(
            route(
                &kinds,
                &config,
                Model::Custom("claude-3-5-haiku-20241022".to_string())
            ),
            Some(Anthropic)
        );
        assert_eq!(route(&kinds, &config, Model::Gpt41), Some(OpenAi));
        assert_eq!(
            route(&kinds, &config, Model::Custom("o3-mini".to_string())),
            Some(OpenAi)
        );
    }

    #[test]
    fn unknown_family_uses_default_provider() {
        let config = config(Some("ollama"), &[]);
        assert_eq!(route(&[Anthropic, Ollama], &config, local_model()), Some(Ollama));
    }

    #[test]
    fn missing_family_provider_falls_through_to_default() {
        let config = config(Some("ollama"), &[]);
        assert_eq!(
            route(&[OpenAi, Ollama], &config, Model::ClaudeSonnet45),
            Some(Ollama)
        );
    }

    #[test]
    fn unregistered_default_falls_back_to_first_provider() {
        let config = config(Some("ollama"), &[]);
        assert_eq!(route(&[OpenAi], &config, local_model()), Some(OpenAi));
    }

    #[test]
    fn no_providers_is_model_not_available() {
        let gw = RoutingGateway::new(vec![], &config(None, &[]));
        assert!(matches!(
            gw.resolve_provider(&Model::ClaudeSonnet45),
            Err(GatewayError::ModelNotAvailable(_))
        ));
        assert!(gw.provider_for(&Model::ClaudeSonnet45).is_none());
    }

    #[test]
    fn bad_routing_entries_are_dropped() {
        // Unknown provider name, and a known one that is not registered
        let config = config(
            None,
            &[("claude-sonnet-4-5", "copilot"), ("llama3.1:8b", "ollama")],
        );
        let gw = RoutingGateway::new(stubs(&[Anthropic]), &config);
        assert!(gw.explicit_model_routing.is_empty());
        assert_eq!(gw.provider_kinds(), vec![Anthropic]);
    }

    #[tokio::test]
    async fn sessions_come_from_the_resolved_provider() {
        let gw = RoutingGateway::new(stubs(&[Anthropic, OpenAi]), &config(None, &[]));
        let err = gw
            .create_session_with_system_prompt(&Model::Gpt5, "sys")
            .await
            .err()
            .unwrap();
        assert_eq!(err, GatewayError::RequestFailed("openai".to_string()));
    }

    #[tokio::test]
    async fn available_models_merges_all_providers() {
        let providers: Vec<Arc<dyn ProviderAdapter>> = vec![
            Arc::new(StubProvider {
                kind: OpenAi,
                models: vec![Model::Gpt5, Model::Gpt41],
            }),
            Arc::new(StubProvider {
                kind: Anthropic,
                models: vec![Model::ClaudeSonnet45],
            }),
        ];
        let gw = RoutingGateway::new(providers, &config(None, &[]));

        let models = gw.available_models().await.unwrap();
        assert_eq!(models, vec![Model::Gpt5, Model::Gpt41, Model::ClaudeSonnet45]);
    }
}
