//! Generate Query use case.
//!
//! Turns a natural-language question into one cleaned, validated query.
//!
//! The flow is a small state machine reported through [`GenerationProgress`]:
//!
//! ```text
//! Idle → Requesting → Validating → Cleaning → Done
//!          └────────────┴────────────┴──────→ Failed
//! ```
//!
//! Retries and backoff belong to the gateway. This use case makes exactly one
//! extraction attempt per call.

use crate::config::GenerationParams;
use crate::ports::generation_logger::{GenerationEvent, GenerationLogger, NoGenerationLogger};
use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use crate::ports::progress::{GenerationProgress, NoProgress};
use querywright_domain::extraction::validate_for;
use querywright_domain::util::preview;
use querywright_domain::{
    ExtractedQuery, ExtractionError, ExtractionPath, GenerationPhase, GenerationRequest,
    QueryDialect, QueryPromptTemplate, ResponseCleaner, precheck_raw,
};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, info};

/// Project id used in the system prompt when the request has no scope.
pub const DEFAULT_PROJECT: &str = "default";

/// The underlying reason a generation failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FailureCause {
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error(transparent)]
    Extraction(#[from] ExtractionError),
}

/// The single outward failure of [`GenerateQueryUseCase`].
#[derive(Error, Debug, Clone)]
#[error("Query generation failed: {cause}")]
pub struct GenerationFailed {
    pub cause: FailureCause,
    /// Raw model output, when one was received.
    pub raw: Option<String>,
}

impl GenerationFailed {
    fn new(cause: impl Into<FailureCause>, raw: Option<String>) -> Self {
        Self {
            cause: cause.into(),
            raw,
        }
    }

    pub fn is_no_query_found(&self) -> bool {
        matches!(&self.cause, FailureCause::Extraction(e) if e.is_no_query_found())
    }

    pub fn is_invalid_query(&self) -> bool {
        matches!(&self.cause, FailureCause::Extraction(e) if e.is_invalid_query())
    }

    pub fn is_gateway_failure(&self) -> bool {
        matches!(self.cause, FailureCause::Gateway(_))
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self.cause, FailureCause::Gateway(GatewayError::Timeout))
    }
}

/// A successfully generated query.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedQuery {
    pub query: ExtractedQuery,
    pub path: &'static str,
    pub model: String,
    /// Raw model output the query was extracted from.
    pub raw: String,
}

impl GeneratedQuery {
    pub fn as_str(&self) -> &str {
        self.query.as_str()
    }
}

/// Use case for generating one query from a question.
#[derive(Clone)]
pub struct GenerateQueryUseCase {
    gateway: Arc<dyn LlmGateway>,
    dialect: QueryDialect,
    params: GenerationParams,
    progress: Arc<dyn GenerationProgress>,
    logger: Arc<dyn GenerationLogger>,
}

impl GenerateQueryUseCase {
    pub fn new(gateway: Arc<dyn LlmGateway>, params: GenerationParams) -> Self {
        Self {
            gateway,
            dialect: QueryDialect::default(),
            params,
            progress: Arc::new(NoProgress),
            logger: Arc::new(NoGenerationLogger),
        }
    }

    pub fn with_dialect(mut self, dialect: QueryDialect) -> Self {
        self.dialect = dialect;
        self
    }

    pub fn with_progress(mut self, progress: Arc<dyn GenerationProgress>) -> Self {
        self.progress = progress;
        self
    }

    pub fn with_generation_logger(mut self, logger: Arc<dyn GenerationLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn params(&self) -> &GenerationParams {
        &self.params
    }

    /// Run the full generation flow for one request.
    pub async fn execute(
        &self,
        request: &GenerationRequest,
    ) -> Result<GeneratedQuery, GenerationFailed> {
        info!(
            "Generating query with {}: {}",
            self.params.model,
            preview(request.question(), 100)
        );

        match self.run(request).await {
            Ok(generated) => {
                self.progress.on_phase(GenerationPhase::Done);
                info!("Generated query: {}", preview(generated.as_str(), 200));
                self.logger.log(GenerationEvent::new(
                    "generation_success",
                    json!({
                        "model": generated.model,
                        "path": generated.path,
                        "query": generated.query.as_str(),
                    }),
                ));
                Ok(generated)
            }
            Err(failure) => {
                let reason = failure.cause.to_string();
                error!("Query generation failed: {}", reason);
                self.progress.on_phase(GenerationPhase::Failed);
                self.progress.on_failure(&reason);
                self.logger.log(GenerationEvent::new(
                    "generation_failure",
                    json!({
                        "model": self.params.model.to_string(),
                        "error": reason,
                        "raw": failure.raw,
                    }),
                ));
                Err(failure)
            }
        }
    }

    async fn run(&self, request: &GenerationRequest) -> Result<GeneratedQuery, GenerationFailed> {
        // Requesting
        self.progress.on_phase(GenerationPhase::Requesting);
        let raw = self
            .request(request)
            .await
            .map_err(|e| GenerationFailed::new(e, None))?;

        // Validating
        self.progress.on_phase(GenerationPhase::Validating);
        precheck_raw(&raw, &self.dialect).map_err(|e| GenerationFailed::new(e, Some(raw.clone())))?;

        // Cleaning
        self.progress.on_phase(GenerationPhase::Cleaning);
        let (query, path) = self
            .clean(&raw)
            .map_err(|e| GenerationFailed::new(e, Some(raw.clone())))?;
        debug!("Extracted via {} path", path.as_str());

        Ok(GeneratedQuery {
            query,
            path: path.as_str(),
            model: self.params.model.to_string(),
            raw,
        })
    }

    async fn request(&self, request: &GenerationRequest) -> Result<String, GatewayError> {
        let project = request.scope().unwrap_or(DEFAULT_PROJECT);
        let system_prompt = QueryPromptTemplate::system(self.params.prompt_style, project);
        let prompt = request.prompt();

        self.logger.log(GenerationEvent::new(
            "generation_request",
            json!({
                "model": self.params.model.to_string(),
                "scope": request.scope(),
                "prompt": prompt,
            }),
        ));

        let call = async {
            let session = self
                .gateway
                .create_session_with_system_prompt(&self.params.model, &system_prompt)
                .await?;
            session.send(&prompt).await
        };

        let raw = match self.params.timeout {
            Some(limit) => tokio::time::timeout(limit, call)
                .await
                .map_err(|_| GatewayError::Timeout)??,
            None => call.await?,
        };

        debug!("Raw response: {}", preview(&raw, 500));
        self.logger.log(GenerationEvent::new(
            "generation_response",
            json!({
                "model": self.params.model.to_string(),
                "raw": raw,
            }),
        ));

        Ok(raw)
    }

    fn clean(&self, raw: &str) -> Result<(ExtractedQuery, ExtractionPath), ExtractionError> {
        let cleaner = ResponseCleaner::new(self.dialect.clone()).with_fallback(self.params.fallback);
        let (query, path) = cleaner.clean_with_path(raw)?;
        let query = validate_for(query, &self.dialect)?;
        Ok((query, path))
    }
}
