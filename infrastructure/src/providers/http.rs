//! Shared JSON-over-HTTP transport with retry and exponential backoff.
//!
//! One [`HttpTransport`] (one `reqwest::Client` pool) is shared by all
//! adapters. Transient failures are retried: connect errors, timeouts,
//! HTTP 429 and 5xx. Everything else fails on the first attempt.

use querywright_application::ports::llm_gateway::GatewayError;
use querywright_domain::RetryPolicy;
use querywright_domain::util::truncate_str;
use reqwest::StatusCode;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

pub struct HttpTransport {
    client: reqwest::Client,
    retry: RetryPolicy,
}

impl HttpTransport {
    pub fn new(retry: RetryPolicy) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .map_err(|e| GatewayError::Other(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { client, retry })
    }

    /// POST a JSON body and parse a JSON response, retrying transient failures.
    pub async fn post_json(
        &self,
        url: &str,
        headers: &[(&str, String)],
        body: &Value,
    ) -> Result<Value, GatewayError> {
        let mut attempt = 0;
        loop {
            match self.post_once(url, headers, body).await {
                Ok(value) => return Ok(value),
                Err(failure) if failure.retryable && attempt < self.retry.max_retries => {
                    attempt += 1;
                    let delay = self.retry.backoff_for(attempt);
                    warn!(
                        "Request to {} failed ({}), retry {}/{} in {:?}",
                        url, failure.error, attempt, self.retry.max_retries, delay
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(failure) => return Err(failure.error),
            }
        }
    }

    async fn post_once(
        &self,
        url: &str,
        headers: &[(&str, String)],
        body: &Value,
    ) -> Result<Value, Failure> {
        let mut request = self.client.post(url).json(body);
        for (name, value) in headers {
            request = request.header(*name, value);
        }

        let response = request.send().await.map_err(Failure::from_transport)?;
        let status = response.status();
        let text = response.text().await.map_err(Failure::from_transport)?;
        debug!("{} -> {}", url, status);

        if !status.is_success() {
            return Err(Failure::from_status(status, &text));
        }

        serde_json::from_str(&text).map_err(|e| Failure {
            error: GatewayError::InvalidResponse(format!("Malformed JSON: {}", e)),
            retryable: false,
        })
    }
}

/// One failed attempt, with whether another attempt may help.
struct Failure {
    error: GatewayError,
    retryable: bool,
}

impl Failure {
    fn from_transport(e: reqwest::Error) -> Self {
        let error = if e.is_timeout() {
            GatewayError::Timeout
        } else if e.is_connect() {
            GatewayError::ConnectionError(e.to_string())
        } else {
            GatewayError::RequestFailed(e.to_string())
        };
        let retryable = error.is_transient();
        Self { error, retryable }
    }

    fn from_status(status: StatusCode, body: &str) -> Self {
        Self {
            error: status_error(status, body),
            retryable: is_retryable_status(status),
        }
    }
}

/// Map a non-success HTTP status to a gateway error.
pub fn status_error(status: StatusCode, body: &str) -> GatewayError {
    let detail = format!("HTTP {}: {}", status.as_u16(), truncate_str(body.trim(), 300));
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => GatewayError::AuthenticationError(detail),
        StatusCode::NOT_FOUND => GatewayError::ModelNotAvailable(detail),
        StatusCode::TOO_MANY_REQUESTS => GatewayError::RateLimited(detail),
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => GatewayError::Timeout,
        _ => GatewayError::RequestFailed(detail),
    }
}

pub fn is_retryable_status(status: StatusCode) -> bool {
    status == StatusCode::TOO_MANY_REQUESTS
        || status == StatusCode::REQUEST_TIMEOUT
        || status.is_server_error()
}

/// Join a base URL and an API path without doubling the slash.
pub fn endpoint(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert!(matches!(
            status_error(StatusCode::UNAUTHORIZED, "bad key"),
            GatewayError::AuthenticationError(_)
        ));
        assert!(matches!(
            status_error(StatusCode::NOT_FOUND, ""),
            GatewayError::ModelNotAvailable(_)
        ));
        assert!(matches!(
            status_error(StatusCode::TOO_MANY_REQUESTS, ""),
            GatewayError::RateLimited(_)
        ));
        assert_eq!(
            status_error(StatusCode::GATEWAY_TIMEOUT, ""),
            GatewayError::Timeout
        );
        assert!(matches!(
            status_error(StatusCode::BAD_REQUEST, "max_tokens too large"),
            GatewayError::RequestFailed(msg) if msg.contains("400") && msg.contains("max_tokens")
        ));
    }

    #[test]
    fn test_retryable_statuses() {
        assert!(is_retryable_status(StatusCode::TOO_MANY_REQUESTS));
        assert!(is_retryable_status(StatusCode::INTERNAL_SERVER_ERROR));
        assert!(is_retryable_status(StatusCode::SERVICE_UNAVAILABLE));
        assert!(!is_retryable_status(StatusCode::BAD_REQUEST));
        assert!(!is_retryable_status(StatusCode::UNAUTHORIZED));
    }

    #[test]
    fn test_endpoint_joins_cleanly() {
        assert_eq!(
            endpoint("https://api.openai.com/", "/v1/chat/completions"),
            "https://api.openai.com/v1/chat/completions"
        );
        assert_eq!(
            endpoint("http://localhost:11434", "v1/chat/completions"),
            "http://localhost:11434/v1/chat/completions"
        );
    }

    #[tokio::test]
    async fn test_unreachable_host_fails() {
        let transport = HttpTransport::new(RetryPolicy {
            max_retries: 0,
            initial_backoff: Duration::from_millis(1),
        })
        .unwrap();

        // Port 9 (discard) on localhost is closed in test environments.
        let result = transport
            .post_json("http://127.0.0.1:9/v1/messages", &[], &serde_json::json!({}))
            .await;
        assert!(matches!(
            result,
            Err(GatewayError::ConnectionError(_))
                | Err(GatewayError::RequestFailed(_))
                | Err(GatewayError::Timeout)
        ));
    }
}
