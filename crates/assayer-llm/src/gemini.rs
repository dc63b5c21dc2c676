//! Gemini Provider Implementation
//!
//! Integration with the Google Gemini `generateContent` REST API.
//!
//! The API key is injected at construction time - this crate never reads
//! process environment, so the pipeline stays decoupled from process-wide
//! state. Each generate call sends exactly one request: curation is a
//! single-attempt, synchronous round trip with no retry or backoff.
//!
//! # Examples
//!
//! ```no_run
//! use assayer_llm::GeminiProvider;
//!
//! let provider = GeminiProvider::new("api-key-from-config", "gemini-1.5-flash");
//! // provider.generate(...) is async; the LlmProvider trait wraps it for
//! // blocking callers.
//! ```

use crate::LlmError;
use assayer_domain::traits::LlmProvider as LlmProviderTrait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default Gemini API endpoint
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model used for curation
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Default timeout for LLM requests (120 seconds)
///
/// This is the only timeout policy in the system; nothing above the provider
/// imposes its own deadline.
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Google Gemini API provider
pub struct GeminiProvider {
    endpoint: String,
    model: String,
    api_key: String,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<Content>,
}

impl GeminiProvider {
    /// Create a new Gemini provider against the default public endpoint.
    ///
    /// # Parameters
    ///
    /// - `api_key`: API key, already resolved by the caller (entry points
    ///   read it from the environment once at startup)
    /// - `model`: model name (e.g. "gemini-1.5-flash")
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT, api_key, model)
    }

    /// Create a provider against a custom endpoint (test servers, proxies).
    pub fn with_endpoint(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .expect("default reqwest client configuration is valid");

        Self {
            endpoint: endpoint.into(),
            model: model.into(),
            api_key: api_key.into(),
            client,
        }
    }

    /// Model name this provider sends requests to.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Generate text for a prompt.
    ///
    /// Sends exactly one request; there is no retry on failure.
    ///
    /// # Errors
    ///
    /// - [`LlmError::Auth`] for 401/403 (bad or missing API key)
    /// - [`LlmError::ModelNotAvailable`] for 404
    /// - [`LlmError::RateLimitExceeded`] for 429
    /// - [`LlmError::Communication`] for transport failures and other statuses
    /// - [`LlmError::InvalidResponse`] when the body is not the expected shape
    pub async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let url = format!("{}/models/{}:generateContent", self.endpoint, self.model);

        let request_body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| LlmError::Communication(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            return Err(match status {
                reqwest::StatusCode::UNAUTHORIZED | reqwest::StatusCode::FORBIDDEN => {
                    LlmError::Auth(format!("HTTP {}: {}", status, error_text))
                }
                reqwest::StatusCode::NOT_FOUND => LlmError::ModelNotAvailable(self.model.clone()),
                reqwest::StatusCode::TOO_MANY_REQUESTS => LlmError::RateLimitExceeded,
                _ => LlmError::Communication(format!("HTTP {}: {}", status, error_text)),
            });
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        let candidate = body
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| LlmError::InvalidResponse("Response has no candidates".to_string()))?;

        let content = candidate
            .content
            .ok_or_else(|| LlmError::InvalidResponse("Candidate has no content".to_string()))?;

        let text = content
            .parts
            .into_iter()
            .map(|p| p.text)
            .collect::<Vec<_>>()
            .join("");

        if text.is_empty() {
            return Err(LlmError::InvalidResponse(
                "Candidate contains no text parts".to_string(),
            ));
        }

        Ok(text)
    }
}

impl LlmProviderTrait for GeminiProvider {
    type Error = LlmError;

    fn generate(&self, prompt: &str) -> Result<String, Self::Error> {
        // Blocking wrapper for async callers that hold the trait object on a
        // non-runtime thread (the curator calls this via spawn_blocking).
        let runtime = tokio::runtime::Runtime::new()
            .map_err(|e| LlmError::Other(format!("Failed to start runtime: {}", e)))?;
        runtime.block_on(async { self.generate(prompt).await })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gemini_provider_creation() {
        let provider = GeminiProvider::new("secret", "gemini-1.5-flash");
        assert_eq!(provider.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(provider.model(), "gemini-1.5-flash");
        assert_eq!(provider.api_key, "secret");
    }

    #[test]
    fn test_gemini_provider_custom_endpoint() {
        let provider = GeminiProvider::with_endpoint("http://localhost:8080", "k", "m");
        assert_eq!(provider.endpoint, "http://localhost:8080");
    }

    #[tokio::test]
    async fn test_gemini_unreachable_endpoint_is_communication_error() {
        // Nothing listens on port 1; the request must fail without retrying.
        let provider = GeminiProvider::with_endpoint("http://127.0.0.1:1", "k", "m");

        let result = provider.generate("test").await;
        match result {
            Err(LlmError::Communication(_)) => {}
            other => panic!("Expected Communication error, got {:?}", other.err()),
        }
    }

    // Integration test (requires a real API key)
    #[tokio::test]
    #[ignore] // Only run when GEMINI_API_KEY is exported for the test run
    async fn test_gemini_generate_integration() {
        let key = std::env::var("GEMINI_API_KEY").expect("GEMINI_API_KEY for integration test");
        let provider = GeminiProvider::new(key, DEFAULT_MODEL);
        let response = provider.generate("Say 'hello' and nothing else").await;
        assert!(response.is_ok());
    }
}
