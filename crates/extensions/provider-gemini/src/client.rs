//! Gemini API client.

use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use lemscope_config::GeminiConfig;
use lemscope_protocols::ProviderError;

use crate::types::*;

/// Gemini API client.
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
    timeout_seconds: u64,
}

impl GeminiClient {
    /// Create a new Gemini client with the endpoint and timeouts from `config`.
    pub fn new(api_key: String, config: &GeminiConfig) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| ProviderError::Network(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout_seconds: config.timeout_seconds,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Generate content (non-streaming).
    pub async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, ProviderError> {
        let url = format!("{}/models/{}:generateContent", self.base_url, model);

        debug!("Gemini generate_content: model={}", model);

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(request)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| self.transport_error(e))?;

        if !status.is_success() {
            let error: Result<GeminiError, _> = serde_json::from_str(&body);
            return match error {
                Ok(e) => Err(ProviderError::from_api_response(
                    status.as_u16(),
                    e.error.message,
                )),
                Err(_) => Err(ProviderError::from_api_response(status.as_u16(), body)),
            };
        }

        serde_json::from_str(&body).map_err(|e| ProviderError::ApiError {
            status: 500,
            message: format!("Failed to parse response: {}", e),
        })
    }

    fn transport_error(&self, error: reqwest::Error) -> ProviderError {
        if error.is_timeout() {
            ProviderError::Timeout(self.timeout_seconds)
        } else {
            ProviderError::Network(error.to_string())
        }
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
