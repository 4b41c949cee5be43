//! [`SliceAnalyzer`] backed by Gemini `generateContent`.

use async_trait::async_trait;
use tracing::{debug, warn};

use lemscope_config::GeminiConfig;
use lemscope_protocols::{ProviderError, SliceAnalyzer, SliceRequest, SliceRole};

use crate::client::GeminiClient;
use crate::prompts;
use crate::types::*;

/// Gemini slice analyzer.
pub struct GeminiAnalyzer {
    client: GeminiClient,
    model: String,
    top_thinking_budget: u32,
    body_thinking_budget: u32,
}

impl GeminiAnalyzer {
    /// Build an analyzer from configuration. Fails when no API key is available.
    pub fn from_config(config: &GeminiConfig) -> Result<Self, ProviderError> {
        let api_key = config.resolved_api_key().ok_or_else(|| {
            ProviderError::AuthenticationFailed(
                "no Gemini API key configured (set gemini.api_key or GEMINI_API_KEY)".to_string(),
            )
        })?;
        Self::new(api_key, config)
    }

    pub fn new(api_key: String, config: &GeminiConfig) -> Result<Self, ProviderError> {
        Ok(Self {
            client: GeminiClient::new(api_key, config)?,
            model: config.model.clone(),
            top_thinking_budget: config.top_thinking_budget,
            body_thinking_budget: config.body_thinking_budget,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn thinking_budget(&self, role: SliceRole) -> u32 {
        match role {
            SliceRole::Top => self.top_thinking_budget,
            SliceRole::Body => self.body_thinking_budget,
        }
    }

    fn slice_request(&self, request: &SliceRequest) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content::user(vec![
                Part::image(&request.image.mime_type, &request.image.data),
                Part::text(prompts::slice_prompt(request.role, &request.url)),
            ])],
            generation_config: Some(GenerationConfig {
                thinking_config: Some(ThinkingConfig {
                    thinking_budget: self.thinking_budget(request.role),
                }),
                ..Default::default()
            }),
            tools: None,
        }
    }

    fn text_only_request(&self, url: &str) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content::user(vec![Part::text(prompts::text_only_prompt(url))])],
            generation_config: None,
            tools: Some(vec![GeminiTool::google_search()]),
        }
    }

    async fn generate_text(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<String, ProviderError> {
        let response = self.client.generate_content(&self.model, request).await?;

        if let Some(usage) = &response.usage_metadata {
            debug!(
                "Gemini usage: prompt={} candidates={} thoughts={}",
                usage.prompt_token_count, usage.candidates_token_count, usage.thoughts_token_count
            );
        }

        if let Some(reason) = response
            .prompt_feedback
            .as_ref()
            .and_then(|f| f.block_reason.as_ref())
        {
            return Err(ProviderError::ContentFiltered(format!(
                "prompt blocked: {}",
                reason
            )));
        }

        response.text().ok_or_else(|| {
            let reason = response
                .candidates
                .first()
                .and_then(|c| c.finish_reason.clone())
                .unwrap_or_else(|| "no candidates".to_string());
            warn!("Gemini returned no text ({})", reason);
            ProviderError::EmptyResponse(reason)
        })
    }
}

#[async_trait]
impl SliceAnalyzer for GeminiAnalyzer {
    fn id(&self) -> &str {
        "gemini"
    }

    async fn analyze_slice(&self, request: SliceRequest) -> Result<String, ProviderError> {
        debug!(
            "Gemini slice {} ({:?}) for {}",
            request.index, request.role, request.url
        );
        self.generate_text(&self.slice_request(&request)).await
    }

    async fn analyze_text_only(&self, url: &str) -> Result<String, ProviderError> {
        debug!("Gemini text-only analysis for {}", url);
        self.generate_text(&self.text_only_request(url)).await
    }
}

#[cfg(test)]
#[path = "analyzer_tests.rs"]
mod tests;
