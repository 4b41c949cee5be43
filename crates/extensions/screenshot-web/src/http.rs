//! Screenshot capture through an HTTP rendering service.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info};
use url::Url;

use lemscope_config::ScreenshotConfig;
use lemscope_protocols::{ScreenshotError, ScreenshotSource};

/// Captures full-page screenshots via `{service}/get/width/{w}/fullpage/wait/{s}/noanimate/{url}`.
pub struct HttpScreenshotSource {
    client: Client,
    service_url: String,
    width: u32,
    wait_seconds: u32,
}

impl HttpScreenshotSource {
    pub fn new(config: &ScreenshotConfig) -> Result<Self, ScreenshotError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(concat!("lemscope/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ScreenshotError::Network(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            service_url: config.service_url.trim_end_matches('/').to_string(),
            width: config.width,
            wait_seconds: config.wait_seconds,
        })
    }

    /// Service URL that renders `target`.
    pub fn capture_url(&self, target: &str) -> String {
        format!(
            "{}/get/width/{}/fullpage/wait/{}/noanimate/{}",
            self.service_url, self.width, self.wait_seconds, target
        )
    }
}

/// Accept only absolute http(s) URLs with a host.
fn validate_target(target: &str) -> Result<Url, ScreenshotError> {
    let url = Url::parse(target)
        .map_err(|e| ScreenshotError::InvalidUrl(format!("{}: {}", target, e)))?;
    match url.scheme() {
        "http" | "https" if url.host_str().is_some() => Ok(url),
        _ => Err(ScreenshotError::InvalidUrl(target.to_string())),
    }
}

#[async_trait]
impl ScreenshotSource for HttpScreenshotSource {
    fn id(&self) -> &str {
        "http"
    }

    async fn capture(&self, url: &str) -> Result<Vec<u8>, ScreenshotError> {
        let target = url.trim();
        validate_target(target)?;

        let capture_url = self.capture_url(target);
        debug!("Requesting screenshot: {}", capture_url);

        let response = self
            .client
            .get(&capture_url)
            .send()
            .await
            .map_err(|e| ScreenshotError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScreenshotError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ScreenshotError::Network(e.to_string()))?;
        if bytes.is_empty() {
            return Err(ScreenshotError::Unavailable(
                "screenshot service returned an empty body".to_string(),
            ));
        }

        info!("Captured screenshot of {} ({} bytes)", target, bytes.len());
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod tests;
