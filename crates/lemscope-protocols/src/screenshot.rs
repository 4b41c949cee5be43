//! Screenshot acquisition trait definition.

use async_trait::async_trait;

use crate::error::ScreenshotError;

/// Produces one full-page raster for a target URL.
#[async_trait]
pub trait ScreenshotSource: Send + Sync {
    /// Returns the source ID.
    fn id(&self) -> &str;

    /// Capture the page and return the encoded image bytes.
    async fn capture(&self, url: &str) -> Result<Vec<u8>, ScreenshotError>;
}
