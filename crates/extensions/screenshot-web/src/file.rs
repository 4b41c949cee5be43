//! Screenshot source backed by a local image file.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use lemscope_protocols::{ScreenshotError, ScreenshotSource};

/// Returns the same file for every URL. Used for offline analysis.
pub struct FileScreenshotSource {
    path: PathBuf,
}

impl FileScreenshotSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ScreenshotSource for FileScreenshotSource {
    fn id(&self) -> &str {
        "file"
    }

    async fn capture(&self, url: &str) -> Result<Vec<u8>, ScreenshotError> {
        debug!("Using {} as screenshot of {}", self.path.display(), url);
        let bytes = tokio::fs::read(&self.path).await?;
        if bytes.is_empty() {
            return Err(ScreenshotError::Unavailable(format!(
                "{} is empty",
                self.path.display()
            )));
        }
        Ok(bytes)
    }
}
