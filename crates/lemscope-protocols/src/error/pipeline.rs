//! Analysis pipeline errors.

use thiserror::Error;

use super::{ProviderError, ScreenshotError};

#[derive(Debug, Error)]
pub enum PipelineError {
    /// The screenshot could not be decoded into a raster.
    #[error("Image decode error: {0}")]
    ImageDecode(String),

    /// A slice could not be re-encoded for transmission.
    #[error("Image encode error: {0}")]
    ImageEncode(String),

    /// An analyzer response held no parseable JSON object.
    #[error("Unparseable analyzer response for slice {slice}: {message}")]
    AnalyzerResponse { slice: usize, message: String },

    #[error("Analyzer provider error: {0}")]
    Provider(#[from] ProviderError),

    #[error("Screenshot error: {0}")]
    Screenshot(#[from] ScreenshotError),
}

impl PipelineError {
    /// Whether the visual path should be abandoned in favour of text-only analysis.
    pub fn triggers_text_fallback(&self) -> bool {
        matches!(
            self,
            Self::ImageDecode(_) | Self::ImageEncode(_) | Self::Screenshot(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_decode_error() {
        let err = PipelineError::ImageDecode("unsupported format".to_string());
        assert!(err.to_string().contains("unsupported format"));
        assert!(err.triggers_text_fallback());
    }

    #[test]
    fn test_analyzer_response_error() {
        let err = PipelineError::AnalyzerResponse {
            slice: 0,
            message: "expected value at line 1".to_string(),
        };
        assert!(err.to_string().contains("slice 0"));
        assert!(!err.triggers_text_fallback());
    }

    #[test]
    fn test_provider_error_from() {
        let err = PipelineError::from(ProviderError::Timeout(30));
        assert!(matches!(err, PipelineError::Provider(_)));
        assert!(!err.triggers_text_fallback());
    }

    #[test]
    fn test_screenshot_error_from() {
        let err = PipelineError::from(ScreenshotError::HttpStatus { status: 500 });
        assert!(err.triggers_text_fallback());
    }
}
