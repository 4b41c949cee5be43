//! Per-slice analyzer trait definition.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::ProviderError;

/// Which prompt a slice is analyzed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SliceRole {
    /// First viewport: full report plus markers.
    Top,
    /// Any lower viewport: markers only.
    Body,
}

impl SliceRole {
    pub fn for_index(index: usize) -> Self {
        if index == 0 { Self::Top } else { Self::Body }
    }
}

/// An image already encoded for transmission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    pub mime_type: String,
    /// Base64 payload without a data-URL prefix.
    pub data: String,
}

impl EncodedImage {
    pub fn png(data: impl Into<String>) -> Self {
        Self {
            mime_type: "image/png".to_string(),
            data: data.into(),
        }
    }

    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }
}

/// One slice submitted for analysis.
#[derive(Debug, Clone)]
pub struct SliceRequest {
    pub url: String,
    pub index: usize,
    pub role: SliceRole,
    pub image: EncodedImage,
}

/// Generative analyzer invoked once per slice.
///
/// Implementations return the model's raw text; extracting and validating
/// the JSON inside it is the pipeline's job.
#[async_trait]
pub trait SliceAnalyzer: Send + Sync {
    /// Returns the analyzer ID.
    fn id(&self) -> &str;

    /// Analyze one screenshot slice.
    async fn analyze_slice(&self, request: SliceRequest) -> Result<String, ProviderError>;

    /// Analyze a page from its URL alone, with coordinates in page space.
    async fn analyze_text_only(&self, url: &str) -> Result<String, ProviderError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_for_index() {
        assert_eq!(SliceRole::for_index(0), SliceRole::Top);
        assert_eq!(SliceRole::for_index(1), SliceRole::Body);
        assert_eq!(SliceRole::for_index(9), SliceRole::Body);
    }

    #[test]
    fn test_data_url() {
        let image = EncodedImage::png("iVBORw0KGgo=");
        assert_eq!(image.to_data_url(), "data:image/png;base64,iVBORw0KGgo=");
    }
}
