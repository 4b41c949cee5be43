//! Analyzer provider errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("API error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("Rate limited: retry after {retry_after_seconds} seconds")]
    RateLimited { retry_after_seconds: u64 },

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Content filtered: {0}")]
    ContentFiltered(String),

    #[error("Empty response: {0}")]
    EmptyResponse(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Timeout after {0} seconds")]
    Timeout(u64),
}

impl ProviderError {
    /// Classify a non-success HTTP response from a model API.
    pub fn from_api_response(status: u16, message: String) -> Self {
        let lower = message.to_lowercase();
        match status {
            401 | 403 => Self::AuthenticationFailed(message),
            429 => Self::RateLimited {
                retry_after_seconds: 60,
            },
            400 if lower.contains("safety") || lower.contains("blocked") => {
                Self::ContentFiltered(message)
            }
            400 => Self::InvalidRequest(message),
            _ => Self::ApiError { status, message },
        }
    }

    /// Whether the same request may succeed if sent again later.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::RateLimited { .. } | Self::Network(_) | Self::Timeout(_) => true,
            Self::ApiError { status, .. } => matches!(status, 500 | 502 | 503 | 504),
            _ => false,
        }
    }
}

#[cfg(test)]
#[path = "provider_tests.rs"]
mod tests;
