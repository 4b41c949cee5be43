//! Screenshot acquisition errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScreenshotError {
    #[error("Invalid target URL: {0}")]
    InvalidUrl(String),

    #[error("Screenshot service returned HTTP {status}")]
    HttpStatus { status: u16 },

    #[error("Screenshot unavailable: {0}")]
    Unavailable(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
