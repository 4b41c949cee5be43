//! # lemscope Screenshot Sources
//!
//! [`ScreenshotSource`](lemscope_protocols::ScreenshotSource) implementations:
//!
//! - [`HttpScreenshotSource`] - full-page capture through a thum.io-style service
//! - [`FileScreenshotSource`] - a screenshot already on disk

mod file;
mod http;

pub use file::FileScreenshotSource;
pub use http::HttpScreenshotSource;
