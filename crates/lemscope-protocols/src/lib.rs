//! # lemscope Protocols
//!
//! Shared definitions for the lemscope workspace. Contains only data types,
//! error enums and the traits implemented by external collaborators.
//!
//! ## Core Traits
//!
//! - [`ScreenshotSource`] - Produces a full-page raster for a URL
//! - [`SliceAnalyzer`] - Annotates one screenshot slice (or a bare URL)

pub mod analyzer;
pub mod error;
pub mod screenshot;
pub mod types;

pub use analyzer::{EncodedImage, SliceAnalyzer, SliceRequest, SliceRole};
pub use error::{
    AnalyzerFieldError, PipelineError, ProviderError, ScreenshotError,
};
pub use screenshot::ScreenshotSource;
pub use types::*;
