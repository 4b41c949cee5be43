//! # lemscope Core
//!
//! Turns one full-page screenshot into a single, page-space marker set.
//!
//! ## Components
//!
//! - [`Slicer`] - Cuts a [`RasterImage`] into viewport-sized [`Slice`]s
//! - [`SliceLayout`] - Prefix-summed slice geometry; maps slice-local y to page y
//! - [`MarkerSanitizer`] - Defaults, clamps and filters raw analyzer markers
//! - [`DeclusterEngine`] - Pairwise relaxation of markers that sit too close
//! - [`ReportAssembler`] - Builds the report and the final [`AnalysisResult`]
//! - [`AnalysisPipeline`] - Capture, slice, analyze concurrently, then merge
//!
//! [`AnalysisResult`]: lemscope_protocols::AnalysisResult

pub mod assembler;
pub mod decluster;
pub mod extract;
pub mod pipeline;
pub mod sanitizer;
pub mod slicer;
pub mod stitcher;

pub use assembler::ReportAssembler;
pub use decluster::{DeclusterConfig, DeclusterEngine};
pub use extract::{extract_json_object, parse_analyzer_json};
pub use pipeline::{AnalysisPipeline, PipelineConfig};
pub use sanitizer::MarkerSanitizer;
pub use slicer::{RasterImage, Slice, Slicer};
pub use stitcher::SliceLayout;
