//! End-to-end analysis of one URL.
//!
//! The visual path captures a full-page screenshot, cuts it into viewport
//! slices and analyzes all slices concurrently. Slice 0 carries the report
//! and must succeed; any other slice may fail without failing the run.
//! When no usable screenshot exists the pipeline falls back to a single
//! text-only analyzer call.

use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::Value;
use tokio::sync::Semaphore;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use lemscope_config::AnalysisConfig;
use lemscope_protocols::{
    AnalysisMode, AnalysisResult, EncodedImage, PipelineError, ProviderError, RawMarker,
    ScreenshotSource, SliceAnalyzer, SliceRequest, SliceRole,
};

use crate::assembler::ReportAssembler;
use crate::decluster::{DeclusterConfig, DeclusterEngine};
use crate::extract::parse_analyzer_json;
use crate::sanitizer::MarkerSanitizer;
use crate::slicer::{RasterImage, Slicer};
use crate::stitcher::SliceLayout;

/// Tunables for one pipeline instance.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub slicer: Slicer,
    pub decluster: DeclusterConfig,
    /// Analyzer calls in flight at once, shared by every run of the pipeline.
    pub max_concurrent_slices: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            slicer: Slicer::default(),
            decluster: DeclusterConfig::default(),
            max_concurrent_slices: 8,
        }
    }
}

impl From<&AnalysisConfig> for PipelineConfig {
    fn from(config: &AnalysisConfig) -> Self {
        Self {
            slicer: Slicer::new(config.aspect_width, config.aspect_height),
            decluster: DeclusterConfig::from(config),
            max_concurrent_slices: config.max_concurrent_slices,
        }
    }
}

type SliceTask = (usize, JoinHandle<Result<String, ProviderError>>);

pub struct AnalysisPipeline {
    screenshots: Arc<dyn ScreenshotSource>,
    analyzer: Arc<dyn SliceAnalyzer>,
    slicer: Slicer,
    decluster: DeclusterEngine,
    max_concurrent_slices: usize,
    slice_permits: Arc<Semaphore>,
}

impl AnalysisPipeline {
    pub fn new(
        screenshots: Arc<dyn ScreenshotSource>,
        analyzer: Arc<dyn SliceAnalyzer>,
        config: PipelineConfig,
    ) -> Self {
        let max_concurrent_slices = config.max_concurrent_slices.max(1);
        Self {
            screenshots,
            analyzer,
            slicer: config.slicer,
            decluster: DeclusterEngine::new(config.decluster),
            max_concurrent_slices,
            slice_permits: Arc::new(Semaphore::new(max_concurrent_slices)),
        }
    }

    /// Capture and analyze `url`.
    pub async fn analyze(&self, url: &str) -> Result<AnalysisResult, PipelineError> {
        info!(
            "Capturing {} with {} for analyzer {}",
            url,
            self.screenshots.id(),
            self.analyzer.id()
        );

        match self.screenshots.capture(url).await {
            Ok(bytes) => self.analyze_screenshot(url, &bytes).await,
            Err(e) => {
                warn!("Screenshot capture failed for {}: {}. Using text-only analysis", url, e);
                self.analyze_text_only(url).await
            }
        }
    }

    /// Analyze `url` from an already captured screenshot.
    ///
    /// Falls back to text-only analysis when the bytes cannot be decoded or
    /// the top slice cannot be encoded.
    pub async fn analyze_screenshot(
        &self,
        url: &str,
        bytes: &[u8],
    ) -> Result<AnalysisResult, PipelineError> {
        match self.analyze_visual(url, bytes).await {
            Err(e) if e.triggers_text_fallback() => {
                warn!("Visual analysis unavailable for {}: {}. Using text-only analysis", url, e);
                self.analyze_text_only(url).await
            }
            other => other,
        }
    }

    /// Analyze `url` without a screenshot. Markers arrive in page space.
    pub async fn analyze_text_only(&self, url: &str) -> Result<AnalysisResult, PipelineError> {
        info!("Running text-only analysis for {}", url);

        let text = self.analyzer.analyze_text_only(url).await?;
        let data = parse_analyzer_json(&text)
            .map_err(|message| PipelineError::AnalyzerResponse { slice: 0, message })?;

        let mut markers = MarkerSanitizer::sanitize_all(RawMarker::list_from_response(&data));
        self.decluster.apply(&mut markers);

        let report = ReportAssembler::build_report(&data, None);
        Ok(ReportAssembler::assemble(url, AnalysisMode::TextOnly, 0, report, markers))
    }

    async fn analyze_visual(&self, url: &str, bytes: &[u8]) -> Result<AnalysisResult, PipelineError> {
        let image = RasterImage::decode(bytes)?;
        let screenshot = encode_screenshot(bytes);
        let slices = self.slicer.slice(image);
        let layout = SliceLayout::from_slices(&slices);
        let slice_count = slices.len();
        info!(
            "Analyzing {} as {} slices ({}px total)",
            url,
            slice_count,
            layout.total_height()
        );
        if slice_count > self.max_concurrent_slices {
            warn!(
                "{} yields {} slices, only {} are analyzed at a time",
                url, slice_count, self.max_concurrent_slices
            );
        }

        // Each slice's pixels are dropped once its request is built.
        let mut tasks: Vec<SliceTask> = Vec::with_capacity(slice_count);
        for slice in slices {
            let role = SliceRole::for_index(slice.index);
            let image = match slice.encode_png() {
                Ok(image) => image,
                Err(e) if role == SliceRole::Top => return Err(e),
                Err(e) => {
                    warn!("Skipping slice {}: {}", slice.index, e);
                    continue;
                }
            };

            let analyzer = Arc::clone(&self.analyzer);
            let permits = Arc::clone(&self.slice_permits);
            let request = SliceRequest {
                url: url.to_string(),
                index: slice.index,
                role,
                image,
            };
            let handle = tokio::spawn(async move {
                let _permit = permits
                    .acquire_owned()
                    .await
                    .map_err(|e| ProviderError::Network(format!("Slice permit error: {}", e)))?;
                analyzer.analyze_slice(request).await
            });
            tasks.push((slice.index, handle));
        }

        let mut report_data = Value::Null;
        let mut raws = Vec::new();
        let mut tasks = tasks.into_iter();

        while let Some((index, handle)) = tasks.next() {
            match Self::join_slice(index, handle).await {
                Ok(data) => {
                    let slice_markers = RawMarker::list_from_response(&data);
                    debug!("Slice {} returned {} markers", index, slice_markers.len());
                    raws.extend(
                        slice_markers
                            .into_iter()
                            .filter_map(|marker| layout.stitch(index, marker)),
                    );
                    if index == 0 {
                        report_data = data;
                    }
                }
                Err(e) if index == 0 => {
                    error!("Top slice analysis failed for {}: {}", url, e);
                    for (_, pending) in tasks {
                        pending.abort();
                    }
                    return Err(e);
                }
                Err(e) => warn!("Dropping markers of slice {}: {}", index, e),
            }
        }

        let mut markers = MarkerSanitizer::sanitize_all(raws);
        if self.decluster.apply(&mut markers) {
            debug!("Declustered {} markers", markers.len());
        }

        let report = ReportAssembler::build_report(&report_data, Some(&screenshot));
        info!("Analysis of {} produced {} markers", url, markers.len());
        Ok(ReportAssembler::assemble(
            url,
            AnalysisMode::Visual,
            slice_count,
            report,
            markers,
        ))
    }

    async fn join_slice(
        index: usize,
        handle: JoinHandle<Result<String, ProviderError>>,
    ) -> Result<Value, PipelineError> {
        let text = handle
            .await
            .map_err(|e| PipelineError::AnalyzerResponse {
                slice: index,
                message: format!("analyzer task failed: {}", e),
            })??;
        parse_analyzer_json(&text)
            .map_err(|message| PipelineError::AnalyzerResponse { slice: index, message })
    }
}

/// Screenshot bytes as an embeddable image, keeping their encoded format.
fn encode_screenshot(bytes: &[u8]) -> EncodedImage {
    let mime_type = image::guess_format(bytes)
        .map(|format| format.to_mime_type())
        .unwrap_or("image/png");
    EncodedImage {
        mime_type: mime_type.to_string(),
        data: STANDARD.encode(bytes),
    }
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
