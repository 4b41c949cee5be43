//! `analyze` subcommand.

use std::path::Path;
use std::sync::Arc;

use tracing::{info, warn};

use lemscope_config::{Config, ConfigValidator};
use lemscope_core::{AnalysisPipeline, PipelineConfig};
use lemscope_protocols::ScreenshotSource;
use lemscope_provider_gemini::GeminiAnalyzer;
use lemscope_screenshot_web::{FileScreenshotSource, HttpScreenshotSource};

use crate::cmd_config::invalid_config_error;

/// Run one analysis and emit the result as pretty JSON.
pub(crate) async fn handle_analyze(
    config: &Config,
    url: &str,
    image: Option<&Path>,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let validation = ConfigValidator::validate(config);
    for warning in &validation.warnings {
        warn!("Config {}: {}", warning.path, warning.message);
    }
    if !validation.is_valid() {
        return Err(invalid_config_error(&validation).into());
    }

    let screenshots: Arc<dyn ScreenshotSource> = match image {
        Some(path) => Arc::new(FileScreenshotSource::new(path)),
        None => Arc::new(HttpScreenshotSource::new(&config.screenshot)?),
    };
    let analyzer = Arc::new(GeminiAnalyzer::from_config(&config.gemini)?);
    info!("Analyzing {} with model {}", url, analyzer.model());

    let pipeline = AnalysisPipeline::new(
        screenshots,
        analyzer,
        PipelineConfig::from(&config.analysis),
    );
    let result = pipeline.analyze(url).await?;

    info!(
        "Analysis complete: mode={:?} slices={} markers={} (emotions={}, needs={}, strategy={})",
        result.mode,
        result.slice_count,
        result.stats.total,
        result.stats.emotions,
        result.stats.needs,
        result.stats.strategy
    );

    let json = serde_json::to_string_pretty(&result)?;
    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, json)?;
            info!("Result written to {}", path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}
