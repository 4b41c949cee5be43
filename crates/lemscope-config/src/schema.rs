//! Configuration schema definitions.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub gemini: GeminiConfig,

    #[serde(default)]
    pub screenshot: ScreenshotConfig,

    #[serde(default)]
    pub analysis: AnalysisConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Gemini analyzer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    /// API key. Falls back to `GEMINI_API_KEY`, then `API_KEY`.
    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_gemini_base_url")]
    pub base_url: String,

    /// Thinking budget for the report-bearing top slice.
    #[serde(default = "default_top_thinking_budget")]
    pub top_thinking_budget: u32,

    /// Thinking budget for marker-only body slices.
    #[serde(default = "default_body_thinking_budget")]
    pub body_thinking_budget: u32,

    #[serde(default = "default_gemini_timeout")]
    pub timeout_seconds: u64,

    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            base_url: default_gemini_base_url(),
            top_thinking_budget: default_top_thinking_budget(),
            body_thinking_budget: default_body_thinking_budget(),
            timeout_seconds: default_gemini_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl GeminiConfig {
    /// The configured key, or the first non-empty key found in the environment.
    pub fn resolved_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .or_else(|| {
                ["GEMINI_API_KEY", "API_KEY"]
                    .iter()
                    .filter_map(|name| std::env::var(name).ok())
                    .find(|k| !k.trim().is_empty())
            })
    }
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_gemini_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_top_thinking_budget() -> u32 {
    4096
}

fn default_body_thinking_budget() -> u32 {
    2048
}

fn default_gemini_timeout() -> u64 {
    300
}

fn default_connect_timeout() -> u64 {
    10
}

/// Screenshot service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreenshotConfig {
    #[serde(default = "default_service_url")]
    pub service_url: String,

    /// Capture width in pixels.
    #[serde(default = "default_capture_width")]
    pub width: u32,

    /// Seconds the service waits for lazy content before capturing.
    #[serde(default = "default_wait_seconds")]
    pub wait_seconds: u32,

    #[serde(default = "default_screenshot_timeout")]
    pub timeout_seconds: u64,
}

impl Default for ScreenshotConfig {
    fn default() -> Self {
        Self {
            service_url: default_service_url(),
            width: default_capture_width(),
            wait_seconds: default_wait_seconds(),
            timeout_seconds: default_screenshot_timeout(),
        }
    }
}

fn default_service_url() -> String {
    "https://image.thum.io".to_string()
}

fn default_capture_width() -> u32 {
    1200
}

fn default_wait_seconds() -> u32 {
    5
}

fn default_screenshot_timeout() -> u64 {
    90
}

/// Slicing and marker placement parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Viewport aspect ratio width used to size slices.
    #[serde(default = "default_aspect_width")]
    pub aspect_width: u32,

    /// Viewport aspect ratio height used to size slices.
    #[serde(default = "default_aspect_height")]
    pub aspect_height: u32,

    /// Minimum desired distance between markers in 0-100 page space.
    #[serde(default = "default_spread_threshold")]
    pub spread_threshold: f64,

    #[serde(default = "default_decluster_iterations")]
    pub decluster_iterations: u32,

    /// Relaxation runs only when a page has more markers than this.
    #[serde(default = "default_decluster_min_markers")]
    pub decluster_min_markers: usize,

    /// Upper bound on slices sent to the analyzer at the same time.
    #[serde(default = "default_max_concurrent_slices")]
    pub max_concurrent_slices: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            aspect_width: default_aspect_width(),
            aspect_height: default_aspect_height(),
            spread_threshold: default_spread_threshold(),
            decluster_iterations: default_decluster_iterations(),
            decluster_min_markers: default_decluster_min_markers(),
            max_concurrent_slices: default_max_concurrent_slices(),
        }
    }
}

fn default_aspect_width() -> u32 {
    16
}

fn default_aspect_height() -> u32 {
    9
}

fn default_spread_threshold() -> f64 {
    3.0
}

fn default_decluster_iterations() -> u32 {
    5
}

fn default_decluster_min_markers() -> usize {
    5
}

fn default_max_concurrent_slices() -> usize {
    8
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive; `RUST_LOG` takes precedence.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Also write daily-rolling log files.
    #[serde(default)]
    pub file: bool,

    /// Log directory. Defaults to `~/.lemscope/logs`.
    #[serde(default)]
    pub dir: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: false,
            dir: None,
        }
    }
}

impl LoggingConfig {
    pub fn log_dir(&self) -> PathBuf {
        match &self.dir {
            Some(dir) => PathBuf::from(shellexpand::tilde(dir).to_string()),
            None => dirs::home_dir()
                .map(|h| h.join(".lemscope").join("logs"))
                .unwrap_or_else(|| PathBuf::from(".lemscope/logs")),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
