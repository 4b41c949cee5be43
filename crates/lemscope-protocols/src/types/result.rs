//! Assembled analysis output handed to the presentation layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{AnalysisReport, EmotionCategory, Layer, Marker, MarkerSource};

/// Which analysis path produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisMode {
    /// Screenshot sliced and analyzed per slice.
    Visual,
    /// No usable screenshot; the analyzer worked from the URL alone.
    TextOnly,
}

/// Marker counts shown alongside a report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerStats {
    pub total: usize,
    pub emotions: usize,
    pub needs: usize,
    pub strategy: usize,
    pub ai: usize,
    pub human: usize,
    /// Emotion markers by valence.
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
}

impl MarkerStats {
    pub fn from_markers(markers: &[Marker]) -> Self {
        markers.iter().fold(Self::default(), |mut stats, m| {
            stats.total += 1;
            match m.layer {
                Layer::Emotions => stats.emotions += 1,
                Layer::Needs => stats.needs += 1,
                Layer::Strategy => stats.strategy += 1,
            }
            match m.source {
                MarkerSource::Ai => stats.ai += 1,
                MarkerSource::Human => stats.human += 1,
            }
            if m.layer == Layer::Emotions {
                match m.emotion.map(|e| e.category()) {
                    Some(EmotionCategory::Positive) => stats.positive += 1,
                    Some(EmotionCategory::Negative) => stats.negative += 1,
                    Some(EmotionCategory::Neutral) | None => stats.neutral += 1,
                }
            }
            stats
        })
    }
}

/// Report plus page-space markers for one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub url: String,
    pub mode: AnalysisMode,
    pub slice_count: usize,
    pub report: AnalysisReport,
    pub markers: Vec<Marker>,
    pub stats: MarkerStats,
    pub analyzed_at: DateTime<Utc>,
}
