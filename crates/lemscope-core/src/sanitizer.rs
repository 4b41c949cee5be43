//! Validation and normalization of raw analyzer markers.

use tracing::debug;

use lemscope_protocols::{
    AnalyzerFieldError, BriefType, Emotion, Layer, Marker, MarkerSource, Need, RawMarker,
};

pub const DEFAULT_COMMENT: &str = "No comment provided.";

const DEFAULT_COORDINATE: f64 = 50.0;
const X_MIN: f64 = 1.0;
const X_MAX: f64 = 99.0;
const Y_MIN: f64 = 0.0;
const Y_MAX: f64 = 100.0;

/// Turns page-space [`RawMarker`]s into AI [`Marker`]s.
pub struct MarkerSanitizer;

impl MarkerSanitizer {
    /// Sanitize one marker whose y has already been stitched into page space.
    ///
    /// Markers sitting exactly on the left or right edge (x of 0 or 100) are
    /// analyzer placeholders and are rejected. Every other problem is fixed
    /// by defaulting or clamping.
    pub fn sanitize(raw: &RawMarker) -> Result<Marker, AnalyzerFieldError> {
        if let Some(x) = raw.x {
            if x == 0.0 || x == 100.0 {
                return Err(AnalyzerFieldError::EdgePlacement { x });
            }
        }

        let layer = match raw.layer.as_deref() {
            Some(label) => Layer::parse(label).unwrap_or_else(|| {
                debug!("Unknown marker layer {:?}, using emotions", label);
                Layer::Emotions
            }),
            None => Layer::Emotions,
        };

        // Each optional field belongs to one layer; off-layer values are ignored.
        let emotion = (layer == Layer::Emotions)
            .then(|| raw.emotion.as_deref().map_or(Emotion::Neutral, Emotion::resolve));
        let need = match layer {
            Layer::Needs => raw.need.as_deref().and_then(Need::parse),
            _ => None,
        };
        let brief_type = match layer {
            Layer::Strategy => raw.brief_type.as_deref().and_then(BriefType::parse),
            _ => None,
        };

        Ok(Marker {
            id: uuid::Uuid::new_v4().to_string(),
            x: raw.x.unwrap_or(DEFAULT_COORDINATE).clamp(X_MIN, X_MAX),
            y: raw.y.unwrap_or(DEFAULT_COORDINATE).clamp(Y_MIN, Y_MAX),
            layer,
            comment: raw
                .comment
                .clone()
                .unwrap_or_else(|| DEFAULT_COMMENT.to_string()),
            source: MarkerSource::Ai,
            session_id: None,
            emotion,
            need,
            brief_type,
            appraisal: None,
        })
    }

    /// Sanitize a batch, dropping rejected markers.
    pub fn sanitize_all(raws: impl IntoIterator<Item = RawMarker>) -> Vec<Marker> {
        raws.into_iter()
            .filter_map(|raw| match Self::sanitize(&raw) {
                Ok(marker) => Some(marker),
                Err(e) => {
                    debug!("Dropping marker: {}", e);
                    None
                }
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "sanitizer_tests.rs"]
mod tests;
