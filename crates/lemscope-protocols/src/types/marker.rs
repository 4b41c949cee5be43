//! Marker types: raw analyzer output and the final page-space form.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Marker category, analyzed and displayed independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layer {
    #[default]
    Emotions,
    Needs,
    Strategy,
}

impl Layer {
    pub const ALL: [Layer; 3] = [Layer::Emotions, Layer::Needs, Layer::Strategy];

    /// Case-insensitive parse of a layer label.
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "emotions" | "emotion" => Some(Self::Emotions),
            "needs" | "need" => Some(Self::Needs),
            "strategy" => Some(Self::Strategy),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Emotions => "emotions",
            Self::Needs => "needs",
            Self::Strategy => "strategy",
        }
    }
}

/// Valence group of an [`Emotion`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmotionCategory {
    Positive,
    Neutral,
    Negative,
}

/// Closed set of emotions a marker on the emotions layer can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Emotion {
    Joy,
    Desire,
    Fascination,
    Satisfaction,
    #[default]
    Neutral,
    Sadness,
    Disgust,
    Boredom,
    Dissatisfaction,
}

impl Emotion {
    pub const ALL: [Emotion; 9] = [
        Emotion::Joy,
        Emotion::Desire,
        Emotion::Fascination,
        Emotion::Satisfaction,
        Emotion::Neutral,
        Emotion::Sadness,
        Emotion::Disgust,
        Emotion::Boredom,
        Emotion::Dissatisfaction,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Joy => "Joy",
            Self::Desire => "Desire",
            Self::Fascination => "Fascination",
            Self::Satisfaction => "Satisfaction",
            Self::Neutral => "Neutral",
            Self::Sadness => "Sadness",
            Self::Disgust => "Disgust",
            Self::Boredom => "Boredom",
            Self::Dissatisfaction => "Dissatisfaction",
        }
    }

    pub fn category(&self) -> EmotionCategory {
        match self {
            Self::Joy | Self::Desire | Self::Fascination | Self::Satisfaction => {
                EmotionCategory::Positive
            }
            Self::Neutral => EmotionCategory::Neutral,
            Self::Sadness | Self::Disgust | Self::Boredom | Self::Dissatisfaction => {
                EmotionCategory::Negative
            }
        }
    }

    /// Resolve free text to an emotion.
    ///
    /// Matching is case-insensitive. The analyzer vocabulary uses "Interest"
    /// and "Aversion", which map to `Fascination` and `Disgust`. Anything
    /// else resolves to `Neutral`.
    pub fn resolve(text: &str) -> Self {
        let normalized = text.trim().to_lowercase();
        match normalized.as_str() {
            "interest" => return Self::Fascination,
            "aversion" => return Self::Disgust,
            _ => {}
        }
        Self::ALL
            .into_iter()
            .find(|e| e.label().to_lowercase() == normalized)
            .unwrap_or(Self::Neutral)
    }
}

/// Self-determination theory need.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Need {
    Autonomy,
    Competence,
    Relatedness,
}

impl Need {
    pub fn parse(text: &str) -> Option<Self> {
        match text.trim().to_lowercase().as_str() {
            "autonomy" => Some(Self::Autonomy),
            "competence" => Some(Self::Competence),
            "relatedness" => Some(Self::Relatedness),
            _ => None,
        }
    }
}

/// Kind of strategic insight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BriefType {
    Opportunity,
    #[serde(rename = "Pain Point")]
    PainPoint,
    Insight,
}

impl BriefType {
    pub fn parse(text: &str) -> Option<Self> {
        let normalized: String = text
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| c.is_alphanumeric())
            .collect();
        match normalized.as_str() {
            "opportunity" => Some(Self::Opportunity),
            "painpoint" => Some(Self::PainPoint),
            "insight" => Some(Self::Insight),
            _ => None,
        }
    }
}

/// Who placed a marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarkerSource {
    #[serde(rename = "AI")]
    Ai,
    #[serde(rename = "HUMAN")]
    Human,
}

/// Appraisal statement attached to a participant's marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appraisal {
    #[serde(rename = "type")]
    pub kind: AppraisalKind,
    /// Sentence opener, e.g. "I want to...".
    pub prefix: String,
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppraisalKind {
    Goal,
    Attitude,
    Norm,
    Standard,
}

/// Analyzer output before normalization.
///
/// `y` is local to the slice that produced the marker until the stitcher
/// rewrites it into page space. Every field is optional because the
/// analyzer is free text in disguise.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawMarker {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub layer: Option<String>,
    pub comment: Option<String>,
    pub emotion: Option<String>,
    pub need: Option<String>,
    pub brief_type: Option<String>,
}

impl RawMarker {
    /// Read a marker object leniently.
    ///
    /// Numbers may arrive as JSON numbers or numeric strings. Non-finite or
    /// unparseable numbers, and non-string text fields, are treated as absent.
    pub fn from_value(value: &Value) -> Self {
        Self {
            x: number_field(value, "x"),
            y: number_field(value, "y"),
            layer: text_field(value, "layer"),
            comment: text_field(value, "comment"),
            emotion: text_field(value, "emotion"),
            need: text_field(value, "need"),
            brief_type: text_field(value, "brief_type").or_else(|| text_field(value, "briefType")),
        }
    }

    /// Read the `markers` array of an analyzer response object.
    pub fn list_from_response(response: &Value) -> Vec<Self> {
        response
            .get("markers")
            .and_then(Value::as_array)
            .map(|items| items.iter().filter(|v| v.is_object()).map(Self::from_value).collect())
            .unwrap_or_default()
    }
}

fn number_field(value: &Value, key: &str) -> Option<f64> {
    let n = match value.get(key)? {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().trim_end_matches('%').parse::<f64>().ok()?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}

fn text_field(value: &Value, key: &str) -> Option<String> {
    value
        .get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// A marker in page space, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub layer: Layer,
    pub comment: String,
    pub source: MarkerSource,
    #[serde(rename = "sessionId", default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emotion: Option<Emotion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub need: Option<Need>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brief_type: Option<BriefType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appraisal: Option<Appraisal>,
}

impl Marker {
    /// A marker placed by a participant during a test session.
    pub fn human(layer: Layer, x: f64, y: f64, comment: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            x: x.clamp(0.0, 100.0),
            y: y.clamp(0.0, 100.0),
            layer,
            comment: comment.into(),
            source: MarkerSource::Human,
            session_id: None,
            emotion: None,
            need: None,
            brief_type: None,
            appraisal: None,
        }
    }

    /// An emotions-layer marker from a participant's appraisal.
    ///
    /// The comment reads as the appraisal sentence, prefix then content.
    pub fn participant(x: f64, y: f64, emotion: Emotion, appraisal: Appraisal) -> Self {
        let comment = format!("{} {}", appraisal.prefix.trim(), appraisal.content.trim());
        let mut marker = Self::human(Layer::Emotions, x, y, comment);
        marker.emotion = Some(emotion);
        marker.appraisal = Some(appraisal);
        marker
    }

    pub fn with_session(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }

    /// Euclidean distance in the 0-100 page space.
    pub fn distance_to(&self, other: &Marker) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

#[cfg(test)]
#[path = "marker_tests.rs"]
mod tests;
