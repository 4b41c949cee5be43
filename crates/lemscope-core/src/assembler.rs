//! Report construction and final result assembly.

use chrono::Utc;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use lemscope_protocols::{
    AnalysisMode, AnalysisReport, AnalysisResult, Benchmark, CreativeBrief, EncodedImage,
    LayoutSection, Marker, MarkerStats, Persona, SdtScore, SdtScores, TechLiteracy,
};

const DEFAULT_SUMMARY: &str = "Analysis incomplete.";
const DEFAULT_AUDIENCE: &str = "General Audience";
const NOT_AVAILABLE: &str = "N/A";

/// Builds reports from analyzer JSON and packages final results.
pub struct ReportAssembler;

impl ReportAssembler {
    /// Build a report from the top slice's (or text-only) response object.
    ///
    /// Every field has a default, so any JSON object yields a report.
    pub fn build_report(data: &Value, screenshot: Option<&EncodedImage>) -> AnalysisReport {
        let layout_structure = match data.get("layoutStructure") {
            Some(Value::Array(items)) => typed_items(items, "layoutStructure"),
            _ => vec![LayoutSection::unknown()],
        };

        AnalysisReport {
            overall_score: number(data, "overallScore").unwrap_or(0.0).clamp(0.0, 100.0),
            summary: text(data, "summary").unwrap_or_else(|| DEFAULT_SUMMARY.to_string()),
            target_audience: text(data, "targetAudience")
                .unwrap_or_else(|| DEFAULT_AUDIENCE.to_string()),
            audience_split: typed_list(data, "audienceSplit"),
            personas: list(data, "personas")
                .map(|items| items.iter().filter(|p| p.is_object()).map(persona).collect())
                .unwrap_or_default(),
            brand_values: string_list(data, "brandValues").unwrap_or_default(),
            key_findings: typed_list(data, "keyFindings"),
            suggestions: string_list(data, "suggestions").unwrap_or_default(),
            layout_structure,
            sdt_scores: sdt_scores(data.get("sdtScores")),
            creative_brief: creative_brief(data.get("creativeBrief")),
            screenshot: screenshot.map(EncodedImage::to_data_url),
        }
    }

    /// Combine a report with the final marker set.
    pub fn assemble(
        url: &str,
        mode: AnalysisMode,
        slice_count: usize,
        report: AnalysisReport,
        markers: Vec<Marker>,
    ) -> AnalysisResult {
        AnalysisResult {
            url: url.to_string(),
            mode,
            slice_count,
            stats: MarkerStats::from_markers(&markers),
            report,
            markers,
            analyzed_at: Utc::now(),
        }
    }
}

fn persona(value: &Value) -> Persona {
    let role = text(value, "role");
    Persona {
        name: text(value, "name").unwrap_or_else(|| "Unknown Persona".to_string()),
        bio: text(value, "bio").unwrap_or_else(|| {
            format!(
                "A {} seeking solutions based on their core values.",
                role.as_deref().unwrap_or("user")
            )
        }),
        role: role.unwrap_or_else(|| "Unknown Role".to_string()),
        goals: text(value, "goals").unwrap_or_else(|| {
            "Evaluate the product/service and decide if it's a good fit.".to_string()
        }),
        quote: text(value, "quote")
            .unwrap_or_else(|| "I'm hoping this website solves my problem quickly.".to_string()),
        tech_literacy: value
            .get("techLiteracy")
            .and_then(|v| serde_json::from_value::<TechLiteracy>(v.clone()).ok())
            .unwrap_or_default(),
        psychographics: text(value, "psychographics").unwrap_or_default(),
        values: string_list(value, "values").unwrap_or_default(),
        frustrations: string_list(value, "frustrations").unwrap_or_default(),
        demographics: text(value, "demographics").unwrap_or_default(),
    }
}

fn sdt_scores(value: Option<&Value>) -> SdtScores {
    let Some(value) = value.filter(|v| v.is_object()) else {
        return SdtScores::unscored();
    };
    let unscored = SdtScores::unscored();
    let dimension = |key: &str, fallback: SdtScore| {
        value
            .get(key)
            .and_then(|v| serde_json::from_value::<SdtScore>(v.clone()).ok())
            .unwrap_or(fallback)
    };
    SdtScores {
        autonomy: dimension("autonomy", unscored.autonomy),
        competence: dimension("competence", unscored.competence),
        relatedness: dimension("relatedness", unscored.relatedness),
    }
}

fn creative_brief(value: Option<&Value>) -> CreativeBrief {
    let Some(value) = value.filter(|v| v.is_object()) else {
        return CreativeBrief::placeholder();
    };
    let field = |key: &str| text(value, key).unwrap_or_else(|| NOT_AVAILABLE.to_string());
    CreativeBrief {
        problem_statement: field("problemStatement"),
        target_emotion: field("targetEmotion"),
        how_might_we: field("howMightWe"),
        strategic_direction: field("strategicDirection"),
        actionable_steps: string_list(value, "actionableSteps"),
        benchmarks: list(value, "benchmarks").map(|items| typed_items::<Benchmark>(items, "benchmarks")),
    }
}

fn text(value: &Value, key: &str) -> Option<String> {
    value
        .get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn number(value: &Value, key: &str) -> Option<f64> {
    let n = match value.get(key)? {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}

fn list<'a>(value: &'a Value, key: &str) -> Option<&'a Vec<Value>> {
    value.get(key).and_then(Value::as_array)
}

fn string_list(value: &Value, key: &str) -> Option<Vec<String>> {
    list(value, key).map(|items| {
        items
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect()
    })
}

fn typed_list<T: DeserializeOwned>(value: &Value, key: &str) -> Vec<T> {
    list(value, key)
        .map(|items| typed_items(items, key))
        .unwrap_or_default()
}

fn typed_items<T: DeserializeOwned>(items: &[Value], key: &str) -> Vec<T> {
    items
        .iter()
        .filter_map(|item| match serde_json::from_value::<T>(item.clone()) {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                debug!("Skipping malformed {} entry: {}", key, e);
                None
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "assembler_tests.rs"]
mod tests;
