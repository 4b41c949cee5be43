//! Structured report produced from the top slice of a page.

use serde::{Deserialize, Serialize};

/// Share of the audience attributed to one segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudienceSegment {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub percentage: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TechLiteracy {
    Low,
    High,
    #[default]
    #[serde(other)]
    Mid,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Persona {
    pub name: String,
    pub role: String,
    pub bio: String,
    pub goals: String,
    pub quote: String,
    pub tech_literacy: TechLiteracy,
    pub psychographics: String,
    pub values: Vec<String>,
    pub frustrations: Vec<String>,
    #[serde(default)]
    pub demographics: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FindingKind {
    #[serde(alias = "Positive")]
    Positive,
    #[serde(alias = "Negative")]
    Negative,
    #[default]
    #[serde(other)]
    Neutral,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyFinding {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type", default)]
    pub kind: FindingKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Hero,
    Features,
    Testimonials,
    Pricing,
    Footer,
    Cta,
    SocialProof,
    Faq,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Estimated vertical section of the analyzed page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutSection {
    #[serde(rename = "type", default)]
    pub kind: SectionKind,
    #[serde(default)]
    pub estimated_height: f64,
    #[serde(default)]
    pub background_color_hint: String,
}

impl LayoutSection {
    /// Stand-in used when the analyzer describes no layout.
    pub fn unknown() -> Self {
        Self {
            kind: SectionKind::Unknown,
            estimated_height: 3000.0,
            background_color_hint: "light".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SdtScore {
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub justification: String,
}

impl SdtScore {
    fn unscored() -> Self {
        Self {
            score: 0.0,
            justification: "N/A".to_string(),
        }
    }
}

/// Self-determination theory scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SdtScores {
    pub autonomy: SdtScore,
    pub competence: SdtScore,
    pub relatedness: SdtScore,
}

impl SdtScores {
    pub fn unscored() -> Self {
        Self {
            autonomy: SdtScore::unscored(),
            competence: SdtScore::unscored(),
            relatedness: SdtScore::unscored(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Benchmark {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreativeBrief {
    pub problem_statement: String,
    pub target_emotion: String,
    pub how_might_we: String,
    pub strategic_direction: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actionable_steps: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub benchmarks: Option<Vec<Benchmark>>,
}

impl CreativeBrief {
    pub fn placeholder() -> Self {
        Self {
            problem_statement: "N/A".to_string(),
            target_emotion: "N/A".to_string(),
            how_might_we: "N/A".to_string(),
            strategic_direction: "N/A".to_string(),
            actionable_steps: Some(Vec::new()),
            benchmarks: Some(Vec::new()),
        }
    }
}

/// Findings for one analyzed page. Immutable once assembled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub overall_score: f64,
    pub summary: String,
    pub target_audience: String,
    pub audience_split: Vec<AudienceSegment>,
    pub personas: Vec<Persona>,
    pub brand_values: Vec<String>,
    pub key_findings: Vec<KeyFinding>,
    pub suggestions: Vec<String>,
    pub layout_structure: Vec<LayoutSection>,
    pub sdt_scores: SdtScores,
    pub creative_brief: CreativeBrief,
    /// Data URL of the analyzed screenshot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub screenshot: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tech_literacy_levels() {
        assert_eq!(serde_json::from_str::<TechLiteracy>("\"Low\"").unwrap(), TechLiteracy::Low);
        assert_eq!(serde_json::from_str::<TechLiteracy>("\"High\"").unwrap(), TechLiteracy::High);
        assert_eq!(serde_json::to_value(TechLiteracy::Mid).unwrap(), "Mid");
    }

    #[test]
    fn test_unknown_tech_literacy_is_mid() {
        assert_eq!(serde_json::from_str::<TechLiteracy>("\"Expert\"").unwrap(), TechLiteracy::Mid);
        assert_eq!(TechLiteracy::default(), TechLiteracy::Mid);
    }

    #[test]
    fn test_unknown_finding_and_section_kinds() {
        let finding: KeyFinding =
            serde_json::from_str(r#"{"title": "t", "description": "d", "type": "mixed"}"#).unwrap();
        assert_eq!(finding.kind, FindingKind::Neutral);

        let section: LayoutSection = serde_json::from_str(r#"{"type": "carousel"}"#).unwrap();
        assert_eq!(section.kind, SectionKind::Unknown);
    }
}
