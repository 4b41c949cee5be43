//! Prompt text for the three analysis roles.
//!
//! Every prompt asks for a single JSON object inside a ```json fence. The
//! marker schema is shared; the report schema is only requested from the
//! top slice and the text-only fallback.

use lemscope_protocols::SliceRole;

const MARKER_SCHEMA: &str = r#"  "markers": [
    {
      "x": number (0-100, left to right),
      "y": number (0-100, top to bottom),
      "layer": "emotions" | "needs" | "strategy",
      "comment": "Begin with 'The element [name or visible text]...' and explain the effect.",
      "emotion": "Joy" | "Desire" | "Interest" | "Satisfaction" | "Neutral" | "Sadness" | "Aversion" | "Boredom" | "Dissatisfaction",
      "need": "Autonomy" | "Competence" | "Relatedness",
      "brief_type": "Opportunity" | "Pain Point" | "Insight"
    }
  ]"#;

const REPORT_SCHEMA: &str = r#"  "overallScore": number (0-100),
  "summary": string (one flowing paragraph, no bullet points),
  "targetAudience": string,
  "audienceSplit": [{ "label": string, "percentage": number }],
  "brandValues": [string],
  "personas": [
    { "name": string, "role": string, "bio": string, "goals": string, "quote": string, "techLiteracy": "Low" | "Mid" | "High", "psychographics": string, "values": [string], "frustrations": [string] }
  ],
  "layoutStructure": [
    { "type": "hero" | "features" | "testimonials" | "pricing" | "footer" | "cta" | "social_proof" | "faq" | "unknown", "estimatedHeight": number, "backgroundColorHint": "light" | "dark" | "colorful" }
  ],
  "sdtScores": {
    "autonomy": { "score": number, "justification": string },
    "competence": { "score": number, "justification": string },
    "relatedness": { "score": number, "justification": string }
  },
  "creativeBrief": {
    "problemStatement": string,
    "targetEmotion": string,
    "howMightWe": string,
    "strategicDirection": string,
    "actionableSteps": [string],
    "benchmarks": [{ "name": string, "reason": string }]
  },
  "keyFindings": [{ "title": string, "description": string, "type": "positive" | "negative" | "neutral" }],
  "suggestions": [string]"#;

const OUTPUT_RULE: &str =
    "Respond with exactly one valid JSON object inside a ```json code fence and nothing else.";

/// Prompt for one screenshot slice.
pub fn slice_prompt(role: SliceRole, url: &str) -> String {
    match role {
        SliceRole::Top => top_slice_prompt(url),
        SliceRole::Body => body_slice_prompt(url),
    }
}

/// First viewport: strategic report plus markers.
pub fn top_slice_prompt(url: &str) -> String {
    format!(
        r#"You are a senior UX researcher applying the LEMtool to the first viewport (hero area) of {url}.

Tasks:
1. Place markers for the emotions this viewport evokes, the psychological needs it serves or frustrates (self-determination theory), and strategic opportunities or pain points.
2. Write the full strategic report for the page based on this viewport.

Personas: describe 4 to 5 clearly different personas covering the spread of likely visitors, for example a skeptic, a power user, a newcomer and a decision maker.

Creative brief: phrase every actionable step as an appraisal statement of one of these forms, and give 3 to 5 steps:
- "GOAL: <what the user wants>. FIX: <interface change>. RESULT: evokes <emotion>."
- "ATTITUDE: <what the user thinks>. FIX: <interface change>. RESULT: evokes <emotion>."
- "NORM: <what the user believes is right>. FIX: <interface change>. RESULT: evokes <emotion>."
List real products worth benchmarking against.

Placement:
- x and y are percentages of this image; x=0 is the left edge, y=0 is the top edge.
- Put each marker on the visual centre of the element it discusses.
- Never place markers on empty margins or whitespace.
- Spread markers out; several insights about one section need several distinct anchors in it.

{OUTPUT_RULE}
{{
{MARKER_SCHEMA},
{REPORT_SCHEMA}
}}
"#
    )
}

/// Lower viewports: markers only, in slice-local coordinates.
pub fn body_slice_prompt(url: &str) -> String {
    format!(
        r#"You are a senior UX researcher applying the LEMtool to a lower section of {url}. The image is one horizontal slice of a longer page.

Task: place markers on the elements in this slice that evoke emotions, serve or frustrate psychological needs, or represent strategic opportunities.

Coordinates:
- x=0, y=0 is the top-left corner of this image and x=100, y=100 its bottom-right corner.
- Point at the exact element. A card on the left sits near x=25; a button on the right near x=85.
- Do not fall back to 50,50 or 0,0.

{OUTPUT_RULE}
{{
{MARKER_SCHEMA}
}}
"#
    )
}

/// URL-only analysis grounded in live search results.
pub fn text_only_prompt(url: &str) -> String {
    format!(
        r#"You are a senior UX researcher and ethnographer applying the LEMtool to {url}.

Step 1: use the googleSearch tool to read the current live content of {url}. Rely on the search results rather than prior knowledge, and only quote text that appears in them.

Step 2: analyze the content for emotional triggers, self-determination needs and strategic opportunities.

Step 3: produce a detailed report with at least 60 markers, about 20 on each of the emotions, needs and strategy layers. Coordinates are percentages of the whole page.

{OUTPUT_RULE}
{{
{MARKER_SCHEMA},
{REPORT_SCHEMA}
}}
"#
    )
}

#[cfg(test)]
#[path = "prompts_tests.rs"]
mod tests;
