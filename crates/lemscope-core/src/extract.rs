//! Recovering the JSON object from an analyzer's free-text answer.

use std::sync::OnceLock;

use regex::Regex;
use serde_json::Value;

fn fence_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"```(?:json)?\s*([\s\S]*?)\s*```").ok())
        .as_ref()
}

/// Extract the outermost JSON object text from an analyzer answer.
///
/// Prefers the body of the first fenced code block, then keeps everything
/// between the first `{` and the last `}`. Returns `"{}"` when there is no
/// object to be found.
pub fn extract_json_object(text: &str) -> String {
    let candidate = fence_pattern()
        .and_then(|re| re.captures(text))
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
        .unwrap_or(text);

    match (candidate.find('{'), candidate.rfind('}')) {
        (Some(start), Some(end)) if start < end => candidate[start..=end].to_string(),
        _ => "{}".to_string(),
    }
}

/// Extract and parse the analyzer's JSON object.
///
/// Empty answers and answers that do not parse to an object are errors;
/// the caller decides whether that is fatal for its slice.
pub fn parse_analyzer_json(text: &str) -> Result<Value, String> {
    if text.trim().is_empty() {
        return Err("empty analyzer response".to_string());
    }

    let json = extract_json_object(text);
    let value: Value =
        serde_json::from_str(&json).map_err(|e| format!("invalid JSON in analyzer response: {}", e))?;

    if value.is_object() {
        Ok(value)
    } else {
        Err("analyzer response is not a JSON object".to_string())
    }
}

#[cfg(test)]
#[path = "extract_tests.rs"]
mod tests;
