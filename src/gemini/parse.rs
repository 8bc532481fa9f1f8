//! Normalization of the model's raw reply into an [`AnalyzeResponse`].
//!
//! Gemini is asked for JSON but does not always comply, so "malformed reply"
//! is an expected branch, not an error: recovery is an ordered chain of parse
//! attempts ending in a synthetic fallback object.

use crate::server::types::AnalyzeResponse;
use serde_json::{json, Value};

/// Marker stored in `safetyNotes` when the fallback wrapper was used.
pub const FALLBACK_NOTE: &str = "Gemini did not return JSON; fallback used.";

/// Outcome of the JSON-recovery chain.
enum Recovery {
    Object(Value),
    NeedsFallback,
}

/// Tries a strict parse of the whole text, then of the substring spanning the
/// first `{` through the last `}`.
fn recover(raw: &str) -> Recovery {
    if let Ok(value) = serde_json::from_str::<Value>(raw) {
        return Recovery::Object(value);
    }

    let start = raw.find('{');
    let end = raw.rfind('}');
    if let (Some(start), Some(end)) = (start, end) {
        if end > start {
            if let Ok(value) = serde_json::from_str::<Value>(&raw[start..=end]) {
                return Recovery::Object(value);
            }
        }
    }

    Recovery::NeedsFallback
}

fn coerce_string(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

fn coerce_string_list(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect(),
        _ => Vec::new(),
    }
}

/// Normalizes the raw model reply into the fixed response shape.
///
/// Whichever branch produced the object, every field is coerced independently:
/// the model may return extra, missing, or wrong-typed keys.
pub fn normalize(raw_text: &str) -> AnalyzeResponse {
    let raw = raw_text.trim();

    let parsed = match recover(raw) {
        Recovery::Object(value) => value,
        Recovery::NeedsFallback => json!({
            "answer": raw,
            "imageSummary": "",
            "extractedText": "",
            "detectedLanguages": [],
            "safetyNotes": FALLBACK_NOTE,
        }),
    };

    AnalyzeResponse {
        answer: coerce_string(parsed.get("answer")),
        image_summary: coerce_string(parsed.get("imageSummary")),
        extracted_text: coerce_string(parsed.get("extractedText")),
        detected_languages: coerce_string_list(parsed.get("detectedLanguages")),
        safety_notes: coerce_string(parsed.get("safetyNotes")),
    }
}
