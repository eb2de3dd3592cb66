use regex::Regex;
use serde::Deserialize;
use serde_json::Value;
use std::sync::OnceLock;

use crate::error::RecoveryError;
use crate::models::Segment;

/// One entry of the `segments` array as the transcription model emits it.
/// Every field is optional; missing ones are backfilled. `id` is kept loose
/// because models emit it as a string or float as often as an integer.
#[derive(Debug, Deserialize)]
pub struct JsonSegment {
    pub id: Option<Value>,
    pub start: Option<f64>,
    pub end: Option<f64>,
    pub duration: Option<f64>,
    pub text: Option<String>,
}

/// Remove a surrounding markdown code fence (optionally tagged `json`).
pub fn strip_code_fences(text: &str) -> &str {
    let mut s = text.trim();
    if let Some(rest) = s.strip_prefix("```json") {
        s = rest.trim_start();
    }
    if let Some(rest) = s.strip_prefix("```") {
        s = rest.trim_start();
    }
    if let Some(rest) = s.strip_suffix("```") {
        s = rest.trim_end();
    }
    s.trim()
}

fn segments_span_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"(?s)\{.*"segments".*\}"#).expect("valid segments regex"))
}

/// Locate the brace-delimited span that encloses a `"segments"` key.
///
/// Greedy: runs from the first `{` preceding the key to the last `}` in the text.
pub fn find_segments_span(text: &str) -> Option<&str> {
    segments_span_re().find(text).map(|m| m.as_str())
}

/// Decode a span into raw segments.
///
/// A missing, null or empty `segments` value (`{}`, `""`, `0`, `false`)
/// decodes to an empty list. Anything else that is not an object holding an
/// array of objects is a shape error.
pub fn parse_segments(span: &str) -> Result<Vec<JsonSegment>, RecoveryError> {
    let value: Value = serde_json::from_str(span)?;
    let obj = value
        .as_object()
        .ok_or_else(|| RecoveryError::Shape(format!("top-level value is {}", kind(&value))))?;

    match obj.get("segments") {
        None => Ok(Vec::new()),
        Some(v) if is_empty_value(v) => Ok(Vec::new()),
        Some(Value::Array(items)) => items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                if !item.is_object() {
                    return Err(RecoveryError::Shape(format!(
                        "segment {i} is {}",
                        kind(item)
                    )));
                }
                serde_json::from_value(item.clone())
                    .map_err(|e| RecoveryError::Shape(format!("segment {i}: {e}")))
            })
            .collect(),
        Some(other) => Err(RecoveryError::Shape(format!(
            "\"segments\" is {}, not an array",
            kind(other)
        ))),
    }
}

fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

/// Fill in missing fields. Fields the payload supplied are kept as-is.
pub fn backfill(raw: Vec<JsonSegment>) -> Vec<Segment> {
    raw.into_iter()
        .enumerate()
        .map(|(i, s)| {
            let start = s.start.unwrap_or(0.0);
            let end = s.end.unwrap_or(0.0);
            Segment {
                id: s.id.as_ref().and_then(Value::as_i64).unwrap_or(i as i64),
                start,
                end,
                duration: s.duration.unwrap_or_else(|| (end - start).max(0.0)),
                text: s.text.unwrap_or_default(),
            }
        })
        .collect()
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
