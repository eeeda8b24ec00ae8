use serde_json::Value;
use tracing::debug;

/// Returns `true` when `text` is non-blank and parses as JSON.
#[must_use]
pub fn is_valid_json(text: &str) -> bool {
    if text.trim().is_empty() {
        return false;
    }
    parse_json_safely(text).is_some()
}

/// Parses `text` as JSON, returning `None` instead of an error.
#[must_use]
pub fn parse_json_safely(text: &str) -> Option<Value> {
    serde_json::from_str(text)
        .inspect_err(|err| debug!("Response body is not valid JSON: {}", err))
        .ok()
}

/// Reports whether a response carried anything.
///
/// `Null`, blank strings, and objects or arrays without entries count as
/// empty. Numbers and booleans always count as a body.
#[must_use]
pub fn has_response_body(body: &Value) -> bool {
    match body {
        Value::Null => false,
        Value::String(text) => !text.trim().is_empty(),
        Value::Object(map) => !map.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Bool(_) | Value::Number(_) => true,
    }
}
