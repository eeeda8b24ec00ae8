use std::borrow::Cow;

use serde_json::Value;
use tracing::debug;

use super::body::{has_response_body, parse_json_safely};
use super::fields::has_required_fields;
use super::performance::DurationCheck;
use super::result::ValidationResult;
use super::status::is_successful;

/// Runs the standard checks for one response and collects every failure.
///
/// A string `body` is parsed as JSON before the required-field check, which
/// is skipped when `required_fields` is empty. The duration is only enforced
/// when a [`DurationCheck`] is supplied.
#[must_use]
pub fn validate_response(
    status: u16,
    body: &Value,
    required_fields: &[&str],
    duration: Option<DurationCheck>,
) -> ValidationResult {
    let mut errors = Vec::new();

    if !is_successful(status) {
        errors.push(format!("Expected 2xx status, got {}", status));
    }

    if !has_response_body(body) {
        errors.push("Response body is empty".to_owned());
    }

    if !required_fields.is_empty() {
        let parsed = match body {
            Value::String(text) => Cow::Owned(parse_json_safely(text).unwrap_or(Value::Null)),
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::Array(_) | Value::Object(_) => {
                Cow::Borrowed(body)
            }
        };
        let fields_result = has_required_fields(&parsed, required_fields);
        if !fields_result.valid {
            errors.push(format!(
                "Missing required fields: {}",
                fields_result.missing.join(", ")
            ));
        }
    }

    if let Some(check) = duration
        && !check.passes()
    {
        errors.push(format!(
            "Response time {}ms is outside the {}ms limit",
            check.observed_ms, check.max_ms
        ));
    }

    if !errors.is_empty() {
        debug!(status, ?errors, "Response validation failed");
    }
    ValidationResult::from_errors(errors)
}
