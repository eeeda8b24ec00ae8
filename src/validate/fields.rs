use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use super::result::{FieldValidationResult, TypeMismatch, ValidationDetails, ValidationResult};

/// Runtime type of a JSON value. Arrays report as `array`, not `object`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonType {
    String,
    Number,
    #[serde(alias = "bool")]
    Boolean,
    Object,
    Array,
    Null,
}

impl JsonType {
    #[must_use]
    pub const fn of(value: &Value) -> Self {
        match value {
            Value::String(_) => Self::String,
            Value::Number(_) => Self::Number,
            Value::Bool(_) => Self::Boolean,
            Value::Object(_) => Self::Object,
            Value::Array(_) => Self::Array,
            Value::Null => Self::Null,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Object => "object",
            Self::Array => "array",
            Self::Null => "null",
        }
    }
}

impl fmt::Display for JsonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JsonType {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "string" => Ok(Self::String),
            "number" => Ok(Self::Number),
            "boolean" | "bool" => Ok(Self::Boolean),
            "object" => Ok(Self::Object),
            "array" => Ok(Self::Array),
            "null" => Ok(Self::Null),
            _ => Err(format!("Unknown type name '{}'", value)),
        }
    }
}

#[must_use]
pub const fn type_name(value: &Value) -> &'static str {
    JsonType::of(value).as_str()
}

/// Checks that `body` is an object containing every name in `fields`.
///
/// A non-object body reports every field as missing.
#[must_use]
pub fn has_required_fields<S>(body: &Value, fields: &[S]) -> FieldValidationResult
where
    S: AsRef<str>,
{
    let Value::Object(map) = body else {
        warn!(
            actual = type_name(body),
            "Required-field check expected an object body"
        );
        return FieldValidationResult {
            valid: false,
            missing: fields.iter().map(|field| field.as_ref().to_owned()).collect(),
        };
    };
    let missing: Vec<String> = fields
        .iter()
        .map(AsRef::as_ref)
        .filter(|field| !map.contains_key(*field))
        .map(str::to_owned)
        .collect();
    if !missing.is_empty() {
        debug!(?missing, "Response is missing required fields");
    }
    FieldValidationResult {
        valid: missing.is_empty(),
        missing,
    }
}

/// Stricter [`has_required_fields`]: a field that is present but `null` also
/// fails, and is reported separately from absent fields.
#[must_use]
pub fn validate_required_fields<S>(body: &Value, fields: &[S]) -> ValidationResult
where
    S: AsRef<str>,
{
    let mut missing = Vec::new();
    let mut null = Vec::new();
    match body {
        Value::Object(map) => {
            for field in fields.iter().map(AsRef::as_ref) {
                match map.get(field) {
                    None => missing.push(field.to_owned()),
                    Some(Value::Null) => null.push(field.to_owned()),
                    Some(_) => {}
                }
            }
        }
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) | Value::Array(_) => {
            warn!(
                actual = type_name(body),
                "Required-field check expected an object body"
            );
            missing.extend(fields.iter().map(|field| field.as_ref().to_owned()));
        }
    }
    if missing.is_empty() && null.is_empty() {
        return ValidationResult::passed("All required fields are present");
    }
    let message = format!(
        "{} required field(s) missing, {} null",
        missing.len(),
        null.len()
    );
    ValidationResult::failed(message, ValidationDetails::Fields { missing, null })
}

fn type_mismatch(body: &Value, field: &str, expected: &str) -> Option<TypeMismatch> {
    let Some(value) = body.get(field) else {
        debug!(field, expected, "Field missing for type check");
        return Some(TypeMismatch {
            field: field.to_owned(),
            expected: expected.to_owned(),
            actual: None,
        });
    };
    let actual = type_name(value);
    if actual == expected {
        return None;
    }
    debug!(field, expected, actual, "Field type mismatch");
    Some(TypeMismatch {
        field: field.to_owned(),
        expected: expected.to_owned(),
        actual: Some(actual),
    })
}

/// Compares the runtime type of `body[field]` against `expected`
/// (see [`JsonType`] for the names). `false` when the field is absent.
#[must_use]
pub fn has_expected_type(body: &Value, field: &str, expected: &str) -> bool {
    type_mismatch(body, field, expected).is_none()
}

/// Applies [`has_expected_type`] to every `(field, type)` pair; the details
/// list every failing field.
#[must_use]
pub fn validate_schema<I, K, V>(body: &Value, schema: I) -> ValidationResult
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mismatches: Vec<TypeMismatch> = schema
        .into_iter()
        .filter_map(|(field, expected)| type_mismatch(body, field.as_ref(), expected.as_ref()))
        .collect();
    if mismatches.is_empty() {
        return ValidationResult::passed("Schema validation passed");
    }
    let message = format!("{} field(s) failed schema validation", mismatches.len());
    ValidationResult::failed(message, ValidationDetails::Schema { mismatches })
}

/// `true` when `value` is an array with at least `min_length` items.
#[must_use]
pub fn has_min_length(value: &Value, min_length: usize) -> bool {
    let Value::Array(items) = value else {
        debug!(
            actual = type_name(value),
            "Length check expected an array"
        );
        return false;
    };
    items.len() >= min_length
}
