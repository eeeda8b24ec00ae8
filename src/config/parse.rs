use crate::error::ConfigError;
use crate::validate::JsonType;

/// Parses `Key: Value`, trimming both sides.
///
/// # Errors
///
/// Returns an error when the colon is missing.
pub fn parse_header(s: &str) -> Result<(String, String), ConfigError> {
    match s.split_once(':') {
        Some((key, value)) => Ok((key.trim().to_owned(), value.trim().to_owned())),
        None => Err(ConfigError::InvalidHeaderFormat {
            value: s.to_owned(),
        }),
    }
}

/// Parses `field=type` for schema checks.
///
/// # Errors
///
/// Returns an error when the `=` is missing, the field is empty, or the type
/// name is unknown.
pub fn parse_schema_entry(s: &str) -> Result<(String, JsonType), ConfigError> {
    let (field, type_name) = s
        .split_once('=')
        .ok_or_else(|| ConfigError::InvalidSchemaEntry {
            value: s.to_owned(),
        })?;
    let field = field.trim();
    if field.is_empty() {
        return Err(ConfigError::InvalidSchemaEntry {
            value: s.to_owned(),
        });
    }
    let json_type = type_name
        .parse::<JsonType>()
        .map_err(|_err| ConfigError::UnknownTypeName {
            value: type_name.trim().to_owned(),
        })?;
    Ok((field.to_owned(), json_type))
}

/// Parses `key=value`. A bare `key` or `key=` yields `None` for the value, so
/// the parameter is dropped when the URL is built.
///
/// # Errors
///
/// Returns an error when the key is empty.
pub fn parse_query_param(s: &str) -> Result<(String, Option<String>), ConfigError> {
    let (key, value) = s.split_once('=').unwrap_or((s, ""));
    if key.is_empty() {
        return Err(ConfigError::InvalidQueryParam {
            value: s.to_owned(),
        });
    }
    let value = (!value.is_empty()).then(|| value.to_owned());
    Ok((key.to_owned(), value))
}
