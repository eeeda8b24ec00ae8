use tracing::debug;

use crate::error::{AppError, AppResult, ConfigError};
use crate::request::{RequestBuilder, parse_auth_pair};

use super::parse::parse_header;
use super::types::ConfigFile;

/// Environment variable that selects the base URL for the current target.
pub const BASE_URL_ENV: &str = "LOADKIT_BASE_URL";

/// Picks the base URL: explicit flag, then environment, then config file.
///
/// # Errors
///
/// Returns [`ConfigError::MissingBaseUrl`] when none of the sources set one.
pub fn resolve_base_url(
    cli: Option<&str>,
    env: Option<&str>,
    config: Option<&ConfigFile>,
) -> Result<String, ConfigError> {
    cli.or(env)
        .or_else(|| config.and_then(|file| file.base_url.as_deref()))
        .filter(|value| !value.trim().is_empty())
        .map(str::to_owned)
        .ok_or(ConfigError::MissingBaseUrl)
}

/// Creates a [`RequestBuilder`] for `base_url` and applies the header,
/// content-type, and auth settings from `config`.
///
/// # Errors
///
/// Returns an error when the base URL is rejected or a configured header or
/// credential is malformed.
pub fn build_request_builder(
    base_url: &str,
    config: Option<&ConfigFile>,
) -> AppResult<RequestBuilder> {
    let mut builder = RequestBuilder::new(base_url)?;
    let Some(config) = config else {
        return Ok(builder);
    };

    if let Some(content_type) = config.content_type.as_deref() {
        builder.set_content_type(content_type).map_err(invalid_request)?;
    }
    for raw in config.headers.iter().flatten() {
        let (key, value) = parse_header(raw).map_err(AppError::config)?;
        builder.set_header(&key, &value).map_err(invalid_request)?;
    }
    if let Some(token) = config.bearer_token.as_deref() {
        builder.set_bearer_token(token).map_err(invalid_request)?;
    }
    if let Some(pair) = config.basic_auth.as_deref() {
        let (username, password) = parse_auth_pair(pair).map_err(invalid_request)?;
        builder
            .set_basic_auth(&username, &password)
            .map_err(invalid_request)?;
    }
    debug!(
        base = builder.base_endpoint(),
        headers = builder.headers().len(),
        "Applied config to request builder"
    );
    Ok(builder)
}

fn invalid_request(source: crate::error::RequestError) -> AppError {
    AppError::config(ConfigError::InvalidRequest { source })
}
