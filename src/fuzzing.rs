//! Entry points for the fuzz targets under `fuzz/`.
use crate::config::{parse_header, parse_query_param};
use crate::error::{AppError, AppResult};
use crate::request::RequestBuilder;

/// Parses a header string in `Key: Value` format.
///
/// # Errors
///
/// Returns an error when the header is malformed.
pub fn parse_header_input(input: &str) -> AppResult<(String, String)> {
    parse_header(input).map_err(AppError::from)
}

/// Builds a URL from a base endpoint, a path, and `&`-separated
/// `key=value` query pairs.
///
/// # Errors
///
/// Returns an error when the base endpoint or a query pair is rejected.
pub fn build_url_input(base: &str, path: &str, query: &str) -> AppResult<String> {
    let builder = RequestBuilder::new(base)?;
    let mut params = Vec::new();
    for pair in query.split('&').filter(|pair| !pair.is_empty()) {
        params.push(parse_query_param(pair).map_err(AppError::from)?);
    }
    Ok(builder.build_url_with_query(path, params))
}
