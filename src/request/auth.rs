use base64::Engine as _;

use crate::error::RequestError;

#[must_use]
pub fn bearer_value(token: &str) -> String {
    format!("Bearer {}", token)
}

#[must_use]
pub fn basic_auth_value(username: &str, password: &str) -> String {
    let token = format!("{}:{}", username, password);
    let encoded = base64::engine::general_purpose::STANDARD.encode(token.as_bytes());
    format!("Basic {}", encoded)
}

/// Splits a `username:password` pair at the first colon.
///
/// # Errors
///
/// Returns an error when the colon is missing or the username is empty.
pub fn parse_auth_pair(value: &str) -> Result<(String, String), RequestError> {
    let (username, password) = value
        .split_once(':')
        .ok_or(RequestError::AuthPairInvalidFormat)?;
    if username.is_empty() {
        return Err(RequestError::AuthUsernameEmpty);
    }
    Ok((username.to_owned(), password.to_owned()))
}
