use thiserror::Error;

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("Invalid endpoint '{endpoint}': {source}")]
    InvalidEndpoint {
        endpoint: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Endpoint '{endpoint}' must be an absolute URL with a host.")]
    EndpointMissingHost { endpoint: String },
    #[error("Header key must not be empty.")]
    InvalidHeaderKey,
    #[error("Invalid header value for '{key}': {source}")]
    InvalidHeaderValue {
        key: String,
        #[source]
        source: http::header::InvalidHeaderValue,
    },
    #[error("Failed to serialize payload: {source}")]
    SerializationError {
        #[source]
        source: serde_json::Error,
    },
    #[error("Expected format username:password.")]
    AuthPairInvalidFormat,
    #[error("Auth username must not be empty.")]
    AuthUsernameEmpty,
    #[cfg(test)]
    #[error("Test expectation failed: {message}")]
    TestExpectation { message: &'static str },
    #[cfg(test)]
    #[error("Test expectation failed: {message}: {value}")]
    TestExpectationValue {
        message: &'static str,
        value: String,
    },
}

impl RequestError {
    #[must_use]
    pub const fn is_header_key_error(&self) -> bool {
        matches!(self, Self::InvalidHeaderKey)
    }

    /// True for the errors raised when a base endpoint is rejected.
    #[must_use]
    pub const fn is_endpoint_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidEndpoint { .. } | Self::EndpointMissingHost { .. }
        )
    }
}
