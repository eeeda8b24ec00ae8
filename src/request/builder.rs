use indexmap::IndexMap;
use serde::Serialize;
use tracing::{debug, warn};
use url::Url;

use crate::error::RequestError;

use super::auth::{basic_auth_value, bearer_value};
use super::query::{encode_query, normalize_endpoint};

pub const DEFAULT_CONTENT_TYPE: &str = "application/json";
pub const CONTENT_TYPE_HEADER: &str = "Content-Type";
pub const ACCEPT_HEADER: &str = "Accept";
pub const AUTHORIZATION_HEADER: &str = "Authorization";

/// Header names mapped to values, in insertion order. Keys keep the casing
/// they were set with.
pub type HeaderMap = IndexMap<String, String>;

fn default_headers() -> HeaderMap {
    let mut headers = HeaderMap::with_capacity(2);
    headers.insert(CONTENT_TYPE_HEADER.to_owned(), DEFAULT_CONTENT_TYPE.to_owned());
    headers.insert(ACCEPT_HEADER.to_owned(), DEFAULT_CONTENT_TYPE.to_owned());
    headers
}

/// Builds URLs, headers, and JSON payloads against a single base endpoint.
///
/// `Clone` produces a builder with its own copy of the headers; changes made
/// to either side afterwards are never visible to the other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestBuilder {
    base_endpoint: String,
    headers: HeaderMap,
}

impl RequestBuilder {
    /// Creates a builder for `base_endpoint` with the default JSON headers.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::InvalidEndpoint`] when the endpoint does not
    /// parse as an absolute URL (the empty string included), or
    /// [`RequestError::EndpointMissingHost`] when it has no host.
    pub fn new(base_endpoint: &str) -> Result<Self, RequestError> {
        let parsed = Url::parse(base_endpoint).map_err(|err| {
            warn!(endpoint = base_endpoint, "Rejected base endpoint: {}", err);
            RequestError::InvalidEndpoint {
                endpoint: base_endpoint.to_owned(),
                source: err,
            }
        })?;
        if parsed.host_str().is_none_or(str::is_empty) {
            return Err(RequestError::EndpointMissingHost {
                endpoint: base_endpoint.to_owned(),
            });
        }
        let trimmed = base_endpoint
            .strip_suffix('/')
            .unwrap_or(base_endpoint)
            .to_owned();
        Ok(Self {
            base_endpoint: trimmed,
            headers: default_headers(),
        })
    }

    #[must_use]
    pub const fn base_endpoint(&self) -> &str {
        self.base_endpoint.as_str()
    }

    /// Inserts or overwrites a header.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::InvalidHeaderKey`] for a blank key and
    /// [`RequestError::InvalidHeaderValue`] when the value contains bytes a
    /// header cannot carry (CR, LF, other control characters). Any other key
    /// is stored as given. The header set is left untouched on error.
    pub fn set_header(&mut self, key: &str, value: &str) -> Result<&mut Self, RequestError> {
        let key = validate_header(key, value)?;
        self.headers.insert(key.to_owned(), value.to_owned());
        Ok(self)
    }

    /// Applies [`RequestBuilder::set_header`] to every entry, in iteration
    /// order. Entries applied before a failing one are kept.
    ///
    /// # Errors
    ///
    /// Returns the error of the first entry that `set_header` rejects.
    pub fn set_headers<I, K, V>(&mut self, headers: I) -> Result<&mut Self, RequestError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        for (key, value) in headers {
            self.set_header(key.as_ref(), value.as_ref())?;
        }
        Ok(self)
    }

    /// # Errors
    ///
    /// Returns [`RequestError::InvalidHeaderValue`] when `value` is not a
    /// legal header value.
    pub fn set_content_type(&mut self, value: &str) -> Result<&mut Self, RequestError> {
        self.set_header(CONTENT_TYPE_HEADER, value)
    }

    /// Sets `Authorization: Bearer <token>`.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::InvalidHeaderValue`] when the token contains
    /// bytes a header cannot carry.
    pub fn set_bearer_token(&mut self, token: &str) -> Result<&mut Self, RequestError> {
        self.set_header(AUTHORIZATION_HEADER, &bearer_value(token))
    }

    /// Sets `Authorization: Basic <base64(username:password)>`.
    ///
    /// # Errors
    ///
    /// Returns the error reported by [`RequestBuilder::set_header`].
    pub fn set_basic_auth(
        &mut self,
        username: &str,
        password: &str,
    ) -> Result<&mut Self, RequestError> {
        self.set_header(AUTHORIZATION_HEADER, &basic_auth_value(username, password))
    }

    /// Removes a header if present.
    pub fn remove_header(&mut self, key: &str) -> &mut Self {
        if self.headers.shift_remove(key).is_some() {
            debug!(key, "Removed header");
        }
        self
    }

    /// Resets the header set to exactly the two default headers.
    pub fn clear_headers(&mut self) -> &mut Self {
        self.headers = default_headers();
        self
    }

    /// Returns a copy of the current headers.
    #[must_use]
    pub fn headers(&self) -> HeaderMap {
        self.headers.clone()
    }

    #[must_use]
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.get(key).map(String::as_str)
    }

    /// Joins the base endpoint with `endpoint`, adding a leading `/` when a
    /// non-empty `endpoint` lacks one.
    #[must_use]
    pub fn build_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_endpoint, normalize_endpoint(endpoint))
    }

    /// Like [`RequestBuilder::build_url`], appending the query parameters
    /// whose value is present and non-empty, percent-encoded, in input order.
    #[must_use]
    pub fn build_url_with_query<I, K, V>(&self, endpoint: &str, params: I) -> String
    where
        I: IntoIterator<Item = (K, Option<V>)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut url = self.build_url(endpoint);
        if let Some(query) = encode_query(params) {
            url.push('?');
            url.push_str(&query);
        }
        url
    }

    /// Serializes `data` to a compact JSON string. See [`build_payload`].
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::SerializationError`] when `data` cannot be
    /// represented as JSON.
    pub fn build_payload<T>(&self, data: &T) -> Result<String, RequestError>
    where
        T: Serialize + ?Sized,
    {
        build_payload(data)
    }
}

/// Serializes `data` to a compact JSON string. Object keys keep their
/// insertion order.
///
/// # Errors
///
/// Returns [`RequestError::SerializationError`] carrying the underlying
/// `serde_json` error when `data` cannot be represented as JSON (for example
/// a map with non-string keys).
pub fn build_payload<T>(data: &T) -> Result<String, RequestError>
where
    T: Serialize + ?Sized,
{
    serde_json::to_string(data).map_err(|err| {
        warn!("Failed to serialize payload: {}", err);
        RequestError::SerializationError { source: err }
    })
}

fn validate_header<'key>(key: &'key str, value: &str) -> Result<&'key str, RequestError> {
    if key.trim().is_empty() {
        warn!("Rejected header with empty key");
        return Err(RequestError::InvalidHeaderKey);
    }
    http::header::HeaderValue::from_bytes(value.as_bytes()).map_err(|err| {
        warn!(key, "Rejected header value");
        RequestError::InvalidHeaderValue {
            key: key.to_owned(),
            source: err,
        }
    })?;
    Ok(key)
}
