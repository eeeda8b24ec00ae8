//! Outbound request preparation.
//!
//! A [`RequestBuilder`] owns a base endpoint and an ordered header set. It
//! produces fully qualified URLs and serialized JSON payloads; sending the
//! request is left to whatever HTTP client drives the load test. One builder
//! per virtual user: derive independent copies with `clone()` instead of
//! sharing a builder across concurrent work.
mod auth;
mod builder;
mod query;


pub use auth::{basic_auth_value, bearer_value, parse_auth_pair};
pub use builder::{
    ACCEPT_HEADER, AUTHORIZATION_HEADER, CONTENT_TYPE_HEADER, DEFAULT_CONTENT_TYPE, HeaderMap,
    RequestBuilder, build_payload,
};
pub use query::{encode_query, normalize_endpoint};
