//! Core library for the `loadkit` CLI.
//!
//! Two independent pieces sit around a single HTTP exchange in a load-test
//! script: [`request::RequestBuilder`] prepares URLs, headers, and JSON
//! payloads, and [`validate`] checks the status, body, and timing that come
//! back. Neither performs I/O; the HTTP client, virtual-user scheduling, and
//! metrics belong to the load-testing runtime driving the script.
pub mod config;
pub mod error;
pub mod request;
pub mod validate;

#[cfg(feature = "fuzzing")]
pub mod fuzzing;
