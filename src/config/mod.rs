//! Configuration loading and application.
mod apply;
mod loader;
mod parse;
pub mod types;

#[cfg(test)]
mod tests;

pub use apply::{BASE_URL_ENV, build_request_builder, resolve_base_url};
pub use loader::{ConfigFormat, DEFAULT_CONFIG_FILES, load_config, load_config_file};
pub use parse::{parse_header, parse_query_param, parse_schema_entry};
