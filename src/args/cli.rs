use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use loadkit::config::{BASE_URL_ENV, parse_header, parse_query_param, parse_schema_entry};
use loadkit::validate::JsonType;

use super::parsers::{parse_bool_env, parse_millis_arg};

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Build requests and check responses for HTTP load-test scripts."
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    /// Path to config file (TOML or JSON)
    #[arg(long = "config", short = 'c', global = true)]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(long = "verbose", short = 'v', global = true)]
    pub verbose: bool,

    /// Disable colored log output
    #[arg(long = "no-color", env = "NO_COLOR", value_parser = parse_bool_env, global = true)]
    pub no_color: bool,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Print the URL built from the base endpoint, a path, and query parameters
    Url(UrlArgs),
    /// Print a JSON value re-serialized as a compact payload
    Payload(PayloadArgs),
    /// Print the header set after applying config and flags
    Headers(HeadersArgs),
    /// Validate a recorded response and print the aggregate result
    Check(CheckArgs),
}

#[derive(Debug, Args, Clone)]
pub struct UrlArgs {
    /// Endpoint path appended to the base URL
    #[arg(default_value = "")]
    pub path: String,

    /// Query parameter as key=value (repeatable; empty values are dropped)
    #[arg(long = "query", short = 'q', value_parser = parse_query_param)]
    pub query: Vec<(String, Option<String>)>,

    /// Base URL (overrides config)
    #[arg(long = "base-url", short = 'b', env = BASE_URL_ENV)]
    pub base_url: Option<String>,
}

#[derive(Debug, Args, Clone)]
pub struct PayloadArgs {
    /// JSON text, or @path to read it from a file
    pub data: String,
}

#[derive(Debug, Args, Clone)]
pub struct HeadersArgs {
    /// Header as 'Key: Value' (repeatable)
    #[arg(long = "header", short = 'H', value_parser = parse_header)]
    pub headers: Vec<(String, String)>,

    /// Header name to remove after the others are applied (repeatable)
    #[arg(long = "remove")]
    pub remove: Vec<String>,

    /// Content-Type header value
    #[arg(long = "content-type")]
    pub content_type: Option<String>,

    /// Bearer token for the Authorization header
    #[arg(long = "bearer")]
    pub bearer: Option<String>,

    /// Basic auth credentials as username:password
    #[arg(long = "basic-auth")]
    pub basic_auth: Option<String>,

    /// Base URL (overrides config)
    #[arg(long = "base-url", short = 'b', env = BASE_URL_ENV)]
    pub base_url: Option<String>,
}

#[derive(Debug, Args, Clone)]
pub struct CheckArgs {
    /// HTTP status code of the response
    #[arg(long = "status", short = 's')]
    pub status: u16,

    /// Response body text
    #[arg(long = "body", conflicts_with = "body_file")]
    pub body: Option<String>,

    /// File holding the response body
    #[arg(long = "body-file")]
    pub body_file: Option<PathBuf>,

    /// Field that must be present in the JSON body (repeatable)
    #[arg(long = "require", short = 'r')]
    pub require: Vec<String>,

    /// Expected field type as field=type (repeatable)
    #[arg(long = "schema", value_parser = parse_schema_entry)]
    pub schema: Vec<(String, JsonType)>,

    /// Exact status the response must have
    #[arg(long = "expect-status")]
    pub expect_status: Option<u16>,

    /// Minimum number of items when the body is a JSON array
    #[arg(long = "min-items")]
    pub min_items: Option<usize>,

    /// Observed response time in milliseconds
    #[arg(long = "duration-ms", value_parser = parse_millis_arg)]
    pub duration_ms: Option<f64>,

    /// Maximum allowed response time in milliseconds
    #[arg(long = "max-duration-ms", value_parser = parse_millis_arg)]
    pub max_duration_ms: Option<f64>,
}
