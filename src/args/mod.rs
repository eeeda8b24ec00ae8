//! CLI argument types and parsing helpers.
mod cli;
pub(crate) mod parsers;


pub use cli::{CheckArgs, CliArgs, Command, HeadersArgs, PayloadArgs, UrlArgs};
