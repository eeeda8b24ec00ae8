use super::types::ConfigFile;
use super::*;
use crate::error::{AppError, ConfigError};
use crate::request::AUTHORIZATION_HEADER;
use crate::validate::JsonType;
use tempfile::tempdir;

fn write_config(name: &str, content: &str) -> Result<(tempfile::TempDir, ConfigFile), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join(name);
    std::fs::write(&path, content).map_err(|err| format!("write failed: {}", err))?;
    let config = load_config_file(&path).map_err(|err| format!("load failed: {}", err))?;
    Ok((dir, config))
}

#[test]
fn parse_toml_config_with_check_section() -> Result<(), String> {
    let content = r#"
base_url = "https://api.example.com/"
headers = ["X-Env: staging", "X-Trace:abc"]
bearer_token = "secret"

[check]
expected_status = 201
required_fields = ["id", "title"]
max_duration_ms = 500
min_items = 1

[check.schema]
id = "number"
tags = "array"
"#;
    let (_dir, config) = write_config("loadkit.toml", content)?;
    if config.base_url.as_deref() != Some("https://api.example.com/") {
        return Err("Unexpected base_url".to_owned());
    }
    let check = config.check.ok_or("Expected check section")?;
    if check.expected_status != Some(201) {
        return Err("Unexpected expected_status".to_owned());
    }
    if check.min_items != Some(1) {
        return Err("Unexpected min_items".to_owned());
    }
    let schema = check.schema.ok_or("Expected schema")?;
    let entries: Vec<(&str, JsonType)> = schema.iter().map(|(k, v)| (k.as_str(), *v)).collect();
    if entries != [("id", JsonType::Number), ("tags", JsonType::Array)] {
        return Err(format!("Unexpected schema: {:?}", entries));
    }
    Ok(())
}

#[test]
fn parse_json_config() -> Result<(), String> {
    let content = r#"{
  "base_endpoint": "https://api.example.com",
  "basic_auth": "user:pass",
  "check": { "required_fields": ["id"], "schema": { "done": "bool" } }
}"#;
    let (_dir, config) = write_config("loadkit.json", content)?;
    if config.base_url.as_deref() != Some("https://api.example.com") {
        return Err("base_endpoint alias not applied".to_owned());
    }
    let schema = config
        .check
        .and_then(|check| check.schema)
        .ok_or("Expected schema")?;
    if schema.get("done") != Some(&JsonType::Boolean) {
        return Err("bool alias not applied".to_owned());
    }
    Ok(())
}

#[test]
fn load_config_file_rejects_unknown_extension() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join("loadkit.yaml");
    std::fs::write(&path, "base_url: x").map_err(|err| format!("write failed: {}", err))?;
    match load_config_file(&path) {
        Err(AppError::Config(ConfigError::UnsupportedExtension { ext })) if ext == "yaml" => Ok(()),
        Err(err) => Err(format!("Unexpected error: {}", err)),
        Ok(_) => Err("Expected unsupported extension error".to_owned()),
    }
}

#[test]
fn config_format_follows_extension() -> Result<(), String> {
    use std::path::Path;

    if !matches!(ConfigFormat::from_path(Path::new("run/LOADKIT.TOML")), Ok(ConfigFormat::Toml)) {
        return Err("Expected upper-case .TOML to parse as TOML".to_owned());
    }
    if !matches!(ConfigFormat::from_path(Path::new("loadkit.json")), Ok(ConfigFormat::Json)) {
        return Err("Expected .json to parse as JSON".to_owned());
    }
    match ConfigFormat::from_path(Path::new("loadkit")) {
        Err(ConfigError::MissingExtension) => Ok(()),
        other => Err(format!("Unexpected result: {:?}", other)),
    }
}

#[test]
fn load_config_file_reports_parse_errors() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join("loadkit.toml");
    std::fs::write(&path, "base_url = [").map_err(|err| format!("write failed: {}", err))?;
    match load_config_file(&path) {
        Err(AppError::Config(ConfigError::ParseToml { .. })) => Ok(()),
        Err(err) => Err(format!("Unexpected error: {}", err)),
        Ok(_) => Err("Expected parse error".to_owned()),
    }
}

#[test]
fn load_config_with_explicit_missing_path_fails() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join("missing.toml");
    let path_str = path.to_str().ok_or("Non UTF-8 temp path")?;
    match load_config(Some(path_str)) {
        Err(AppError::Config(ConfigError::ReadConfig { .. })) => Ok(()),
        Err(err) => Err(format!("Unexpected error: {}", err)),
        Ok(_) => Err("Expected read error".to_owned()),
    }
}

#[test]
fn resolve_base_url_prefers_cli_then_env_then_config() -> Result<(), ConfigError> {
    let config = ConfigFile {
        base_url: Some("https://config.example.com".to_owned()),
        ..ConfigFile::default()
    };
    let cli = resolve_base_url(
        Some("https://cli.example.com"),
        Some("https://env.example.com"),
        Some(&config),
    )?;
    if cli != "https://cli.example.com" {
        return Err(cli.into());
    }
    let env = resolve_base_url(None, Some("https://env.example.com"), Some(&config))?;
    if env != "https://env.example.com" {
        return Err(env.into());
    }
    let from_config = resolve_base_url(None, None, Some(&config))?;
    if from_config != "https://config.example.com" {
        return Err(from_config.into());
    }
    match resolve_base_url(None, None, None) {
        Err(ConfigError::MissingBaseUrl) => Ok(()),
        Err(err) => Err(format!("Unexpected error: {}", err).into()),
        Ok(value) => Err(value.into()),
    }
}

#[test]
fn build_request_builder_applies_config() -> Result<(), String> {
    let config = ConfigFile {
        headers: Some(vec!["X-Env: staging".to_owned()]),
        content_type: Some("application/vnd.api+json".to_owned()),
        basic_auth: Some("user:pass".to_owned()),
        ..ConfigFile::default()
    };
    let builder = build_request_builder("https://api.example.com/", Some(&config))
        .map_err(|err| format!("build failed: {}", err))?;
    if builder.header("X-Env") != Some("staging") {
        return Err("Header not applied".to_owned());
    }
    if builder.header("Content-Type") != Some("application/vnd.api+json") {
        return Err("Content type not applied".to_owned());
    }
    if builder.header(AUTHORIZATION_HEADER) != Some("Basic dXNlcjpwYXNz") {
        return Err("Basic auth not applied".to_owned());
    }
    if builder.build_url("posts") != "https://api.example.com/posts" {
        return Err("Unexpected base".to_owned());
    }
    Ok(())
}

#[test]
fn build_request_builder_rejects_bad_header() -> Result<(), String> {
    let config = ConfigFile {
        headers: Some(vec!["NoColon".to_owned()]),
        ..ConfigFile::default()
    };
    match build_request_builder("https://api.example.com", Some(&config)) {
        Err(AppError::Config(ConfigError::InvalidHeaderFormat { .. })) => Ok(()),
        Err(err) => Err(format!("Unexpected error: {}", err)),
        Ok(_) => Err("Expected header error".to_owned()),
    }
}

#[test]
fn build_request_builder_rejects_invalid_base() -> Result<(), String> {
    match build_request_builder("invalid-url", None) {
        Err(AppError::Request(err)) if err.is_endpoint_error() => Ok(()),
        Err(err) => Err(format!("Unexpected error: {}", err)),
        Ok(_) => Err("Expected endpoint error".to_owned()),
    }
}

#[test]
fn parse_header_trims_parts() -> Result<(), ConfigError> {
    let (key, value) = parse_header("  Content-Type :  application/json ")?;
    if key != "Content-Type" || value != "application/json" {
        return Err(format!("Unexpected header: {}: {}", key, value).into());
    }
    if parse_header("MissingDelimiter").is_ok() {
        return Err("Expected Err for invalid header".into());
    }
    Ok(())
}

#[test]
fn parse_schema_entry_validates_type() -> Result<(), ConfigError> {
    let (field, json_type) = parse_schema_entry("id=number")?;
    if field != "id" || json_type != JsonType::Number {
        return Err("Unexpected schema entry".into());
    }
    if !matches!(
        parse_schema_entry("id=integer"),
        Err(ConfigError::UnknownTypeName { .. })
    ) {
        return Err("Expected unknown type error".into());
    }
    if !matches!(
        parse_schema_entry("=string"),
        Err(ConfigError::InvalidSchemaEntry { .. })
    ) {
        return Err("Expected invalid entry error".into());
    }
    Ok(())
}

#[test]
fn parse_query_param_handles_missing_values() -> Result<(), ConfigError> {
    if parse_query_param("limit=10")? != ("limit".to_owned(), Some("10".to_owned())) {
        return Err("Unexpected pair".into());
    }
    if parse_query_param("flag")? != ("flag".to_owned(), None) {
        return Err("Bare key should have no value".into());
    }
    if parse_query_param("q=a=b")? != ("q".to_owned(), Some("a=b".to_owned())) {
        return Err("Value should keep later equals signs".into());
    }
    if parse_query_param("=x").is_ok() {
        return Err("Expected empty key to fail".into());
    }
    Ok(())
}
