use std::path::Path;

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::args::{CheckArgs, HeadersArgs, PayloadArgs, UrlArgs};
use loadkit::config::types::{CheckConfig, ConfigFile};
use loadkit::config::{build_request_builder, resolve_base_url};
use loadkit::error::{AppError, AppResult};
use loadkit::request::{RequestBuilder, build_payload, parse_auth_pair};
use loadkit::validate::{
    DurationCheck, JsonType, ValidationResult, has_expected_status, has_min_length,
    parse_json_safely, validate_response, validate_schema,
};

fn builder_for(base_url: Option<&str>, config: Option<&ConfigFile>) -> AppResult<RequestBuilder> {
    let base = resolve_base_url(base_url, None, config).map_err(AppError::config)?;
    build_request_builder(&base, config)
}

pub(super) fn render_url(args: &UrlArgs, config: Option<&ConfigFile>) -> AppResult<String> {
    let builder = builder_for(args.base_url.as_deref(), config)?;
    let url = builder.build_url_with_query(
        &args.path,
        args.query
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_deref())),
    );
    debug!(url = %url, "Built URL");
    Ok(url)
}

fn read_text_arg(raw: &str) -> AppResult<String> {
    raw.strip_prefix('@').map_or_else(
        || Ok(raw.to_owned()),
        |path| std::fs::read_to_string(Path::new(path)).map_err(AppError::from),
    )
}

pub(super) fn render_payload(args: &PayloadArgs) -> AppResult<String> {
    let text = read_text_arg(&args.data)?;
    let value: Value = serde_json::from_str(&text)?;
    build_payload(&value).map_err(AppError::request)
}

pub(super) fn render_headers(
    args: &HeadersArgs,
    config: Option<&ConfigFile>,
) -> AppResult<String> {
    let mut builder = builder_for(args.base_url.as_deref(), config)?;
    if let Some(content_type) = args.content_type.as_deref() {
        builder.set_content_type(content_type)?;
    }
    builder.set_headers(args.headers.iter().map(|(key, value)| (key, value)))?;
    if let Some(token) = args.bearer.as_deref() {
        builder.set_bearer_token(token)?;
    }
    if let Some(pair) = args.basic_auth.as_deref() {
        let (username, password) = parse_auth_pair(pair).map_err(AppError::request)?;
        builder.set_basic_auth(&username, &password)?;
    }
    for key in &args.remove {
        builder.remove_header(key);
    }
    Ok(serde_json::to_string_pretty(&builder.headers())?)
}

/// Result of `loadkit check`: the rendered JSON plus the verdict.
pub(super) struct CheckReport {
    pub(super) result: ValidationResult,
    pub(super) rendered: String,
}

impl CheckReport {
    pub(super) fn into_outcome(self) -> AppResult<()> {
        if self.result.valid {
            return Ok(());
        }
        Err(AppError::check_failed(self.result.reasons().join("; ")))
    }
}

fn read_body(args: &CheckArgs) -> AppResult<Value> {
    let text = match (&args.body, &args.body_file) {
        (Some(body), _) => body.clone(),
        (None, Some(path)) => std::fs::read_to_string(path)?,
        (None, None) => return Ok(Value::Null),
    };
    Ok(parse_json_safely(&text).unwrap_or_else(|| Value::String(text)))
}

struct CheckPlan {
    required: Vec<String>,
    schema: Vec<(String, JsonType)>,
    expected_status: Option<u16>,
    min_items: Option<usize>,
    max_duration_ms: Option<f64>,
}

impl CheckPlan {
    fn new(args: &CheckArgs, config: Option<&CheckConfig>) -> Self {
        let defaults = config.cloned().unwrap_or_default();
        let required = if args.require.is_empty() {
            defaults.required_fields.unwrap_or_default()
        } else {
            args.require.clone()
        };
        let schema = if args.schema.is_empty() {
            defaults
                .schema
                .map(|schema| schema.into_iter().collect())
                .unwrap_or_default()
        } else {
            args.schema.clone()
        };
        Self {
            required,
            schema,
            expected_status: args.expect_status.or(defaults.expected_status),
            min_items: args.min_items.or(defaults.min_items),
            max_duration_ms: args.max_duration_ms.or(defaults.max_duration_ms),
        }
    }
}

pub(super) fn run_check(args: &CheckArgs, config: Option<&ConfigFile>) -> AppResult<CheckReport> {
    let plan = CheckPlan::new(args, config.and_then(|file| file.check.as_ref()));
    let body = read_body(args)?;

    let duration = match (args.duration_ms, plan.max_duration_ms) {
        (Some(observed), Some(max)) => Some(DurationCheck::new(observed, max)),
        (None, Some(_)) => {
            warn!("A maximum duration was set without --duration-ms; skipping the latency check");
            None
        }
        (Some(_) | None, None) => None,
    };

    let required: Vec<&str> = plan.required.iter().map(String::as_str).collect();
    let mut result = validate_response(args.status, &body, &required, duration);

    if !plan.schema.is_empty() {
        let schema = plan
            .schema
            .iter()
            .map(|(field, json_type)| (field.as_str(), json_type.as_str()));
        result = result.merge(validate_schema(&body, schema));
    }
    if let Some(expected) = plan.expected_status
        && !has_expected_status(args.status, expected)
    {
        result = result.merge(ValidationResult::from_errors(vec![format!(
            "Expected status {}, got {}",
            expected, args.status
        )]));
    }
    if let Some(min_items) = plan.min_items
        && !has_min_length(&body, min_items)
    {
        result = result.merge(ValidationResult::from_errors(vec![format!(
            "Expected an array body with at least {} item(s)",
            min_items
        )]));
    }

    if result.valid {
        info!(status = args.status, "Response check passed");
    } else {
        warn!(status = args.status, "Response check failed");
    }
    let rendered = serde_json::to_string_pretty(&result)?;
    Ok(CheckReport { result, rendered })
}
