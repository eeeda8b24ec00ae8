use loadkit::error::ConfigError;

pub(crate) fn parse_bool_env(s: &str) -> Result<bool, ConfigError> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "y" | "on" => Ok(true),
        "0" | "false" | "no" | "n" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBoolean {
            value: s.to_owned(),
        }),
    }
}

pub(crate) fn parse_millis_arg(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .trim()
        .parse()
        .map_err(|err| format!("Invalid milliseconds '{}': {}", s, err))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(format!("Milliseconds must be finite, got '{}'", s))
    }
}
