use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{AppResult, ConfigError};

use super::types::ConfigFile;

/// Config filenames checked in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILES: [&str; 2] = ["loadkit.toml", "loadkit.json"];

/// Serialization format of a config file, taken from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    /// # Errors
    ///
    /// Returns [`ConfigError::UnsupportedExtension`] for anything other than
    /// `toml` or `json`, and [`ConfigError::MissingExtension`] when the path
    /// has no extension.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or(ConfigError::MissingExtension)?;
        if ext.eq_ignore_ascii_case("toml") {
            Ok(Self::Toml)
        } else if ext.eq_ignore_ascii_case("json") {
            Ok(Self::Json)
        } else {
            Err(ConfigError::UnsupportedExtension {
                ext: ext.to_owned(),
            })
        }
    }

    fn parse<T>(self, path: &Path, content: &str) -> Result<T, ConfigError>
    where
        T: DeserializeOwned,
    {
        match self {
            Self::Toml => toml::from_str(content).map_err(|err| ConfigError::ParseToml {
                path: path.to_path_buf(),
                source: err,
            }),
            Self::Json => serde_json::from_str(content).map_err(|err| ConfigError::ParseJson {
                path: path.to_path_buf(),
                source: err,
            }),
        }
    }
}

/// Loads `path` when given, otherwise the first of [`DEFAULT_CONFIG_FILES`]
/// present in the working directory.
///
/// # Errors
///
/// Returns an error when the chosen file cannot be read or parsed. A missing
/// default file is not an error.
pub fn load_config(path: Option<&str>) -> AppResult<Option<ConfigFile>> {
    let chosen = match path {
        Some(explicit) => Some(Path::new(explicit)),
        None => DEFAULT_CONFIG_FILES
            .into_iter()
            .map(Path::new)
            .find(|candidate| candidate.is_file()),
    };
    let Some(chosen) = chosen else {
        debug!("No config file found");
        return Ok(None);
    };
    Ok(Some(load_config_file(chosen)?))
}

/// Reads and parses one config file in the format its extension names.
///
/// # Errors
///
/// Returns an error when the extension is not `.toml` or `.json`, the file
/// cannot be read, or its content does not match [`ConfigFile`].
pub fn load_config_file(path: &Path) -> AppResult<ConfigFile> {
    let format = ConfigFormat::from_path(path)?;
    let content = std::fs::read_to_string(path).map_err(|err| ConfigError::ReadConfig {
        path: path.to_path_buf(),
        source: err,
    })?;
    debug!(path = %path.display(), ?format, "Loading config file");
    Ok(format.parse(path, &content)?)
}
