use thiserror::Error;

use super::{ConfigError, RequestError};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
    #[error("JSON error: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },
    #[error("Request error: {0}")]
    Request(#[from] RequestError),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Response check failed: {message}")]
    CheckFailed { message: String },
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn request<E>(error: E) -> Self
    where
        E: Into<RequestError>,
    {
        error.into().into()
    }

    pub fn config<E>(error: E) -> Self
    where
        E: Into<ConfigError>,
    {
        error.into().into()
    }

    pub fn check_failed(message: impl Into<String>) -> Self {
        Self::CheckFailed {
            message: message.into(),
        }
    }
}
