//! Configuration errors.

use super::error_code::{self, ScarfErrorCode};

/// Errors that can occur while loading config or constructing a dispatcher.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("endpoint URL must be configured")]
    MissingEndpoint,

    #[error("endpoint URL must not be blank")]
    BlankEndpoint,

    #[error("config file not found: {path}")]
    FileNotFound { path: String },

    #[error("config parse error in {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("invalid config value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

impl ScarfErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        error_code::CONFIG_ERROR
    }
}
