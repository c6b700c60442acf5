//! Aggregate error type.

use super::error_code::ScarfErrorCode;
use super::{ConfigError, HostError, TransportError};

/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum ScarfError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("host error: {0}")]
    Host(#[from] HostError),
}

impl ScarfErrorCode for ScarfError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Transport(e) => e.error_code(),
            Self::Host(e) => e.error_code(),
        }
    }
}

pub type ScarfResult<T> = Result<T, ScarfError>;
