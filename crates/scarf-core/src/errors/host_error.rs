//! Host introspection errors.

use super::error_code::{self, ScarfErrorCode};

/// Raised by a host introspection provider that cannot describe the machine.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("host fact unavailable: {fact}")]
    Unavailable { fact: String },

    #[error("host introspection failed: {reason}")]
    Failed { reason: String },
}

impl ScarfErrorCode for HostError {
    fn error_code(&self) -> &'static str {
        error_code::HOST_ERROR
    }
}
