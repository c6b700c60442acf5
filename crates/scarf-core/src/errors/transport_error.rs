//! Transport errors.

use super::error_code::{self, ScarfErrorCode};

/// Failures below the HTTP status line: no response was received.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("request timed out after {millis} ms")]
    Timeout { millis: u128 },

    #[error("connection failed: {reason}")]
    Connect { reason: String },

    #[error("request cancelled")]
    Cancelled,

    #[error("invalid request: {reason}")]
    InvalidRequest { reason: String },

    #[error("network error: {reason}")]
    Network { reason: String },
}

impl TransportError {
    /// Whether the failure is a cancellation rather than an I/O problem.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

impl ScarfErrorCode for TransportError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Timeout { .. } => error_code::TIMEOUT,
            Self::Cancelled => error_code::CANCELLED,
            _ => error_code::TRANSPORT_ERROR,
        }
    }
}
