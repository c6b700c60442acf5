//! The HTTP transport seam.

use std::sync::Arc;
use std::time::Duration;

use super::CancellationToken;
use crate::constants::CONTENT_TYPE_JSON;
use crate::errors::TransportError;

/// One event POST, fully built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRequest {
    pub url: String,
    /// Encoded JSON body.
    pub body: String,
    pub user_agent: String,
    /// Bounds both connection setup and the whole exchange.
    pub timeout: Duration,
}

impl EventRequest {
    /// Headers every event request carries.
    pub fn headers(&self) -> [(&'static str, &str); 2] {
        [
            ("Content-Type", CONTENT_TYPE_JSON),
            ("User-Agent", self.user_agent.as_str()),
        ]
    }
}

/// Status line and body of a received response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Any 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs a blocking POST bounded by the request timeout.
///
/// Implementations must be safe to call from several threads at once.
/// They should check `cancel` before starting I/O and return
/// [`TransportError::Cancelled`] if it is set.
pub trait HttpTransport: Send + Sync {
    fn post(
        &self,
        request: &EventRequest,
        cancel: &CancellationToken,
    ) -> Result<TransportResponse, TransportError>;
}

impl<T: HttpTransport + ?Sized> HttpTransport for Arc<T> {
    fn post(
        &self,
        request: &EventRequest,
        cancel: &CancellationToken,
    ) -> Result<TransportResponse, TransportError> {
        (**self).post(request, cancel)
    }
}
