//! Blocking HTTP transport with per-request timeout.
//!
//! The request runs on a worker thread while the calling thread watches the
//! cancellation token, so a cancelled send returns without waiting for the
//! server. An abandoned worker ends on its own request deadline.

#[cfg(feature = "http")]
use std::sync::mpsc::{self, RecvTimeoutError};
#[cfg(feature = "http")]
use std::thread;
#[cfg(feature = "http")]
use std::time::Duration;

use scarf_core::errors::TransportError;
use scarf_core::traits::{
    Cancellable, CancellationToken, EventRequest, HttpTransport, TransportResponse,
};

/// How often a waiting send checks the cancellation token.
#[cfg(feature = "http")]
const CANCEL_POLL: Duration = Duration::from_millis(25);

/// HTTP transport. Wraps reqwest (when the `http` feature is enabled).
///
/// A client is built per request so that each call gets its own connect and
/// overall deadline. Safe to share between threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpClient;

impl HttpClient {
    pub fn new() -> Self {
        Self
    }

    #[cfg(feature = "http")]
    fn post_watched(
        &self,
        request: &EventRequest,
        cancel: &CancellationToken,
    ) -> Result<TransportResponse, TransportError> {
        let (tx, rx) = mpsc::channel();
        let owned = request.clone();
        thread::Builder::new()
            .name("scarf-http".into())
            .spawn(move || {
                // The receiver is gone once the caller has cancelled.
                let _ = tx.send(do_post(&owned));
            })
            .map_err(|e| TransportError::Network {
                reason: format!("failed to start request thread: {e}"),
            })?;

        loop {
            match rx.recv_timeout(CANCEL_POLL) {
                Ok(result) => return result,
                Err(RecvTimeoutError::Timeout) => {
                    if cancel.is_cancelled() {
                        tracing::debug!("http: request abandoned after cancellation");
                        return Err(TransportError::Cancelled);
                    }
                }
                Err(RecvTimeoutError::Disconnected) => {
                    return Err(TransportError::Network {
                        reason: "request thread exited without a result".into(),
                    });
                }
            }
        }
    }
}

#[cfg(feature = "http")]
fn do_post(request: &EventRequest) -> Result<TransportResponse, TransportError> {
    let client = reqwest::blocking::Client::builder()
        .connect_timeout(request.timeout)
        .timeout(request.timeout)
        .build()
        .map_err(|e: reqwest::Error| TransportError::InvalidRequest {
            reason: e.to_string(),
        })?;

    let mut req = client.post(&request.url).body(request.body.clone());
    for (name, value) in request.headers() {
        req = req.header(name, value);
    }

    let resp = req.send().map_err(|e| classify(e, request))?;
    let status = resp.status().as_u16();
    // The body is only used for diagnostics; an unreadable body is empty.
    let body = resp.text().unwrap_or_default();
    tracing::debug!(status, "http: response received");
    Ok(TransportResponse { status, body })
}

impl HttpTransport for HttpClient {
    fn post(
        &self,
        request: &EventRequest,
        cancel: &CancellationToken,
    ) -> Result<TransportResponse, TransportError> {
        if cancel.is_cancelled() {
            return Err(TransportError::Cancelled);
        }

        #[cfg(feature = "http")]
        {
            self.post_watched(request, cancel)
        }

        #[cfg(not(feature = "http"))]
        {
            let _ = request;
            Err(TransportError::Network {
                reason: "http feature not enabled".into(),
            })
        }
    }
}

#[cfg(feature = "http")]
fn classify(e: reqwest::Error, request: &EventRequest) -> TransportError {
    if e.is_timeout() {
        TransportError::Timeout {
            millis: request.timeout.as_millis(),
        }
    } else if e.is_builder() {
        TransportError::InvalidRequest {
            reason: e.to_string(),
        }
    } else if e.is_connect() {
        TransportError::Connect {
            reason: e.to_string(),
        }
    } else {
        TransportError::Network {
            reason: e.to_string(),
        }
    }
}
