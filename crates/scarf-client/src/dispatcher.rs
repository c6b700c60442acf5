//! EventDispatcher: gate, encode, POST, classify.
//!
//! One blocking HTTP call per `send`. The dispatcher is immutable after
//! construction, so it can be shared across threads without locking.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::path::Path;
use std::time::Duration;

use scarf_core::config::defaults::DEFAULT_TIMEOUT_SECS;
use scarf_core::constants::PRODUCT_NAME;
use scarf_core::errors::{ConfigError, ScarfErrorCode, ScarfResult, TransportError};
use scarf_core::json::encode_properties;
use scarf_core::traits::{
    BuildMetadata, Cancellable, CancellationToken, DiagnosticSink, EventRequest, HostIntrospect,
    HttpTransport,
};
use scarf_core::tracing::SEND_SPAN;
use scarf_core::{Environment, EnvironmentPolicy, Properties, TelemetryConfig, UserAgentBuilder};

use crate::diagnostics::StderrSink;
use crate::transport::HttpClient;

/// How a single dispatch ended. Collapsed to `bool` by the `send*` methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// An opt-out variable is set; nothing was sent.
    Disabled,
    /// The endpoint answered with a 2xx status.
    Delivered { status: u16 },
    /// The endpoint answered with a non-2xx status.
    Rejected { status: u16 },
    /// No response: connection, DNS, or timeout failure.
    TransportFailed { reason: String },
    /// The caller's cancellation token was set.
    Cancelled,
    /// The request could not be built, or the transport panicked.
    Failed { reason: String },
}

impl DispatchOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Delivered { .. })
    }
}

/// Sends telemetry events to one endpoint.
pub struct EventDispatcher {
    endpoint: String,
    default_timeout: Duration,
    env: Environment,
    verbose: bool,
    user_agent: String,
    transport: Box<dyn HttpTransport>,
    diagnostics: Box<dyn DiagnosticSink>,
}

impl EventDispatcher {
    /// Dispatcher with the default 3 s timeout and the process environment.
    pub fn new(endpoint: impl Into<String>) -> Result<Self, ConfigError> {
        Self::builder(endpoint).build()
    }

    /// Dispatcher with a custom default timeout in seconds.
    pub fn with_timeout(endpoint: impl Into<String>, timeout_secs: f64) -> Result<Self, ConfigError> {
        Self::builder(endpoint).timeout_secs(timeout_secs).build()
    }

    pub fn builder(endpoint: impl Into<String>) -> EventDispatcherBuilder {
        EventDispatcherBuilder::new(endpoint)
    }

    /// Dispatcher from a validated [`TelemetryConfig`].
    pub fn from_config(config: &TelemetryConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let endpoint = config.endpoint.clone().ok_or(ConfigError::MissingEndpoint)?;
        Self::builder(endpoint)
            .timeout_secs(config.timeout_secs)
            .product(config.product.clone())
            .build()
    }

    /// Dispatcher from a TOML config file.
    pub fn from_config_file(path: &Path) -> ScarfResult<Self> {
        let config = TelemetryConfig::load(path)?;
        Ok(Self::from_config(&config)?)
    }

    /// Send with the default timeout. True iff the endpoint answered 2xx.
    pub fn send(&self, properties: &Properties) -> bool {
        self.send_optional(Some(properties))
    }

    /// Send with the default timeout; `None` sends an empty event.
    pub fn send_optional(&self, properties: Option<&Properties>) -> bool {
        self.dispatch(properties, self.default_timeout, &CancellationToken::new())
            .is_success()
    }

    /// Send with a per-call timeout in seconds.
    pub fn send_with_timeout(&self, properties: &Properties, timeout_secs: f64) -> bool {
        self.dispatch(
            Some(properties),
            duration_from_secs(timeout_secs),
            &CancellationToken::new(),
        )
        .is_success()
    }

    /// Send with a per-call timeout, abandoning the request if `cancel` is set.
    ///
    /// A cancelled send returns false and leaves `cancel` set.
    pub fn send_cancellable(
        &self,
        properties: &Properties,
        timeout_secs: f64,
        cancel: &CancellationToken,
    ) -> bool {
        self.dispatch(Some(properties), duration_from_secs(timeout_secs), cancel)
            .is_success()
    }

    /// Run one dispatch and report exactly how it ended.
    pub fn dispatch(
        &self,
        properties: Option<&Properties>,
        timeout: Duration,
        cancel: &CancellationToken,
    ) -> DispatchOutcome {
        let _span = tracing::debug_span!(SEND_SPAN, endpoint = %self.endpoint).entered();

        if EnvironmentPolicy::is_disabled(&self.env) {
            self.diag(|| "Scarf analytics disabled via environment variable.".to_string());
            tracing::debug!("dispatch skipped: disabled by environment");
            return DispatchOutcome::Disabled;
        }

        let empty = Properties::new();
        let body = encode_properties(properties.unwrap_or(&empty));
        self.diag(|| format!("Scarf payload: {body}"));
        self.diag(|| format!("Scarf user-agent: {}", self.user_agent));

        if cancel.is_cancelled() {
            return self.cancelled();
        }

        let request = EventRequest {
            url: self.endpoint.clone(),
            body,
            user_agent: self.user_agent.clone(),
            timeout,
        };

        let result = catch_unwind(AssertUnwindSafe(|| self.transport.post(&request, cancel)));
        // A cancel that lands while the transport is waiting wins over its result.
        if cancel.is_cancelled() {
            return self.cancelled();
        }

        let outcome = match result {
            Ok(Ok(resp)) => {
                self.diag(|| format!("Scarf response status={}, body={}", resp.status, resp.body));
                if resp.is_success() {
                    DispatchOutcome::Delivered {
                        status: resp.status,
                    }
                } else {
                    DispatchOutcome::Rejected {
                        status: resp.status,
                    }
                }
            }
            Ok(Err(TransportError::Cancelled)) => self.cancelled(),
            Ok(Err(TransportError::InvalidRequest { reason })) => {
                self.diag(|| format!("Scarf request error: {reason}"));
                DispatchOutcome::Failed { reason }
            }
            Ok(Err(e)) => {
                tracing::debug!(error = %e.coded_string(), "transport failed");
                self.diag(|| format!("Scarf request failed: {e}"));
                DispatchOutcome::TransportFailed {
                    reason: e.to_string(),
                }
            }
            Err(payload) => {
                let reason = panic_message(payload.as_ref());
                tracing::warn!("transport panicked: {reason}");
                self.diag(|| format!("Scarf request error: {reason}"));
                DispatchOutcome::Failed { reason }
            }
        };

        tracing::debug!(outcome = ?outcome, "dispatch finished");
        outcome
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn default_timeout(&self) -> Duration {
        self.default_timeout
    }

    /// The user-agent sent with every request, computed once at construction.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Whether an opt-out variable was set in the captured environment.
    pub fn is_disabled(&self) -> bool {
        EnvironmentPolicy::is_disabled(&self.env)
    }

    fn cancelled(&self) -> DispatchOutcome {
        self.diag(|| format!("Scarf request failed: {}", TransportError::Cancelled));
        tracing::debug!("dispatch cancelled by caller");
        DispatchOutcome::Cancelled
    }

    /// Emit a verbose diagnostic. The line is only built when verbose.
    fn diag(&self, line: impl FnOnce() -> String) {
        if self.verbose {
            self.diagnostics.emit(&line());
        }
    }
}

impl std::fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventDispatcher")
            .field("endpoint", &self.endpoint)
            .field("default_timeout", &self.default_timeout)
            .field("verbose", &self.verbose)
            .field("user_agent", &self.user_agent)
            .finish_non_exhaustive()
    }
}

/// Builder for [`EventDispatcher`]. Validation happens in [`build`](Self::build).
pub struct EventDispatcherBuilder {
    endpoint: String,
    timeout_secs: f64,
    environment: Option<Environment>,
    user_agent: UserAgentBuilder,
    transport: Option<Box<dyn HttpTransport>>,
    diagnostics: Option<Box<dyn DiagnosticSink>>,
}

impl EventDispatcherBuilder {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            environment: None,
            user_agent: UserAgentBuilder::new(PRODUCT_NAME),
            transport: None,
            diagnostics: None,
        }
    }

    /// Default timeout in seconds. Negative and NaN clamp to zero.
    pub fn timeout_secs(mut self, secs: f64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Use this snapshot instead of the process environment.
    pub fn environment(mut self, env: impl Into<Environment>) -> Self {
        self.environment = Some(env.into());
        self
    }

    /// Product token for the user-agent.
    pub fn product(mut self, product: impl Into<String>) -> Self {
        self.user_agent = UserAgentBuilder::new(product);
        self
    }

    pub fn build_metadata(mut self, metadata: impl BuildMetadata + 'static) -> Self {
        self.user_agent = self.user_agent.metadata(metadata);
        self
    }

    pub fn host(mut self, host: impl HostIntrospect + 'static) -> Self {
        self.user_agent = self.user_agent.host(host);
        self
    }

    /// Replace the default [`HttpClient`].
    pub fn transport(mut self, transport: impl HttpTransport + 'static) -> Self {
        self.transport = Some(Box::new(transport));
        self
    }

    /// Replace the default [`StderrSink`].
    pub fn diagnostics(mut self, sink: impl DiagnosticSink + 'static) -> Self {
        self.diagnostics = Some(Box::new(sink));
        self
    }

    pub fn build(self) -> Result<EventDispatcher, ConfigError> {
        if self.endpoint.trim().is_empty() {
            return Err(ConfigError::BlankEndpoint);
        }

        let env = self.environment.unwrap_or_else(Environment::from_process);
        let verbose = EnvironmentPolicy::is_verbose(&env);
        let user_agent = self.user_agent.build();
        tracing::debug!(endpoint = %self.endpoint, %user_agent, verbose, "event dispatcher ready");

        Ok(EventDispatcher {
            endpoint: self.endpoint,
            default_timeout: duration_from_secs(self.timeout_secs),
            env,
            verbose,
            user_agent,
            transport: self.transport.unwrap_or_else(|| Box::new(HttpClient::new())),
            diagnostics: self.diagnostics.unwrap_or_else(|| Box::new(StderrSink)),
        })
    }
}

/// Seconds to a whole-millisecond duration, truncating.
/// Zero, negative and NaN all become zero.
pub fn duration_from_secs(secs: f64) -> Duration {
    let millis = secs * 1000.0;
    if millis.is_nan() || millis <= 0.0 {
        Duration::ZERO
    } else {
        // `as` saturates, so +inf becomes u64::MAX.
        Duration::from_millis(millis as u64)
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
