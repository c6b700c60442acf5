//! Stable error codes for log lines and embedders.

/// Every error enum maps to a stable code string.
pub trait ScarfErrorCode {
    /// Returns the code string (e.g., "TRANSPORT_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const TRANSPORT_ERROR: &str = "TRANSPORT_ERROR";
pub const TIMEOUT: &str = "TIMEOUT";
pub const CANCELLED: &str = "CANCELLED";
pub const HOST_ERROR: &str = "HOST_ERROR";
