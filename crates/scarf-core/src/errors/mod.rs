//! Error handling for the telemetry client.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod error_code;
pub mod host_error;
pub mod scarf_error;
pub mod transport_error;

pub use config_error::ConfigError;
pub use error_code::ScarfErrorCode;
pub use host_error::HostError;
pub use scarf_error::{ScarfError, ScarfResult};
pub use transport_error::TransportError;
