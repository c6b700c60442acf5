//! # scarf-core
//!
//! Foundation crate for the Scarf telemetry client.
//! Defines the property model, the JSON encoder, the opt-out policy,
//! user-agent composition, config, errors, and the transport seam.
//! `scarf-client` builds the dispatcher on top of it.

pub mod config;
pub mod constants;
pub mod errors;
pub mod json;
pub mod policy;
pub mod properties;
pub mod tracing;
pub mod traits;
pub mod user_agent;

// Re-export the most commonly used types at the crate root.
pub use config::TelemetryConfig;
pub use errors::{ScarfError, ScarfResult};
pub use policy::{Environment, EnvironmentPolicy};
pub use properties::{Properties, PropertyValue};
pub use user_agent::UserAgentBuilder;
