//! Configuration for the telemetry client.
//! TOML-based; every field has a compiled default.

pub mod defaults;
pub mod telemetry_config;

pub use telemetry_config::TelemetryConfig;
