//! Observability for the telemetry client.
//! `tracing` crate with `EnvFilter`, filtered through `SCARF_LOG`.

pub mod setup;

pub use setup::{init_tracing, SEND_SPAN};
