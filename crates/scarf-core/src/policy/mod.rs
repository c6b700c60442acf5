//! Opt-out and verbosity policy read from an environment snapshot.

pub mod environment;
pub mod opt_out;

pub use environment::Environment;
pub use opt_out::{is_truthy, EnvironmentPolicy};
