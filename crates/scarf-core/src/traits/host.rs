//! Host introspection provider.

use crate::errors::HostError;

/// Raw facts about the machine, before normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostFacts {
    /// Operating system name as reported by the host (e.g. `linux`, `macos`).
    pub os: String,
    pub arch: String,
    /// Version of the compiler the client was built with.
    pub runtime_version: String,
}

/// Describes the host. Implementations may fail; callers fall back.
pub trait HostIntrospect: Send + Sync {
    fn facts(&self) -> Result<HostFacts, HostError>;
}

/// Facts known at compile time for the current target.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompileTimeHost;

impl HostIntrospect for CompileTimeHost {
    fn facts(&self) -> Result<HostFacts, HostError> {
        Ok(HostFacts {
            os: std::env::consts::OS.to_string(),
            arch: std::env::consts::ARCH.to_string(),
            runtime_version: rustc_version().to_string(),
        })
    }
}

/// Compiler version captured by the build script. Falls back to the declared
/// minimum when `rustc --version` could not be run.
pub fn rustc_version() -> &'static str {
    option_env!("SCARF_RUSTC_VERSION")
        .or(option_env!("CARGO_PKG_RUST_VERSION"))
        .unwrap_or_default()
}
