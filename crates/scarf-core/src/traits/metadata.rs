//! Build metadata provider.

/// Supplies the packaged library version, if known.
pub trait BuildMetadata: Send + Sync {
    fn version(&self) -> Option<String>;
}

/// Reports the version Cargo compiled this crate with.
#[derive(Debug, Clone, Copy, Default)]
pub struct PackageMetadata;

impl BuildMetadata for PackageMetadata {
    fn version(&self) -> Option<String> {
        option_env!("CARGO_PKG_VERSION").map(str::to_string)
    }
}

/// Reports no version; the user-agent falls back to the `dev` sentinel.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoMetadata;

impl BuildMetadata for NoMetadata {
    fn version(&self) -> Option<String> {
        None
    }
}
