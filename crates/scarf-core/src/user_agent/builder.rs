//! Builds the identifying user-agent string.

use std::panic::{catch_unwind, AssertUnwindSafe};

use super::platform::{normalize_platform, or_unknown};
use crate::constants::{PRODUCT_NAME, VERSION_SENTINEL};
use crate::traits::host::{CompileTimeHost, HostIntrospect};
use crate::traits::metadata::{BuildMetadata, PackageMetadata};

/// Composes the user-agent from build metadata and host facts.
///
/// [`build`](Self::build) is total: provider errors and panics degrade the
/// result instead of escaping.
pub struct UserAgentBuilder {
    product: String,
    metadata: Box<dyn BuildMetadata>,
    host: Box<dyn HostIntrospect>,
}

impl UserAgentBuilder {
    pub fn new(product: impl Into<String>) -> Self {
        Self {
            product: product.into(),
            metadata: Box::new(PackageMetadata),
            host: Box::new(CompileTimeHost),
        }
    }

    /// Replace the version provider.
    pub fn metadata(mut self, metadata: impl BuildMetadata + 'static) -> Self {
        self.metadata = Box::new(metadata);
        self
    }

    /// Replace the host introspection provider.
    pub fn host(mut self, host: impl HostIntrospect + 'static) -> Self {
        self.host = Box::new(host);
        self
    }

    /// `<product>/<version>`, without host facts.
    pub fn base(&self) -> String {
        format!("{}/{}", self.product, self.version())
    }

    pub fn build(&self) -> String {
        let base = self.base();
        match catch_unwind(AssertUnwindSafe(|| self.host.facts())) {
            Ok(Ok(facts)) => format!(
                "{base} (platform={}; arch={}, runtime={})",
                normalize_platform(&facts.os),
                or_unknown(&facts.arch),
                or_unknown(&facts.runtime_version),
            ),
            Ok(Err(e)) => {
                tracing::debug!("user-agent: host introspection failed: {e}");
                base
            }
            Err(_) => {
                tracing::debug!("user-agent: host introspection panicked");
                base
            }
        }
    }

    fn version(&self) -> String {
        catch_unwind(AssertUnwindSafe(|| self.metadata.version()))
            .ok()
            .flatten()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| VERSION_SENTINEL.to_string())
    }
}

impl Default for UserAgentBuilder {
    fn default() -> Self {
        Self::new(PRODUCT_NAME)
    }
}

impl std::fmt::Debug for UserAgentBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserAgentBuilder")
            .field("product", &self.product)
            .finish_non_exhaustive()
    }
}
