//! Destination for verbose diagnostic lines.

use std::sync::Arc;

/// Receives one human-readable line per diagnostic.
///
/// Only written to when verbose output is enabled.
pub trait DiagnosticSink: Send + Sync {
    fn emit(&self, line: &str);
}

impl<T: DiagnosticSink + ?Sized> DiagnosticSink for Arc<T> {
    fn emit(&self, line: &str) {
        (**self).emit(line)
    }
}
