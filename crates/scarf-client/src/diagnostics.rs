//! Diagnostic sinks for verbose output.

use std::io::Write;
use std::sync::Mutex;

use scarf_core::traits::DiagnosticSink;

/// Writes each line to the process's standard error.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrSink;

impl DiagnosticSink for StderrSink {
    fn emit(&self, line: &str) {
        // A closed stderr is not worth failing a send over.
        let _ = writeln!(std::io::stderr().lock(), "{line}");
    }
}

/// Collects lines in memory. Useful for tests and for embedders that
/// forward diagnostics elsewhere.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every line emitted so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Whether any emitted line contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.lines
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .any(|l| l.contains(needle))
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().unwrap_or_else(|e| e.into_inner()).is_empty()
    }
}

impl DiagnosticSink for MemorySink {
    fn emit(&self, line: &str) {
        self.lines
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(line.to_string());
    }
}
