//! Diagnostic sink: where the facility reports its own problems
//!
//! Logging never raises. Every internal failure (persistence, directory
//! creation, a failed append, a segment that could not be scanned) is
//! turned into a one-line report and handed to the configured sink, and an
//! entry whose append failed is echoed through the same sink so it is never
//! lost silently.

use parking_lot::Mutex;

pub trait DiagnosticSink: Send + Sync {
    fn report(&self, message: &str);
}

/// Default sink: prints reports to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl DiagnosticSink for StdoutSink {
    fn report(&self, message: &str) {
        println!("{}", message);
    }
}

/// Capturing sink for embedders and tests that want to observe reports.
#[derive(Debug, Default)]
pub struct MemorySink {
    messages: Mutex<Vec<String>>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything reported so far.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().clone()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.lock().is_empty()
    }
}

impl DiagnosticSink for MemorySink {
    fn report(&self, message: &str) {
        self.messages.lock().push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_captures_in_order() {
        let sink = MemorySink::new();
        sink.report("first");
        sink.report("second");
        assert_eq!(sink.messages(), vec!["first", "second"]);
    }

    #[test]
    fn test_memory_sink_starts_empty() {
        let sink = MemorySink::new();
        assert!(sink.is_empty());
    }

    #[test]
    fn test_stdout_sink_does_not_panic() {
        StdoutSink.report("diagnostic output");
    }
}
