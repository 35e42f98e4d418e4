//! Logger metrics for observability
//!
//! Counters for monitoring facility health: entries appended, entries that
//! had to be echoed through the diagnostic sink, segment rotations, and
//! query scan failures.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics for logger observability
///
/// # Example
///
/// ```
/// use seglog::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
///
/// metrics.record_appended();
/// metrics.record_rotation();
///
/// assert_eq!(metrics.entries_appended(), 1);
/// assert_eq!(metrics.rotations(), 1);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Entries rendered and delivered to their destination
    entries_appended: AtomicU64,

    /// Entries echoed through the diagnostic sink after a failed append
    fallback_echoes: AtomicU64,

    /// Times the active segment rolled over to the next ordinal
    rotations: AtomicU64,

    /// Segments a query could not open or read
    query_segment_failures: AtomicU64,
}

impl LoggerMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            entries_appended: AtomicU64::new(0),
            fallback_echoes: AtomicU64::new(0),
            rotations: AtomicU64::new(0),
            query_segment_failures: AtomicU64::new(0),
        }
    }

    /// Get the number of entries delivered to their destination
    #[inline]
    pub fn entries_appended(&self) -> u64 {
        self.entries_appended.load(Ordering::Relaxed)
    }

    /// Get the number of entries echoed after a failed append
    #[inline]
    pub fn fallback_echoes(&self) -> u64 {
        self.fallback_echoes.load(Ordering::Relaxed)
    }

    /// Get the number of segment rotations
    #[inline]
    pub fn rotations(&self) -> u64 {
        self.rotations.load(Ordering::Relaxed)
    }

    /// Get the number of segments queries failed to read
    #[inline]
    pub fn query_segment_failures(&self) -> u64 {
        self.query_segment_failures.load(Ordering::Relaxed)
    }

    /// Record a delivered entry
    #[inline]
    pub fn record_appended(&self) -> u64 {
        self.entries_appended.fetch_add(1, Ordering::Relaxed)
    }

    /// Record an entry echoed through the sink
    #[inline]
    pub fn record_fallback_echo(&self) -> u64 {
        self.fallback_echoes.fetch_add(1, Ordering::Relaxed)
    }

    /// Record a segment rotation
    #[inline]
    pub fn record_rotation(&self) -> u64 {
        self.rotations.fetch_add(1, Ordering::Relaxed)
    }

    /// Record a segment a query could not read
    #[inline]
    pub fn record_query_segment_failure(&self) -> u64 {
        self.query_segment_failures.fetch_add(1, Ordering::Relaxed)
    }

    /// Reset all metrics to zero
    ///
    /// Useful for testing or periodic reset of metrics.
    pub fn reset(&self) {
        self.entries_appended.store(0, Ordering::Relaxed);
        self.fallback_echoes.store(0, Ordering::Relaxed);
        self.rotations.store(0, Ordering::Relaxed);
        self.query_segment_failures.store(0, Ordering::Relaxed);
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for LoggerMetrics {
    /// Create a snapshot of the current metrics values
    fn clone(&self) -> Self {
        Self {
            entries_appended: AtomicU64::new(self.entries_appended()),
            fallback_echoes: AtomicU64::new(self.fallback_echoes()),
            rotations: AtomicU64::new(self.rotations()),
            query_segment_failures: AtomicU64::new(self.query_segment_failures()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_new() {
        let metrics = LoggerMetrics::new();
        assert_eq!(metrics.entries_appended(), 0);
        assert_eq!(metrics.fallback_echoes(), 0);
        assert_eq!(metrics.rotations(), 0);
        assert_eq!(metrics.query_segment_failures(), 0);
    }

    #[test]
    fn test_metrics_record_appended() {
        let metrics = LoggerMetrics::new();
        assert_eq!(metrics.record_appended(), 0); // Returns previous value
        assert_eq!(metrics.entries_appended(), 1);
        metrics.record_appended();
        assert_eq!(metrics.entries_appended(), 2);
    }

    #[test]
    fn test_metrics_reset() {
        let metrics = LoggerMetrics::new();
        metrics.record_appended();
        metrics.record_fallback_echo();
        metrics.record_rotation();

        metrics.reset();

        assert_eq!(metrics.entries_appended(), 0);
        assert_eq!(metrics.fallback_echoes(), 0);
        assert_eq!(metrics.rotations(), 0);
    }

    #[test]
    fn test_metrics_clone() {
        let metrics = LoggerMetrics::new();
        metrics.record_rotation();
        metrics.record_appended();
        metrics.record_appended();

        let snapshot = metrics.clone();
        assert_eq!(snapshot.rotations(), 1);
        assert_eq!(snapshot.entries_appended(), 2);

        // Original and clone are independent
        metrics.record_rotation();
        assert_eq!(metrics.rotations(), 2);
        assert_eq!(snapshot.rotations(), 1);
    }
}
