//! Main logger implementation

use super::{
    destination::Destination,
    log_entry::LogEntry,
    log_level::{LogLevel, UNKNOWN_LEVEL_TAG},
    metrics::LoggerMetrics,
    sink::{DiagnosticSink, StdoutSink},
};
use crate::engine::{LogStream, QueryEngine, Writer};
use crate::store::{
    ConfigStore, SegmentManager, DEFAULT_DIRECTORY, DEFAULT_MAX_SEGMENT_SIZE, DEFAULT_PERSIST_FILE,
};
use parking_lot::RwLock;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread;

/// Placeholder recorded when an entry is added without a message.
pub const NO_MESSAGE: &str = "NONE";

/// Scan threads used for queries when none are configured: one per
/// available core, or 4 when the core count cannot be determined.
#[must_use]
pub fn default_scan_threads() -> usize {
    thread::available_parallelism().map_or(4, |n| n.get())
}

/// Thread-safe logging handle.
///
/// Every operation is infallible at the call site: failures are absorbed and
/// reported through the configured diagnostic sink, and a file append that
/// cannot reach disk echoes the rendered line there instead so the entry is
/// never silently lost. Share one handle across threads by reference or
/// inside an `Arc`; no locking is required by callers.
///
/// # Example
///
/// ```
/// use seglog::Logger;
///
/// let logger = Logger::new();
/// logger.info("service started");
/// logger.warn("cache miss rate above 10%");
/// ```
pub struct Logger {
    destination: RwLock<Destination>,
    store: ConfigStore,
    segments: Arc<SegmentManager>,
    writer: Writer,
    engine: QueryEngine,
    sink: Arc<dyn DiagnosticSink>,
    metrics: Arc<LoggerMetrics>,
    missing_message: String,
}

impl Logger {
    /// Create a logger with the default configuration: console destination,
    /// colored output, and file storage resolved lazily on first use.
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Record one entry.
    ///
    /// A missing message is replaced by the configured placeholder and a
    /// missing level renders as the unknown-level tag, so both halves of the
    /// line are always present. When the destination is the file store this
    /// may bootstrap it first: the persisted directory choice is loaded (or
    /// the default chosen and persisted) and the segment series discovered.
    pub fn add(&self, message: Option<&str>, level: Option<LogLevel>) {
        let text = message.unwrap_or(&self.missing_message);
        let entry = LogEntry::new(level, text);
        let destination = *self.destination.read();
        if destination == Destination::File {
            self.ensure_file_ready();
        }
        self.writer.append(&entry, destination);
    }

    /// Record a message at `level`.
    pub fn log(&self, level: LogLevel, message: impl Into<String>) {
        let message = message.into();
        self.add(Some(&message), Some(level));
    }

    #[inline]
    pub fn debug(&self, message: impl Into<String>) {
        self.log(LogLevel::Debug, message);
    }

    #[inline]
    pub fn info(&self, message: impl Into<String>) {
        self.log(LogLevel::Info, message);
    }

    #[inline]
    pub fn warn(&self, message: impl Into<String>) {
        self.log(LogLevel::Warn, message);
    }

    #[inline]
    pub fn error(&self, message: impl Into<String>) {
        self.log(LogLevel::Error, message);
    }

    #[inline]
    pub fn fatal(&self, message: impl Into<String>) {
        self.log(LogLevel::Fatal, message);
    }

    /// Stream every recorded entry whose stored line contains `pattern`.
    ///
    /// All segments are scanned in parallel and matches arrive in no
    /// particular order, with line breaks restored in the returned text.
    /// The pattern is matched against the whole stored line, so it can hit
    /// the timestamp and level tag as well as the message.
    ///
    /// ```no_run
    /// use seglog::{Destination, Logger};
    ///
    /// let logger = Logger::builder().destination(Destination::File).build();
    /// logger.error("connection refused by upstream");
    /// for line in logger.logs_matching("refused") {
    ///     println!("{}", line);
    /// }
    /// ```
    pub fn logs_matching(&self, pattern: &str) -> LogStream {
        self.ensure_file_ready();
        self.engine.run(pattern)
    }

    /// Stream entries carrying `level`, or the ones recorded without a level
    /// when `None` is given. Matching is the same substring scan as
    /// [`logs_matching`](Self::logs_matching), using the level tag as the
    /// pattern.
    pub fn logs_with_level(&self, level: Option<LogLevel>) -> LogStream {
        let tag = level.map_or(UNKNOWN_LEVEL_TAG, |level| level.to_str());
        self.logs_matching(tag)
    }

    /// Switch where subsequent entries go. Switching to the file store
    /// bootstraps it immediately so the first append after the switch does
    /// not pay for directory discovery.
    pub fn set_destination(&self, destination: Destination) {
        *self.destination.write() = destination;
        if destination == Destination::File {
            self.ensure_file_ready();
        }
    }

    /// Move the log home to the owned subdirectory under `parent`,
    /// persisting the choice for the next run.
    ///
    /// The segment series restarts from ordinal 1 in the new home. When the
    /// subdirectory already exists the call is a no-op and the current home
    /// stays in place; nothing is merged or overwritten.
    pub fn set_directory(&self, parent: impl AsRef<Path>) {
        match self.segments.reconfigure(parent.as_ref()) {
            Ok(Some(directory)) => {
                if let Err(error) = self.store.save(&directory) {
                    self.sink.report(&error.to_string());
                }
            }
            Ok(None) => {}
            Err(error) => self.sink.report(&error.to_string()),
        }
    }

    /// Change the rotation threshold for segment files. Values of one byte
    /// or less are rejected with a diagnostic and the old threshold stands.
    pub fn set_max_segment_size(&self, bytes: u64) {
        if let Err(error) = self.segments.set_threshold(bytes) {
            self.sink.report(&error.to_string());
        }
    }

    /// The destination entries currently go to.
    #[must_use]
    pub fn destination(&self) -> Destination {
        *self.destination.read()
    }

    /// Directory holding the segment series, once file storage is up.
    #[must_use]
    pub fn directory(&self) -> Option<PathBuf> {
        self.segments.snapshot().map(|(directory, _)| directory)
    }

    /// Number of segment files in the current series; zero before the file
    /// store has been bootstrapped.
    #[must_use]
    pub fn segment_count(&self) -> u32 {
        self.segments.segment_count()
    }

    /// Current rotation threshold in bytes.
    #[must_use]
    pub fn max_segment_size(&self) -> u64 {
        self.segments.threshold()
    }

    /// Counters for appends, rotations, and absorbed failures.
    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Bring file storage up if it is not already. Resolves the directory
    /// from the persist file, falling back to the default name and writing
    /// it back so the choice sticks. Returns whether storage is usable.
    fn ensure_file_ready(&self) -> bool {
        if self.segments.is_initialized() {
            return true;
        }
        let directory = match self.store.load() {
            Ok(Some(directory)) => directory,
            Ok(None) => {
                let directory = self.store.default_directory().to_path_buf();
                self.sink.report(&format!(
                    "no log directory persisted; using '{}' (set_directory changes it)",
                    directory.display()
                ));
                if let Err(error) = self.store.save(&directory) {
                    self.sink.report(&error.to_string());
                }
                directory
            }
            Err(error) => {
                self.sink.report(&error.to_string());
                self.store.default_directory().to_path_buf()
            }
        };
        match self.segments.initialize(&directory) {
            Ok(()) => true,
            Err(error) => {
                self.sink.report(&error.to_string());
                false
            }
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for constructing a [`Logger`] with a fluent API
///
/// # Example
/// ```
/// use seglog::prelude::*;
///
/// let logger = Logger::builder()
///     .destination(Destination::Console)
///     .max_segment_size(1_000_000)
///     .colors(false)
///     .build();
/// logger.info("configured by hand");
/// ```
pub struct LoggerBuilder {
    destination: Destination,
    persist_path: PathBuf,
    default_directory: PathBuf,
    max_segment_size: u64,
    scan_threads: usize,
    colors: bool,
    missing_message: String,
    sink: Arc<dyn DiagnosticSink>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            destination: Destination::Console,
            persist_path: PathBuf::from(DEFAULT_PERSIST_FILE),
            default_directory: PathBuf::from(DEFAULT_DIRECTORY),
            max_segment_size: DEFAULT_MAX_SEGMENT_SIZE,
            scan_threads: default_scan_threads(),
            colors: true,
            missing_message: NO_MESSAGE.to_string(),
            sink: Arc::new(StdoutSink),
        }
    }

    /// Set the initial destination for entries
    #[must_use = "builder methods return a new value"]
    pub fn destination(mut self, destination: Destination) -> Self {
        self.destination = destination;
        self
    }

    /// Set the file that remembers the chosen log directory across runs
    #[must_use = "builder methods return a new value"]
    pub fn persist_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.persist_path = path.into();
        self
    }

    /// Set the directory used when no persisted choice exists, and the
    /// fallback when the persisted one cannot be created
    #[must_use = "builder methods return a new value"]
    pub fn default_directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.default_directory = directory.into();
        self
    }

    /// Set the segment rotation threshold in bytes
    ///
    /// Must be greater than 1; invalid values are reported at build time and
    /// replaced by the default.
    #[must_use = "builder methods return a new value"]
    pub fn max_segment_size(mut self, bytes: u64) -> Self {
        self.max_segment_size = bytes;
        self
    }

    /// Set how many threads a query fans segment scans out to
    #[must_use = "builder methods return a new value"]
    pub fn scan_threads(mut self, threads: usize) -> Self {
        self.scan_threads = threads;
        self
    }

    /// Enable or disable colored console output
    #[must_use = "builder methods return a new value"]
    pub fn colors(mut self, enabled: bool) -> Self {
        self.colors = enabled;
        self
    }

    /// Set the placeholder recorded for entries added without a message
    #[must_use = "builder methods return a new value"]
    pub fn missing_message(mut self, placeholder: impl Into<String>) -> Self {
        self.missing_message = placeholder.into();
        self
    }

    /// Set where absorbed failures and their echoed lines are reported
    #[must_use = "builder methods return a new value"]
    pub fn diagnostic_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Build the Logger
    ///
    /// Invalid settings never abort the build; they are reported through the
    /// sink and replaced by their defaults, so a logger always comes back.
    pub fn build(self) -> Logger {
        let LoggerBuilder {
            destination,
            persist_path,
            default_directory,
            mut max_segment_size,
            mut scan_threads,
            colors,
            missing_message,
            sink,
        } = self;

        if max_segment_size <= 1 {
            sink.report(&format!(
                "Invalid configuration for Logger: max segment size must be greater than 1, \
                 got {}; using {}",
                max_segment_size, DEFAULT_MAX_SEGMENT_SIZE
            ));
            max_segment_size = DEFAULT_MAX_SEGMENT_SIZE;
        }
        if scan_threads == 0 {
            let fallback = default_scan_threads();
            sink.report(&format!(
                "Invalid configuration for Logger: scan threads must be at least 1, \
                 got 0; using {}",
                fallback
            ));
            scan_threads = fallback;
        }

        let metrics = Arc::new(LoggerMetrics::new());
        let segments = Arc::new(SegmentManager::new(
            max_segment_size,
            default_directory.clone(),
            Arc::clone(&sink),
            Arc::clone(&metrics),
        ));
        let writer = Writer::new(
            Arc::clone(&segments),
            Arc::clone(&sink),
            Arc::clone(&metrics),
            colors,
        );
        let engine = QueryEngine::new(
            Arc::clone(&segments),
            Arc::clone(&sink),
            Arc::clone(&metrics),
            scan_threads,
        );
        let logger = Logger {
            destination: RwLock::new(destination),
            store: ConfigStore::new(persist_path, default_directory),
            segments,
            writer,
            engine,
            sink,
            metrics,
            missing_message,
        };
        if logger.destination() == Destination::File {
            logger.ensure_file_ready();
        }
        logger
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Create a builder for Logger
    ///
    /// # Example
    /// ```
    /// use seglog::prelude::*;
    ///
    /// let logger = Logger::builder().colors(false).build();
    /// logger.info("plain output");
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}
