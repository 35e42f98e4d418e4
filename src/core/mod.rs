//! Core logger types and traits

pub mod destination;
pub mod error;
pub mod line_codec;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod sink;
pub mod timestamp;

pub use destination::Destination;
pub use error::{LoggerError, Result};
pub use log_entry::LogEntry;
pub use log_level::{LogLevel, UNKNOWN_LEVEL_TAG};
pub use logger::{default_scan_threads, Logger, LoggerBuilder, NO_MESSAGE};
pub use metrics::LoggerMetrics;
pub use sink::{DiagnosticSink, MemorySink, StdoutSink};
pub use timestamp::format_timestamp;
