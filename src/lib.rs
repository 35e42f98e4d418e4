//! # seglog
//!
//! A self-contained logging facility that renders every entry as one line,
//! appends it to a rotating series of segment files, and scans the whole
//! series back in parallel on demand.
//!
//! ## Features
//!
//! - **One Line Per Entry**: Embedded line breaks are folded into a sentinel
//!   on write and restored on query
//! - **Size-Based Rotation**: Segments roll over to `log2.txt`, `log3.txt`,
//!   ... once they outgrow the configured threshold
//! - **Parallel Queries**: Substring searches fan out across segments and
//!   stream matches as they are found
//! - **Never Throws**: Failures are absorbed, reported through a diagnostic
//!   sink, and the entry is echoed there rather than lost
//! - **Thread Safe**: One handle serves any number of threads

pub mod core;
pub mod engine;
pub mod macros;
pub mod store;

pub mod prelude {
    pub use crate::core::{
        default_scan_threads, Destination, DiagnosticSink, LogEntry, LogLevel, Logger,
        LoggerBuilder, LoggerError, LoggerMetrics, MemorySink, Result, StdoutSink, NO_MESSAGE,
        UNKNOWN_LEVEL_TAG,
    };
    pub use crate::engine::{LogStream, QueryEngine, Writer};
    pub use crate::store::{
        segment_file_name, ConfigStore, SegmentManager, DEFAULT_DIRECTORY,
        DEFAULT_MAX_SEGMENT_SIZE, DEFAULT_PERSIST_FILE,
    };
}

pub use crate::core::{
    default_scan_threads, Destination, DiagnosticSink, LogEntry, LogLevel, Logger, LoggerBuilder,
    LoggerError, LoggerMetrics, MemorySink, Result, StdoutSink, NO_MESSAGE, UNKNOWN_LEVEL_TAG,
};
pub use engine::{LogStream, QueryEngine, Writer};
pub use store::{
    segment_file_name, ConfigStore, SegmentManager, DEFAULT_DIRECTORY, DEFAULT_MAX_SEGMENT_SIZE,
    DEFAULT_PERSIST_FILE,
};
