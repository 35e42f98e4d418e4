//! Parallel substring scans over the segment series
//!
//! A query pins the directory and segment count at one instant, then fans the
//! ordinals out to a small pool of scan threads over a channel. Matches are
//! streamed back unordered through a bounded channel; dropping the stream
//! closes that channel, which the workers observe as a failed send and treat
//! as cancellation. A segment that cannot be read is reported and skipped, so
//! one bad file never empties the whole result set.

use crate::core::error::LoggerError;
use crate::core::line_codec;
use crate::core::metrics::LoggerMetrics;
use crate::core::sink::DiagnosticSink;
use crate::store::segments::{segment_file_name, SegmentManager};
use crossbeam_channel::{bounded, unbounded, Receiver, Sender};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::thread;

/// Matches buffered ahead of the consumer before scan threads block.
const RESULT_BUFFER: usize = 1024;

pub struct QueryEngine {
    segments: Arc<SegmentManager>,
    sink: Arc<dyn DiagnosticSink>,
    metrics: Arc<LoggerMetrics>,
    scan_threads: usize,
}

impl QueryEngine {
    pub fn new(
        segments: Arc<SegmentManager>,
        sink: Arc<dyn DiagnosticSink>,
        metrics: Arc<LoggerMetrics>,
        scan_threads: usize,
    ) -> Self {
        Self {
            segments,
            sink,
            metrics,
            scan_threads,
        }
    }

    /// Scan every segment for lines containing `pattern` and stream the
    /// matches back, decoded, in no particular order.
    ///
    /// Entries appended after the scan of their segment has finished are not
    /// part of the result; the stream reflects the series as it stood when
    /// the query started.
    pub fn run(&self, pattern: &str) -> LogStream {
        let Some((directory, count)) = self.segments.snapshot() else {
            return LogStream::empty();
        };
        if count == 0 {
            return LogStream::empty();
        }

        let (job_sender, job_receiver) = unbounded::<u32>();
        for ordinal in 1..=count {
            let _ = job_sender.send(ordinal);
        }
        drop(job_sender);

        let (match_sender, match_receiver) = bounded::<String>(RESULT_BUFFER);
        let workers = self.scan_threads.min(count as usize).max(1);
        for _ in 0..workers {
            let jobs = job_receiver.clone();
            let matches = match_sender.clone();
            let directory = directory.clone();
            let pattern = pattern.to_string();
            let sink = Arc::clone(&self.sink);
            let metrics = Arc::clone(&self.metrics);
            thread::spawn(move || {
                for ordinal in jobs {
                    if !scan_segment(&directory, ordinal, &pattern, &matches, &sink, &metrics) {
                        break;
                    }
                }
            });
        }

        LogStream {
            receiver: match_receiver,
        }
    }
}

/// Scan one segment, sending decoded matches. Returns `false` once the
/// consumer is gone so the worker stops picking up further segments.
fn scan_segment(
    directory: &Path,
    ordinal: u32,
    pattern: &str,
    matches: &Sender<String>,
    sink: &Arc<dyn DiagnosticSink>,
    metrics: &LoggerMetrics,
) -> bool {
    let path = directory.join(segment_file_name(ordinal));
    let contents = match fs::read_to_string(&path) {
        Ok(contents) => contents,
        Err(source) => {
            metrics.record_query_segment_failure();
            sink.report(
                &LoggerError::segment_io(ordinal, "read during query", source).to_string(),
            );
            return true;
        }
    };
    for line in contents.lines() {
        if line.contains(pattern) && matches.send(line_codec::decode(line)).is_err() {
            return false;
        }
    }
    true
}

/// Unordered stream of matched entries produced by [`QueryEngine::run`].
///
/// Iterate it to completion for every match, or drop it early to cancel the
/// scan threads still working.
pub struct LogStream {
    receiver: Receiver<String>,
}

impl LogStream {
    /// A stream that yields nothing, used when there is nothing to scan.
    fn empty() -> Self {
        let (sender, receiver) = bounded(0);
        drop(sender);
        Self { receiver }
    }
}

impl Iterator for LogStream {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.receiver.recv().ok()
    }
}
