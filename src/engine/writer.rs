//! Destination dispatch for rendered entries
//!
//! The writer turns a [`LogEntry`] into its single-line form and hands it to
//! the current destination. File appends go through one `write_all` on an
//! append-mode handle, so a record is never interleaved with a concurrent
//! writer's record. Failures never surface to the caller; the line is echoed
//! through the diagnostic sink instead so the entry is not silently lost.

use crate::core::destination::Destination;
use crate::core::error::LoggerError;
use crate::core::log_entry::LogEntry;
use crate::core::metrics::LoggerMetrics;
use crate::core::sink::DiagnosticSink;
use crate::store::segments::SegmentManager;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

pub struct Writer {
    segments: Arc<SegmentManager>,
    sink: Arc<dyn DiagnosticSink>,
    metrics: Arc<LoggerMetrics>,
    colors: bool,
}

impl Writer {
    pub fn new(
        segments: Arc<SegmentManager>,
        sink: Arc<dyn DiagnosticSink>,
        metrics: Arc<LoggerMetrics>,
        colors: bool,
    ) -> Self {
        Self {
            segments,
            sink,
            metrics,
            colors,
        }
    }

    /// Render `entry` and deliver it to `destination`. Infallible by
    /// contract: every failure is absorbed and reported through the sink.
    pub fn append(&self, entry: &LogEntry, destination: Destination) {
        match destination {
            Destination::Console => self.print_console(entry),
            Destination::File => self.append_to_file(entry),
        }
    }

    fn print_console(&self, entry: &LogEntry) {
        self.metrics.record_appended();
        if self.colors {
            #[cfg(feature = "console")]
            {
                use colored::Colorize;
                let color = match entry.level {
                    Some(level) => level.color_code(),
                    None => colored::Color::White,
                };
                println!(
                    "{} {} {}",
                    entry.timestamp_text(),
                    entry.level_tag().color(color),
                    entry.encoded_message()
                );
                return;
            }
        }
        println!("{}", entry.rendered_line());
    }

    fn append_to_file(&self, entry: &LogEntry) {
        let line = entry.rendered_line();
        let (path, ordinal) = match self.segments.active_segment() {
            Ok(target) => target,
            Err(error) => {
                self.echo_failed(&line, &error);
                return;
            }
        };
        match append_line(&path, &line) {
            Ok(bytes) => {
                self.metrics.record_appended();
                if let Err(error) = self.segments.record_write(ordinal, bytes) {
                    // The entry is already on disk; only rotation failed.
                    self.sink
                        .report(&format!("segment rotation failed: {}", error));
                }
            }
            Err(source) => {
                let error = LoggerError::segment_io(ordinal, "append", source);
                self.echo_failed(&line, &error);
            }
        }
    }

    fn echo_failed(&self, line: &str, error: &LoggerError) {
        self.sink.report(&format!("log append failed: {}", error));
        self.sink.report(line);
        self.metrics.record_fallback_echo();
    }
}

/// Append `line` plus a terminating newline in a single write.
fn append_line(path: &Path, line: &str) -> std::io::Result<u64> {
    let mut payload = Vec::with_capacity(line.len() + 1);
    payload.extend_from_slice(line.as_bytes());
    payload.push(b'\n');
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(&payload)?;
    Ok(payload.len() as u64)
}
