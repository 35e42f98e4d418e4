//! Segment discovery, rotation, and directory reconfiguration
//!
//! Log files form a dense series `log1.txt`, `log2.txt`, ... inside the
//! configured directory. The active segment is the smallest ordinal that has
//! not outgrown the rotation threshold. All mutable state sits behind one
//! mutex, and the only work done under it on the append path is the size
//! bookkeeping plus the rotate check, so concurrent appends never serialize
//! on their disk writes.

use crate::core::error::{LoggerError, Result};
use crate::core::metrics::LoggerMetrics;
use crate::core::sink::DiagnosticSink;
use crate::store::config::DEFAULT_DIRECTORY;
use parking_lot::Mutex;
use std::fs::{self, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Segment file name prefix.
pub const SEGMENT_PREFIX: &str = "log";

/// Segment file extension.
pub const SEGMENT_EXTENSION: &str = ".txt";

/// Rotation threshold applied when none is configured: 5,120,000 bytes.
pub const DEFAULT_MAX_SEGMENT_SIZE: u64 = 5_120_000;

/// File name for segment ordinal `n`, e.g. `log3.txt`.
#[must_use]
pub fn segment_file_name(ordinal: u32) -> String {
    format!("{}{}{}", SEGMENT_PREFIX, ordinal, SEGMENT_EXTENSION)
}

#[derive(Debug)]
struct SegmentState {
    directory: PathBuf,
    active: u32,
    active_size: u64,
}

/// Owns the segment series: which directory it lives in, which ordinal is
/// active, and when to roll over to the next one.
pub struct SegmentManager {
    state: Mutex<Option<SegmentState>>,
    threshold: AtomicU64,
    fallback_directory: PathBuf,
    sink: Arc<dyn DiagnosticSink>,
    metrics: Arc<LoggerMetrics>,
}

impl SegmentManager {
    pub fn new(
        threshold: u64,
        fallback_directory: impl Into<PathBuf>,
        sink: Arc<dyn DiagnosticSink>,
        metrics: Arc<LoggerMetrics>,
    ) -> Self {
        Self {
            state: Mutex::new(None),
            threshold: AtomicU64::new(threshold),
            fallback_directory: fallback_directory.into(),
            sink,
            metrics,
        }
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.state.lock().is_some()
    }

    #[must_use]
    pub fn threshold(&self) -> u64 {
        self.threshold.load(Ordering::Relaxed)
    }

    /// Accept a new rotation threshold. Values of one byte or less are
    /// rejected and the previous threshold stands.
    pub fn set_threshold(&self, bytes: u64) -> Result<()> {
        if bytes <= 1 {
            return Err(LoggerError::config(
                "SegmentManager",
                format!("max segment size must be greater than 1, got {}", bytes),
            ));
        }
        self.threshold.store(bytes, Ordering::Relaxed);
        Ok(())
    }

    /// Bind the manager to `directory` and discover the active segment.
    ///
    /// Creates the directory if absent. When that fails, reports the cause,
    /// falls back to the built-in default directory, and retries once; a
    /// failure there too is the one fatal initialization error. Idempotent:
    /// once initialized, later calls return immediately.
    pub fn initialize(&self, directory: &Path) -> Result<()> {
        let mut state = self.state.lock();
        if state.is_some() {
            return Ok(());
        }

        let directory = match fs::create_dir_all(directory) {
            Ok(()) => directory.to_path_buf(),
            Err(cause) => {
                self.sink.report(&format!(
                    "could not create log directory '{}': {}; falling back to '{}'",
                    directory.display(),
                    cause,
                    self.fallback_directory.display()
                ));
                fs::create_dir_all(&self.fallback_directory).map_err(|source| {
                    LoggerError::directory_init(
                        self.fallback_directory.display().to_string(),
                        source,
                    )
                })?;
                self.fallback_directory.clone()
            }
        };

        *state = Some(discover_active(directory, self.threshold())?);
        Ok(())
    }

    /// Path and ordinal of the segment the next append should target.
    pub fn active_segment(&self) -> Result<(PathBuf, u32)> {
        let state = self.state.lock();
        let state = state.as_ref().ok_or(LoggerError::NotInitialized)?;
        Ok((
            state.directory.join(segment_file_name(state.active)),
            state.active,
        ))
    }

    /// Account `bytes` appended to segment `ordinal`, rotating once the
    /// active segment has outgrown the threshold.
    ///
    /// The check and the creation of the next segment happen under the one
    /// state lock, so two writers can never create different next segments
    /// for the same boundary. A write recorded against an ordinal that was
    /// already rotated past is ignored; those bytes landed in a segment
    /// that is full anyway.
    pub fn record_write(&self, ordinal: u32, bytes: u64) -> Result<()> {
        let mut guard = self.state.lock();
        let state = guard.as_mut().ok_or(LoggerError::NotInitialized)?;
        if state.active != ordinal {
            return Ok(());
        }
        state.active_size += bytes;
        if state.active_size > self.threshold() {
            state.active += 1;
            state.active_size = 0;
            self.metrics.record_rotation();
            let next = state.directory.join(segment_file_name(state.active));
            create_empty(&next)
                .map_err(|source| LoggerError::segment_io(state.active, "create", source))?;
        }
        Ok(())
    }

    /// Number of segments a query should visit; zero before initialization.
    #[must_use]
    pub fn segment_count(&self) -> u32 {
        self.state.lock().as_ref().map_or(0, |state| state.active)
    }

    /// Directory and segment count pinned at one instant, for query fan-out.
    #[must_use]
    pub fn snapshot(&self) -> Option<(PathBuf, u32)> {
        self.state
            .lock()
            .as_ref()
            .map(|state| (state.directory.clone(), state.active))
    }

    /// Point the manager at `<parent>/LoggerLogs`, restarting discovery
    /// from ordinal 1.
    ///
    /// Returns the new directory so the caller can persist it, or `None`
    /// when the target subdirectory already exists: that case is a complete
    /// no-op and the existing configuration is preserved, not merged.
    pub fn reconfigure(&self, parent: &Path) -> Result<Option<PathBuf>> {
        let target = parent.join(DEFAULT_DIRECTORY);
        let mut state = self.state.lock();
        if target.exists() {
            return Ok(None);
        }
        fs::create_dir_all(&target)
            .map_err(|source| LoggerError::directory_init(target.display().to_string(), source))?;
        *state = Some(discover_active(target.clone(), self.threshold())?);
        Ok(Some(target))
    }
}

/// Walk ordinals from 1 until one is missing or still under the threshold.
/// A segment sitting exactly at the threshold is still the active one; only
/// outgrowing it moves the scan along, matching the rotate check.
fn discover_active(directory: PathBuf, threshold: u64) -> Result<SegmentState> {
    let mut ordinal = 1u32;
    loop {
        let path = directory.join(segment_file_name(ordinal));
        match fs::metadata(&path) {
            Ok(meta) if meta.len() > threshold => ordinal += 1,
            Ok(meta) => {
                return Ok(SegmentState {
                    directory,
                    active: ordinal,
                    active_size: meta.len(),
                });
            }
            Err(source) if source.kind() == ErrorKind::NotFound => {
                create_empty(&path)
                    .map_err(|source| LoggerError::segment_io(ordinal, "create", source))?;
                return Ok(SegmentState {
                    directory,
                    active: ordinal,
                    active_size: 0,
                });
            }
            Err(source) => return Err(LoggerError::segment_io(ordinal, "stat", source)),
        }
    }
}

/// Create `path` as an empty file; an already existing file is left alone.
fn create_empty(path: &Path) -> std::io::Result<()> {
    match OpenOptions::new().create_new(true).write(true).open(path) {
        Ok(_) => Ok(()),
        Err(source) if source.kind() == ErrorKind::AlreadyExists => Ok(()),
        Err(source) => Err(source),
    }
}
