//! Persistent state: the configured directory and the segment series

pub mod config;
pub mod segments;

pub use config::{ConfigStore, DEFAULT_DIRECTORY, DEFAULT_PERSIST_FILE};
pub use segments::{
    segment_file_name, SegmentManager, DEFAULT_MAX_SEGMENT_SIZE, SEGMENT_EXTENSION, SEGMENT_PREFIX,
};
