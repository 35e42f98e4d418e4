//! Runtime machinery: appending entries and scanning them back out

pub mod query;
pub mod writer;

pub use query::{LogStream, QueryEngine};
pub use writer::Writer;
