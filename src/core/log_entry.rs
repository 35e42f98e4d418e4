//! Log entry structure

use super::line_codec;
use super::log_level::{LogLevel, UNKNOWN_LEVEL_TAG};
use super::timestamp::format_timestamp;
use chrono::{DateTime, Local};

/// One log record: capture time, optional severity, free-form message.
///
/// Entries are never persisted as a structured object, only as the rendered
/// line produced by [`LogEntry::rendered_line`]. A `None` level marks an
/// entry recorded without a severity and renders as the `NULL` tag.
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: DateTime<Local>,
    pub level: Option<LogLevel>,
    pub message: String,
}

impl LogEntry {
    pub fn new(level: Option<LogLevel>, message: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now(),
            level,
            message: message.into(),
        }
    }

    /// The severity tag as it appears in the rendered line.
    #[must_use]
    pub fn level_tag(&self) -> &'static str {
        self.level.map_or(UNKNOWN_LEVEL_TAG, |level| level.to_str())
    }

    /// The timestamp as it appears in the rendered line.
    #[must_use]
    pub fn timestamp_text(&self) -> String {
        format_timestamp(&self.timestamp)
    }

    /// The message with every line break replaced by the sentinel token.
    #[must_use]
    pub fn encoded_message(&self) -> String {
        line_codec::encode(&self.message)
    }

    /// Render `<timestamp> <levelTag> <message>` as a single line, without
    /// the trailing terminator.
    #[must_use]
    pub fn rendered_line(&self) -> String {
        format!(
            "{} {} {}",
            self.timestamp_text(),
            self.level_tag(),
            self.encoded_message()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_captures_level_and_message() {
        let entry = LogEntry::new(Some(LogLevel::Warn), "disk almost full");
        assert_eq!(entry.level, Some(LogLevel::Warn));
        assert_eq!(entry.message, "disk almost full");
    }

    #[test]
    fn test_rendered_line_layout() {
        let entry = LogEntry::new(Some(LogLevel::Info), "service started");
        let line = entry.rendered_line();
        // <date> <time> <tag> <message>, the timestamp itself holds one space
        let parts: Vec<&str> = line.splitn(4, ' ').collect();
        assert_eq!(parts.len(), 4);
        assert_eq!(parts[2], "INFO");
        assert_eq!(parts[3], "service started");
    }

    #[test]
    fn test_missing_level_renders_null_tag() {
        let entry = LogEntry::new(None, "who logged this");
        assert_eq!(entry.level_tag(), "NULL");
        assert!(entry.rendered_line().contains(" NULL "));
    }

    #[test]
    fn test_rendered_line_is_single_line() {
        let entry = LogEntry::new(Some(LogLevel::Error), "first\nsecond\r\nthird");
        let line = entry.rendered_line();
        assert!(!line.contains('\n'));
        assert!(!line.contains('\r'));
        assert!(line.ends_with("first~`second~`third"));
    }
}
