//! Timestamp rendering for log lines
//!
//! Entries carry millisecond-precision local time. The rendered form is part
//! of the on-disk line format, so it is fixed rather than configurable:
//! queries match on the rendered text, and a partial timestamp such as
//! `26-8-25` is a valid search string.

use chrono::{DateTime, Local};

/// Two-digit year, non-padded month/day/hour/minute/second, milliseconds.
///
/// Example: `26-8-25 9:5:7.042`
pub(crate) const TIMESTAMP_FORMAT: &str = "%y-%-m-%-d %-H:%-M:%-S%.3f";

/// Render a timestamp the way it appears at the head of every log line.
#[must_use]
pub fn format_timestamp(datetime: &DateTime<Local>) -> String {
    datetime.format(TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_datetime() -> DateTime<Local> {
        // 2026-01-08 09:05:07.042 local time
        Local
            .with_ymd_and_hms(2026, 1, 8, 9, 5, 7)
            .single()
            .expect("valid datetime")
            + chrono::Duration::milliseconds(42)
    }

    #[test]
    fn test_fields_are_not_padded() {
        let result = format_timestamp(&fixed_datetime());
        assert_eq!(result, "26-1-8 9:5:7.042");
    }

    #[test]
    fn test_milliseconds_are_three_digits() {
        let datetime = Local
            .with_ymd_and_hms(2026, 11, 23, 14, 55, 37)
            .single()
            .expect("valid datetime")
            + chrono::Duration::milliseconds(7);
        let result = format_timestamp(&datetime);
        assert_eq!(result, "26-11-23 14:55:37.007");
    }

    #[test]
    fn test_single_space_separator() {
        let result = format_timestamp(&fixed_datetime());
        assert_eq!(result.matches(' ').count(), 1);
    }
}
