//! Line-break sentinel substitution
//!
//! Stored log lines must never contain a raw line break, otherwise a
//! multi-line message would be read back as several unrelated entries. On
//! write, every CRLF, CR, or LF in the message becomes the reserved token;
//! on read, every token becomes a single `\n`. One token always stands for
//! exactly one break, so decoding an encoded message restores it up to
//! normalization of the line-break style.

/// Reserved token substituted for a line break inside a message.
pub const BREAK_TOKEN: &str = "~`";

/// Replace every line-break sequence in `message` with [`BREAK_TOKEN`].
///
/// CRLF is handled first so that it maps to one token, not two.
#[must_use]
pub fn encode(message: &str) -> String {
    message
        .replace("\r\n", BREAK_TOKEN)
        .replace('\r', BREAK_TOKEN)
        .replace('\n', BREAK_TOKEN)
}

/// Restore the line breaks in a stored line, one `\n` per token.
#[must_use]
pub fn decode(line: &str) -> String {
    line.replace(BREAK_TOKEN, "\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_removes_all_breaks() {
        let encoded = encode("first\nsecond\r\nthird\rfourth");
        assert!(!encoded.contains('\n'));
        assert!(!encoded.contains('\r'));
        assert_eq!(encoded, "first~`second~`third~`fourth");
    }

    #[test]
    fn test_crlf_is_one_token() {
        assert_eq!(encode("a\r\nb"), "a~`b");
    }

    #[test]
    fn test_consecutive_breaks_stay_distinct() {
        // Two breaks must decode back to two breaks.
        let encoded = encode("a\n\nb");
        assert_eq!(encoded, "a~`~`b");
        assert_eq!(decode(&encoded), "a\n\nb");
    }

    #[test]
    fn test_decode_restores_newlines() {
        assert_eq!(decode("first~`second~`third"), "first\nsecond\nthird");
    }

    #[test]
    fn test_plain_text_is_untouched() {
        assert_eq!(encode("no breaks here"), "no breaks here");
        assert_eq!(decode("no tokens here"), "no tokens here");
    }

    #[test]
    fn test_round_trip_normalizes_cr_and_crlf() {
        let decoded = decode(&encode("a\rb\r\nc\nd"));
        assert_eq!(decoded, "a\nb\nc\nd");
    }
}
