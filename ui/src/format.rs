//! Text and date formatting helpers for list rendering.

use chrono::{DateTime, Utc};

/// Truncate `text` to at most `max_chars` characters for a card preview,
/// appending an ellipsis when anything was cut. Counts characters, not
/// bytes, so multibyte content never splits mid-character.
pub fn preview(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let truncated: String = text.chars().take(max_chars).collect();
    format!("{truncated}...")
}

/// Human-readable date for post and comment metadata.
pub fn format_date(ts: &DateTime<Utc>) -> String {
    ts.format("%b %d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_short_text_is_untouched() {
        assert_eq!(preview("hello", 150), "hello");
    }

    #[test]
    fn test_exact_length_is_untouched() {
        let text = "a".repeat(150);
        assert_eq!(preview(&text, 150), text);
    }

    #[test]
    fn test_long_text_is_truncated_with_ellipsis() {
        let text = "a".repeat(151);
        let result = preview(&text, 150);
        assert_eq!(result.chars().count(), 153);
        assert!(result.ends_with("..."));
    }

    #[test]
    fn test_truncation_respects_char_boundaries() {
        let text = "é".repeat(200);
        let result = preview(&text, 150);
        assert!(result.starts_with(&"é".repeat(150)));
        assert!(result.ends_with("..."));
    }

    #[test]
    fn test_format_date() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        assert_eq!(format_date(&ts), "Jan 15, 2024");
    }
}
