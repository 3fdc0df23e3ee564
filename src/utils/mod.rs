use chrono::{DateTime, Utc};

pub fn format_datetime(dt: DateTime<Utc>) -> String {
    dt.format("%Y-%m-%d %H:%M").to_string()
}

/// Formats a timestamp string from the store for display.
///
/// The hosted tables return RFC 3339, the REST backend RFC 2822; anything
/// else is shown as-is.
pub fn format_timestamp(raw: &str) -> String {
    DateTime::parse_from_rfc3339(raw)
        .or_else(|_| DateTime::parse_from_rfc2822(raw))
        .map(|dt| format_datetime(dt.with_timezone(&Utc)))
        .unwrap_or_else(|_| raw.to_string())
}

/// Truncates text to at most `max_chars` characters, adding an ellipsis.
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp("2025-10-04T10:30:00+00:00"), "2025-10-04 10:30");
        assert_eq!(format_timestamp("2025-10-04T12:30:00+02:00"), "2025-10-04 10:30");
        assert_eq!(format_timestamp("Sat, 04 Oct 2025 10:30:00 GMT"), "2025-10-04 10:30");
        assert_eq!(format_timestamp("2h ago"), "2h ago");
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("abcdef", 3), "abc...");
        assert_eq!(truncate_text("héllo wörld", 4), "héll...");
    }
}
