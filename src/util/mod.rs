//
//  bitbucket-search
//  util/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Utility Functions
//!
//! Text helpers used when shaping search results:
//!
//! - [`format_timestamp`]: ISO 8601 timestamps to a short UTC form
//! - [`truncate`]: character-safe truncation with an ellipsis
//! - [`first_line`]: first non-empty line of a description

use chrono::{DateTime, Utc};

/// Formats an ISO 8601 timestamp from the Bitbucket API.
///
/// Bitbucket returns timestamps like `2024-03-01T10:15:30.123456+00:00`.
/// They are shown as `2024-03-01 10:15 UTC`. Unparseable input is returned
/// unchanged rather than dropped.
///
/// # Example
///
/// ```rust
/// use bitbucket_search::util::format_timestamp;
///
/// assert_eq!(format_timestamp("2024-03-01T10:15:30.123456+00:00"), "2024-03-01 10:15 UTC");
/// assert_eq!(format_timestamp("yesterday"), "yesterday");
/// ```
pub fn format_timestamp(timestamp: &str) -> String {
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(dt) => dt
            .with_timezone(&Utc)
            .format("%Y-%m-%d %H:%M UTC")
            .to_string(),
        Err(_) => timestamp.to_string(),
    }
}

/// Truncates a string to at most `max_len` characters, adding `...`.
///
/// Counts characters, not bytes, so multi-byte text never panics.
///
/// # Example
///
/// ```rust
/// use bitbucket_search::util::truncate;
///
/// assert_eq!(truncate("hello", 10), "hello");
/// assert_eq!(truncate("hello world", 8), "hello...");
/// ```
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len > 3 {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    } else {
        s.chars().take(max_len).collect()
    }
}

/// Returns the first non-blank line, trimmed.
pub fn first_line(s: &str) -> Option<&str> {
    s.lines().map(str::trim).find(|l| !l.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world", 8), "hello...");
        assert_eq!(truncate("héllo wörld", 8), "héllo...");
        assert_eq!(truncate("abcdef", 2), "ab");
    }

    #[test]
    fn test_format_timestamp_converts_to_utc() {
        assert_eq!(
            format_timestamp("2024-03-01T12:15:30+02:00"),
            "2024-03-01 10:15 UTC"
        );
    }

    #[test]
    fn test_first_line() {
        assert_eq!(first_line("\n  \n  Fix login\nmore"), Some("Fix login"));
        assert_eq!(first_line("   "), None);
    }
}
