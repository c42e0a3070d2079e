//! HTTP cache control module
//!
//! `ETag` generation and conditional request handling (`If-None-Match`,
//! `If-Modified-Since`), plus HTTP-date formatting for `Last-Modified`.

use chrono::{DateTime, Utc};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Generate an `ETag` using fast hashing.
///
/// # Returns
/// Quoted `ETag` string, e.g., `"abc123def"`
#[must_use]
pub fn generate_etag(content: &[u8]) -> String {
    let mut hasher = DefaultHasher::new();
    content.hash(&mut hasher);
    let v = hasher.finish();
    format!("\"{v:x}\"")
}

/// Check if the client's `If-None-Match` header matches the server's `ETag`.
///
/// Supports a single `ETag`, a comma-separated list, and the `*` wildcard.
/// Returns true if matched (should return 304).
#[must_use]
pub fn check_etag_match(if_none_match: Option<&str>, etag: &str) -> bool {
    if_none_match.is_some_and(|client_etag| {
        client_etag
            .split(',')
            .any(|e| e.trim() == etag || e.trim() == "*")
    })
}

/// Format a timestamp as an HTTP-date (RFC 7231 IMF-fixdate).
///
/// # Examples
/// ```
/// use chrono::{TimeZone, Utc};
/// use spa_server::http::cache::format_http_date;
///
/// let t = Utc.with_ymd_and_hms(2015, 10, 21, 7, 28, 0).unwrap();
/// assert_eq!(format_http_date(t), "Wed, 21 Oct 2015 07:28:00 GMT");
/// ```
#[must_use]
pub fn format_http_date(time: DateTime<Utc>) -> String {
    time.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

/// Check if the client's `If-Modified-Since` header makes the response a 304.
///
/// Only consulted when the client sent no `If-None-Match`. HTTP-dates carry
/// second precision, so the comparison truncates the modification time to
/// whole seconds. Unparseable header values are ignored.
#[must_use]
pub fn check_modified_since(
    if_modified_since: Option<&str>,
    modified: Option<DateTime<Utc>>,
) -> bool {
    let (Some(header), Some(modified)) = (if_modified_since, modified) else {
        return false;
    };

    let Ok(since) = DateTime::parse_from_rfc2822(header) else {
        return false;
    };

    modified.timestamp() <= since.timestamp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_generate_etag() {
        let etag = generate_etag(b"hello world");
        assert!(etag.starts_with('"'));
        assert!(etag.ends_with('"'));
        assert!(etag.len() > 2);
    }

    #[test]
    fn test_etag_consistency() {
        assert_eq!(generate_etag(b"same content"), generate_etag(b"same content"));
        assert_ne!(generate_etag(b"content a"), generate_etag(b"content b"));
    }

    #[test]
    fn test_check_etag_match() {
        let etag = "\"abc123\"";
        assert!(check_etag_match(Some("\"abc123\""), etag));
        assert!(check_etag_match(Some("\"xyz\", \"abc123\""), etag));
        assert!(check_etag_match(Some("*"), etag));
        assert!(!check_etag_match(Some("\"different\""), etag));
        assert!(!check_etag_match(None, etag));
    }

    #[test]
    fn test_http_date_round_trip() {
        let t = Utc.with_ymd_and_hms(1994, 11, 15, 8, 12, 31).unwrap();
        let formatted = format_http_date(t);
        assert_eq!(formatted, "Tue, 15 Nov 1994 08:12:31 GMT");

        let parsed = DateTime::parse_from_rfc2822(&formatted).unwrap();
        assert_eq!(parsed.timestamp(), t.timestamp());
    }

    #[test]
    fn test_check_modified_since() {
        let modified = Utc.with_ymd_and_hms(2015, 10, 21, 7, 28, 0).unwrap();

        // Same instant: not modified
        assert!(check_modified_since(
            Some("Wed, 21 Oct 2015 07:28:00 GMT"),
            Some(modified)
        ));

        // Header older than the file: modified, full response
        assert!(!check_modified_since(
            Some("Wed, 21 Oct 2015 07:27:59 GMT"),
            Some(modified)
        ));

        // Header newer than the file: not modified
        assert!(check_modified_since(
            Some("Thu, 22 Oct 2015 00:00:00 GMT"),
            Some(modified)
        ));

        // Garbage header is ignored
        assert!(!check_modified_since(Some("last tuesday"), Some(modified)));
        assert!(!check_modified_since(None, Some(modified)));
        assert!(!check_modified_since(
            Some("Wed, 21 Oct 2015 07:28:00 GMT"),
            None
        ));
    }
}
