//! HTTP-date parsing for the `Last-Modified` header.
//!
//! Servers are required to send IMF-fixdate (RFC 1123), but recipients must
//! also accept the obsolete RFC 850 and ANSI C asctime forms. All three are
//! interpreted as UTC and reduced to whole seconds since the Unix epoch.

use chrono::{DateTime, NaiveDateTime};
use reqwest::header::{HeaderMap, LAST_MODIFIED};

/// Obsolete HTTP-date layouts, tried after RFC 1123.
const OBSOLETE_FORMATS: [&str; 2] = [
    // RFC 850: Sunday, 06-Nov-94 08:49:37 GMT
    "%A, %d-%b-%y %H:%M:%S GMT",
    // asctime: Sun Nov  6 08:49:37 1994
    "%a %b %e %H:%M:%S %Y",
];

/// Parse an HTTP-date into seconds since the Unix epoch.
///
/// # Example
///
/// ```rust
/// use urlsync::utils::parse_http_date;
///
/// assert_eq!(parse_http_date("Fri, 01 Jan 2021 00:00:00 GMT"), Some(1609459200));
/// assert_eq!(parse_http_date("yesterday"), None);
/// ```
pub fn parse_http_date(value: &str) -> Option<i64> {
    let value = value.trim();
    if let Ok(date) = DateTime::parse_from_rfc2822(value) {
        return Some(date.timestamp());
    }
    OBSOLETE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|date| date.and_utc().timestamp())
}

/// Read and parse the `Last-Modified` header.
///
/// The error is a human-readable reason suitable for
/// [`Error::MetadataUnavailable`](crate::Error::MetadataUnavailable).
pub fn header_last_modified(headers: &HeaderMap) -> Result<i64, String> {
    let value = headers
        .get(LAST_MODIFIED)
        .ok_or_else(|| "missing Last-Modified header".to_string())?;
    let value = value
        .to_str()
        .map_err(|_| "Last-Modified header is not valid ASCII".to_string())?;
    parse_http_date(value).ok_or_else(|| format!("unparseable Last-Modified header: {value:?}"))
}
