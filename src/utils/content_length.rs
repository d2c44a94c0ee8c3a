//! Content length extraction utilities.
//!
//! `reqwest::Response::content_length` reports the size of the body it is
//! about to yield, which is zero for a HEAD response. The probe needs the
//! size the server *declares*, so these helpers read the header itself.

use reqwest::header::{HeaderMap, CONTENT_LENGTH};

/// Read the declared `Content-Length` header.
///
/// Returns `None` when the header is missing or is not a valid u64.
///
/// # Example
///
/// ```rust
/// use reqwest::header::{HeaderMap, HeaderValue, CONTENT_LENGTH};
/// use urlsync::utils::header_content_length;
///
/// let mut headers = HeaderMap::new();
/// headers.insert(CONTENT_LENGTH, HeaderValue::from_static("2048"));
/// assert_eq!(header_content_length(&headers), Some(2048));
/// ```
pub fn header_content_length(headers: &HeaderMap) -> Option<u64> {
    headers
        .get(CONTENT_LENGTH)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse::<u64>().ok())
}
