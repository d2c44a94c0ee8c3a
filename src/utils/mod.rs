//! Shared utility functions.
//!
//! - [`content_length`] - declared `Content-Length` extraction
//! - [`http_date`] - `Last-Modified` parsing in every HTTP-date form
//! - [`path`] - staging path construction
//!
//! # Example
//!
//! ```rust
//! use std::path::Path;
//! use urlsync::utils::{append_suffix, parse_http_date, temp_path};
//!
//! let checksum = append_suffix(Path::new("root.zone"), ".md5");
//! assert_eq!(temp_path(&checksum), Path::new("root.zone.md5.sync.tmp"));
//! assert!(parse_http_date("Fri, 01 Jan 2021 00:00:00 GMT").is_some());
//! ```

pub mod content_length;
pub mod http_date;
pub mod path;

pub use content_length::header_content_length;
pub use http_date::{header_last_modified, parse_http_date};
pub use path::{append_suffix, temp_path, TEMP_SUFFIX};
