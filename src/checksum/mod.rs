//! Checksum computation and verification.
//!
//! - [`hash`] - the running digest fed by the downloader
//! - [`record`] - token matching against a downloaded checksum file
//!
//! # Example
//!
//! ```rust
//! use urlsync::checksum::{ChecksumAccumulator, ChecksumRecord, HashType};
//!
//! let mut acc = ChecksumAccumulator::new(HashType::Md5);
//! acc.update(b"hello world");
//! let digest = acc.hex_digest();
//!
//! let content = format!("{digest}  hello.txt\n");
//! assert!(ChecksumRecord::new(content.as_bytes()).contains(&digest));
//! ```

pub mod hash;
pub mod record;

pub use hash::{ChecksumAccumulator, HashType};
pub use record::{verify, ChecksumRecord};
