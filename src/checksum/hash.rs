//! Running checksum computation.
//!
//! A [`ChecksumAccumulator`] is fed every chunk of a transfer as it is
//! written to disk, so the digest is ready as soon as the stream ends and the
//! file never has to be read back.
//!
//! # Supported Hash Types
//!
//! - **MD5**: the default, used for `.md5` and any unrecognised suffix
//! - **SHA-256**: checksum files whose suffix mentions `sha256`
//! - **SHA-512**: checksum files whose suffix mentions `sha512`
//!
//! # Example
//!
//! ```rust
//! use urlsync::checksum::{ChecksumAccumulator, HashType};
//!
//! let mut acc = ChecksumAccumulator::new(HashType::from_suffix(".md5"));
//! acc.update(b"");
//! assert_eq!(acc.hex_digest(), "d41d8cd98f00b204e9800998ecf8427e");
//! ```

use sha2::Digest;
use std::fmt;

/// Supported hash types for checksum verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashType {
    /// MD5 hash algorithm
    Md5,
    /// SHA-256 hash algorithm
    Sha256,
    /// SHA-512 hash algorithm
    Sha512,
}

impl HashType {
    /// Pick the hash type matching a checksum-file suffix.
    ///
    /// ```
    /// use urlsync::checksum::HashType;
    ///
    /// assert_eq!(HashType::from_suffix(".md5"), HashType::Md5);
    /// assert_eq!(HashType::from_suffix(".SHA256SUM"), HashType::Sha256);
    /// assert_eq!(HashType::from_suffix(".sig"), HashType::Md5);
    /// ```
    pub fn from_suffix(suffix: &str) -> Self {
        let suffix = suffix.to_ascii_lowercase();
        if suffix.contains("sha512") {
            HashType::Sha512
        } else if suffix.contains("sha256") {
            HashType::Sha256
        } else {
            HashType::Md5
        }
    }
}

impl fmt::Display for HashType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HashType::Md5 => write!(f, "md5"),
            HashType::Sha256 => write!(f, "sha256"),
            HashType::Sha512 => write!(f, "sha512"),
        }
    }
}

/// Incremental digest over the bytes of one transfer.
#[derive(Clone)]
pub enum ChecksumAccumulator {
    Md5(md5::Md5),
    Sha256(sha2::Sha256),
    Sha512(sha2::Sha512),
}

impl ChecksumAccumulator {
    /// Create an empty accumulator for `hash_type`.
    pub fn new(hash_type: HashType) -> Self {
        match hash_type {
            HashType::Md5 => ChecksumAccumulator::Md5(md5::Md5::new()),
            HashType::Sha256 => ChecksumAccumulator::Sha256(sha2::Sha256::new()),
            HashType::Sha512 => ChecksumAccumulator::Sha512(sha2::Sha512::new()),
        }
    }

    pub fn hash_type(&self) -> HashType {
        match self {
            ChecksumAccumulator::Md5(_) => HashType::Md5,
            ChecksumAccumulator::Sha256(_) => HashType::Sha256,
            ChecksumAccumulator::Sha512(_) => HashType::Sha512,
        }
    }

    /// Feed a chunk into the digest.
    pub fn update(&mut self, data: &[u8]) {
        match self {
            ChecksumAccumulator::Md5(h) => h.update(data),
            ChecksumAccumulator::Sha256(h) => h.update(data),
            ChecksumAccumulator::Sha512(h) => h.update(data),
        }
    }

    /// Lowercase hex digest of everything fed so far.
    ///
    /// The accumulator itself is left untouched.
    pub fn hex_digest(&self) -> String {
        match self {
            ChecksumAccumulator::Md5(h) => hex::encode(h.clone().finalize()),
            ChecksumAccumulator::Sha256(h) => hex::encode(h.clone().finalize()),
            ChecksumAccumulator::Sha512(h) => hex::encode(h.clone().finalize()),
        }
    }
}

impl fmt::Debug for ChecksumAccumulator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChecksumAccumulator")
            .field("hash_type", &self.hash_type())
            .finish()
    }
}
