//! Error handling for urlsync.
//!
//! Every stage of a sync run reports failure through the [`Error`] enum.
//! None of these errors are retried: the run stops at the first one and the
//! binary turns it into a process exit status with [`Error::exit_code`].

use reqwest::StatusCode;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Exit status for a verification failure (checksum or size mismatch).
pub const EXIT_VERIFICATION_FAILED: u8 = 2;

/// Exit status for any other fatal error (transport, filesystem, metadata).
pub const EXIT_FATAL: u8 = 3;

/// Errors that can happen during a sync run.
#[derive(Error, Debug)]
pub enum Error {
    /// The remote URL could not be parsed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Connection or transport failure.
    ///
    /// Wraps both middleware errors and raw reqwest errors raised while
    /// streaming a response body.
    #[error("Network error")]
    Network {
        #[from]
        source: reqwest_middleware::Error,
    },

    /// The server answered with a non-2xx status.
    #[error("{url} returned bad status: {status}")]
    BadStatus { url: String, status: StatusCode },

    /// The `Last-Modified` header is missing or unparseable.
    #[error("Metadata unavailable for {url}: {reason}")]
    MetadataUnavailable { url: String, reason: String },

    /// The streamed byte count differs from the size announced by the probe.
    #[error("Download size error: remote declared {expected} bytes, but {actual} bytes were downloaded")]
    SizeMismatch { expected: u64, actual: u64 },

    /// No token of the checksum file equals the computed digest.
    #[error("Checksum mismatch: {digest} not found in {}", checksum_file.display())]
    ChecksumMismatch {
        digest: String,
        checksum_file: PathBuf,
    },

    /// Creating, writing, stating or renaming a local file failed.
    #[error("Filesystem error on {}", path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// Wrap an I/O error together with the path it happened on.
    pub fn filesystem(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Filesystem {
            path: path.into(),
            source,
        }
    }

    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::SizeMismatch { .. } | Error::ChecksumMismatch { .. } => {
                EXIT_VERIFICATION_FAILED
            }
            _ => EXIT_FATAL,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(source: reqwest::Error) -> Self {
        Error::Network {
            source: reqwest_middleware::Error::Reqwest(source),
        }
    }
}

/// Result type alias for urlsync operations.
pub type Result<T> = std::result::Result<T, Error>;
