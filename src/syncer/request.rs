//! The per-run sync request.
//!
//! # Example
//!
//! ```rust
//! use std::path::Path;
//! use urlsync::syncer::SyncRequest;
//!
//! # fn example() -> urlsync::Result<()> {
//! let request = SyncRequest::parse("https://www.internic.net/domain/root.zone", "root.zone")?
//!     .verify_checksum(true);
//!
//! assert_eq!(request.temp_path(), Path::new("root.zone.sync.tmp"));
//! assert_eq!(request.checksum_path(), Path::new("root.zone.md5"));
//! assert_eq!(
//!     request.checksum_url()?.as_str(),
//!     "https://www.internic.net/domain/root.zone.md5"
//! );
//! # Ok(())
//! # }
//! ```

use crate::checksum::HashType;
use crate::error::{Error, Result};
use crate::utils::{append_suffix, temp_path};

use reqwest::Url;
use std::path::PathBuf;

/// Default checksum-file suffix.
pub const DEFAULT_CHECKSUM_SUFFIX: &str = ".md5";

/// One remote-to-local sync.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncRequest {
    /// URL of the remote resource.
    pub url: Url,
    /// Local file kept in sync with `url`.
    pub destination: PathBuf,
    /// Compare remote and local metadata before downloading.
    pub probe: bool,
    /// When probing, keep a local file that is newer than the remote one.
    pub skip_if_remote_older: bool,
    /// Fetch `url + checksum_suffix` and require the digest to appear in it.
    pub verify_checksum: bool,
    /// Suffix of the companion checksum file.
    pub checksum_suffix: String,
}

impl SyncRequest {
    /// Creates a new [`SyncRequest`] with probing on and verification off.
    pub fn new(url: Url, destination: impl Into<PathBuf>) -> Self {
        Self {
            url,
            destination: destination.into(),
            probe: true,
            skip_if_remote_older: false,
            verify_checksum: false,
            checksum_suffix: DEFAULT_CHECKSUM_SUFFIX.to_string(),
        }
    }

    /// Like [`SyncRequest::new`], parsing `url` first.
    pub fn parse(url: &str, destination: impl Into<PathBuf>) -> Result<Self> {
        let url = Url::parse(url).map_err(|e| {
            Error::InvalidUrl(format!("The url \"{}\" cannot be parsed: {}", url, e))
        })?;
        Ok(Self::new(url, destination))
    }

    pub fn probe(mut self, probe: bool) -> Self {
        self.probe = probe;
        self
    }

    pub fn skip_if_remote_older(mut self, skip: bool) -> Self {
        self.skip_if_remote_older = skip;
        self
    }

    pub fn verify_checksum(mut self, verify: bool) -> Self {
        self.verify_checksum = verify;
        self
    }

    pub fn checksum_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.checksum_suffix = suffix.into();
        self
    }

    /// Staging file for the content.
    pub fn temp_path(&self) -> PathBuf {
        temp_path(&self.destination)
    }

    /// Final path of the checksum file.
    pub fn checksum_path(&self) -> PathBuf {
        append_suffix(&self.destination, &self.checksum_suffix)
    }

    /// Staging file for the checksum file.
    pub fn checksum_temp_path(&self) -> PathBuf {
        temp_path(&self.checksum_path())
    }

    /// URL of the checksum file: the content URL with the suffix appended.
    pub fn checksum_url(&self) -> Result<Url> {
        let raw = format!("{}{}", self.url, self.checksum_suffix);
        Url::parse(&raw).map_err(|e| {
            Error::InvalidUrl(format!("The url \"{}\" cannot be parsed: {}", raw, e))
        })
    }

    /// Digest algorithm implied by the checksum suffix.
    pub fn hash_type(&self) -> HashType {
        HashType::from_suffix(&self.checksum_suffix)
    }
}
