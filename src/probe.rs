//! Metadata probing.
//!
//! Before downloading anything, a sync run may compare the size and
//! modification time the server declares (via a HEAD request) with those of
//! the local file. Both probes are read-only.
//!
//! # Example
//!
//! ```rust
//! use urlsync::probe::{decide, LocalMetadata, ProbeDecision, RemoteMetadata};
//!
//! let remote = RemoteMetadata { size: Some(1000), last_modified: 1609459200 };
//! let local = LocalMetadata { size: 1000, modified: 1609459200 };
//! assert_eq!(decide(Some(&local), &remote, false), ProbeDecision::UpToDate);
//! assert_eq!(decide(None, &remote, false), ProbeDecision::Download);
//! ```

use crate::error::{Error, Result};
use crate::utils::{header_content_length, header_last_modified};

use filetime::FileTime;
use reqwest::Url;
use reqwest_middleware::ClientWithMiddleware;
use std::fmt;
use std::fs::Metadata;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

/// Size and modification time declared by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemoteMetadata {
    /// Declared `Content-Length`, in bytes. `None` for chunked or dynamic
    /// responses.
    pub size: Option<u64>,
    /// `Last-Modified`, in seconds since the Unix epoch.
    pub last_modified: i64,
}

/// Size and modification time of the existing destination file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalMetadata {
    /// File size in bytes.
    pub size: u64,
    /// Modification time, in whole seconds since the Unix epoch.
    pub modified: i64,
}

impl From<&Metadata> for LocalMetadata {
    fn from(metadata: &Metadata) -> Self {
        Self {
            size: metadata.len(),
            modified: FileTime::from_last_modification_time(metadata).unix_seconds(),
        }
    }
}

/// What the probe concluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeDecision {
    /// Same size and same mtime: nothing to do.
    UpToDate,
    /// The local file is strictly newer and older remotes are skipped.
    LocalNewer,
    /// The remote resource has to be fetched.
    Download,
}

impl fmt::Display for ProbeDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeDecision::UpToDate => write!(f, "file size and time are the same, nothing to do"),
            ProbeDecision::LocalNewer => write!(f, "local file is newer than remote, nothing to do"),
            ProbeDecision::Download => write!(f, "remote file changed, download needed"),
        }
    }
}

/// Decide whether a download is needed.
///
/// Equality is exact on both size and mtime, and an undeclared remote size
/// never equals the local one. With `skip_if_remote_older`
/// a local file whose mtime is strictly greater than the remote one is kept
/// as is, whatever its size.
pub fn decide(
    local: Option<&LocalMetadata>,
    remote: &RemoteMetadata,
    skip_if_remote_older: bool,
) -> ProbeDecision {
    let Some(local) = local else {
        return ProbeDecision::Download;
    };

    if remote.size == Some(local.size) && local.modified == remote.last_modified {
        ProbeDecision::UpToDate
    } else if skip_if_remote_older && local.modified > remote.last_modified {
        ProbeDecision::LocalNewer
    } else {
        ProbeDecision::Download
    }
}

/// Issue a HEAD request and read the declared size and `Last-Modified`.
pub async fn probe(client: &ClientWithMiddleware, url: &Url) -> Result<RemoteMetadata> {
    debug!("HEAD {}", url);
    let res = client.head(url.clone()).send().await?;

    let status = res.status();
    if !status.is_success() {
        return Err(Error::BadStatus {
            url: url.to_string(),
            status,
        });
    }

    let headers = res.headers();
    let last_modified =
        header_last_modified(headers).map_err(|reason| Error::MetadataUnavailable {
            url: url.to_string(),
            reason,
        })?;
    let size = header_content_length(headers);

    let remote = RemoteMetadata {
        size,
        last_modified,
    };
    debug!("remote size: {:?}, remote time: {}", remote.size, remote.last_modified);
    Ok(remote)
}

/// Stat the local file. A missing file is `Ok(None)`, not an error.
pub async fn stat_local(path: &Path) -> Result<Option<LocalMetadata>> {
    match tokio::fs::metadata(path).await {
        Ok(metadata) => {
            let local = LocalMetadata::from(&metadata);
            debug!("local size: {}, local time: {}", local.size, local.modified);
            Ok(Some(local))
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("{} does not exist yet", path.display());
            Ok(None)
        }
        Err(e) => Err(Error::filesystem(path, e)),
    }
}
