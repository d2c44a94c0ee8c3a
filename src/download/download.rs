//! Staged downloads.
//!
//! A transfer never writes to its final destination. The body is streamed
//! into a temp file through an [`ObservedSink`], and the temp file gets the
//! remote `Last-Modified` as its mtime once the stream is complete. Promoting
//! the temp file is the commit stage's job.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::path::Path;
//! use urlsync::checksum::{ChecksumAccumulator, HashType};
//! use urlsync::download::download;
//! use urlsync::http::{create_http_client, HttpClientConfig};
//! use urlsync::progress::{ProgressBarOpts, ProgressDisplay};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = create_http_client(HttpClientConfig::default())?;
//! let url = reqwest::Url::parse("https://www.internic.net/domain/root.zone")?;
//! let progress = ProgressDisplay::new(ProgressBarOpts::default());
//! let mut acc = ChecksumAccumulator::new(HashType::Md5);
//!
//! let result = download(
//!     &client,
//!     &url,
//!     Path::new("root.zone.sync.tmp"),
//!     Some(&mut acc),
//!     &progress,
//! )
//! .await?;
//! println!("{} bytes, md5 {:?}", result.bytes_written, result.digest);
//! # Ok(())
//! # }
//! ```

use super::sink::{ByteCounter, ObservedSink};
use super::summary::TransferResult;
use crate::checksum::ChecksumAccumulator;
use crate::error::{Error, Result};
use crate::progress::ProgressDisplay;
use crate::utils::{header_content_length, header_last_modified};

use futures::StreamExt;
use reqwest::Url;
use reqwest_middleware::ClientWithMiddleware;
use std::path::Path;
use tokio::fs::File;
use tracing::debug;

/// Stream `url` into `temp_path`.
///
/// When `accumulator` is given, every chunk is also fed into it and the
/// resulting digest is part of the returned [`TransferResult`].
///
/// The response status and `Last-Modified` header are checked before the
/// temp file is created: a failing request never creates or truncates it.
pub async fn download(
    client: &ClientWithMiddleware,
    url: &Url,
    temp_path: &Path,
    mut accumulator: Option<&mut ChecksumAccumulator>,
    progress: &ProgressDisplay,
) -> Result<TransferResult> {
    debug!("Fetching {}", url);
    let res = client.get(url.clone()).send().await?;

    let status = res.status();
    if !status.is_success() {
        return Err(Error::BadStatus {
            url: url.to_string(),
            status,
        });
    }

    let last_modified =
        header_last_modified(res.headers()).map_err(|reason| Error::MetadataUnavailable {
            url: url.to_string(),
            reason,
        })?;
    let declared = header_content_length(res.headers());

    debug!("Creating temp file {:?}", temp_path);
    let file = File::create(temp_path)
        .await
        .map_err(|e| Error::filesystem(temp_path, e))?;

    let mut counter = ByteCounter::default();
    let mut pb = progress.create_bar(declared, temp_path.display().to_string());
    let mut sink = ObservedSink::new(file)
        .observe_with(&mut counter)
        .observe_with(&mut pb);
    if let Some(acc) = accumulator.as_deref_mut() {
        sink = sink.observe_with(acc);
    }

    debug!("Retrieving chunks...");
    let mut stream = res.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        sink.write_chunk(&chunk)
            .await
            .map_err(|e| Error::filesystem(temp_path, e))?;
    }

    let file = sink
        .finish()
        .await
        .map_err(|e| Error::filesystem(temp_path, e))?;
    file.sync_all()
        .await
        .map_err(|e| Error::filesystem(temp_path, e))?;
    drop(file);
    progress.finish_bar(pb);

    let result = TransferResult {
        bytes_written: counter.total(),
        digest: accumulator.as_deref().map(ChecksumAccumulator::hex_digest),
        last_modified,
    };

    debug!("Changing the file time of {:?} to {}", temp_path, last_modified);
    let mtime = result.modification_time();
    filetime::set_file_times(temp_path, mtime, mtime)
        .map_err(|e| Error::filesystem(temp_path, e))?;

    debug!(
        "Downloaded {} bytes from {} to {:?}",
        result.bytes_written, url, temp_path
    );
    Ok(result)
}
