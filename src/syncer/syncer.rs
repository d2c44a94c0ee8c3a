//! The sync state machine.
//!
//! A run walks `Idle → Probing → Downloading → Verifying → Committing → Done`.
//! Probing and verifying are optional. Every failure ends the run with an
//! [`Error`], and nothing is renamed into place before the last check passed.

use super::config::SyncerConfig;
use super::outcome::Outcome;
use super::request::SyncRequest;
use crate::checksum::{self, ChecksumAccumulator};
use crate::commit::{check_size, CommitPlan};
use crate::download::download;
use crate::error::{Error, Result};
use crate::http::create_http_client;
use crate::probe::{decide, probe, stat_local, ProbeDecision, RemoteMetadata};
use crate::progress::ProgressDisplay;

use reqwest_middleware::ClientWithMiddleware;
use std::fmt;
use tracing::{debug, info, warn};

/// Where a run currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Idle,
    Probing,
    Downloading,
    Verifying,
    Committing,
    Done,
}

impl Stage {
    fn advance(&mut self, next: Stage) {
        debug!("stage: {} -> {}", self, next);
        *self = next;
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Idle => "idle",
            Stage::Probing => "probing",
            Stage::Downloading => "downloading",
            Stage::Verifying => "verifying",
            Stage::Committing => "committing",
            Stage::Done => "done",
        };
        f.write_str(name)
    }
}

/// Keeps local files in sync with remote resources.
///
/// ```rust,no_run
/// use urlsync::syncer::{SyncRequest, SyncerBuilder};
///
/// # async fn example() -> urlsync::Result<()> {
/// let syncer = SyncerBuilder::new().build()?;
/// let request = SyncRequest::parse("https://www.internic.net/domain/root.zone", "root.zone")?
///     .verify_checksum(true);
/// let outcome = syncer.sync(&request).await?;
/// std::process::exit(outcome.exit_code().into());
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Syncer {
    config: SyncerConfig,
    client: ClientWithMiddleware,
    progress: ProgressDisplay,
}

impl Syncer {
    pub(crate) fn new(config: SyncerConfig) -> Result<Self> {
        let client = create_http_client(config.http_client_config())?;
        let progress = ProgressDisplay::new(config.progress.clone());
        Ok(Self {
            config,
            client,
            progress,
        })
    }

    pub fn config(&self) -> &SyncerConfig {
        &self.config
    }

    /// Run one sync.
    ///
    /// Returns [`Outcome::UpToDate`] or [`Outcome::LocalNewer`] when the probe
    /// finds nothing to do, and [`Outcome::Updated`] once the new content
    /// (and its checksum file, when verifying) has been renamed into place.
    pub async fn sync(&self, request: &SyncRequest) -> Result<Outcome> {
        let mut stage = Stage::Idle;
        let result = self.run(request, &mut stage).await;
        if let Err(ref e) = result {
            warn!("sync failed while {}: {}", stage, e);
        }
        result
    }

    async fn run(&self, request: &SyncRequest, stage: &mut Stage) -> Result<Outcome> {
        info!("remoteURL: {}", request.url);
        info!("localFile: {}", request.destination.display());

        let mut remote: Option<RemoteMetadata> = None;
        if request.probe {
            stage.advance(Stage::Probing);
            let local = stat_local(&request.destination).await?;
            let metadata = probe(&self.client, &request.url).await?;

            match decide(local.as_ref(), &metadata, request.skip_if_remote_older) {
                ProbeDecision::UpToDate => {
                    info!("{}", ProbeDecision::UpToDate);
                    stage.advance(Stage::Done);
                    return Ok(Outcome::UpToDate);
                }
                ProbeDecision::LocalNewer => {
                    info!("{}", ProbeDecision::LocalNewer);
                    stage.advance(Stage::Done);
                    return Ok(Outcome::LocalNewer);
                }
                ProbeDecision::Download => debug!("{}", ProbeDecision::Download),
            }
            remote = Some(metadata);
        }

        stage.advance(Stage::Downloading);
        let temp_path = request.temp_path();
        let mut accumulator = request
            .verify_checksum
            .then(|| ChecksumAccumulator::new(request.hash_type()));

        info!("download started");
        let transfer = download(
            &self.client,
            &request.url,
            &temp_path,
            accumulator.as_mut(),
            &self.progress,
        )
        .await?;
        info!("download finished: {} bytes", transfer.bytes_written);

        let plan = CommitPlan::new().promote(&temp_path, &request.destination);
        let plan = match transfer.digest {
            Some(ref digest) => {
                stage.advance(Stage::Verifying);
                let checksum_url = request.checksum_url()?;
                let checksum_temp = request.checksum_temp_path();
                download(
                    &self.client,
                    &checksum_url,
                    &checksum_temp,
                    None,
                    &self.progress,
                )
                .await?;

                if !checksum::verify(digest, &checksum_temp).await? {
                    warn!(
                        "{} checksum {} not found in {}",
                        request.hash_type(),
                        digest,
                        checksum_url
                    );
                    return Err(Error::ChecksumMismatch {
                        digest: digest.clone(),
                        checksum_file: checksum_temp,
                    });
                }
                debug!("{} checksum {} verified", request.hash_type(), digest);
                plan.promote(checksum_temp, request.checksum_path())
            }
            None => {
                match remote.and_then(|remote| remote.size) {
                    Some(size) => check_size(size, transfer.bytes_written)?,
                    None => debug!("no declared size, skipping size check"),
                }
                plan
            }
        };

        stage.advance(Stage::Committing);
        plan.execute().await?;

        stage.advance(Stage::Done);
        Ok(Outcome::Updated {
            bytes_written: transfer.bytes_written,
        })
    }
}
