//! Configuration shared by every run of a [`Syncer`](super::Syncer).

use crate::http::HttpClientConfig;
use crate::progress::ProgressBarOpts;

use reqwest::header::HeaderMap;

/// Settings that outlive a single [`SyncRequest`](super::SyncRequest).
#[derive(Debug, Clone)]
pub struct SyncerConfig {
    /// Default headers sent with every HEAD and GET.
    pub headers: Option<HeaderMap>,
    /// Progress bar appearance for the content transfer.
    pub progress: ProgressBarOpts,
}

impl Default for SyncerConfig {
    fn default() -> Self {
        Self {
            headers: HttpClientConfig::default().headers,
            progress: ProgressBarOpts::default(),
        }
    }
}

impl SyncerConfig {
    pub(crate) fn http_client_config(&self) -> HttpClientConfig {
        HttpClientConfig {
            headers: self.headers.clone(),
        }
    }
}
