//! Builder for [`Syncer`] instances.
//!
//! ```rust
//! use reqwest::header::{self, HeaderValue};
//! use urlsync::syncer::SyncerBuilder;
//!
//! # fn example() -> urlsync::Result<()> {
//! let syncer = SyncerBuilder::hidden()
//!     .header(header::ACCEPT, HeaderValue::from_static("*/*"))
//!     .build()?;
//! # Ok(())
//! # }
//! ```

use super::{config::SyncerConfig, syncer::Syncer};
use crate::error::Result;
use crate::progress::ProgressBarOpts;

use reqwest::header::{HeaderMap, HeaderValue, IntoHeaderName};

/// A builder used to create a [`Syncer`].
#[derive(Debug, Default)]
pub struct SyncerBuilder {
    config: SyncerConfig,
}

impl SyncerBuilder {
    /// Creates a builder with the default options.
    pub fn new() -> Self {
        SyncerBuilder::default()
    }

    /// Convenience function to hide the progress bar.
    pub fn hidden() -> Self {
        SyncerBuilder::new().progress(ProgressBarOpts::hidden())
    }

    /// Set the progress bar options.
    pub fn progress(mut self, progress: ProgressBarOpts) -> Self {
        self.config.progress = progress;
        self
    }

    fn new_header(&self) -> HeaderMap {
        match self.config.headers {
            Some(ref h) => h.to_owned(),
            _ => HeaderMap::new(),
        }
    }

    /// Merge `headers` into the default request headers.
    ///
    /// Can be called several times; later values replace earlier ones.
    pub fn headers(mut self, headers: HeaderMap) -> Self {
        let mut new = self.new_header();
        new.extend(headers);

        self.config.headers = Some(new);
        self
    }

    /// Add a single default request header.
    pub fn header<K: IntoHeaderName>(mut self, name: K, value: HeaderValue) -> Self {
        let mut new = self.new_header();

        new.insert(name, value);

        self.config.headers = Some(new);
        self
    }

    /// Create the [`Syncer`] with the specified options.
    pub fn build(self) -> Result<Syncer> {
        Syncer::new(self.config)
    }
}
