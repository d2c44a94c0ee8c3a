//! Progress bar display for a single transfer.
//!
//! A sync run performs at most two transfers one after the other (the
//! content and, when verifying, its checksum file), so each transfer gets a
//! bar of its own that is finished before the next one starts.
//!
//! # Example
//!
//! ```rust
//! use urlsync::progress::{ProgressBarOpts, ProgressDisplay};
//!
//! let display = ProgressDisplay::new(ProgressBarOpts::hidden());
//! let pb = display.create_bar(Some(1024), "root.zone.sync.tmp");
//! pb.inc(512);
//! display.finish_bar(pb);
//! ```

use crate::progress::ProgressBarOpts;
use indicatif::ProgressBar;

/// Creates and finishes per-transfer progress bars.
#[derive(Debug, Clone, Default)]
pub struct ProgressDisplay {
    /// Style options for progress bars.
    opts: ProgressBarOpts,
}

impl ProgressDisplay {
    pub fn new(opts: ProgressBarOpts) -> Self {
        Self { opts }
    }

    /// Whether bars are drawn at all.
    pub fn is_enabled(&self) -> bool {
        self.opts.is_enabled()
    }

    /// Create a bar for one transfer.
    ///
    /// # Arguments
    /// * `size` - Declared length of the transfer, if the server sent one
    /// * `message` - Label shown next to the bar
    pub fn create_bar(&self, size: Option<u64>, message: impl Into<String>) -> ProgressBar {
        self.opts
            .clone()
            .to_progress_bar(size)
            .with_message(message.into())
    }

    /// Finish a bar, clearing or keeping it based on configuration.
    pub fn finish_bar(&self, pb: ProgressBar) {
        if self.opts.clear {
            pb.finish_and_clear();
        } else {
            pb.finish();
        }
    }
}
