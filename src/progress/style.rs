//! Progress bar styling options.
//!
//! # Example
//!
//! ```rust
//! use urlsync::progress::ProgressBarOpts;
//!
//! // Default: pip-like bar, cleared once the transfer completes.
//! let visible = ProgressBarOpts::default();
//! assert!(visible.is_enabled());
//!
//! // Nothing is drawn at all.
//! let hidden = ProgressBarOpts::hidden();
//! assert!(hidden.to_progress_bar(Some(1024)).is_hidden());
//! ```

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use tracing::warn;

/// Define the options for a progress bar.
#[derive(Debug, Clone)]
pub struct ProgressBarOpts {
    /// Template used when the transfer length is known.
    template: Option<String>,
    /// Template used when the server sent no `Content-Length`.
    spinner_template: Option<String>,
    /// Progression characters set.
    ///
    /// There must be at least 3 characters for the following states:
    /// "filled", "current", and "to do".
    progress_chars: Option<String>,
    /// Enable or disable the progress bar.
    pub(crate) enabled: bool,
    /// Clear the progress bar once completed.
    pub(crate) clear: bool,
}

impl Default for ProgressBarOpts {
    fn default() -> Self {
        Self::with_pip_style()
    }
}

impl ProgressBarOpts {
    /// Template which looks like the Python package installer pip.
    ///
    /// `━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━ 211.23 KiB/211.23 KiB 1008.31 KiB/s eta 0s`
    pub const TEMPLATE_PIP: &'static str =
        "{bar:40.green/black} {bytes:>11.green}/{total_bytes:<11.green} {bytes_per_sec:>13.red} eta {eta:.blue}";
    /// Template for transfers of unknown length.
    ///
    /// `⠙ Downloading... 211.23 KiB complete root.zone.sync.tmp`
    pub const TEMPLATE_SPINNER: &'static str =
        "{spinner:.cyan} Downloading... {bytes:.green} complete {msg}";
    /// Use a line as progress characters: `"━╾─"`.
    pub const CHARS_LINE: &'static str = "━╾╴─";

    /// Create a new [`ProgressBarOpts`].
    pub fn new(
        template: Option<String>,
        progress_chars: Option<String>,
        enabled: bool,
        clear: bool,
    ) -> Self {
        Self {
            template,
            spinner_template: Some(Self::TEMPLATE_SPINNER.into()),
            progress_chars,
            enabled,
            clear,
        }
    }

    /// Create a new [`ProgressBarOpts`] which looks like Python pip.
    pub fn with_pip_style() -> Self {
        Self::new(
            Some(Self::TEMPLATE_PIP.into()),
            Some(Self::CHARS_LINE.into()),
            true,
            true,
        )
    }

    /// Create a new [`ProgressBarOpts`] which hides the progress bars.
    pub fn hidden() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Create a [`ProgressStyle`] for a transfer of known length.
    pub fn to_progress_style(&self) -> ProgressStyle {
        let style = with_template(ProgressStyle::default_bar(), self.template.as_deref());
        match self.progress_chars {
            Some(ref chars) => style.progress_chars(chars),
            None => style,
        }
    }

    /// Create a [`ProgressStyle`] for a transfer of unknown length.
    pub fn to_spinner_style(&self) -> ProgressStyle {
        with_template(
            ProgressStyle::default_spinner(),
            self.spinner_template.as_deref(),
        )
    }

    /// Create a [`ProgressBar`] based on the provided options.
    pub fn to_progress_bar(self, len: Option<u64>) -> ProgressBar {
        if !self.enabled {
            return ProgressBar::with_draw_target(len, ProgressDrawTarget::hidden());
        }

        match len {
            Some(len) => ProgressBar::new(len).with_style(self.to_progress_style()),
            None => ProgressBar::new_spinner().with_style(self.to_spinner_style()),
        }
    }
}

fn with_template(base: ProgressStyle, template: Option<&str>) -> ProgressStyle {
    let Some(template) = template else {
        return base;
    };
    match base.clone().template(template) {
        Ok(style) => style,
        Err(e) => {
            warn!("ignoring invalid progress template {:?}: {}", template, e);
            base
        }
    }
}
