//! Progress reporting.
//!
//! Progress is an output sink: the downloader feeds it byte counts as chunks
//! are written and never reads anything back.
//!
//! - `style` - progress bar templates and options
//! - `display` - per-transfer bar lifecycle

pub(crate) mod display;
pub(crate) mod style;

pub use display::ProgressDisplay;
pub use style::ProgressBarOpts;
