//! Result of a sync run that did not fail.

use std::fmt;

/// Exit status when the destination was replaced.
pub const EXIT_UPDATED: u8 = 0;

/// Exit status when the probe found nothing to do.
pub const EXIT_NO_UPDATE: u8 = 1;

/// How a successful run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The destination was replaced with a freshly downloaded copy.
    Updated { bytes_written: u64 },
    /// Local size and mtime match the remote ones.
    UpToDate,
    /// The local file is newer than the remote one.
    LocalNewer,
}

impl Outcome {
    /// Process exit status for this outcome.
    pub fn exit_code(&self) -> u8 {
        match self {
            Outcome::Updated { .. } => EXIT_UPDATED,
            Outcome::UpToDate | Outcome::LocalNewer => EXIT_NO_UPDATE,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Updated { bytes_written } => write!(f, "updated ({} bytes)", bytes_written),
            Outcome::UpToDate => write!(f, "no update: local file is up to date"),
            Outcome::LocalNewer => write!(f, "no update: local file is newer"),
        }
    }
}
