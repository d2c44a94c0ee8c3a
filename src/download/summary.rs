//! Transfer results.

use filetime::FileTime;

/// What a finished transfer produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferResult {
    /// Bytes written to the temp file.
    pub bytes_written: u64,
    /// Lowercase hex digest, when an accumulator was attached.
    pub digest: Option<String>,
    /// Remote `Last-Modified`, in seconds since the Unix epoch. Already
    /// applied to the temp file.
    pub last_modified: i64,
}

impl TransferResult {
    /// `last_modified` as a [`FileTime`].
    pub fn modification_time(&self) -> FileTime {
        FileTime::from_unix_time(self.last_modified, 0)
    }
}
