//! Path helpers for staging files next to their destination.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Suffix of the staging file that holds in-flight data.
pub const TEMP_SUFFIX: &str = ".sync.tmp";

/// Append `suffix` to the final component of `path` verbatim.
///
/// Unlike [`Path::with_extension`] nothing is replaced, so
/// `root.zone` + `.md5` gives `root.zone.md5`.
pub fn append_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(suffix);
    PathBuf::from(name)
}

/// Staging path for `path`: `path` + [`TEMP_SUFFIX`].
pub fn temp_path(path: &Path) -> PathBuf {
    append_suffix(path, TEMP_SUFFIX)
}
