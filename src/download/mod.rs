//! Staged downloader.
//!
//! - [`download`] - streams a URL into a temp file
//! - [`sink`] - the writer stage and its chunk observers
//! - [`summary`] - what a transfer produced

#[allow(clippy::module_inception)]
pub mod download;
pub mod sink;
pub mod summary;

pub use download::download;
pub use sink::{ByteCounter, ChunkObserver, ObservedSink};
pub use summary::TransferResult;
