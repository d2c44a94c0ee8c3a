//! urlsync keeps a local file in sync with a remote HTTP(S) resource.
//!
//! A run probes the remote size and `Last-Modified`, downloads only when the
//! local copy differs, optionally verifies the download against a companion
//! checksum file, and renames the result into place only once every check
//! passed.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use urlsync::{Error, SyncRequest, SyncerBuilder};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! let request = SyncRequest::parse("https://www.internic.net/domain/root.zone", "root.zone")?
//!     .verify_checksum(true);
//! let outcome = SyncerBuilder::new().build()?.sync(&request).await?;
//! println!("{outcome}");
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`syncer`] - the sync state machine and its builder
//! - [`probe`] - remote and local metadata, and the download decision
//! - [`download`] - staged downloads through an observed sink
//! - [`checksum`] - digests and checksum-file matching
//! - [`commit`] - promotion of staged files
//! - [`error`] - centralized error handling with the `Error` enum
//! - [`http`] - HTTP client setup
//! - [`progress`] - progress bar styling and display
//! - [`cli`] / [`logging`] - the command-line front end
//! - [`utils`] - header parsing and path helpers

pub mod checksum;
pub mod cli;
pub mod commit;
pub mod download;
pub mod error;
pub mod http;
pub mod logging;
pub mod probe;
pub mod progress;
pub mod syncer;
pub mod utils;

pub use checksum::{ChecksumAccumulator, HashType};
pub use error::{Error, Result};
pub use http::{create_http_client, HttpClientConfig};
pub use probe::{LocalMetadata, ProbeDecision, RemoteMetadata};
pub use progress::ProgressBarOpts;
pub use syncer::{Outcome, SyncRequest, Syncer, SyncerBuilder};
