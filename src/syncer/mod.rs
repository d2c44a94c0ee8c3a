//! Orchestration of a single sync run.
//!
//! - [`request`] - the per-run [`SyncRequest`]
//! - [`builder`] / [`config`] - run-independent settings
//! - [`syncer`] - the state machine itself
//! - [`outcome`] - how a successful run ended

pub mod builder;
pub mod config;
pub mod outcome;
pub mod request;
#[allow(clippy::module_inception)]
pub mod syncer;

pub use builder::SyncerBuilder;
pub use config::SyncerConfig;
pub use outcome::{Outcome, EXIT_NO_UPDATE, EXIT_UPDATED};
pub use request::{SyncRequest, DEFAULT_CHECKSUM_SUFFIX};
pub use syncer::{Stage, Syncer};
