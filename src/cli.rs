//! Command-line surface.
//!
//! ```text
//! urlsync [-h] [-d] [-t] [-i] [-c] [-m SUFFIX] <remoteURL> <localFile>
//! ```
//!
//! `-h`, like any malformed command line, prints the usage text and exits
//! with [`EXIT_USAGE`].

use crate::error::Result;
use crate::syncer::{SyncRequest, DEFAULT_CHECKSUM_SUFFIX};

use clap::{ArgAction, CommandFactory, Parser};
use std::path::PathBuf;

/// Exit status for `-h` and malformed command lines.
pub const EXIT_USAGE: u8 = 5;

/// Keep a local file in sync with a remote URL.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "urlsync",
    disable_help_flag = true,
    disable_version_flag = true,
    override_usage = "urlsync [-h] [-d] [-t] [-i] [-c] [-m SUFFIX] <remoteURL> <localFile>"
)]
pub struct Cli {
    /// Print this help text
    #[arg(short = 'h', action = ArgAction::SetTrue)]
    pub help: bool,

    /// Print debug output
    #[arg(short = 'd', action = ArgAction::SetTrue)]
    pub debug: bool,

    /// Always download, without comparing size and modification time first
    #[arg(short = 't', action = ArgAction::SetTrue)]
    pub no_probe: bool,

    /// Do not download when the local file is newer than the remote one
    #[arg(short = 'i', action = ArgAction::SetTrue)]
    pub skip_older: bool,

    /// Verify the download against the checksum file at <remoteURL><SUFFIX>
    #[arg(short = 'c', action = ArgAction::SetTrue)]
    pub check: bool,

    /// Suffix of the checksum file
    #[arg(short = 'm', value_name = "SUFFIX", default_value = DEFAULT_CHECKSUM_SUFFIX)]
    pub suffix: String,

    /// URL of the remote resource
    #[arg(value_name = "remoteURL")]
    pub remote_url: String,

    /// Local file to keep in sync
    #[arg(value_name = "localFile")]
    pub local_file: PathBuf,
}

impl Cli {
    /// Render the usage text.
    pub fn usage() -> String {
        Cli::command().render_help().to_string()
    }

    /// Print the usage text to stdout.
    pub fn print_usage() {
        println!("{}", Cli::usage());
    }

    /// Turn the parsed flags into a [`SyncRequest`].
    pub fn into_request(self) -> Result<SyncRequest> {
        Ok(SyncRequest::parse(&self.remote_url, self.local_file)?
            .probe(!self.no_probe)
            .skip_if_remote_older(self.skip_older)
            .verify_checksum(self.check)
            .checksum_suffix(self.suffix))
    }
}
