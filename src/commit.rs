//! Promotion of staged files.
//!
//! A [`CommitPlan`] is an ordered list of `temp -> final` renames. Each
//! rename is atomic on its own, so a reader of a final path sees either the
//! old file or the new one. The plan as a whole is not atomic: if a later
//! rename fails, the earlier ones stay done and the error is returned.

use crate::error::{Error, Result};

use std::path::PathBuf;
use tracing::debug;

/// One staged file and where it goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Promotion {
    pub temp: PathBuf,
    pub target: PathBuf,
}

/// Ordered renames to perform once every check has passed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitPlan {
    promotions: Vec<Promotion>,
}

impl CommitPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rename. Renames run in insertion order.
    pub fn promote(mut self, temp: impl Into<PathBuf>, target: impl Into<PathBuf>) -> Self {
        self.promotions.push(Promotion {
            temp: temp.into(),
            target: target.into(),
        });
        self
    }

    pub fn promotions(&self) -> &[Promotion] {
        &self.promotions
    }

    /// Perform every rename, stopping at the first failure.
    pub async fn execute(self) -> Result<()> {
        for Promotion { temp, target } in self.promotions {
            debug!("rename {} to {}", temp.display(), target.display());
            tokio::fs::rename(&temp, &target)
                .await
                .map_err(|e| Error::filesystem(&temp, e))?;
        }
        Ok(())
    }
}

/// Compare the streamed byte count with the size the probe announced.
pub fn check_size(expected: u64, actual: u64) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(Error::SizeMismatch { expected, actual })
    }
}
