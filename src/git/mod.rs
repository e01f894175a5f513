//! Git integration
//!
//! Provides the operations the synchronizer needs:
//! - Stage all working-tree changes
//! - Commit with a fixed message
//! - Push to the configured remote
//! - Pending change counts for status display

use std::path::Path;

use thiserror::Error;

mod cli;
mod status;

pub use cli::GitCli;
pub use status::pending_changes;

/// Errors from running git
#[derive(Debug, Error)]
pub enum GitError {
    /// git could not be started (missing binary, bad working directory)
    #[error("failed to run `{command}`: {source}")]
    Spawn {
        /// Command line that was attempted
        command: String,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// git ran and exited with a failure status
    #[error("`{command}` failed ({status}): {detail}")]
    CommandFailed {
        /// Command line that failed
        command: String,
        /// Exit status description
        status: String,
        /// Captured stderr (or stdout when stderr was empty)
        detail: String,
    },
}

/// Result of a commit attempt that did not fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitStatus {
    /// A new commit was recorded
    Created,
    /// Nothing was staged; the working copy is up to date
    NothingToCommit,
}

/// Version control operations used to back up a working copy
pub trait VersionControl {
    /// Stage every change in the working tree
    fn stage_all(&self, repo: &Path) -> Result<(), GitError>;

    /// Commit staged changes with `message`
    fn commit(&self, repo: &Path, message: &str) -> Result<CommitStatus, GitError>;

    /// Push the current branch to its configured remote
    fn push(&self, repo: &Path) -> Result<(), GitError>;
}

/// Whether commit output reports an empty changeset.
///
/// Matches git's "nothing to commit" phrase case-insensitively. This is the
/// only place that interprets git's human-readable output.
#[must_use]
pub fn is_nothing_to_commit(stdout: &str) -> bool {
    stdout.to_lowercase().contains("nothing to commit")
}
