//! Repository synchronization
//!
//! Each working copy goes through stage → commit → push:
//!
//! ```text
//! stage ──err──► Failed(Stage)
//!   │
//! commit ──nothing to commit──► UpToDate
//!   │ └──err──► Failed(Commit)
//! push ──err──► Failed(Push)
//!   │
//! Pushed
//! ```
//!
//! A failure only affects its own repository; the remaining ones are still
//! processed.

use crate::git::{CommitStatus, VersionControl};
use crate::models::Repository;

/// Step of the synchronization that failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncStep {
    /// Staging working-tree changes
    Stage,
    /// Creating the backup commit
    Commit,
    /// Pushing to the remote
    Push,
}

impl std::fmt::Display for SyncStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stage => write!(f, "stage"),
            Self::Commit => write!(f, "commit"),
            Self::Push => write!(f, "push"),
        }
    }
}

/// What happened to one repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Changes were committed and pushed
    Pushed {
        /// Repository name
        name: String,
    },
    /// Nothing to commit; no push attempted
    UpToDate {
        /// Repository name
        name: String,
    },
    /// A step failed; later steps were not attempted
    Failed {
        /// Repository name
        name: String,
        /// Step that failed
        step: SyncStep,
        /// Error description
        error: String,
    },
}

impl SyncOutcome {
    /// Name of the repository this outcome is about
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Pushed { name } | Self::UpToDate { name } | Self::Failed { name, .. } => name,
        }
    }
}

/// Result of synchronizing a set of repositories
#[derive(Debug, Clone, Default)]
pub struct SyncReport {
    /// Per-repository outcomes, in processing order
    pub outcomes: Vec<SyncOutcome>,
}

impl SyncReport {
    /// Names of repositories that were committed and pushed, in order
    #[must_use]
    pub fn updated(&self) -> Vec<String> {
        self.outcomes
            .iter()
            .filter_map(|o| match o {
                SyncOutcome::Pushed { name } => Some(name.clone()),
                _ => None,
            })
            .collect()
    }
}

/// Stage, commit and push a single repository
pub fn sync_repository(vcs: &dyn VersionControl, repo: &Repository, message: &str) -> SyncOutcome {
    let failed = |step, error: &dyn std::fmt::Display| SyncOutcome::Failed {
        name: repo.name.clone(),
        step,
        error: error.to_string(),
    };

    if let Err(err) = vcs.stage_all(&repo.path) {
        return failed(SyncStep::Stage, &err);
    }

    match vcs.commit(&repo.path, message) {
        Ok(CommitStatus::NothingToCommit) => {
            return SyncOutcome::UpToDate {
                name: repo.name.clone(),
            };
        },
        Ok(CommitStatus::Created) => {},
        Err(err) => return failed(SyncStep::Commit, &err),
    }

    match vcs.push(&repo.path) {
        Ok(()) => SyncOutcome::Pushed {
            name: repo.name.clone(),
        },
        Err(err) => failed(SyncStep::Push, &err),
    }
}

/// Synchronize every repository in order
pub fn sync_all(vcs: &dyn VersionControl, repos: &[Repository], message: &str) -> SyncReport {
    SyncReport {
        outcomes: repos.iter().map(|repo| sync_repository(vcs, repo, message)).collect(),
    }
}
