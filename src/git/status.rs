//! Working copy status via libgit2

use std::path::Path;

use git2::{Repository, StatusOptions};

/// Count changed, staged and untracked files in the working copy at `path`
pub fn pending_changes(path: &Path) -> Result<usize, git2::Error> {
    let repo = Repository::open(path)?;
    let mut options = StatusOptions::new();
    options.include_untracked(true).recurse_untracked_dirs(true).include_ignored(false);
    Ok(repo.statuses(Some(&mut options))?.len())
}
