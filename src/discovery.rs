//! Discovery of projects and repositories
//!
//! Both scans look only at the direct children of a base directory and
//! return them in file-name order.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::{Project, Repository};
use crate::paths;

/// Errors that can occur while scanning a base directory
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// Base path does not exist
    #[error("path does not exist: {0}")]
    RootNotFound(PathBuf),

    /// IO error while listing the base path
    #[error("failed to list {path}: {source}")]
    Io {
        /// Directory being listed
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },
}

/// List the direct child directories of `root`, sorted by name
fn child_dirs(root: &Path) -> Result<Vec<PathBuf>, DiscoveryError> {
    if !root.exists() {
        return Err(DiscoveryError::RootNotFound(root.to_path_buf()));
    }

    let io_err = |source| DiscoveryError::Io {
        path: root.to_path_buf(),
        source,
    };

    let mut dirs = Vec::new();
    for entry in fs::read_dir(root).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        if path.is_dir() {
            dirs.push(path);
        }
    }

    dirs.sort();
    Ok(dirs)
}

/// List the projects under `root`
pub fn list_projects(root: &Path) -> Result<Vec<Project>, DiscoveryError> {
    Ok(child_dirs(root)?.iter().filter_map(|p| Project::from_path(p)).collect())
}

/// Scan `base` for git working copies
pub fn scan_repositories(base: &Path) -> Result<Vec<Repository>, DiscoveryError> {
    Ok(child_dirs(base)?
        .iter()
        .filter(|p| paths::has_git_marker(p))
        .map(|p| Repository::from_path(p))
        .collect())
}

/// Find git working copies among the direct children of `base`.
///
/// A child qualifies if it is a directory containing a `.git` marker.
/// A missing or unreadable base logs a warning and yields an empty list.
#[must_use]
pub fn find_repositories(base: &Path) -> Vec<Repository> {
    match scan_repositories(base) {
        Ok(repos) => repos,
        Err(err) => {
            log::warn!("Repository scan skipped: {err}");
            Vec::new()
        },
    }
}

/// Wrap an explicit list of working copy paths as repositories
#[must_use]
pub fn repositories_from_list(paths: &[PathBuf]) -> Vec<Repository> {
    paths.iter().map(|p| Repository::from_path(p)).collect()
}
