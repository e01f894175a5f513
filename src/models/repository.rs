//! Repository model

use std::path::{Path, PathBuf};

/// A git working copy that gets committed and pushed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    /// Directory basename, used in logs and the updated list
    pub name: String,
    /// Path to the working copy
    pub path: PathBuf,
}

impl Repository {
    /// Build a repository from its working copy path.
    ///
    /// Paths without a final component fall back to the full path as name.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        let name = path
            .file_name()
            .map_or_else(|| path.to_string_lossy().to_string(), |n| n.to_string_lossy().to_string());
        Self {
            name,
            path: path.to_path_buf(),
        }
    }
}
