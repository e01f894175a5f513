//! Project model

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use super::{ArchiveFormat, artifact_name};

/// A project directory under the projects root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    /// Directory basename
    pub name: String,
    /// Full path to the project directory
    pub path: PathBuf,
}

impl Project {
    /// Build a project from its directory path.
    ///
    /// Returns `None` for paths without a final component (e.g. `/`).
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_string_lossy().to_string();
        Some(Self {
            name,
            path: path.to_path_buf(),
        })
    }

    /// Name of this project's artifact for the given date and format
    #[must_use]
    pub fn artifact_name(&self, date: NaiveDate, format: ArchiveFormat) -> String {
        artifact_name(&self.name, date, format)
    }
}
