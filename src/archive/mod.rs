//! Project archiving
//!
//! Produces one dated snapshot per project directory:
//!
//! ```text
//! projects/                     destination/
//! ├── api/            ──►       ├── api_20240307.zip
//! └── webapp/                   └── webapp_20240307.zip
//! ```
//!
//! An artifact whose name already exists in the destination is never rebuilt,
//! so running twice on the same day does no extra work. Artifacts are written
//! to a temporary file in the destination and renamed into place only once
//! complete, so an interrupted run never leaves a file that looks finished.

mod codec;

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use thiserror::Error;

use crate::discovery::{self, DiscoveryError};
use crate::models::{ArchiveFormat, Project};

pub use codec::write_archive;

/// Errors that abort the archive of a single project
#[derive(Debug, Error)]
pub enum ArchiveError {
    /// IO error reading the project or writing the artifact
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Error walking the project tree
    #[error("walkdir error: {0}")]
    Walk(#[from] walkdir::Error),

    /// Walked path was not under the project root
    #[error("path outside project root: {0}")]
    StripPrefix(#[from] std::path::StripPrefixError),

    /// Zip encoder error
    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// Finished temporary file could not be moved into place
    #[error("failed to move artifact into place: {0}")]
    Persist(#[from] tempfile::PersistError),
}

/// What happened to one project during an archive run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArchiveOutcome {
    /// A new artifact was written
    Created {
        /// Project name
        project: String,
        /// Artifact file name
        artifact: String,
    },
    /// Today's artifact already existed
    Skipped {
        /// Project name
        project: String,
        /// Existing artifact file name
        artifact: String,
    },
    /// Archiving failed; no artifact was left behind
    Failed {
        /// Project name
        project: String,
        /// Artifact file name that was being written
        artifact: String,
        /// Error description
        error: String,
    },
}

/// Result of archiving every project under a root
#[derive(Debug, Default)]
pub struct ArchiveReport {
    /// Set when the projects root could not be listed
    pub scan_error: Option<DiscoveryError>,
    /// Destination directory was created by this run
    pub destination_created: bool,
    /// Destination directory was missing and could not be created
    pub destination_error: Option<String>,
    /// Per-project outcomes, in processing order
    pub outcomes: Vec<ArchiveOutcome>,
}

impl ArchiveReport {
    /// Artifact names created during this run, in order
    #[must_use]
    pub fn created(&self) -> Vec<String> {
        self.outcomes
            .iter()
            .filter_map(|o| match o {
                ArchiveOutcome::Created { artifact, .. } => Some(artifact.clone()),
                _ => None,
            })
            .collect()
    }
}

/// Archive every project under `projects_root` using today's local date
#[must_use]
pub fn archive_all(
    projects_root: &Path,
    destination_root: &Path,
    format: ArchiveFormat,
) -> ArchiveReport {
    archive_all_on(projects_root, destination_root, format, Local::now().date_naive())
}

/// Archive every project under `projects_root` as of `date`.
///
/// A missing projects root yields an empty report and the destination is
/// left untouched.
#[must_use]
pub fn archive_all_on(
    projects_root: &Path,
    destination_root: &Path,
    format: ArchiveFormat,
    date: NaiveDate,
) -> ArchiveReport {
    let mut report = ArchiveReport::default();

    let projects = match discovery::list_projects(projects_root) {
        Ok(projects) => projects,
        Err(err) => {
            report.scan_error = Some(err);
            return report;
        },
    };

    if !destination_root.exists() {
        match fs::create_dir_all(destination_root) {
            Ok(()) => report.destination_created = true,
            Err(err) => report.destination_error = Some(err.to_string()),
        }
    }

    for project in projects {
        if is_same_dir(&project.path, destination_root) {
            continue;
        }

        let artifact = project.artifact_name(date, format);
        if destination_root.join(&artifact).exists() {
            report.outcomes.push(ArchiveOutcome::Skipped {
                project: project.name,
                artifact,
            });
            continue;
        }

        let outcome = match archive_project(&project, destination_root, format, &artifact) {
            Ok(_) => ArchiveOutcome::Created {
                project: project.name,
                artifact,
            },
            Err(err) => ArchiveOutcome::Failed {
                project: project.name,
                artifact,
                error: err.to_string(),
            },
        };
        report.outcomes.push(outcome);
    }

    report
}

/// Write `project` into `destination/artifact`.
///
/// Fails with [`ArchiveError::Persist`] if the artifact appeared meanwhile.
pub fn archive_project(
    project: &Project,
    destination: &Path,
    format: ArchiveFormat,
    artifact: &str,
) -> Result<PathBuf, ArchiveError> {
    let final_path = destination.join(artifact);

    let mut partial = tempfile::Builder::new()
        .prefix(&format!(".{artifact}."))
        .suffix(".partial")
        .tempfile_in(destination)?;

    write_archive(format, &project.path, &project.name, partial.as_file_mut())?;
    partial.as_file().sync_all()?;
    partial.persist_noclobber(&final_path)?;

    Ok(final_path)
}

/// Destination nested directly under the projects root is not a project
fn is_same_dir(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}
