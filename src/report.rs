//! Log reporting for pipeline outcomes
//!
//! The archiver and synchronizer return structured outcomes; this module is
//! the only place that turns them into log lines.

use std::path::Path;

use crate::archive::{ArchiveOutcome, ArchiveReport};
use crate::discovery::DiscoveryError;
use crate::sync::{SyncOutcome, SyncReport};

/// Log one entry per archive outcome, plus root/destination problems
pub fn log_archive_report(report: &ArchiveReport, destination: &Path) {
    match &report.scan_error {
        Some(DiscoveryError::RootNotFound(root)) => {
            log::error!("Projects root {} does not exist, nothing archived", root.display());
        },
        Some(err) => log::error!("Cannot list projects: {err}"),
        None => {},
    }

    if report.destination_created {
        log::info!("Created destination folder: {}", destination.display());
    }
    if let Some(err) = &report.destination_error {
        log::error!("Cannot create destination {}: {err}", destination.display());
    }

    for outcome in &report.outcomes {
        match outcome {
            ArchiveOutcome::Created { artifact, .. } => {
                log::info!("Folder compressed into {}", destination.join(artifact).display());
            },
            ArchiveOutcome::Skipped { artifact, .. } => {
                log::info!("{artifact} already exists, skipped");
            },
            ArchiveOutcome::Failed {
                project, error, ..
            } => {
                log::error!("Error archiving project {project}: {error}");
            },
        }
    }
}

/// Log one entry per repository outcome
pub fn log_sync_report(report: &SyncReport) {
    for outcome in &report.outcomes {
        match outcome {
            SyncOutcome::Pushed { name } => {
                log::info!("Commit created in {name}");
                log::info!("Remote backup done for {name}");
            },
            SyncOutcome::UpToDate { name } => {
                log::info!("No changes in {name}, commit skipped");
            },
            SyncOutcome::Failed { name, step, error } => {
                log::error!("Error in repo {name} ({step}): {error}");
            },
        }
    }
}
