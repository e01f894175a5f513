//! Backup run orchestration
//!
//! Runs the selected pipelines in order (archive, then sync), logs the
//! run markers and returns the summary of both output sequences.

use chrono::NaiveDate;

use crate::archive::{self, ArchiveOutcome};
use crate::config::BackupConfig;
use crate::discovery;
use crate::git::VersionControl;
use crate::output::RunSummary;
use crate::report;
use crate::sync::{self, SyncOutcome};

/// Which pipelines to run this invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pipelines {
    /// Archive projects to the destination
    pub archive: bool,
    /// Commit and push repositories
    pub sync: bool,
}

impl Pipelines {
    /// Whether any pipeline is selected
    #[must_use]
    pub const fn any(self) -> bool {
        self.archive || self.sync
    }
}

/// Run the selected pipelines as of `today`
pub fn run(
    config: &BackupConfig,
    pipelines: Pipelines,
    vcs: &dyn VersionControl,
    today: NaiveDate,
) -> RunSummary {
    log::info!("===== BACKUP START =====");

    let mut summary = RunSummary {
        archive_ran: pipelines.archive,
        sync_ran: pipelines.sync,
        ..RunSummary::default()
    };

    if pipelines.archive {
        let report = archive::archive_all_on(
            &config.projects_root,
            &config.destination_root,
            config.format,
            today,
        );
        report::log_archive_report(&report, &config.destination_root);

        summary.archived = report.created();
        summary.archive_failures = report
            .outcomes
            .iter()
            .filter_map(|o| match o {
                ArchiveOutcome::Failed { project, .. } => Some(project.clone()),
                _ => None,
            })
            .collect();
    }

    if pipelines.sync {
        let repos = if config.repositories.is_empty() {
            discovery::find_repositories(config.repositories_base())
        } else {
            discovery::repositories_from_list(&config.repositories)
        };
        summary.repositories_found = repos.len();

        if repos.is_empty() {
            log::warn!("No git repositories found in {}", config.repositories_base().display());
        } else {
            let report = sync::sync_all(vcs, &repos, &config.commit_message);
            report::log_sync_report(&report);

            summary.updated = report.updated();
            summary.sync_failures = report
                .outcomes
                .iter()
                .filter(|o| matches!(o, SyncOutcome::Failed { .. }))
                .map(|o| o.name().to_string())
                .collect();
        }
    }

    if !pipelines.any() {
        log::warn!("No backup target specified");
    }

    log::info!("===== BACKUP END =====");
    log::info!("Archive summary: {:?}", summary.archived);
    log::info!("Repository summary: {:?}", summary.updated);

    summary
}
