//! Status command - show what the next backup run would do

use chrono::Local;

use projbackup::config::BackupConfig;
use projbackup::discovery;
use projbackup::git;
use projbackup::output::{OutputMode, ProjectStatus, RepositoryStatus, StatusReport};

/// Show projects, today's archive state and repositories
pub fn status(config: &BackupConfig, mode: OutputMode) -> anyhow::Result<()> {
    let today = Local::now().date_naive();

    let projects = discovery::list_projects(&config.projects_root)
        .unwrap_or_default()
        .into_iter()
        .map(|project| {
            let artifact = project.artifact_name(today, config.format);
            ProjectStatus {
                archived_today: config.destination_root.join(&artifact).exists(),
                name: project.name,
                artifact,
            }
        })
        .collect();

    let repos = if config.repositories.is_empty() {
        discovery::find_repositories(config.repositories_base())
    } else {
        discovery::repositories_from_list(&config.repositories)
    };

    let repositories = repos
        .into_iter()
        .map(|repo| {
            let (pending, error) = match git::pending_changes(&repo.path) {
                Ok(n) => (Some(n), None),
                Err(err) => (None, Some(err.message().to_string())),
            };
            RepositoryStatus {
                name: repo.name,
                path: repo.path.display().to_string(),
                pending,
                error,
            }
        })
        .collect();

    StatusReport {
        projects_root: config.projects_root.display().to_string(),
        projects_root_exists: config.projects_root.is_dir(),
        destination_root: config.destination_root.display().to_string(),
        format: config.format.to_string(),
        projects,
        repositories,
    }
    .render(mode);

    Ok(())
}
