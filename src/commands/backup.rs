//! Backup command - run the selected pipelines

use chrono::Local;

use projbackup::config::BackupConfig;
use projbackup::git::GitCli;
use projbackup::output::OutputMode;
use projbackup::runner::{self, Pipelines};

/// Run a backup with the selected pipelines
pub fn backup(config: &BackupConfig, pipelines: Pipelines, mode: OutputMode) -> anyhow::Result<()> {
    if mode == OutputMode::Human && pipelines.any() {
        println!("Starting backup...");
    }

    let git = GitCli::new();
    let summary = runner::run(config, pipelines, &git, Local::now().date_naive());
    summary.render(mode);

    Ok(())
}
