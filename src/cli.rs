//! CLI definitions and entry point

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::commands;
use projbackup::config::{BackupConfig, Overrides};
use projbackup::models::ArchiveFormat;
use projbackup::output::OutputMode;
use projbackup::paths;
use projbackup::runner::Pipelines;

/// projbackup - Scheduled project backups
#[derive(Parser, Debug)]
#[command(
    name = "projbackup",
    version,
    about = "Archive projects to network storage and push git repositories",
    long_about = "Back up a folder of projects.\n\n\
                  --nas writes one dated archive per project to the destination,\n\
                  skipping projects already archived today.\n\
                  --github commits and pushes every git working copy with local changes."
)]
pub struct Cli {
    /// Archive every project into the destination folder
    #[arg(long, alias = "archive")]
    pub nas: bool,

    /// Commit and push every git repository with changes
    #[arg(long, alias = "sync")]
    pub github: bool,

    /// Config file (default: ~/.projbackup/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Folder containing the projects
    #[arg(long, global = true)]
    pub projects_root: Option<PathBuf>,

    /// Folder receiving the archives
    #[arg(long, global = true)]
    pub destination: Option<PathBuf>,

    /// Folder scanned for git repositories (default: projects root)
    #[arg(long, global = true)]
    pub repos_root: Option<PathBuf>,

    /// Archive format: zip, tar.gz
    #[arg(short, long, global = true)]
    pub format: Option<ArchiveFormat>,

    /// Append log lines to this file instead of stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a default config file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },

    /// Show projects, today's archive state and repositories
    Status,
}

impl Cli {
    fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(paths::global_config)
    }

    fn overrides(&self) -> Overrides {
        Overrides {
            projects_root: self.projects_root.clone(),
            destination_root: self.destination.clone(),
            repositories_root: self.repos_root.clone(),
            format: self.format,
            log_file: self.log_file.clone(),
        }
    }
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let config_path = cli.config_path();

    match cli.command {
        Some(Command::Init { force }) => {
            let config = BackupConfig::default().apply_overrides(cli.overrides());
            commands::init(&config_path, config, force, output_mode)
        },
        Some(Command::Status) => {
            let config = load_config(&cli, &config_path)?;
            commands::status(&config, output_mode)
        },
        None => {
            let config = load_config(&cli, &config_path)?;
            let pipelines = Pipelines {
                archive: cli.nas,
                sync: cli.github,
            };
            commands::backup(&config, pipelines, output_mode)
        },
    }
}

/// Load the config file, apply flags and install the logger
fn load_config(cli: &Cli, path: &Path) -> anyhow::Result<BackupConfig> {
    let config = BackupConfig::load(path)?.apply_overrides(cli.overrides());
    projbackup::logging::init(cli.verbose, config.log_file.as_deref())?;
    Ok(config)
}
