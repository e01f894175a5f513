//! Backup configuration
//!
//! A single `BackupConfig` value is built once at startup (file + CLI
//! overrides) and passed by reference into the archiver and synchronizer.
//! The file is stored at `~/.projbackup/config.toml` by default.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::ArchiveFormat;
use crate::paths;

/// Commit message used for automatic backup commits
pub const DEFAULT_COMMIT_MESSAGE: &str = "Backup automático";

/// Errors raised while reading or writing the config file
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file exists but could not be read
    #[error("failed to read config {path}: {source}")]
    Read {
        /// Config file path
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// Config file is not valid TOML for this schema
    #[error("invalid config {path}: {source}")]
    Parse {
        /// Config file path
        path: PathBuf,
        /// Underlying TOML error
        source: toml::de::Error,
    },

    /// Config could not be serialized
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Config file could not be written
    #[error("failed to write config {path}: {source}")]
    Write {
        /// Config file path
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },
}

/// projbackup configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupConfig {
    /// Directory whose direct children are archived as projects
    #[serde(default = "paths::default_projects_root")]
    pub projects_root: PathBuf,

    /// Directory receiving the dated archives
    #[serde(default = "paths::default_destination_root")]
    pub destination_root: PathBuf,

    /// Directory scanned for git working copies (defaults to `projects_root`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repositories_root: Option<PathBuf>,

    /// Explicit repository list; replaces discovery when non-empty
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub repositories: Vec<PathBuf>,

    /// Archive container format
    #[serde(default)]
    pub format: ArchiveFormat,

    /// Message for automatic backup commits
    #[serde(default = "default_commit_message")]
    pub commit_message: String,

    /// Append-only log file (stderr when unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

fn default_commit_message() -> String {
    DEFAULT_COMMIT_MESSAGE.to_string()
}

impl Default for BackupConfig {
    fn default() -> Self {
        Self {
            projects_root: paths::default_projects_root(),
            destination_root: paths::default_destination_root(),
            repositories_root: None,
            repositories: Vec::new(),
            format: ArchiveFormat::default(),
            commit_message: default_commit_message(),
            log_file: None,
        }
    }
}

/// Command-line values that take precedence over the config file
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// Replaces `projects_root`
    pub projects_root: Option<PathBuf>,
    /// Replaces `destination_root`
    pub destination_root: Option<PathBuf>,
    /// Replaces `repositories_root`
    pub repositories_root: Option<PathBuf>,
    /// Replaces `format`
    pub format: Option<ArchiveFormat>,
    /// Replaces `log_file`
    pub log_file: Option<PathBuf>,
}

impl BackupConfig {
    /// Load config from `path`, or defaults if the file does not exist
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse config from TOML text
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Save config to `path`, creating parent directories
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        let write_err = |source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        fs::write(path, content).map_err(write_err)
    }

    /// Apply command-line overrides on top of the loaded values
    #[must_use]
    pub fn apply_overrides(mut self, overrides: Overrides) -> Self {
        if let Some(root) = overrides.projects_root {
            self.projects_root = root;
        }
        if let Some(dest) = overrides.destination_root {
            self.destination_root = dest;
        }
        if let Some(root) = overrides.repositories_root {
            self.repositories_root = Some(root);
        }
        if let Some(format) = overrides.format {
            self.format = format;
        }
        if let Some(log_file) = overrides.log_file {
            self.log_file = Some(log_file);
        }
        self
    }

    /// Directory scanned for repositories
    #[must_use]
    pub fn repositories_base(&self) -> &Path {
        self.repositories_root.as_deref().unwrap_or(&self.projects_root)
    }
}
