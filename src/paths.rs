//! Centralized path definitions for projbackup
//!
//! ## Storage Layout
//!
//! ```text
//! ~/.projbackup/
//! ├── config.toml        # Roots, format, commit message, log file
//! └── backup.log         # Append-only activity log (when configured)
//!
//! <destination_root>/
//! ├── api_20240307.zip
//! └── webapp_20240307.zip
//! ```

use std::path::{Path, PathBuf};

/// Directory name that marks a git working copy
pub const GIT_MARKER: &str = ".git";

/// Global config directory name
const GLOBAL_DIR: &str = ".projbackup";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Default log filename
const LOG_FILE: &str = "backup.log";

/// Default projects root, relative to the home directory
const DEFAULT_PROJECTS_DIR: &str = "projects";

/// Default destination root, relative to the home directory
const DEFAULT_DESTINATION_DIR: &str = "backups";

fn home_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~"))
}

/// Get the global projbackup directory.
///
/// Returns `~/.projbackup/`.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    home_dir().join(GLOBAL_DIR)
}

/// Get the default config file path.
///
/// Returns `~/.projbackup/config.toml`.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG_FILE)
}

/// Get the default log file path written into fresh configs.
///
/// Returns `~/.projbackup/backup.log`.
#[must_use]
pub fn default_log_file() -> PathBuf {
    global_config_dir().join(LOG_FILE)
}

/// Default root scanned for projects (`~/projects`)
#[must_use]
pub fn default_projects_root() -> PathBuf {
    home_dir().join(DEFAULT_PROJECTS_DIR)
}

/// Default destination for archives (`~/backups`)
#[must_use]
pub fn default_destination_root() -> PathBuf {
    home_dir().join(DEFAULT_DESTINATION_DIR)
}

/// Whether `dir` contains the git metadata marker
#[must_use]
pub fn has_git_marker(dir: &Path) -> bool {
    dir.join(GIT_MARKER).exists()
}
