//! Logger setup
//!
//! Lines look like `2024-03-07 02:00:01,026 - INFO - message`. When a log
//! file is configured it is opened in append mode; otherwise logs go to stderr.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use chrono::Local;
use env_logger::{Builder, Env, Target};
use thiserror::Error;

/// Errors while installing the logger
#[derive(Debug, Error)]
pub enum LoggingError {
    /// Log file could not be opened
    #[error("cannot open log file {path}: {source}")]
    Open {
        /// Log file path
        path: String,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// A global logger was already installed
    #[error("logger already initialized: {0}")]
    AlreadySet(#[from] log::SetLoggerError),
}

/// Build the logger without installing it.
///
/// `RUST_LOG` takes precedence over the default level.
pub fn builder(verbose: bool, log_file: Option<&Path>) -> Result<Builder, LoggingError> {
    let level = if verbose { "debug" } else { "info" };
    let mut builder = Builder::from_env(Env::default().default_filter_or(level));

    builder.format(|buf, record| {
        writeln!(
            buf,
            "{} - {} - {}",
            Local::now().format("%Y-%m-%d %H:%M:%S,%3f"),
            record.level(),
            record.args()
        )
    });

    if let Some(path) = log_file {
        let open_err = |source| LoggingError::Open {
            path: path.display().to_string(),
            source,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(open_err)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(path).map_err(open_err)?;
        builder.target(Target::Pipe(Box::new(file)));
    }

    Ok(builder)
}

/// Install the global logger
pub fn init(verbose: bool, log_file: Option<&Path>) -> Result<(), LoggingError> {
    builder(verbose, log_file)?.try_init()?;
    Ok(())
}
