//! Initialize a projbackup config file

use std::path::Path;

use projbackup::config::BackupConfig;
use projbackup::output::{OperationResult, OutputMode};
use projbackup::paths;

/// Write a default config file at `path`
pub fn init(
    path: &Path,
    mut config: BackupConfig,
    force: bool,
    mode: OutputMode,
) -> anyhow::Result<()> {
    if path.exists() && !force {
        OperationResult {
            success: false,
            message: format!(
                "Config already exists at {}. Use --force to overwrite.",
                path.display()
            ),
        }
        .render(mode);
        return Ok(());
    }

    if config.log_file.is_none() {
        config.log_file = Some(paths::default_log_file());
    }
    config.save(path)?;

    OperationResult {
        success: true,
        message: format!("Created {}", path.display()),
    }
    .render(mode);

    Ok(())
}
