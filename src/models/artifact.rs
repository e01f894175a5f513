//! Artifact naming
//!
//! The artifact file name is the only de-duplication key: one artifact per
//! (project, date, format). Contents are never compared.

use chrono::NaiveDate;

use super::ArchiveFormat;

/// Build the artifact file name `{project}_{YYYYMMDD}.{ext}`
#[must_use]
pub fn artifact_name(project: &str, date: NaiveDate, format: ArchiveFormat) -> String {
    format!("{project}_{}.{}", date.format("%Y%m%d"), format.extension())
}
