//! Data models for projbackup
//!
//! Core abstractions:
//! - Project: a top-level directory under the projects root (one backup unit)
//! - Artifact: the dated archive file produced for a project
//! - Repository: a directory that is a git working copy

mod artifact;
mod format;
mod project;
mod repository;

pub use artifact::artifact_name;
pub use format::ArchiveFormat;
pub use project::Project;
pub use repository::Repository;
