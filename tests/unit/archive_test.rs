//! Tests for the archiver: naming, de-duplication and archive contents

use std::fs;

use chrono::NaiveDate;
use projbackup::archive::{ArchiveOutcome, archive_all_on};
use projbackup::discovery::DiscoveryError;
use projbackup::models::ArchiveFormat;

use crate::common::fixtures::{ProjectTree, files_under, tar_gz_entries, zip_entries};

fn march_7() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 7).unwrap()
}

// =============================================================================
// DE-DUPLICATION
// =============================================================================

#[test]
fn second_run_same_day_creates_nothing() {
    let tree = ProjectTree::new();
    tree.add_nested_project("api");
    tree.add_file("webapp", "index.html", b"<html></html>");

    let first = archive_all_on(&tree.root(), &tree.destination(), ArchiveFormat::Zip, march_7());
    assert_eq!(first.created(), vec!["api_20240307.zip", "webapp_20240307.zip"]);

    let artifact = tree.destination().join("api_20240307.zip");
    let bytes_before = fs::read(&artifact).unwrap();

    // Change the project; the existing artifact must still win
    tree.add_file("api", "src/new.rs", b"// new\n");
    let second = archive_all_on(&tree.root(), &tree.destination(), ArchiveFormat::Zip, march_7());

    assert!(second.created().is_empty());
    assert!(second.outcomes.iter().all(|o| matches!(o, ArchiveOutcome::Skipped { .. })));
    assert_eq!(fs::read(&artifact).unwrap(), bytes_before);
    assert_eq!(fs::read_dir(tree.destination()).unwrap().count(), 2);
}

#[test]
fn new_day_creates_new_artifact() {
    let tree = ProjectTree::new();
    tree.add_file("api", "a.txt", b"a");

    let _ = archive_all_on(&tree.root(), &tree.destination(), ArchiveFormat::Zip, march_7());
    let next_day = NaiveDate::from_ymd_opt(2024, 3, 8).unwrap();
    let report = archive_all_on(&tree.root(), &tree.destination(), ArchiveFormat::Zip, next_day);

    assert_eq!(report.created(), vec!["api_20240308.zip"]);
}

#[test]
fn formats_are_deduplicated_independently() {
    let tree = ProjectTree::new();
    tree.add_file("api", "a.txt", b"a");

    let zip = archive_all_on(&tree.root(), &tree.destination(), ArchiveFormat::Zip, march_7());
    let tgz = archive_all_on(&tree.root(), &tree.destination(), ArchiveFormat::TarGz, march_7());

    assert_eq!(zip.created(), vec!["api_20240307.zip"]);
    assert_eq!(tgz.created(), vec!["api_20240307.tar.gz"]);
}

#[test]
fn loose_files_in_root_are_not_projects() {
    let tree = ProjectTree::new();
    tree.add_file("api", "a.txt", b"a");
    fs::write(tree.root().join("notes.txt"), "not a project").unwrap();

    let report = archive_all_on(&tree.root(), &tree.destination(), ArchiveFormat::Zip, march_7());
    assert_eq!(report.created(), vec!["api_20240307.zip"]);
}

// =============================================================================
// MISSING ROOT
// =============================================================================

#[test]
fn missing_projects_root_is_empty_and_leaves_destination_alone() {
    let tree = ProjectTree::new();
    let missing = tree.path().join("does-not-exist");

    let report = archive_all_on(&missing, &tree.destination(), ArchiveFormat::Zip, march_7());

    assert!(report.created().is_empty());
    assert!(report.outcomes.is_empty());
    assert!(matches!(report.scan_error, Some(DiscoveryError::RootNotFound(_))));
    assert!(!tree.destination().exists());
}

// =============================================================================
// CONTENTS
// =============================================================================

#[test]
fn zip_contains_every_file_relative_to_project() {
    let tree = ProjectTree::new();
    tree.add_nested_project("api");

    let _ = archive_all_on(&tree.root(), &tree.destination(), ArchiveFormat::Zip, march_7());

    let entries = zip_entries(&tree.destination().join("api_20240307.zip"));
    let source = files_under(&tree.root().join("api"));
    assert_eq!(entries, source);
    assert!(entries.contains_key("src/api/routes.rs"));
    assert!(entries.contains_key(".env"));
}

#[test]
fn tar_gz_nests_files_under_project_name() {
    let tree = ProjectTree::new();
    tree.add_nested_project("api");
    fs::create_dir_all(tree.root().join("api/empty")).unwrap();

    let _ = archive_all_on(&tree.root(), &tree.destination(), ArchiveFormat::TarGz, march_7());

    let (files, dirs) = tar_gz_entries(&tree.destination().join("api_20240307.tar.gz"));
    assert!(files.keys().all(|name| name.starts_with("api/")));
    assert!(dirs.contains(&"api".to_string()));
    assert!(dirs.contains(&"api/empty".to_string()));

    let stripped: std::collections::BTreeMap<_, _> = files
        .into_iter()
        .map(|(name, content)| (name.trim_start_matches("api/").to_string(), content))
        .collect();
    assert_eq!(stripped, files_under(&tree.root().join("api")));
}

#[test]
fn zip_and_tar_gz_hold_identical_files() {
    let tree = ProjectTree::new();
    tree.add_nested_project("api");

    let _ = archive_all_on(&tree.root(), &tree.destination(), ArchiveFormat::Zip, march_7());
    let _ = archive_all_on(&tree.root(), &tree.destination(), ArchiveFormat::TarGz, march_7());

    let from_zip = zip_entries(&tree.destination().join("api_20240307.zip"));
    let (from_tar, _) = tar_gz_entries(&tree.destination().join("api_20240307.tar.gz"));
    let from_tar: std::collections::BTreeMap<_, _> = from_tar
        .into_iter()
        .map(|(name, content)| (name.strip_prefix("api/").unwrap().to_string(), content))
        .collect();

    assert_eq!(from_zip, from_tar);
}

#[test]
fn empty_project_produces_valid_archive() {
    let tree = ProjectTree::new();
    fs::create_dir_all(tree.root().join("blank")).unwrap();

    let report = archive_all_on(&tree.root(), &tree.destination(), ArchiveFormat::Zip, march_7());

    assert_eq!(report.created(), vec!["blank_20240307.zip"]);
    assert!(zip_entries(&tree.destination().join("blank_20240307.zip")).is_empty());
}

// =============================================================================
// SYMLINKS
// =============================================================================

#[cfg(unix)]
#[test]
fn file_symlinks_are_stored_as_content_and_dir_symlinks_skipped() {
    use std::os::unix::fs::symlink;

    let tree = ProjectTree::new();
    tree.add_file("api", "config.toml", b"port = 8080\n");
    fs::create_dir_all(tree.path().join("shared")).unwrap();
    fs::write(tree.path().join("shared/lib.rs"), "pub fn shared() {}\n").unwrap();

    let project = tree.root().join("api");
    symlink(project.join("config.toml"), project.join("current.toml")).unwrap();
    symlink(tree.path().join("shared"), project.join("vendor")).unwrap();

    let _ = archive_all_on(&tree.root(), &tree.destination(), ArchiveFormat::Zip, march_7());
    let _ = archive_all_on(&tree.root(), &tree.destination(), ArchiveFormat::TarGz, march_7());

    let from_zip = zip_entries(&tree.destination().join("api_20240307.zip"));
    assert_eq!(from_zip.keys().collect::<Vec<_>>(), vec!["config.toml", "current.toml"]);
    assert_eq!(from_zip["current.toml"], b"port = 8080\n");

    let (files, dirs) = tar_gz_entries(&tree.destination().join("api_20240307.tar.gz"));
    assert_eq!(files.keys().collect::<Vec<_>>(), vec!["api/config.toml", "api/current.toml"]);
    assert_eq!(files["api/current.toml"], b"port = 8080\n");
    assert!(!dirs.iter().any(|d| d.starts_with("api/vendor")));
}
