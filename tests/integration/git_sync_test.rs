//! End-to-end repository synchronization against real git and bare remotes

use std::fs;

use predicates::prelude::*;

use crate::common::fixtures::ProjectTree;
use crate::common::git_repo::{TempGitRepo, git};
use crate::{log_path, projbackup_in};

#[test]
fn test_github_pushes_only_changed_repositories() {
    let tree = ProjectTree::new();
    let clean = TempGitRepo::new(&tree.root(), "clean");
    let changed = TempGitRepo::new(&tree.root(), "changed");
    tree.add_file("plain", "notes.txt", b"not a repo");

    changed.write_file("src/lib.rs", "pub fn f() {}\n");

    projbackup_in(&tree)
        .arg("--github")
        .assert()
        .success()
        .stdout(predicate::str::contains("Repositories updated: [changed]"));

    assert_eq!(changed.remote_commit_count(), 2);
    assert_eq!(changed.remote_head_subject(), "Backup automático");
    assert_eq!(clean.remote_commit_count(), 1);

    let log = fs::read_to_string(log_path(tree.path())).unwrap();
    assert!(log.contains("No changes in clean, commit skipped"));
    assert!(log.contains("Remote backup done for changed"));
}

#[test]
fn test_failing_repository_is_isolated() {
    let tree = ProjectTree::new();
    let first = tree.root().join("a-broken");
    fs::create_dir_all(first.join(".git")).unwrap(); // marker without a real repository
    let clean = TempGitRepo::new(&tree.root(), "b-clean");
    let changed = TempGitRepo::new(&tree.root(), "c-changed");
    changed.write_file("new.txt", "hello\n");

    projbackup_in(&tree)
        .arg("--github")
        .assert()
        .success()
        .stdout(predicate::str::contains("Repositories updated: [c-changed]"))
        .stdout(predicate::str::contains("Failed: [a-broken]"));

    assert_eq!(changed.remote_commit_count(), 2);
    assert_eq!(clean.remote_commit_count(), 1);

    let log = fs::read_to_string(log_path(tree.path())).unwrap();
    assert!(log.contains("ERROR - Error in repo a-broken (stage)"));
    assert!(log.contains("No changes in b-clean, commit skipped"));
}

#[test]
fn test_push_failure_is_reported() {
    let tree = ProjectTree::new();
    let repo = TempGitRepo::new(&tree.root(), "api");
    git(repo.path(), &["remote", "set-url", "origin", "/nonexistent/remote.git"]);
    repo.write_file("change.txt", "x\n");

    projbackup_in(&tree)
        .arg("--github")
        .assert()
        .success()
        .stdout(predicate::str::contains("Repositories updated: []"));

    let log = fs::read_to_string(log_path(tree.path())).unwrap();
    assert!(log.contains("Error in repo api (push)"));
}

#[test]
fn test_no_repositories_found() {
    let tree = ProjectTree::new();
    tree.add_file("plain", "a.txt", b"a");

    projbackup_in(&tree)
        .arg("--github")
        .assert()
        .success()
        .stdout(predicate::str::contains("No git repositories found"));
}
