//! `VersionControl` implemented by shelling out to the git binary

use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, Output};

use super::{CommitStatus, GitError, VersionControl, is_nothing_to_commit};

/// Git adapter that runs the `git` executable in each working copy
#[derive(Debug, Clone)]
pub struct GitCli {
    program: OsString,
}

impl GitCli {
    /// Use `git` from `PATH`
    #[must_use]
    pub fn new() -> Self {
        Self::with_program("git")
    }

    /// Use a specific git executable
    #[must_use]
    pub fn with_program(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn describe(args: &[&str]) -> String {
        format!("git {}", args.join(" "))
    }

    /// Run git in `repo`, returning output regardless of exit status
    fn run(&self, repo: &Path, args: &[&str]) -> Result<Output, GitError> {
        Command::new(&self.program)
            .args(args)
            .current_dir(repo)
            // Untranslated messages keep the nothing-to-commit check reliable
            .env("LC_ALL", "C")
            // Never block waiting for credentials
            .env("GIT_TERMINAL_PROMPT", "0")
            .output()
            .map_err(|source| GitError::Spawn {
                command: Self::describe(args),
                source,
            })
    }

    /// Run git in `repo` and require a zero exit status
    fn run_checked(&self, repo: &Path, args: &[&str]) -> Result<Output, GitError> {
        let output = self.run(repo, args)?;
        if output.status.success() {
            Ok(output)
        } else {
            Err(failure(args, &output))
        }
    }
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new()
    }
}

fn failure(args: &[&str], output: &Output) -> GitError {
    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
    let detail = if stderr.is_empty() {
        String::from_utf8_lossy(&output.stdout).trim().to_string()
    } else {
        stderr
    };
    GitError::CommandFailed {
        command: GitCli::describe(args),
        status: output.status.to_string(),
        detail,
    }
}

impl VersionControl for GitCli {
    fn stage_all(&self, repo: &Path) -> Result<(), GitError> {
        self.run_checked(repo, &["add", "."])?;
        Ok(())
    }

    fn commit(&self, repo: &Path, message: &str) -> Result<CommitStatus, GitError> {
        let args = ["commit", "-m", message];
        let output = self.run(repo, &args)?;

        if output.status.success() {
            return Ok(CommitStatus::Created);
        }
        // git exits 1 on an empty changeset
        if is_nothing_to_commit(&String::from_utf8_lossy(&output.stdout)) {
            Ok(CommitStatus::NothingToCommit)
        } else {
            Err(failure(&args, &output))
        }
    }

    fn push(&self, repo: &Path) -> Result<(), GitError> {
        self.run_checked(repo, &["push"])?;
        Ok(())
    }
}
