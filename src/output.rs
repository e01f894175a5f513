//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use serde::Serialize;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Summary of one backup run
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunSummary {
    /// Archiving pipeline was selected
    pub archive_ran: bool,
    /// Repository pipeline was selected
    pub sync_ran: bool,
    /// Artifact names created this run
    pub archived: Vec<String>,
    /// Projects whose archive failed
    pub archive_failures: Vec<String>,
    /// Repositories considered for synchronization
    pub repositories_found: usize,
    /// Repositories committed and pushed this run
    pub updated: Vec<String>,
    /// Repositories whose synchronization failed
    pub sync_failures: Vec<String>,
}

/// Status of one project
#[derive(Debug, Clone, Serialize)]
pub struct ProjectStatus {
    /// Project name
    pub name: String,
    /// Today's artifact name
    pub artifact: String,
    /// Whether today's artifact already exists
    pub archived_today: bool,
}

/// Status of one repository
#[derive(Debug, Clone, Serialize)]
pub struct RepositoryStatus {
    /// Repository name
    pub name: String,
    /// Working copy path
    pub path: String,
    /// Changed or untracked files, if readable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending: Option<usize>,
    /// Why the status could not be read
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Result of the status command
#[derive(Debug, Clone, Serialize)]
pub struct StatusReport {
    /// Projects root
    pub projects_root: String,
    /// Whether the projects root exists
    pub projects_root_exists: bool,
    /// Destination root
    pub destination_root: String,
    /// Archive format
    pub format: String,
    /// Projects found under the root
    pub projects: Vec<ProjectStatus>,
    /// Repositories that would be synchronized
    pub repositories: Vec<RepositoryStatus>,
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

fn list(items: &[String]) -> String {
    format!("[{}]", items.join(", "))
}

impl RunSummary {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if !self.archive_ran && !self.sync_ran {
            println!("No backup target specified. Use --nas and/or --github");
            return;
        }

        if self.archive_ran {
            println!("Archives created: {}", list(&self.archived));
            if !self.archive_failures.is_empty() {
                println!("  Failed: {}", list(&self.archive_failures));
            }
        }

        if self.sync_ran {
            if self.repositories_found == 0 {
                println!("No git repositories found in the base folder.");
            } else {
                println!("Repositories updated: {}", list(&self.updated));
                if !self.sync_failures.is_empty() {
                    println!("  Failed: {}", list(&self.sync_failures));
                }
            }
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

impl StatusReport {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        println!("Projects root: {}", self.projects_root);
        println!("Destination:   {} ({})", self.destination_root, self.format);
        println!();

        if !self.projects_root_exists {
            println!("Projects: root does not exist");
        } else if self.projects.is_empty() {
            println!("Projects: none");
        } else {
            println!("Projects: {}", self.projects.len());
            for p in &self.projects {
                let mark = if p.archived_today { "done" } else { "pending" };
                println!("  • {} [{mark}] {}", p.name, p.artifact);
            }
        }

        println!();
        if self.repositories.is_empty() {
            println!("Repositories: none");
        } else {
            println!("Repositories: {}", self.repositories.len());
            for r in &self.repositories {
                match (r.pending, &r.error) {
                    (Some(0), _) => println!("  • {} (clean)", r.name),
                    (Some(n), _) => println!("  • {} ({n} pending)", r.name),
                    (None, Some(err)) => println!("  • {} (unreadable: {err})", r.name),
                    (None, None) => println!("  • {}", r.name),
                }
            }
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}
