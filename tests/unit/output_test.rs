//! Tests for the Output module
//!
//! Output provides structured result types that can be rendered as either
//! human-readable text or machine-parseable JSON.

use projbackup::output::{OutputMode, RepositoryStatus, RunSummary};

#[test]
fn output_mode_default() {
    assert_eq!(OutputMode::default(), OutputMode::Human);
}

#[test]
fn run_summary_serialization() {
    let summary = RunSummary {
        archive_ran: true,
        sync_ran: true,
        archived: vec!["api_20240307.zip".to_string()],
        repositories_found: 2,
        updated: vec!["web".to_string()],
        ..RunSummary::default()
    };

    let json: serde_json::Value = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["archived"][0], "api_20240307.zip");
    assert_eq!(json["updated"][0], "web");
    assert_eq!(json["repositories_found"], 2);
    assert!(json["sync_failures"].as_array().unwrap().is_empty());
}

#[test]
fn repository_status_omits_missing_fields() {
    let status = RepositoryStatus {
        name: "api".to_string(),
        path: "/work/api".to_string(),
        pending: Some(3),
        error: None,
    };

    let json = serde_json::to_string(&status).unwrap();
    assert!(json.contains("\"pending\":3"));
    assert!(!json.contains("error"));
}
