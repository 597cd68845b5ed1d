//! End-to-end pipeline tests
//!
//! Drive `run()` against a mock Directus instance and a temporary project
//! root, asserting on the written reference file.

use std::fs;
use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use schema_loader::{run, LoadError};
use serde_json::json;
use tempfile::tempdir;

use crate::common::{single_schema_spec, unreachable_config, MockDirectusServer};

fn reference_path(root: &Path) -> PathBuf {
    root.join("reference").join("schema.json")
}

#[tokio::test]
async fn test_successful_run_writes_reference_file() {
    let server = MockDirectusServer::start().await;
    server.mock_oas_success(single_schema_spec()).await;
    let root = tempdir().unwrap();

    assert!(!root.path().join("reference").exists());

    let summary = run(&server.config(), root.path()).await.unwrap();

    assert_eq!(summary.schema_count, 1);
    assert!(summary.path.is_absolute());

    let written = fs::read_to_string(reference_path(root.path())).unwrap();
    assert_eq!(written, "{\n  \"A\": {\n    \"type\": \"object\"\n  }\n}");
}

#[tokio::test]
async fn test_second_run_replaces_previous_content() {
    let root = tempdir().unwrap();

    let first = MockDirectusServer::start().await;
    first.mock_oas_success(single_schema_spec()).await;
    run(&first.config(), root.path()).await.unwrap();

    let second = MockDirectusServer::start().await;
    second
        .mock_oas_success(json!({
            "components": { "schemas": { "B": { "type": "string" } } }
        }))
        .await;
    run(&second.config(), root.path()).await.unwrap();

    let written = fs::read_to_string(reference_path(root.path())).unwrap();
    assert_eq!(written, "{\n  \"B\": {\n    \"type\": \"string\"\n  }\n}");
}

#[tokio::test]
async fn test_empty_schema_section_writes_nothing() {
    let server = MockDirectusServer::start().await;
    server
        .mock_oas_success(json!({ "components": { "schemas": {} } }))
        .await;
    let root = tempdir().unwrap();

    let err = run(&server.config(), root.path()).await.unwrap_err();

    assert!(matches!(err, LoadError::EmptySchema));
    assert!(!reference_path(root.path()).exists());
}

#[tokio::test]
async fn test_missing_components_section_writes_nothing() {
    let server = MockDirectusServer::start().await;
    server
        .mock_oas_success(json!({ "openapi": "3.0.1", "paths": {} }))
        .await;
    let root = tempdir().unwrap();

    let err = run(&server.config(), root.path()).await.unwrap_err();

    assert!(matches!(err, LoadError::EmptySchema));
    assert!(!reference_path(root.path()).exists());
}

#[tokio::test]
async fn test_failed_fetch_writes_nothing() {
    let server = MockDirectusServer::start().await;
    server.mock_oas_status(500).await;
    let root = tempdir().unwrap();

    let err = run(&server.config(), root.path()).await.unwrap_err();

    assert!(matches!(err, LoadError::UnexpectedStatus { status: 500, .. }));
    assert!(!reference_path(root.path()).exists());
}

#[tokio::test]
async fn test_connection_failure_writes_nothing() {
    let root = tempdir().unwrap();

    let err = run(&unreachable_config(), root.path()).await.unwrap_err();

    assert!(matches!(err, LoadError::Connection(_)));
    assert!(!reference_path(root.path()).exists());
}

#[tokio::test]
async fn test_malformed_body_is_unexpected_error() {
    let server = MockDirectusServer::start().await;
    server.mock_oas_malformed().await;
    let root = tempdir().unwrap();

    let err = run(&server.config(), root.path()).await.unwrap_err();

    assert!(matches!(err, LoadError::Unexpected(_)));
    assert!(!reference_path(root.path()).exists());
}

#[tokio::test]
async fn test_non_ascii_schema_content_round_trips_unescaped() {
    let server = MockDirectusServer::start().await;
    server
        .mock_oas_success(json!({
            "components": {
                "schemas": {
                    "Café": { "description": "héllo wörld" }
                }
            }
        }))
        .await;
    let root = tempdir().unwrap();

    run(&server.config(), root.path()).await.unwrap();

    let written = fs::read_to_string(reference_path(root.path())).unwrap();
    assert!(written.contains("Café"));
    assert!(written.contains("héllo wörld"));
    assert!(!written.contains("\\u"));
}
