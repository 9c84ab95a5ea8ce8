#![allow(clippy::unwrap_used, clippy::panic, missing_debug_implementations, unreachable_pub)]
use reqwest::StatusCode;
use serde_json::{Value, json};
use tempfile::TempDir;

mod common;

#[tokio::test]
async fn test_submission_is_persisted_to_data_file() {
    let app = common::TestApp::spawn().await;

    app.post_contact(&common::valid_contact("Persisted")).await;

    let raw = std::fs::read_to_string(&app.data_file).unwrap();
    let stored: Value = serde_json::from_str(&raw).unwrap();
    let entry = &stored[0];
    assert_eq!(entry["id"], 1);
    assert_eq!(entry["name"], "Persisted");
    assert_eq!(entry["email"], "test@example.com");
    assert!(entry["created_at"].is_string());
}

#[tokio::test]
async fn test_existing_file_continues_numbering() {
    let data_dir = TempDir::new().unwrap();
    let data_file = data_dir.path().join("contact_forms.json");
    std::fs::write(
        &data_file,
        serde_json::to_vec_pretty(&json!([
            {"id": 1, "name": "Alice", "email": "alice@example.com", "message": "one", "created_at": "2024-05-01T09:30:00.000001"},
            {"id": 2, "name": "Bob", "email": "bob@example.com", "message": "two", "created_at": "2024-05-02T10:00:00+00:00"}
        ]))
        .unwrap(),
    )
    .unwrap();

    let app = common::TestApp::spawn_with_data_file(data_dir, data_file).await;

    let contacts: Vec<Value> = app.list_contacts().await.json().await.unwrap();
    assert_eq!(contacts.len(), 2);
    assert_eq!(contacts[0], json!({"id": 1, "name": "Alice", "email": "alice@example.com", "message": "one"}));

    let body: Value = app.post_contact(&common::valid_contact("Carol")).await.json().await.unwrap();
    assert_eq!(body["id"], 3);
}

#[tokio::test]
async fn test_malformed_file_lists_empty_and_next_submission_restarts_ids() {
    let data_dir = TempDir::new().unwrap();
    let data_file = data_dir.path().join("contact_forms.json");
    std::fs::write(&data_file, "this is not json").unwrap();

    let app = common::TestApp::spawn_with_data_file(data_dir, data_file).await;

    let resp = app.list_contacts().await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!([]));

    let resp = app.post_contact(&common::valid_contact("Recovered")).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["id"], 1);
    assert_eq!(body["name"], "Recovered");

    let contacts: Vec<Value> = app.list_contacts().await.json().await.unwrap();
    assert_eq!(contacts.len(), 1);

    let corrupt_file = app.data_file.with_file_name("contact_forms.json.corrupt");
    assert_eq!(std::fs::read_to_string(corrupt_file).unwrap(), "this is not json");
}

#[tokio::test]
async fn test_unreadable_store_is_internal_error() {
    let data_dir = TempDir::new().unwrap();
    // A directory cannot be read as a file, which is an I/O error rather than "missing".
    let data_file = data_dir.path().join("store_dir");
    std::fs::create_dir(&data_file).unwrap();

    let app = common::TestApp::spawn_with_data_file(data_dir, data_file).await;

    let resp = app.list_contacts().await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({"detail": "Failed to fetch contacts"}));

    let resp = app.post_contact(&common::valid_contact("Nope")).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = resp.json().await.unwrap();
    let detail = body["detail"].as_str().unwrap();
    assert_eq!(detail, "Failed to submit contact form");
    assert!(!detail.contains("store_dir"));
}
