//! Integration tests for journal entries, including the owner-only read

mod common;

use axum::http::StatusCode;
use serde_json::json;

async fn create_entry(app: &common::TestApp, token: &str) -> serde_json::Value {
    let body = json!({
        "title": "Tuesday spiral",
        "content": "Kept rehearsing tomorrow's meeting",
        "mood": "anxious",
        "overthinkingLevel": "severe",
        "triggers": ["work", "meetings"]
    });

    let (status, response) = app.post_auth("/api/journal", &body.to_string(), token).await;
    assert_eq!(status, StatusCode::OK, "create failed: {response}");
    serde_json::from_str(&response).unwrap()
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_create_and_list_entries() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;

    let created = create_entry(&app, &user.token).await;
    assert_eq!(created["title"], "Tuesday spiral");
    assert_eq!(created["overthinkingLevel"], "severe");

    let (status, response) = app.get_auth("/api/journal", &user.token).await;
    assert_eq!(status, StatusCode::OK);
    let entries: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert!(entries
        .as_array()
        .unwrap()
        .iter()
        .any(|e| e["id"] == created["id"]));
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_missing_fields_rejected() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;

    let body = json!({"title": "no content"});
    let (status, response) = app.post_auth("/api/journal", &body.to_string(), &user.token).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["error"], "Please provide all required fields");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_owner_can_read_entry() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;

    let created = create_entry(&app, &user.token).await;
    let id = created["id"].as_str().unwrap();

    let (status, response) = app.get_auth(&format!("/api/journal/{id}"), &user.token).await;
    assert_eq!(status, StatusCode::OK);
    let entry: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(entry["content"], "Kept rehearsing tomorrow's meeting");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_non_owner_cannot_read_entry() {
    let app = common::TestApp::new().await;
    let owner = app.create_test_user().await;
    let other = app.create_test_user().await;

    let created = create_entry(&app, &owner.token).await;
    let id = created["id"].as_str().unwrap();

    let (status, response) = app.get_auth(&format!("/api/journal/{id}"), &other.token).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["error"], "Not authorized");
    // No entry data leaks in the denial body
    assert!(response.get("content").is_none());
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_unknown_entry_is_404() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;

    let missing = uuid::Uuid::new_v4();
    let (status, _) = app
        .get_auth(&format!("/api/journal/{missing}"), &user.token)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
