//! API Integration Tests
//!
//! Each test spawns the full router (middleware included) over the
//! in-memory store, so no external services are needed.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, fixtures::*, TestServer};
use reqwest::StatusCode;
use users_common::AppConfig;

async fn create_user(server: &TestServer, request: &CreateUserRequest) -> UserResponse {
    let response = server.post("/users", request).await.unwrap();
    assert_json(response, StatusCode::OK).await.unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_root_reports_api_running() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/").await.unwrap();
    let body: MessageResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.message, "API running successfully");
}

#[tokio::test]
async fn test_health_ready() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["status"], "ready");
    assert_eq!(body["checks"]["storage"], "healthy");
}

#[tokio::test]
async fn test_request_id_is_returned() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/").await.unwrap();
    assert!(response.headers().contains_key("x-request-id"));
}

// ============================================================================
// Create Tests
// ============================================================================

#[tokio::test]
async fn test_create_user() {
    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateUserRequest {
        name: "A".to_string(),
        email: "a@x.com".to_string(),
    };

    let response = server.post("/users", &request).await.unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body["name"], "A");
    assert_eq!(body["email"], "a@x.com");
    assert_eq!(body["is_active"], true);
    assert!(body["id"].is_i64());
    assert!(body["created_at"].is_string());
    assert!(body.get("is_deleted").is_none());
}

#[tokio::test]
async fn test_create_duplicate_email() {
    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateUserRequest::unique();
    create_user(&server, &request).await;

    let response = server.post("/users", &request).await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.error.message, "Email already exists");
    assert_eq!(error.error.code, "EMAIL_ALREADY_EXISTS");
}

#[tokio::test]
async fn test_create_duplicate_email_domain_case_insensitive() {
    let server = TestServer::start().await.expect("Failed to start server");
    let suffix = unique_suffix();
    let first = CreateUserRequest {
        name: "Lower".to_string(),
        email: format!("case{suffix}@example.com"),
    };
    let created = create_user(&server, &first).await;
    assert_eq!(created.email, first.email);

    let second = CreateUserRequest {
        name: "Upper".to_string(),
        email: format!("case{suffix}@EXAMPLE.COM"),
    };
    let response = server.post("/users", &second).await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.error.message, "Email already exists");
}

#[tokio::test]
async fn test_create_stores_lowercased_domain() {
    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateUserRequest {
        name: "A".to_string(),
        email: "Mixed@X.COM".to_string(),
    };

    let created = create_user(&server, &request).await;
    assert_eq!(created.email, "Mixed@x.com");
}

#[tokio::test]
async fn test_create_duplicate_of_deleted_user() {
    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateUserRequest::unique();
    let user = create_user(&server, &request).await;

    let response = server.delete(&format!("/users/{}", user.id)).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.post("/users", &request).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_create_invalid_email() {
    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateUserRequest {
        name: "A".to_string(),
        email: "not-an-email".to_string(),
    };

    let response = server.post("/users", &request).await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::UNPROCESSABLE_ENTITY)
        .await
        .unwrap();
    assert_eq!(error.error.code, "VALIDATION_ERROR");
    assert!(error.error.details.is_some());

    let response = server.get("/users").await.unwrap();
    let users: Vec<UserResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(users.is_empty());
}

#[tokio::test]
async fn test_create_missing_field() {
    let server = TestServer::start().await.expect("Failed to start server");
    let body = serde_json::json!({ "name": "No Email" });

    let response = server.post("/users", &body).await.unwrap();
    assert_status(response, StatusCode::UNPROCESSABLE_ENTITY).await.unwrap();
}

#[tokio::test]
async fn test_created_ids_are_distinct() {
    let server = TestServer::start().await.expect("Failed to start server");
    let first = create_user(&server, &CreateUserRequest::unique()).await;
    let second = create_user(&server, &CreateUserRequest::unique()).await;
    assert_ne!(first.id, second.id);
}

// ============================================================================
// Read Tests
// ============================================================================

#[tokio::test]
async fn test_get_user() {
    let server = TestServer::start().await.expect("Failed to start server");
    let created = create_user(&server, &CreateUserRequest::unique()).await;

    let response = server.get(&format!("/users/{}", created.id)).await.unwrap();
    let fetched: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_get_missing_user() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/users/999").await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(error.error.message, "User not found");
}

#[tokio::test]
async fn test_non_integer_id() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/users/abc").await.unwrap();
    assert_status(response, StatusCode::UNPROCESSABLE_ENTITY).await.unwrap();
}

#[tokio::test]
async fn test_list_users() {
    let server = TestServer::start().await.expect("Failed to start server");
    let first = create_user(&server, &CreateUserRequest::unique()).await;
    let second = create_user(&server, &CreateUserRequest::unique()).await;

    let response = server.get("/users").await.unwrap();
    let users: Vec<UserResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(users, vec![first, second]);
}

// ============================================================================
// Update Tests
// ============================================================================

#[tokio::test]
async fn test_update_name_only() {
    let server = TestServer::start().await.expect("Failed to start server");
    let created = create_user(&server, &CreateUserRequest::unique()).await;

    let update = UpdateUserRequest {
        name: Some("Renamed".to_string()),
        email: None,
    };
    let response = server
        .put(&format!("/users/{}", created.id), &update)
        .await
        .unwrap();
    let updated: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.email, created.email);
    assert_eq!(updated.created_at, created.created_at);
}

#[tokio::test]
async fn test_empty_update_is_noop() {
    let server = TestServer::start().await.expect("Failed to start server");
    let created = create_user(&server, &CreateUserRequest::unique()).await;

    let response = server
        .put(&format!("/users/{}", created.id), &UpdateUserRequest::default())
        .await
        .unwrap();
    let updated: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated, created);
}

#[tokio::test]
async fn test_update_null_fields_are_ignored() {
    let server = TestServer::start().await.expect("Failed to start server");
    let created = create_user(&server, &CreateUserRequest::unique()).await;

    let body = serde_json::json!({ "name": null, "email": null });
    let response = server
        .put(&format!("/users/{}", created.id), &body)
        .await
        .unwrap();
    let updated: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated, created);
}

#[tokio::test]
async fn test_update_invalid_email() {
    let server = TestServer::start().await.expect("Failed to start server");
    let created = create_user(&server, &CreateUserRequest::unique()).await;

    let update = UpdateUserRequest {
        name: None,
        email: Some("broken".to_string()),
    };
    let response = server
        .put(&format!("/users/{}", created.id), &update)
        .await
        .unwrap();
    assert_status(response, StatusCode::UNPROCESSABLE_ENTITY).await.unwrap();
}

#[tokio::test]
async fn test_update_missing_user() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .put("/users/999", &UpdateUserRequest::default())
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Delete and Toggle Tests
// ============================================================================

#[tokio::test]
async fn test_soft_delete_hides_user() {
    let server = TestServer::start().await.expect("Failed to start server");
    let kept = create_user(&server, &CreateUserRequest::unique()).await;
    let deleted = create_user(&server, &CreateUserRequest::unique()).await;

    let response = server.delete(&format!("/users/{}", deleted.id)).await.unwrap();
    let body: MessageResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.message, "User soft deleted");

    let response = server.get(&format!("/users/{}", deleted.id)).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server.get("/users").await.unwrap();
    let users: Vec<UserResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(users, vec![kept]);
}

#[tokio::test]
async fn test_deleted_user_can_still_be_toggled_and_updated() {
    let server = TestServer::start().await.expect("Failed to start server");
    let user = create_user(&server, &CreateUserRequest::unique()).await;
    server.delete(&format!("/users/{}", user.id)).await.unwrap();

    let response = server
        .get(&format!("/users/{}/toggle-active", user.id))
        .await
        .unwrap();
    let toggled: ToggleActiveResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!toggled.is_active);

    let update = UpdateUserRequest {
        name: Some("Ghost".to_string()),
        email: None,
    };
    let response = server
        .put(&format!("/users/{}", user.id), &update)
        .await
        .unwrap();
    let updated: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.name, "Ghost");
    assert!(!updated.is_active);
}

#[tokio::test]
async fn test_delete_missing_user() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.delete("/users/999").await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_toggle_active_round_trip() {
    let server = TestServer::start().await.expect("Failed to start server");
    let user = create_user(&server, &CreateUserRequest::unique()).await;
    let path = format!("/users/{}/toggle-active", user.id);

    let response = server.get(&path).await.unwrap();
    let first: ToggleActiveResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!first.is_active);

    let response = server.get(&path).await.unwrap();
    let second: ToggleActiveResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(second.is_active);

    let response = server.get(&format!("/users/{}", user.id)).await.unwrap();
    let fetched: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(fetched.is_active);
}

#[tokio::test]
async fn test_toggle_missing_user() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/users/999/toggle-active").await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Middleware Tests
// ============================================================================

#[tokio::test]
async fn test_rate_limit_rejects_burst_overflow() {
    let mut config = AppConfig::in_memory();
    config.rate_limit.requests_per_second = 1;
    config.rate_limit.burst = 2;
    let server = TestServer::start_with_config(config)
        .await
        .expect("Failed to start server");

    assert_status(server.get("/").await.unwrap(), StatusCode::OK).await.unwrap();
    assert_status(server.get("/").await.unwrap(), StatusCode::OK).await.unwrap();
    assert_status(server.get("/").await.unwrap(), StatusCode::TOO_MANY_REQUESTS)
        .await
        .unwrap();
}
