//! Integration tests for the authentication flow.

use axum::http::StatusCode;

use roster_entity::EmployeeRole;

use crate::helpers::{STRONG_SECRET, TestApp};

#[tokio::test]
async fn test_login_success() {
    let app = TestApp::new();
    app.create_credential("admin@company.com", STRONG_SECRET, EmployeeRole::Admin)
        .await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": "admin@company.com",
                "secret": STRONG_SECRET,
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["data"]["email"], "admin@company.com");
    assert_eq!(response.body["data"]["role"], "admin");
    assert!(response.body["data"]["token"].as_str().is_some());
    assert!(response.body["data"]["expiresAt"].as_str().is_some());
}

#[tokio::test]
async fn test_login_is_case_insensitive_on_email() {
    let app = TestApp::new();
    app.create_credential("admin@company.com", STRONG_SECRET, EmployeeRole::Admin)
        .await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": "Admin@Company.COM",
                "secret": STRONG_SECRET,
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let app = TestApp::new();
    app.create_credential("admin@company.com", STRONG_SECRET, EmployeeRole::Admin)
        .await;

    let wrong_secret = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": "admin@company.com",
                "secret": "not-the-secret",
            })),
            None,
        )
        .await;

    let unknown_email = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": "nobody@company.com",
                "secret": STRONG_SECRET,
            })),
            None,
        )
        .await;

    assert_eq!(wrong_secret.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_secret.body["error"], "INVALID_CREDENTIALS");
    assert_eq!(unknown_email.body["error"], "INVALID_CREDENTIALS");
    // Same message for both causes; the response must not reveal whether
    // the email exists.
    assert_eq!(wrong_secret.body["message"], unknown_email.body["message"]);
}

#[tokio::test]
async fn test_login_rejects_empty_fields() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": "",
                "secret": "",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_me_returns_the_caller() {
    let app = TestApp::new();
    let token = app.admin_token().await;

    let response = app.request("GET", "/api/auth/me", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["email"], "admin@company.com");
    assert_eq!(response.body["data"]["role"], "admin");
}

#[tokio::test]
async fn test_me_without_token_is_unauthenticated() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/auth/me", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "UNAUTHENTICATED");
}

#[tokio::test]
async fn test_me_with_tampered_token_is_unauthenticated() {
    let app = TestApp::new();
    let token = app.admin_token().await;
    let tampered = format!("{}x", token);

    let response = app
        .request("GET", "/api/auth/me", None, Some(&tampered))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "UNAUTHENTICATED");
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], "ok");
    assert_eq!(response.body["data"]["service"], "roster");
}
