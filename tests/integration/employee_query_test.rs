//! Integration tests for listing and fetching employees.

use axum::http::StatusCode;

use roster_core::types::EmployeeId;

use crate::helpers::{STRONG_SECRET, TestApp};

#[tokio::test]
async fn test_list_requires_authentication() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/employees", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "UNAUTHENTICATED");
}

#[tokio::test]
async fn test_admin_lists_every_employee() {
    let app = TestApp::new();
    let token = app.admin_token().await;
    app.add_employee(&token, "Alice", "alice@company.com", "Engineering", 82_000.0)
        .await;
    app.add_employee(&token, "Bob", "bob@company.com", "Product", 78_000.0)
        .await;
    app.add_employee(&token, "Carol", "carol@company.com", "Design", 64_000.0)
        .await;

    let response = app
        .request("GET", "/api/employees", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["totalCount"], 3);
    assert_eq!(response.body["data"]["edges"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_employee_sees_only_their_own_record() {
    let app = TestApp::new();
    let token = app.admin_token().await;
    app.add_employee(&token, "Alice", "alice@company.com", "Engineering", 82_000.0)
        .await;
    app.add_employee(&token, "Bob", "bob@company.com", "Product", 78_000.0)
        .await;

    let alice_token = app.login("alice@company.com", STRONG_SECRET).await;
    let response = app
        .request("GET", "/api/employees", None, Some(&alice_token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["totalCount"], 1);

    let edges = response.body["data"]["edges"].as_array().unwrap();
    assert_eq!(edges.len(), 1);
    assert_eq!(edges[0]["node"]["email"], "alice@company.com");
}

#[tokio::test]
async fn test_pagination_walks_the_directory() {
    let app = TestApp::new();
    let token = app.admin_token().await;
    for (name, email) in [
        ("Walter", "walter@company.com"),
        ("Alice", "alice@company.com"),
        ("Dana", "dana@company.com"),
        ("Bob", "bob@company.com"),
        ("Carol", "carol@company.com"),
    ] {
        app.add_employee(&token, name, email, "Engineering", 70_000.0)
            .await;
    }

    let first_page = app
        .request(
            "GET",
            "/api/employees?first=2&sort=name",
            None,
            Some(&token),
        )
        .await;

    assert_eq!(first_page.status, StatusCode::OK);
    let data = &first_page.body["data"];
    assert_eq!(data["totalCount"], 5);
    let edges = data["edges"].as_array().unwrap();
    assert_eq!(edges.len(), 2);
    assert_eq!(edges[0]["node"]["name"], "Alice");
    assert_eq!(edges[1]["node"]["name"], "Bob");
    assert_eq!(data["pageInfo"]["hasNextPage"], true);
    assert_eq!(data["pageInfo"]["hasPreviousPage"], false);

    let cursor = data["pageInfo"]["endCursor"].as_str().unwrap().to_string();
    let second_page = app
        .request(
            "GET",
            &format!("/api/employees?first=2&sort=name&after={}", cursor),
            None,
            Some(&token),
        )
        .await;

    assert_eq!(second_page.status, StatusCode::OK);
    let data = &second_page.body["data"];
    let edges = data["edges"].as_array().unwrap();
    assert_eq!(edges[0]["node"]["name"], "Carol");
    assert_eq!(edges[1]["node"]["name"], "Dana");
    assert_eq!(data["pageInfo"]["hasNextPage"], true);
    assert_eq!(data["pageInfo"]["hasPreviousPage"], true);

    let cursor = data["pageInfo"]["endCursor"].as_str().unwrap().to_string();
    let last_page = app
        .request(
            "GET",
            &format!("/api/employees?first=2&sort=name&after={}", cursor),
            None,
            Some(&token),
        )
        .await;

    assert_eq!(last_page.status, StatusCode::OK);
    let data = &last_page.body["data"];
    let edges = data["edges"].as_array().unwrap();
    assert_eq!(edges.len(), 1);
    assert_eq!(edges[0]["node"]["name"], "Walter");
    assert_eq!(data["pageInfo"]["hasNextPage"], false);
    assert_eq!(data["pageInfo"]["hasPreviousPage"], true);
}

#[tokio::test]
async fn test_descending_sort_by_salary() {
    let app = TestApp::new();
    let token = app.admin_token().await;
    app.add_employee(&token, "Alice", "alice@company.com", "Engineering", 82_000.0)
        .await;
    app.add_employee(&token, "Bob", "bob@company.com", "Product", 78_000.0)
        .await;
    app.add_employee(&token, "Carol", "carol@company.com", "Design", 64_000.0)
        .await;

    let response = app
        .request(
            "GET",
            "/api/employees?sort=salary&order=DESC",
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let edges = response.body["data"]["edges"].as_array().unwrap();
    assert_eq!(edges[0]["node"]["name"], "Alice");
    assert_eq!(edges[1]["node"]["name"], "Bob");
    assert_eq!(edges[2]["node"]["name"], "Carol");
}

#[tokio::test]
async fn test_filter_searches_text_fields() {
    let app = TestApp::new();
    let token = app.admin_token().await;
    app.add_employee(&token, "Alice", "alice@company.com", "Engineering", 82_000.0)
        .await;
    app.add_employee(&token, "Bob", "bob@company.com", "Product", 78_000.0)
        .await;

    // Matches Alice's email, nobody else's fields.
    let response = app
        .request("GET", "/api/employees?filter=ALICE", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["totalCount"], 1);
    let edges = response.body["data"]["edges"].as_array().unwrap();
    assert_eq!(edges[0]["node"]["name"], "Alice");
}

#[tokio::test]
async fn test_department_filter_matches_whole_name() {
    let app = TestApp::new();
    let token = app.admin_token().await;
    app.add_employee(&token, "Alice", "alice@company.com", "Engineering", 82_000.0)
        .await;
    app.add_employee(&token, "Bob", "bob@company.com", "Product", 78_000.0)
        .await;

    let exact = app
        .request(
            "GET",
            "/api/employees?department=engineering",
            None,
            Some(&token),
        )
        .await;
    assert_eq!(exact.body["data"]["totalCount"], 1);

    // A prefix is not a department.
    let prefix = app
        .request(
            "GET",
            "/api/employees?department=Engineer",
            None,
            Some(&token),
        )
        .await;
    assert_eq!(prefix.body["data"]["totalCount"], 0);
}

#[tokio::test]
async fn test_unknown_sort_field_is_rejected() {
    let app = TestApp::new();
    let token = app.admin_token().await;

    let response = app
        .request("GET", "/api/employees?sort=shoeSize", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_malformed_cursor_is_rejected() {
    let app = TestApp::new();
    let token = app.admin_token().await;

    let response = app
        .request(
            "GET",
            "/api/employees?after=%21%21not-a-cursor",
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_cursor_from_another_context_yields_empty_page() {
    let app = TestApp::new();
    let token = app.admin_token().await;
    app.add_employee(&token, "Alice", "alice@company.com", "Engineering", 82_000.0)
        .await;
    app.add_employee(&token, "Bob", "bob@company.com", "Design", 78_000.0)
        .await;

    let engineering = app
        .request(
            "GET",
            "/api/employees?department=Engineering",
            None,
            Some(&token),
        )
        .await;
    let cursor = engineering.body["data"]["pageInfo"]["endCursor"]
        .as_str()
        .unwrap()
        .to_string();

    // The cursor names Alice, who is not part of the Design sequence.
    let response = app
        .request(
            "GET",
            &format!("/api/employees?department=Design&after={}", cursor),
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let data = &response.body["data"];
    assert_eq!(data["edges"].as_array().unwrap().len(), 0);
    assert_eq!(data["totalCount"], 1);
    assert_eq!(data["pageInfo"]["hasNextPage"], false);
    assert_eq!(data["pageInfo"]["hasPreviousPage"], false);
}

#[tokio::test]
async fn test_admin_fetches_any_employee_by_id() {
    let app = TestApp::new();
    let token = app.admin_token().await;
    let id = app
        .add_employee(&token, "Alice", "alice@company.com", "Engineering", 82_000.0)
        .await;

    let response = app
        .request("GET", &format!("/api/employees/{}", id), None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["name"], "Alice");
    assert_eq!(response.body["data"]["email"], "alice@company.com");

    // Reads do not mutate: a second fetch returns the same record.
    let again = app
        .request("GET", &format!("/api/employees/{}", id), None, Some(&token))
        .await;
    assert_eq!(again.body, response.body);
}

#[tokio::test]
async fn test_employee_cannot_fetch_a_colleague() {
    let app = TestApp::new();
    let token = app.admin_token().await;
    let alice_id = app
        .add_employee(&token, "Alice", "alice@company.com", "Engineering", 82_000.0)
        .await;
    let bob_id = app
        .add_employee(&token, "Bob", "bob@company.com", "Product", 78_000.0)
        .await;

    let bob_token = app.login("bob@company.com", STRONG_SECRET).await;

    let own = app
        .request(
            "GET",
            &format!("/api/employees/{}", bob_id),
            None,
            Some(&bob_token),
        )
        .await;
    assert_eq!(own.status, StatusCode::OK);

    let foreign = app
        .request(
            "GET",
            &format!("/api/employees/{}", alice_id),
            None,
            Some(&bob_token),
        )
        .await;
    assert_eq!(foreign.status, StatusCode::FORBIDDEN);
    assert_eq!(foreign.body["error"], "FORBIDDEN");
}

#[tokio::test]
async fn test_unknown_employee_id_is_not_found() {
    let app = TestApp::new();
    let token = app.admin_token().await;

    let response = app
        .request(
            "GET",
            &format!("/api/employees/{}", EmployeeId::new()),
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn test_malformed_employee_id_is_rejected() {
    let app = TestApp::new();
    let token = app.admin_token().await;

    let response = app
        .request("GET", "/api/employees/not-a-uuid", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}
