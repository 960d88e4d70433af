//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use roster_api::state::AppState;
use roster_auth::{
    AccessPolicy, Authenticator, JwtDecoder, JwtEncoder, PasswordHasher, PasswordValidator,
};
use roster_core::config::AppConfig;
use roster_entity::{Credential, EmployeeRole};
use roster_service::DirectoryService;
use roster_store::{CredentialStore, EmployeeStore, MemoryCredentialStore, MemoryEmployeeStore};

/// A secret strong enough to pass the password policy.
pub const STRONG_SECRET: &str = "vZ3#kQm9tPw4x";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Employee store shared with the app
    pub employees: Arc<dyn EmployeeStore>,
    /// Credential store shared with the app
    pub credentials: Arc<dyn CredentialStore>,
    /// Password hasher shared with the app
    pub hasher: Arc<PasswordHasher>,
}

impl TestApp {
    /// Create a new test application over empty in-memory stores
    pub fn new() -> Self {
        let config = AppConfig::default();

        let employees: Arc<dyn EmployeeStore> = Arc::new(MemoryEmployeeStore::new());
        let credentials: Arc<dyn CredentialStore> = Arc::new(MemoryCredentialStore::new());

        let hasher = Arc::new(PasswordHasher::new());
        let validator = Arc::new(PasswordValidator::new(&config.auth));
        let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
        let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));
        let authenticator = Arc::new(Authenticator::new(
            Arc::clone(&credentials),
            Arc::clone(&hasher),
            Arc::clone(&jwt_encoder),
            Arc::clone(&jwt_decoder),
        ));
        let policy = Arc::new(AccessPolicy::new());

        let directory = Arc::new(DirectoryService::new(
            Arc::clone(&employees),
            Arc::clone(&credentials),
            Arc::clone(&hasher),
            Arc::clone(&validator),
            Arc::clone(&policy),
        ));

        let state = AppState {
            config: Arc::new(config),
            authenticator,
            policy,
            directory,
        };

        Self {
            router: roster_api::router::build_router(state),
            employees,
            credentials,
            hasher,
        }
    }

    /// Register a login credential directly in the store
    pub async fn create_credential(&self, email: &str, secret: &str, role: EmployeeRole) {
        let hash = self.hasher.hash_secret(secret).expect("hash secret");
        self.credentials
            .insert(Credential::new(email, hash, role))
            .await
            .expect("insert credential");
    }

    /// Register an admin login and return its bearer token
    pub async fn admin_token(&self) -> String {
        self.create_credential("admin@company.com", STRONG_SECRET, EmployeeRole::Admin)
            .await;
        self.login("admin@company.com", STRONG_SECRET).await
    }

    /// Log in and return the bearer token
    pub async fn login(&self, email: &str, secret: &str) -> String {
        let body = serde_json::json!({
            "email": email,
            "secret": secret,
        });

        let response = self
            .request("POST", "/api/auth/login", Some(body), None)
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );

        response.body["data"]["token"]
            .as_str()
            .expect("No token in login response")
            .to_string()
    }

    /// Add an employee through the API as the given caller; returns the new id
    pub async fn add_employee(
        &self,
        token: &str,
        name: &str,
        email: &str,
        department: &str,
        salary: f64,
    ) -> String {
        let body = serde_json::json!({
            "name": name,
            "email": email,
            "age": 30,
            "title": "Developer",
            "skills": ["Rust"],
            "attendanceRate": 95.0,
            "department": department,
            "salary": salary,
            "joinDate": "2021-06-01",
            "secret": STRONG_SECRET,
        });

        let response = self
            .request("POST", "/api/employees", Some(body), Some(token))
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Add employee failed: {:?}",
            response.body
        );

        response.body["data"]["id"]
            .as_str()
            .expect("No id in add response")
            .to_string()
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}
