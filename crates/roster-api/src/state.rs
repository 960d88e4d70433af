//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use roster_auth::{AccessPolicy, Authenticator};
use roster_core::config::AppConfig;
use roster_service::DirectoryService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Login and token resolution.
    pub authenticator: Arc<Authenticator>,
    /// Role-based access decisions.
    pub policy: Arc<AccessPolicy>,
    /// Directory reads and mutations.
    pub directory: Arc<DirectoryService>,
}
