//! Roster Server — Personnel Directory Service
//!
//! Main entry point that wires all crates together and starts the server.

use std::future::IntoFuture;
use std::sync::Arc;

use tokio::sync::watch;
use tracing_subscriber::{EnvFilter, fmt};

use roster_auth::{
    AccessPolicy, Authenticator, JwtDecoder, JwtEncoder, PasswordHasher, PasswordValidator,
};
use roster_core::config::AppConfig;
use roster_core::error::AppError;
use roster_service::DirectoryService;
use roster_store::{
    CredentialStore, EmployeeStore, MemoryCredentialStore, MemoryEmployeeStore, seed,
};

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from files and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("ROSTER_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Roster v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Stores ───────────────────────────────────────────
    let employee_store: Arc<dyn EmployeeStore> = Arc::new(MemoryEmployeeStore::new());
    let credential_store: Arc<dyn CredentialStore> = Arc::new(MemoryCredentialStore::new());

    // ── Step 2: Auth machinery ───────────────────────────────────
    let hasher = Arc::new(PasswordHasher::new());
    let validator = Arc::new(PasswordValidator::new(&config.auth));
    let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
    let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));
    let authenticator = Arc::new(Authenticator::new(
        Arc::clone(&credential_store),
        Arc::clone(&hasher),
        Arc::clone(&jwt_encoder),
        Arc::clone(&jwt_decoder),
    ));
    let policy = Arc::new(AccessPolicy::new());

    // ── Step 3: Directory service ────────────────────────────────
    let directory = Arc::new(DirectoryService::new(
        Arc::clone(&employee_store),
        Arc::clone(&credential_store),
        Arc::clone(&hasher),
        Arc::clone(&validator),
        Arc::clone(&policy),
    ));

    // ── Step 4: Demo data ────────────────────────────────────────
    let seed_hasher = Arc::clone(&hasher);
    seed::seed_demo_directory(
        &config.seed,
        employee_store.as_ref(),
        credential_store.as_ref(),
        move |secret| seed_hasher.hash_secret(secret),
    )
    .await?;

    // ── Step 5: Build and start HTTP server ──────────────────────
    tracing::info!(
        "Starting HTTP server on {}:{}...",
        config.server.host,
        config.server.port
    );

    let app_state = roster_api::state::AppState {
        config: Arc::new(config.clone()),
        authenticator: Arc::clone(&authenticator),
        policy: Arc::clone(&policy),
        directory: Arc::clone(&directory),
    };

    let app = roster_api::router::build_router(app_state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("Roster server listening on {}", addr);

    // ── Step 6: Graceful shutdown ────────────────────────────────
    let (drain_tx, mut drain_rx) = watch::channel(false);
    let server = axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown_signal().await;
            tracing::info!("Shutdown signal received, starting graceful shutdown...");
            let _ = drain_tx.send(true);
        })
        .into_future();

    let grace = std::time::Duration::from_secs(config.server.shutdown_grace_seconds);
    tokio::pin!(server);
    tokio::select! {
        result = &mut server => {
            result.map_err(|e| AppError::internal(format!("Server error: {}", e)))?;
        }
        _ = async {
            // Bound the connection drain once the shutdown signal lands.
            drain_rx.changed().await.ok();
            tokio::time::sleep(grace).await;
        } => {
            tracing::warn!("Drain grace period expired, exiting");
        }
    }

    tracing::info!("Roster server shut down gracefully");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
