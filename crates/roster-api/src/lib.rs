//! # roster-api
//!
//! HTTP API layer for Roster built on Axum.
//!
//! Provides the REST endpoints, middleware (CORS, logging), extractors,
//! DTOs, and the mapping from domain errors to HTTP responses. Every
//! handler resolves the caller to an optional principal and defers the
//! actual access decision to the service layer, so the HTTP surface stays
//! a thin projection of the directory operations.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
