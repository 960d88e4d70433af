//! # roster-auth
//!
//! Authentication and authorization for Roster.
//!
//! ## Modules
//!
//! - `jwt` — bearer token creation and validation
//! - `password` — Argon2id secret hashing and strength policy
//! - `policy` — pure role-based access decisions
//! - `authenticator` — login flow and token-to-principal resolution

pub mod authenticator;
pub mod jwt;
pub mod password;
pub mod policy;

pub use authenticator::{Authenticator, LoginResult};
pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use password::{PasswordHasher, PasswordValidator};
pub use policy::{AccessPolicy, RecordScope};
