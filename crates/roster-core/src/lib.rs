//! # roster-core
//!
//! Core crate for Roster. Contains configuration schemas, typed identifiers,
//! the cursor/connection/sorting types shared by the query surface, and the
//! unified error system.
//!
//! This crate has **no** internal dependencies on other Roster crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::{AppError, ErrorKind};
pub use result::AppResult;
