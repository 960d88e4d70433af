//! # roster-service
//!
//! Business logic service layer for Roster. The directory service
//! orchestrates the stores, the access policy, and the password machinery
//! to implement the application-level operations: listing and reading
//! personnel records, and the add/update/delete mutations that keep a
//! record paired with its login credential.
//!
//! Services follow constructor injection — all dependencies are provided
//! at construction time via `Arc` references.

pub mod directory;

pub use directory::{DirectoryService, ListQuery, NewEmployee};
