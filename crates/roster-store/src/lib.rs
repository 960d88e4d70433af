//! # roster-store
//!
//! Store abstractions for the directory plus the in-memory implementations
//! used by the server and tests. The stores own all shared mutable state;
//! everything above them is pure or per-request.

pub mod memory;
pub mod seed;
pub mod traits;

pub use memory::{MemoryCredentialStore, MemoryEmployeeStore};
pub use traits::{CredentialStore, EmployeeStore};
