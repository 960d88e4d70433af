//! In-memory store implementations.

pub mod credentials;
pub mod employees;

pub use credentials::MemoryCredentialStore;
pub use employees::MemoryEmployeeStore;
