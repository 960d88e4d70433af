//! Store abstractions for directory data.
//!
//! The query pipeline and the mutation paths depend on these traits rather
//! than a concrete backend, so they run unchanged against the in-memory
//! stores, test fakes, or a future persistence backend.

use async_trait::async_trait;

use roster_core::result::AppResult;
use roster_core::types::EmployeeId;
use roster_entity::{Credential, Employee};

/// Store of personnel records.
///
/// Implementations must preserve insertion order: `list` returns records in
/// the order they were inserted, which is the directory's unsorted
/// presentation order.
#[async_trait]
pub trait EmployeeStore: Send + Sync + 'static {
    /// Return every record in insertion order.
    async fn list(&self) -> AppResult<Vec<Employee>>;

    /// Find a record by id.
    async fn get(&self, id: &EmployeeId) -> AppResult<Option<Employee>>;

    /// Find a record by email (case-insensitive).
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Employee>>;

    /// Insert a new record. Fails with a conflict when the id is taken.
    async fn insert(&self, employee: Employee) -> AppResult<Employee>;

    /// Replace the record with the same id. Fails with not-found when
    /// absent.
    async fn update(&self, employee: Employee) -> AppResult<Employee>;

    /// Remove a record by id. Returns `true` when a record was removed.
    async fn remove(&self, id: &EmployeeId) -> AppResult<bool>;

    /// Count records.
    async fn count(&self) -> AppResult<u64>;
}

/// Store of login credentials.
#[async_trait]
pub trait CredentialStore: Send + Sync + 'static {
    /// Find a credential by login email (case-insensitive).
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Credential>>;

    /// Insert a new credential. Fails with a conflict when a credential
    /// already exists for the email.
    async fn insert(&self, credential: Credential) -> AppResult<Credential>;

    /// Remove the credential registered under an email (case-insensitive).
    /// Returns `true` when one was removed.
    async fn remove_by_email(&self, email: &str) -> AppResult<bool>;

    /// Count credentials.
    async fn count(&self) -> AppResult<u64>;
}
