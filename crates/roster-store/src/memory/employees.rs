//! In-memory personnel record store.

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use roster_core::error::AppError;
use roster_core::result::AppResult;
use roster_core::types::EmployeeId;
use roster_entity::Employee;

use crate::traits::EmployeeStore;

/// Personnel records held in process memory.
///
/// Backed by a `Vec` behind an async `RwLock`, preserving insertion order.
/// Each trait method takes the lock exactly once, so individual store
/// operations are atomic with respect to each other.
#[derive(Debug, Default)]
pub struct MemoryEmployeeStore {
    records: RwLock<Vec<Employee>>,
}

impl MemoryEmployeeStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EmployeeStore for MemoryEmployeeStore {
    async fn list(&self) -> AppResult<Vec<Employee>> {
        Ok(self.records.read().await.clone())
    }

    async fn get(&self, id: &EmployeeId) -> AppResult<Option<Employee>> {
        let records = self.records.read().await;
        Ok(records.iter().find(|e| e.id == *id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Employee>> {
        let records = self.records.read().await;
        Ok(records.iter().find(|e| e.has_email(email)).cloned())
    }

    async fn insert(&self, employee: Employee) -> AppResult<Employee> {
        let mut records = self.records.write().await;
        if records.iter().any(|e| e.id == employee.id) {
            return Err(AppError::conflict(format!(
                "Employee id already exists: {}",
                employee.id
            )));
        }
        records.push(employee.clone());
        debug!(employee_id = %employee.id, total = records.len(), "Employee record inserted");
        Ok(employee)
    }

    async fn update(&self, employee: Employee) -> AppResult<Employee> {
        let mut records = self.records.write().await;
        match records.iter_mut().find(|e| e.id == employee.id) {
            Some(slot) => {
                *slot = employee.clone();
                Ok(employee)
            }
            None => Err(AppError::not_found(format!(
                "Employee not found: {}",
                employee.id
            ))),
        }
    }

    async fn remove(&self, id: &EmployeeId) -> AppResult<bool> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|e| e.id != *id);
        let removed = records.len() < before;
        if removed {
            debug!(employee_id = %id, "Employee record removed");
        }
        Ok(removed)
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.records.read().await.len() as u64)
    }
}
