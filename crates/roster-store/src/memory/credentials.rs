//! In-memory login credential store.

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use roster_core::error::AppError;
use roster_core::result::AppResult;
use roster_entity::Credential;

use crate::traits::CredentialStore;

/// Login credentials held in process memory.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    credentials: RwLock<Vec<Credential>>,
}

impl MemoryCredentialStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Credential>> {
        let credentials = self.credentials.read().await;
        Ok(credentials.iter().find(|c| c.has_email(email)).cloned())
    }

    async fn insert(&self, credential: Credential) -> AppResult<Credential> {
        let mut credentials = self.credentials.write().await;
        if credentials.iter().any(|c| c.has_email(&credential.email)) {
            return Err(AppError::conflict(format!(
                "Credential already exists for email: {}",
                credential.email
            )));
        }
        credentials.push(credential.clone());
        debug!(credential_id = %credential.id, "Credential inserted");
        Ok(credential)
    }

    async fn remove_by_email(&self, email: &str) -> AppResult<bool> {
        let mut credentials = self.credentials.write().await;
        let before = credentials.len();
        credentials.retain(|c| !c.has_email(email));
        let removed = credentials.len() < before;
        if removed {
            debug!(email = %email, "Credential removed");
        }
        Ok(removed)
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.credentials.read().await.len() as u64)
    }
}
