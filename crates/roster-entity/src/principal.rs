//! Request principal derived from a verified bearer token.

use serde::{Deserialize, Serialize};

use roster_core::types::CredentialId;

use crate::credential::Credential;
use crate::employee::EmployeeRole;

/// The identity attached to one request.
///
/// A principal lives only for the request that presented the token; it is
/// derived from verified claims and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// Identifier of the credential the token was issued for.
    pub id: CredentialId,
    /// Email the principal signed in with.
    pub email: String,
    /// Role granted by the credential.
    pub role: EmployeeRole,
}

impl Principal {
    /// Check if this principal has admin privileges.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

impl From<&Credential> for Principal {
    fn from(credential: &Credential) -> Self {
        Self {
            id: credential.id,
            email: credential.email.clone(),
            role: credential.role,
        }
    }
}
