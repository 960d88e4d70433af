//! Login credential entity.

use serde::{Deserialize, Serialize};

use roster_core::types::CredentialId;

use crate::employee::EmployeeRole;

/// A login credential, paired with a personnel record by email.
///
/// Credentials are created alongside their record and removed with it; the
/// directory never exposes them directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credential {
    /// Unique credential identifier. This is the identity carried by issued
    /// tokens.
    pub id: CredentialId,
    /// Login email, matching the paired record's email.
    pub email: String,
    /// Argon2id secret hash (PHC string). Never serialized.
    #[serde(skip_serializing)]
    pub secret_hash: String,
    /// Role granted when this credential signs in. Fixed at creation.
    pub role: EmployeeRole,
}

impl Credential {
    /// Create a credential with a fresh identifier.
    pub fn new(
        email: impl Into<String>,
        secret_hash: impl Into<String>,
        role: EmployeeRole,
    ) -> Self {
        Self {
            id: CredentialId::new(),
            email: email.into(),
            secret_hash: secret_hash.into(),
            role,
        }
    }

    /// Case-insensitive email comparison used for lookups.
    pub fn has_email(&self, email: &str) -> bool {
        self.email.eq_ignore_ascii_case(email)
    }
}
