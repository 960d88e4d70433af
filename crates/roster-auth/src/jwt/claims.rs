//! JWT claims structure embedded in bearer tokens.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use roster_core::types::CredentialId;
use roster_entity::{EmployeeRole, Principal};

/// JWT claims payload embedded in every bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject — the credential ID.
    pub sub: CredentialId,
    /// Login email at the time of issuance.
    pub email: String,
    /// Role at the time of issuance.
    pub role: EmployeeRole,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

impl Claims {
    /// Returns the expiration as a `DateTime<Utc>`.
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or_else(Utc::now)
    }

    /// Checks whether this token has expired.
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }

    /// Build the per-request principal these claims describe.
    pub fn principal(&self) -> Principal {
        Principal {
            id: self.sub,
            email: self.email.clone(),
            role: self.role,
        }
    }
}
