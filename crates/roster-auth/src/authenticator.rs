//! Login flow and bearer-token resolution.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use roster_core::error::AppError;
use roster_core::result::AppResult;
use roster_entity::Principal;
use roster_store::CredentialStore;

use crate::jwt::{JwtDecoder, JwtEncoder};
use crate::password::PasswordHasher;

/// Single failure message for login. Covers both an unknown email and a
/// wrong secret, so the response never reveals which one it was.
const INVALID_LOGIN: &str = "Invalid credentials";

/// Result of a successful login.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct LoginResult {
    /// The signed-in principal.
    pub principal: Principal,
    /// Signed bearer token.
    pub token: String,
    /// Token expiration timestamp.
    pub expires_at: DateTime<Utc>,
}

/// Verifies login credentials and resolves bearer tokens to principals.
#[derive(Clone)]
pub struct Authenticator {
    /// Credential lookups.
    credentials: Arc<dyn CredentialStore>,
    /// Secret verification.
    hasher: Arc<PasswordHasher>,
    /// Token creation.
    encoder: Arc<JwtEncoder>,
    /// Token validation.
    decoder: Arc<JwtDecoder>,
}

impl std::fmt::Debug for Authenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Authenticator")
            .field("encoder", &self.encoder)
            .field("decoder", &self.decoder)
            .finish()
    }
}

impl Authenticator {
    /// Creates a new authenticator with all required dependencies.
    pub fn new(
        credentials: Arc<dyn CredentialStore>,
        hasher: Arc<PasswordHasher>,
        encoder: Arc<JwtEncoder>,
        decoder: Arc<JwtDecoder>,
    ) -> Self {
        Self {
            credentials,
            hasher,
            encoder,
            decoder,
        }
    }

    /// Performs the login flow:
    ///
    /// 1. Find the credential by email
    /// 2. Verify the secret against the stored Argon2id hash
    /// 3. Issue a signed bearer token
    ///
    /// Steps 1 and 2 fail with the identical error, so the response never
    /// reveals whether an email is registered.
    pub async fn login(&self, email: &str, secret: &str) -> AppResult<LoginResult> {
        let credential = self
            .credentials
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::invalid_credentials(INVALID_LOGIN))?;

        let secret_valid = self.hasher.verify_secret(secret, &credential.secret_hash)?;
        if !secret_valid {
            debug!(email = %email, "Login rejected: secret mismatch");
            return Err(AppError::invalid_credentials(INVALID_LOGIN));
        }

        let issued = self.encoder.issue(&credential)?;
        info!(credential_id = %credential.id, role = %credential.role, "Login successful");

        Ok(LoginResult {
            principal: Principal::from(&credential),
            token: issued.token,
            expires_at: issued.expires_at,
        })
    }

    /// Resolve a bearer token to its principal.
    ///
    /// Missing, malformed, expired, and badly signed tokens all resolve to
    /// `None`: the request proceeds anonymously and the policy layer decides
    /// what anonymous callers may do.
    pub fn resolve_principal(&self, token: &str) -> Option<Principal> {
        match self.decoder.decode_token(token) {
            Ok(claims) => Some(claims.principal()),
            Err(e) => {
                debug!(error = %e, "Bearer token rejected");
                None
            }
        }
    }
}
