//! Secret strength policy for newly provisioned credentials.

use roster_core::config::auth::AuthConfig;
use roster_core::error::AppError;

/// Validates secret strength against the configured policy.
#[derive(Debug, Clone)]
pub struct PasswordValidator {
    /// Minimum secret length.
    min_length: usize,
}

impl PasswordValidator {
    /// Creates a new validator from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            min_length: config.password_min_length,
        }
    }

    /// Validates a secret against all configured policies.
    ///
    /// Returns `Ok(())` if the secret meets all requirements, or an error
    /// describing the first violation found.
    pub fn validate(&self, secret: &str) -> Result<(), AppError> {
        if secret.len() < self.min_length {
            return Err(AppError::validation(format!(
                "Secret must be at least {} characters long",
                self.min_length
            )));
        }

        if !secret.chars().any(|c| c.is_uppercase()) {
            return Err(AppError::validation(
                "Secret must contain at least one uppercase letter",
            ));
        }

        if !secret.chars().any(|c| c.is_lowercase()) {
            return Err(AppError::validation(
                "Secret must contain at least one lowercase letter",
            ));
        }

        if !secret.chars().any(|c| c.is_ascii_digit()) {
            return Err(AppError::validation(
                "Secret must contain at least one digit",
            ));
        }

        if !secret.chars().any(|c| !c.is_alphanumeric()) {
            return Err(AppError::validation(
                "Secret must contain at least one special character",
            ));
        }

        // Use zxcvbn for entropy check
        let estimate = zxcvbn::zxcvbn(secret, &[]);
        if estimate.score() < zxcvbn::Score::Three {
            return Err(AppError::validation(
                "Secret is too weak. Please use a longer or less predictable secret.",
            ));
        }

        Ok(())
    }
}
