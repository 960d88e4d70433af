//! Access decisions for directory operations.
//!
//! Every method is a pure function of the principal and (optionally) the
//! target record: no store access, no clock, no side effects. Callers apply
//! the decisions; the engine only makes them.

use roster_core::error::AppError;
use roster_entity::{Employee, Principal};

/// The set of records a principal may see in list queries.
///
/// Narrowing happens before any filter, sort, or pagination step, so the
/// rest of the pipeline never touches records outside the scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordScope {
    /// Admins see the whole directory.
    All,
    /// Everyone else sees at most the record keyed by their own email.
    Own(String),
}

/// Enforces role-based access control for directory operations.
#[derive(Debug, Clone, Default)]
pub struct AccessPolicy;

impl AccessPolicy {
    /// Creates a new policy engine.
    pub fn new() -> Self {
        Self
    }

    /// Require a signed-in principal.
    ///
    /// Every directory operation starts here; an anonymous caller fails
    /// before any data is touched.
    pub fn require_principal<'a>(
        &self,
        principal: Option<&'a Principal>,
    ) -> Result<&'a Principal, AppError> {
        principal.ok_or_else(|| AppError::unauthenticated("Not authenticated"))
    }

    /// The visibility scope applied to list queries.
    pub fn list_scope(&self, principal: &Principal) -> RecordScope {
        if principal.is_admin() {
            RecordScope::All
        } else {
            RecordScope::Own(principal.email.clone())
        }
    }

    /// Whether the principal may read or update the given record.
    pub fn can_access_record(&self, principal: &Principal, record: &Employee) -> bool {
        principal.is_admin() || record.has_email(&principal.email)
    }

    /// Require read/update access to a record.
    pub fn require_record_access(
        &self,
        principal: &Principal,
        record: &Employee,
    ) -> Result<(), AppError> {
        if self.can_access_record(principal, record) {
            Ok(())
        } else {
            Err(AppError::forbidden(
                "Not authorized to access this employee",
            ))
        }
    }

    /// Require admin privileges.
    pub fn require_admin(&self, principal: &Principal) -> Result<(), AppError> {
        if principal.is_admin() {
            Ok(())
        } else {
            Err(AppError::forbidden("Admin access required"))
        }
    }
}
