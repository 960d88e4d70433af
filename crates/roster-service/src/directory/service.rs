//! Directory service — scoped reads and credential-paired mutations.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;

use roster_auth::policy::RecordScope;
use roster_auth::{AccessPolicy, PasswordHasher, PasswordValidator};
use roster_core::error::AppError;
use roster_core::result::AppResult;
use roster_core::types::{Connection, EmployeeId};
use roster_entity::{Credential, Employee, EmployeePatch, EmployeeRole, Principal};
use roster_store::{CredentialStore, EmployeeStore};

use crate::directory::query::ListQuery;

/// Input for adding a personnel record.
///
/// Carries the initial login secret alongside the record fields; the secret
/// is hashed and stored as a credential, never as part of the record. The
/// input carries no role: new records are always plain employees.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEmployee {
    /// Display name.
    pub name: String,
    /// Email address, unique across records and credentials.
    pub email: String,
    /// Age in years.
    pub age: u32,
    /// Job title.
    pub title: String,
    /// Skills, in presentation order.
    pub skills: Vec<String>,
    /// Attendance rate, 0-100.
    pub attendance_rate: f64,
    /// Department name.
    pub department: String,
    /// Annual salary.
    pub salary: f64,
    /// First day of employment.
    pub join_date: NaiveDate,
    /// Initial login secret.
    pub secret: String,
}

/// Coordinates directory reads and mutations.
///
/// Every operation takes the caller's principal (or `None` for anonymous
/// callers) and enforces the access policy before touching the stores.
#[derive(Clone)]
pub struct DirectoryService {
    /// Personnel record store.
    records: Arc<dyn EmployeeStore>,
    /// Login credential store.
    credentials: Arc<dyn CredentialStore>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Password strength validator.
    validator: Arc<PasswordValidator>,
    /// Access policy engine.
    policy: Arc<AccessPolicy>,
}

impl std::fmt::Debug for DirectoryService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DirectoryService")
            .field("hasher", &self.hasher)
            .field("validator", &self.validator)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

impl DirectoryService {
    /// Creates a new directory service.
    pub fn new(
        records: Arc<dyn EmployeeStore>,
        credentials: Arc<dyn CredentialStore>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
        policy: Arc<AccessPolicy>,
    ) -> Self {
        Self {
            records,
            credentials,
            hasher,
            validator,
            policy,
        }
    }

    /// Lists the records visible to the caller, as one page.
    ///
    /// The visible set is narrowed to the caller's scope before the query
    /// pipeline runs, so filters, sorting, and `totalCount` only ever see
    /// records the caller is entitled to.
    pub async fn employees(
        &self,
        principal: Option<&Principal>,
        query: &ListQuery,
    ) -> AppResult<Connection<Employee>> {
        let principal = self.policy.require_principal(principal)?;

        let visible = match self.policy.list_scope(principal) {
            RecordScope::All => self.records.list().await?,
            RecordScope::Own(email) => self
                .records
                .find_by_email(&email)
                .await?
                .into_iter()
                .collect(),
        };

        query.execute(visible)
    }

    /// Fetches a single record by id.
    pub async fn employee(
        &self,
        principal: Option<&Principal>,
        id: &EmployeeId,
    ) -> AppResult<Employee> {
        let principal = self.policy.require_principal(principal)?;

        let record = self
            .records
            .get(id)
            .await?
            .ok_or_else(|| AppError::not_found("Employee not found"))?;

        self.policy.require_record_access(principal, &record)?;
        Ok(record)
    }

    /// Adds a record together with its paired login credential. Admin only.
    pub async fn add_employee(
        &self,
        principal: Option<&Principal>,
        input: NewEmployee,
    ) -> AppResult<Employee> {
        let principal = self.policy.require_principal(principal)?;
        self.policy.require_admin(principal)?;

        if input.name.trim().is_empty() {
            return Err(AppError::validation("Name is required"));
        }
        if !input.email.contains('@') {
            return Err(AppError::validation("A valid email is required"));
        }
        self.validator.validate(&input.secret)?;

        // Email is the key pairing a record with its credential, so it must
        // be free in both stores.
        if self.records.find_by_email(&input.email).await?.is_some()
            || self.credentials.find_by_email(&input.email).await?.is_some()
        {
            return Err(AppError::conflict("Email is already in use"));
        }

        // Hash before inserting anything: hashing is the one slow step
        // here, and nothing may be half-written while it runs.
        let secret_hash = self.hasher.hash_secret(&input.secret)?;

        let employee = Employee {
            id: EmployeeId::new(),
            name: input.name,
            email: input.email,
            age: input.age,
            title: input.title,
            skills: input.skills,
            attendance_rate: input.attendance_rate,
            department: input.department,
            salary: input.salary,
            join_date: input.join_date,
            role: EmployeeRole::Employee,
        };
        let credential = Credential::new(
            employee.email.clone(),
            secret_hash,
            EmployeeRole::Employee,
        );

        let employee = self.records.insert(employee).await?;
        self.credentials.insert(credential).await?;

        info!(
            employee_id = %employee.id,
            email = %employee.email,
            admin = %principal.email,
            "Employee added"
        );

        Ok(employee)
    }

    /// Applies a partial update to a record. Self or admin.
    pub async fn update_employee(
        &self,
        principal: Option<&Principal>,
        id: &EmployeeId,
        patch: EmployeePatch,
    ) -> AppResult<Employee> {
        let principal = self.policy.require_principal(principal)?;

        let mut record = self
            .records
            .get(id)
            .await?
            .ok_or_else(|| AppError::not_found("Employee not found"))?;

        self.policy.require_record_access(principal, &record)?;

        if patch.changes_email(&record.email) {
            let email = patch.email.as_deref().unwrap_or_default();
            if self.records.find_by_email(email).await?.is_some() {
                return Err(AppError::conflict("Email is already in use"));
            }
        }

        record.apply_patch(patch);
        let record = self.records.update(record).await?;

        info!(
            employee_id = %record.id,
            caller = %principal.email,
            "Employee updated"
        );

        Ok(record)
    }

    /// Removes a record and its paired credential. Admin only.
    ///
    /// The policy check runs before the lookup: a non-admin caller is
    /// rejected without the delete being attempted, whether or not the id
    /// exists.
    pub async fn delete_employee(
        &self,
        principal: Option<&Principal>,
        id: &EmployeeId,
    ) -> AppResult<bool> {
        let principal = self.policy.require_principal(principal)?;
        self.policy.require_admin(principal)?;

        let record = self
            .records
            .get(id)
            .await?
            .ok_or_else(|| AppError::not_found("Employee not found"))?;

        self.records.remove(id).await?;
        // A record's login must not outlive the record.
        self.credentials.remove_by_email(&record.email).await?;

        info!(
            employee_id = %record.id,
            email = %record.email,
            admin = %principal.email,
            "Employee deleted"
        );

        Ok(true)
    }
}
