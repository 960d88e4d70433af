//! Request DTOs with validation.
//!
//! Range and format checks live here at the boundary; the service layer
//! enforces the rules that need store access (uniqueness, secret strength).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use roster_core::error::AppError;
use roster_core::result::AppResult;
use roster_core::types::SortOrder;
use roster_entity::{EmployeePatch, EmployeeSort, EmployeeSortField};
use roster_service::NewEmployee;
use roster_service::directory::query::{DEFAULT_PAGE_SIZE, ListQuery};

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Login email.
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    /// Login secret.
    #[validate(length(min = 1, message = "Secret is required"))]
    pub secret: String,
}

/// Create employee request (admin).
///
/// Carries no role: the directory only ever creates plain employees.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewEmployeeRequest {
    /// Display name.
    #[validate(length(min = 1, max = 100, message = "Name is required"))]
    pub name: String,
    /// Email address.
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    /// Age in years.
    #[validate(range(min = 18, max = 100))]
    pub age: u32,
    /// Job title.
    #[validate(length(min = 1, max = 100, message = "Title is required"))]
    pub title: String,
    /// Skills, at least one.
    #[validate(length(min = 1, message = "At least one skill is required"))]
    pub skills: Vec<String>,
    /// Attendance rate, 0-100.
    #[validate(range(min = 0.0, max = 100.0))]
    pub attendance_rate: f64,
    /// Department name.
    #[validate(length(min = 1, max = 100, message = "Department is required"))]
    pub department: String,
    /// Annual salary.
    #[validate(range(min = 0.0))]
    pub salary: f64,
    /// First day of employment.
    pub join_date: NaiveDate,
    /// Initial login secret.
    #[validate(length(min = 1, message = "Secret is required"))]
    pub secret: String,
}

impl NewEmployeeRequest {
    /// Converts into the service-layer input.
    pub fn into_input(self) -> NewEmployee {
        NewEmployee {
            name: self.name,
            email: self.email,
            age: self.age,
            title: self.title,
            skills: self.skills,
            attendance_rate: self.attendance_rate,
            department: self.department,
            salary: self.salary,
            join_date: self.join_date,
            secret: self.secret,
        }
    }
}

/// Partial update request. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmployeeRequest {
    /// New display name.
    #[validate(length(min = 1, max = 100, message = "Name must not be empty"))]
    pub name: Option<String>,
    /// New email address.
    #[validate(email(message = "A valid email is required"))]
    pub email: Option<String>,
    /// New age.
    #[validate(range(min = 18, max = 100))]
    pub age: Option<u32>,
    /// New job title.
    #[validate(length(min = 1, max = 100, message = "Title must not be empty"))]
    pub title: Option<String>,
    /// Replacement skills list.
    #[validate(length(min = 1, message = "At least one skill is required"))]
    pub skills: Option<Vec<String>>,
    /// New attendance rate.
    #[validate(range(min = 0.0, max = 100.0))]
    pub attendance_rate: Option<f64>,
    /// New department.
    #[validate(length(min = 1, max = 100, message = "Department must not be empty"))]
    pub department: Option<String>,
    /// New salary.
    #[validate(range(min = 0.0))]
    pub salary: Option<f64>,
    /// New join date.
    pub join_date: Option<NaiveDate>,
}

impl UpdateEmployeeRequest {
    /// Converts into the entity patch.
    pub fn into_patch(self) -> EmployeePatch {
        EmployeePatch {
            name: self.name,
            email: self.email,
            age: self.age,
            title: self.title,
            skills: self.skills,
            attendance_rate: self.attendance_rate,
            department: self.department,
            salary: self.salary,
            join_date: self.join_date,
        }
    }
}

/// Query parameters for the employee list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmployeeListParams {
    /// Page size; defaults to 10.
    pub first: Option<i64>,
    /// Cursor to resume after, from a previous page's `endCursor`.
    pub after: Option<String>,
    /// Free-text filter over name, email, title, and department.
    pub filter: Option<String>,
    /// Department filter, exact match.
    pub department: Option<String>,
    /// Sort field, wire name (e.g. `name`, `salary`, `joinDate`).
    pub sort: Option<String>,
    /// Sort direction, `ASC` or `DESC`. Ignored without `sort`.
    pub order: Option<String>,
}

impl EmployeeListParams {
    /// Parses the raw parameters into a pipeline query.
    pub fn into_query(self) -> AppResult<ListQuery> {
        let first = match self.first {
            None => DEFAULT_PAGE_SIZE,
            Some(n) if n < 0 => {
                return Err(AppError::validation("first must be zero or greater"));
            }
            Some(n) => n as u64,
        };

        let sort = match self.sort.as_deref() {
            None => None,
            Some(field) => {
                let field: EmployeeSortField = field.parse()?;
                let order = match self.order.as_deref() {
                    None => SortOrder::default(),
                    Some(order) => order.parse()?,
                };
                Some(EmployeeSort::new(field, order))
            }
        };

        Ok(ListQuery {
            first,
            after: self.after,
            filter: self.filter,
            department: self.department,
            sort,
        })
    }
}
