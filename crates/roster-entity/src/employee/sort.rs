//! Sortable fields for directory list queries.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use roster_core::AppError;
use roster_core::types::SortOrder;

use super::model::Employee;

/// The closed set of fields a directory listing can be sorted by.
///
/// Wire names are the camelCase record field names; anything outside this
/// set is rejected at parse time rather than silently ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EmployeeSortField {
    /// Sort by display name.
    Name,
    /// Sort by email address.
    Email,
    /// Sort by age.
    Age,
    /// Sort by job title.
    Title,
    /// Sort by attendance rate.
    AttendanceRate,
    /// Sort by department name.
    Department,
    /// Sort by salary.
    Salary,
    /// Sort by join date.
    JoinDate,
}

impl EmployeeSortField {
    /// Compare two records on this field alone, ascending.
    pub fn compare(&self, a: &Employee, b: &Employee) -> Ordering {
        match self {
            Self::Name => a.name.cmp(&b.name),
            Self::Email => a.email.cmp(&b.email),
            Self::Age => a.age.cmp(&b.age),
            Self::Title => a.title.cmp(&b.title),
            Self::AttendanceRate => a.attendance_rate.total_cmp(&b.attendance_rate),
            Self::Department => a.department.cmp(&b.department),
            Self::Salary => a.salary.total_cmp(&b.salary),
            Self::JoinDate => a.join_date.cmp(&b.join_date),
        }
    }

    /// Return the wire name of this field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Age => "age",
            Self::Title => "title",
            Self::AttendanceRate => "attendanceRate",
            Self::Department => "department",
            Self::Salary => "salary",
            Self::JoinDate => "joinDate",
        }
    }
}

impl fmt::Display for EmployeeSortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EmployeeSortField {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "email" => Ok(Self::Email),
            "age" => Ok(Self::Age),
            "title" => Ok(Self::Title),
            "attendanceRate" => Ok(Self::AttendanceRate),
            "department" => Ok(Self::Department),
            "salary" => Ok(Self::Salary),
            "joinDate" => Ok(Self::JoinDate),
            _ => Err(AppError::validation(format!(
                "Unknown sort field: '{s}'. Expected one of: name, email, age, title, \
                 attendanceRate, department, salary, joinDate"
            ))),
        }
    }
}

/// A sort specification: field plus order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EmployeeSort {
    /// Field to sort by.
    pub field: EmployeeSortField,
    /// Sort order; ascending when absent.
    #[serde(default)]
    pub order: SortOrder,
}

impl EmployeeSort {
    /// Create a new sort specification.
    pub fn new(field: EmployeeSortField, order: SortOrder) -> Self {
        Self { field, order }
    }

    /// Oriented comparison for sorting a sequence with this specification.
    pub fn compare(&self, a: &Employee, b: &Employee) -> Ordering {
        self.order.orient(self.field.compare(a, b))
    }
}
