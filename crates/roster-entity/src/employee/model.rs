//! Personnel record entity model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use roster_core::types::EmployeeId;

use super::role::EmployeeRole;

/// A personnel record in the directory.
///
/// Field names are camelCase on the wire and are part of the public
/// contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Unique record identifier. Opaque and stable for the record's
    /// lifetime.
    pub id: EmployeeId,
    /// Full display name.
    pub name: String,
    /// Email address. Unique across the directory and the key linking the
    /// record to its login credential.
    pub email: String,
    /// Age in years.
    pub age: u32,
    /// Job title.
    pub title: String,
    /// Skills, in the order they were entered.
    pub skills: Vec<String>,
    /// Attendance rate in percent (0-100).
    pub attendance_rate: f64,
    /// Department name.
    pub department: String,
    /// Annual salary.
    pub salary: f64,
    /// First day of employment.
    pub join_date: NaiveDate,
    /// Directory role.
    pub role: EmployeeRole,
}

impl Employee {
    /// Case-insensitive email comparison used for ownership checks and
    /// lookups.
    pub fn has_email(&self, email: &str) -> bool {
        self.email.eq_ignore_ascii_case(email)
    }

    /// Check if this record carries admin privileges.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Apply a partial patch, overwriting only the fields it carries.
    ///
    /// The record's id and role are not patchable.
    pub fn apply_patch(&mut self, patch: EmployeePatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(age) = patch.age {
            self.age = age;
        }
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(skills) = patch.skills {
            self.skills = skills;
        }
        if let Some(attendance_rate) = patch.attendance_rate {
            self.attendance_rate = attendance_rate;
        }
        if let Some(department) = patch.department {
            self.department = department;
        }
        if let Some(salary) = patch.salary {
            self.salary = salary;
        }
        if let Some(join_date) = patch.join_date {
            self.join_date = join_date;
        }
    }
}

/// A partial update to a personnel record. Absent fields are left untouched.
///
/// There is deliberately no `role` field: roles are fixed at creation and
/// cannot drift away from the paired credential through the update path.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePatch {
    /// New display name.
    pub name: Option<String>,
    /// New email address. Changing it re-keys the record.
    pub email: Option<String>,
    /// New age.
    pub age: Option<u32>,
    /// New job title.
    pub title: Option<String>,
    /// Replacement skills list.
    pub skills: Option<Vec<String>>,
    /// New attendance rate.
    pub attendance_rate: Option<f64>,
    /// New department.
    pub department: Option<String>,
    /// New salary.
    pub salary: Option<f64>,
    /// New join date.
    pub join_date: Option<NaiveDate>,
}

impl EmployeePatch {
    /// Whether applying this patch would change the record's email key.
    pub fn changes_email(&self, current: &str) -> bool {
        match &self.email {
            Some(email) => !email.eq_ignore_ascii_case(current),
            None => false,
        }
    }
}
