//! # roster-entity
//!
//! Domain entity models for Roster: personnel records, login credentials,
//! and the per-request principal. Every struct in this crate derives
//! `Debug`, `Clone`, `Serialize`, and `Deserialize`; secret material is
//! excluded from serialization at the field level.

pub mod credential;
pub mod employee;
pub mod principal;

pub use credential::Credential;
pub use employee::{Employee, EmployeePatch, EmployeeRole, EmployeeSort, EmployeeSortField};
pub use principal::Principal;
