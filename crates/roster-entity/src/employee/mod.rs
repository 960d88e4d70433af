//! Personnel record domain entities.

pub mod model;
pub mod role;
pub mod sort;

pub use model::{Employee, EmployeePatch};
pub use role::EmployeeRole;
pub use sort::{EmployeeSort, EmployeeSortField};
