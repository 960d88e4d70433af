//! Pure role-based access decisions for directory operations.

pub mod engine;

pub use engine::{AccessPolicy, RecordScope};
