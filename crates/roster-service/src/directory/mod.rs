//! Personnel directory — list queries and record mutations.

pub mod query;
pub mod service;

pub use query::ListQuery;
pub use service::{DirectoryService, NewEmployee};
