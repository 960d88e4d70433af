//! Core type definitions used across the Roster workspace.

pub mod connection;
pub mod cursor;
pub mod id;
pub mod sorting;

pub use connection::{Connection, Edge, PageInfo};
pub use cursor::{decode_cursor, encode_cursor};
pub use id::*;
pub use sorting::SortOrder;
