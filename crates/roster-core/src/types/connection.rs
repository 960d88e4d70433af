//! Cursor-paginated result envelope for list queries.
//!
//! Field names are camelCase on the wire and are part of the public
//! contract.

use serde::{Deserialize, Serialize};

/// A single record in a page, paired with the cursor marking its position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Edge<T> {
    /// The record itself.
    pub node: T,
    /// Opaque cursor for resuming pagination immediately after this record.
    pub cursor: String,
}

/// Pagination flags and boundary cursors for one page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// Whether records exist after the end of this page.
    pub has_next_page: bool,
    /// Whether records exist before the start of this page.
    pub has_previous_page: bool,
    /// Cursor of the first record on the page, absent when the page is empty.
    pub start_cursor: Option<String>,
    /// Cursor of the last record on the page, absent when the page is empty.
    pub end_cursor: Option<String>,
}

impl PageInfo {
    /// Page info for an empty page.
    pub fn empty() -> Self {
        Self {
            has_next_page: false,
            has_previous_page: false,
            start_cursor: None,
            end_cursor: None,
        }
    }
}

/// A page of records together with the size of the whole matching sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection<T> {
    /// The records on this page, in sequence order.
    pub edges: Vec<Edge<T>>,
    /// Pagination flags and boundary cursors.
    pub page_info: PageInfo,
    /// Size of the filtered sequence the page was cut from, independent of
    /// the page boundaries.
    pub total_count: u64,
}

impl<T> Connection<T> {
    /// An empty page over a sequence of `total_count` records.
    pub fn empty(total_count: u64) -> Self {
        Self {
            edges: Vec::new(),
            page_info: PageInfo::empty(),
            total_count,
        }
    }
}
