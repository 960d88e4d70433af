//! List query pipeline — filtering, ordering, and cursor pagination.
//!
//! The pipeline operates on the records a caller is allowed to see; the
//! service narrows the set to the caller's scope before handing it over.
//! Steps run in a fixed order: free-text filter, department filter, stable
//! sort, cursor resolution, page slice. `totalCount` always describes the
//! filtered sequence, never the page.

use roster_core::result::AppResult;
use roster_core::types::{Connection, Edge, PageInfo, decode_cursor, encode_cursor};
use roster_entity::{Employee, EmployeeSort};

/// Page size used when the caller does not ask for one.
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// One parsed list query.
#[derive(Debug, Clone)]
pub struct ListQuery {
    /// Page size. Zero is valid and yields an empty page with counts intact.
    pub first: u64,
    /// Opaque cursor to resume after, from a previous page's `endCursor`.
    pub after: Option<String>,
    /// Case-insensitive substring matched against name, email, title, and
    /// department.
    pub filter: Option<String>,
    /// Exact department, compared case-insensitively.
    pub department: Option<String>,
    /// Sort key and direction. Absent keeps the input order.
    pub sort: Option<EmployeeSort>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            first: DEFAULT_PAGE_SIZE,
            after: None,
            filter: None,
            department: None,
            sort: None,
        }
    }
}

impl ListQuery {
    /// Runs the pipeline over `records` and cuts one page.
    ///
    /// The sort is stable: records with equal keys keep the relative order
    /// they had in `records`, in both directions. A cursor that decodes but
    /// does not occur in the filtered sequence yields an empty page rather
    /// than an error; a cursor that does not decode at all is invalid input.
    pub fn execute(&self, records: Vec<Employee>) -> AppResult<Connection<Employee>> {
        let mut records = records;

        if let Some(filter) = self.filter.as_deref() {
            let needle = filter.to_lowercase();
            records.retain(|record| matches_filter(record, &needle));
        }

        if let Some(department) = self.department.as_deref() {
            records.retain(|record| record.department.eq_ignore_ascii_case(department));
        }

        if let Some(sort) = &self.sort {
            records.sort_by(|a, b| sort.compare(a, b));
        }

        let total_count = records.len() as u64;

        // The page starts immediately after the cursor record, or at the
        // front of the sequence when no cursor is given.
        let start = match self.after.as_deref() {
            None => 0,
            Some(after) => {
                let id = decode_cursor(after)?;
                match records.iter().position(|record| record.id.to_string() == id) {
                    Some(index) => index + 1,
                    // The cursor was minted against a different filter or
                    // sort context; there is nothing after it here.
                    None => return Ok(Connection::empty(total_count)),
                }
            }
        };

        let has_previous_page = start > 0;
        let has_next_page = (start as u64).saturating_add(self.first) < total_count;

        let page_size = usize::try_from(self.first).unwrap_or(usize::MAX);
        let edges: Vec<Edge<Employee>> = records
            .into_iter()
            .skip(start)
            .take(page_size)
            .map(|record| Edge {
                cursor: encode_cursor(&record.id),
                node: record,
            })
            .collect();

        let page_info = PageInfo {
            has_next_page,
            has_previous_page,
            start_cursor: edges.first().map(|edge| edge.cursor.clone()),
            end_cursor: edges.last().map(|edge| edge.cursor.clone()),
        };

        Ok(Connection {
            edges,
            page_info,
            total_count,
        })
    }
}

fn matches_filter(record: &Employee, needle: &str) -> bool {
    record.name.to_lowercase().contains(needle)
        || record.email.to_lowercase().contains(needle)
        || record.title.to_lowercase().contains(needle)
        || record.department.to_lowercase().contains(needle)
}
