use serde::Serialize;

use super::{RepositoryError, Result};

/// Page size used when the caller does not ask for one.
pub const DEFAULT_PAGE_SIZE: i32 = 5;

/// A bounded scan request.
///
/// Only built through [`PageRequest::new`], [`PageRequest::from_query`] or
/// `Default`, so the limit is always at least 1.
///
/// ```compile_fail
/// use patients_core::storage::PageRequest;
///
/// let page = PageRequest { limit: 0, next: None };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    limit: i32,
    /// Key of the last item of the previous page.
    next: Option<String>,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            limit: DEFAULT_PAGE_SIZE,
            next: None,
        }
    }
}

impl PageRequest {
    /// Creates a page request, rejecting limits the store would refuse.
    pub fn new(limit: i32, next: Option<String>) -> Result<Self> {
        if limit < 1 {
            return Err(RepositoryError::InvalidData(format!(
                "limit must be greater than or equal to 1, got {limit}"
            )));
        }

        Ok(Self {
            limit,
            next: next.filter(|n| !n.is_empty()),
        })
    }

    /// Maximum number of items to scan.
    pub fn limit(&self) -> i32 {
        self.limit
    }

    /// Cursor to resume after, if any.
    pub fn next(&self) -> Option<&str> {
        self.next.as_deref()
    }

    /// Builds a page request from raw query-string values.
    ///
    /// A missing `limit` falls back to [`DEFAULT_PAGE_SIZE`]; an empty `next`
    /// starts from the beginning of the table.
    pub fn from_query(limit: Option<&str>, next: Option<String>) -> Result<Self> {
        let limit = match limit {
            None => DEFAULT_PAGE_SIZE,
            Some(raw) => raw.trim().parse::<i32>().map_err(|_| {
                RepositoryError::InvalidData(format!("limit must be an integer, got {raw:?}"))
            })?,
        };

        Self::new(limit, next)
    }
}

/// One page of a scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Cursor for the following page; `None` on the last page.
    pub next_token: Option<String>,
}
