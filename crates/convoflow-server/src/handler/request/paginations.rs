use convoflow_postgres::types::OffsetPagination;
use serde::{Deserialize, Serialize};

/// Offset pagination parameters accepted as a query string.
///
/// Missing values fall back to the first page of 100 records; larger limits
/// are clamped to the database maximum.
#[derive(Debug, Default, Copy, Clone, Serialize, Deserialize)]
pub struct Pagination {
    /// Number of records to skip.
    pub offset: Option<u32>,
    /// Maximum number of records to return.
    pub limit: Option<u32>,
}

impl Pagination {
    /// Returns pagination with both values set.
    #[inline]
    pub fn new(offset: u32, limit: u32) -> Self {
        Self {
            offset: Some(offset),
            limit: Some(limit),
        }
    }
}

impl From<Pagination> for OffsetPagination {
    fn from(pagination: Pagination) -> Self {
        let defaults = OffsetPagination::default();
        OffsetPagination::new(
            pagination.limit.map_or(defaults.limit, i64::from),
            pagination.offset.map_or(defaults.offset, i64::from),
        )
    }
}

#[cfg(test)]
mod tests {
    use convoflow_postgres::types::MAX_LIMIT;

    use super::*;

    #[test]
    fn test_pagination_defaults() {
        let pagination = OffsetPagination::from(Pagination::default());
        assert_eq!(pagination.limit, 100);
        assert_eq!(pagination.offset, 0);
    }

    #[test]
    fn test_pagination_clamps_limit() {
        let pagination = OffsetPagination::from(Pagination::new(5, 50_000));
        assert_eq!(pagination.limit, MAX_LIMIT);
        assert_eq!(pagination.offset, 5);
    }
}
