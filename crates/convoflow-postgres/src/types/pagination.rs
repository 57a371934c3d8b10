//! Offset-based pagination for list queries.

use serde::{Deserialize, Serialize};

/// Maximum number of items per page.
pub const MAX_LIMIT: i64 = 1000;

/// Offset-based pagination parameters for database queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OffsetPagination {
    /// Maximum number of records to return.
    pub limit: i64,
    /// Number of records to skip.
    pub offset: i64,
}

impl OffsetPagination {
    /// Creates a new pagination instance, clamping out-of-range values.
    pub fn new(limit: i64, offset: i64) -> Self {
        Self {
            limit: limit.clamp(1, MAX_LIMIT),
            offset: offset.max(0),
        }
    }
}

impl Default for OffsetPagination {
    fn default() -> Self {
        Self {
            limit: 100,
            offset: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_clamps() {
        let pagination = OffsetPagination::new(0, -5);
        assert_eq!(pagination.limit, 1);
        assert_eq!(pagination.offset, 0);

        let pagination = OffsetPagination::new(5000, 20);
        assert_eq!(pagination.limit, MAX_LIMIT);
        assert_eq!(pagination.offset, 20);
    }
}
