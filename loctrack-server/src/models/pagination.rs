//! Offset/limit pagination

use serde::Deserialize;

/// Default number of records returned by a list call
pub const DEFAULT_LIMIT: u32 = 100;

/// Offset/limit window over the store's ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Records to skip
    pub skip: u32,
    /// Maximum records to return
    pub limit: u32,
}

impl Pagination {
    pub fn new(skip: u32, limit: u32) -> Self {
        Self { skip, limit }
    }

    /// SQL OFFSET value.
    pub fn offset(&self) -> i64 {
        self.skip as i64
    }

    /// SQL LIMIT value.
    pub fn limit(&self) -> i64 {
        self.limit as i64
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Query parameters for `GET /locations`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListParams {
    pub skip: Option<u32>,
    pub limit: Option<u32>,
}

impl From<ListParams> for Pagination {
    fn from(params: ListParams) -> Self {
        Self::new(
            params.skip.unwrap_or(0),
            params.limit.unwrap_or(DEFAULT_LIMIT),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let p = Pagination::from(ListParams::default());
        assert_eq!(p.offset(), 0);
        assert_eq!(p.limit(), 100);
    }

    #[test]
    fn explicit_params() {
        let p = Pagination::from(ListParams {
            skip: Some(20),
            limit: Some(5),
        });
        assert_eq!(p, Pagination::new(20, 5));
    }

    #[test]
    fn zero_limit_is_kept() {
        let p = Pagination::from(ListParams {
            skip: None,
            limit: Some(0),
        });
        assert_eq!(p.limit(), 0);
    }
}
