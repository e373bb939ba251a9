//! Pagination
//!
//! Offset/limit window used by list endpoints.

use serde::Deserialize;

/// Raw pagination parameters as received from a query string
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PageParams {
    #[serde(default)]
    pub offset: Option<i64>,
    #[serde(default)]
    pub limit: Option<i64>,
}

/// Validated pagination window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    offset: i64,
    limit: i64,
}

impl Page {
    /// Build a window from raw parameters
    ///
    /// Negative offsets become 0. A missing limit falls back to
    /// `default_limit`; any limit is clamped into `1..=max_limit`.
    pub fn from_params(params: PageParams, default_limit: i64, max_limit: i64) -> Self {
        let max_limit = max_limit.max(1);
        let offset = params.offset.unwrap_or(0).max(0);
        let limit = params.limit.unwrap_or(default_limit).clamp(1, max_limit);
        Self { offset, limit }
    }

    pub fn offset(&self) -> i64 {
        self.offset
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }
}
