//! # Pagination Parameters
//!
//! Lenient parsing of `page` / `perPage` query parameters.

use std::collections::HashMap;

/// Page used when `page` is missing or invalid
pub const DEFAULT_PAGE: usize = 1;

/// Page size used when `perPage` is missing or invalid
pub const DEFAULT_PER_PAGE: usize = 10;

/// Parsed pagination request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParams {
    /// 1-based page number
    pub page: usize,

    /// Maximum records per page, always >= 1
    pub per_page: usize,
}

impl Default for PageParams {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl PageParams {
    /// Parse from query parameters.
    ///
    /// Never fails: anything that is not an integer >= 1 falls back to the
    /// default for that parameter.
    pub fn parse(params: &HashMap<String, String>) -> Self {
        Self {
            page: parse_positive(params.get("page")).unwrap_or(DEFAULT_PAGE),
            per_page: parse_positive(params.get("perPage")).unwrap_or(DEFAULT_PER_PAGE),
        }
    }

    /// Number of records to skip
    pub fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.per_page)
    }

    pub fn limit(&self) -> usize {
        self.per_page
    }
}

fn parse_positive(value: Option<&String>) -> Option<usize> {
    let parsed: i64 = value?.trim().parse().ok()?;
    if parsed < 1 {
        return None;
    }
    usize::try_from(parsed).ok()
}
