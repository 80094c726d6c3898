//! Pagination state types
//!
//! Defines the per-request values every other part of the module derives from.

use crate::config::PaginateConfig;
use crate::query::Query;
use serde::Serialize;

/// Parse a leading integer, falling back to `default`
///
/// Accepts optional leading whitespace and sign followed by digits; anything
/// after the digits is ignored (`"3abc"` parses as 3). Absent, unparseable,
/// out-of-range and zero inputs all yield `default`. Callers clamp the
/// result themselves.
pub fn parse_int_or(value: Option<&str>, default: i64) -> i64 {
    value
        .and_then(parse_int_prefix)
        .filter(|n| *n != 0)
        .unwrap_or(default)
}

fn parse_int_prefix(value: &str) -> Option<i64> {
    let value = value.trim_start();
    let (negative, digits) = match value.as_bytes().first() {
        Some(b'-') => (true, &value[1..]),
        Some(b'+') => (false, &value[1..]),
        _ => (false, value),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let n = digits[..end].parse::<i64>().ok()?;
    Some(if negative { -n } else { n })
}

/// Pagination values computed for one request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaginationState {
    /// Current page, 1-based
    pub page: i64,
    /// Items per page
    pub limit: i64,
    /// Items before the current page, `(page - 1) * limit`
    pub skip: i64,
}

impl PaginationState {
    /// Create a state for a page and limit; `page` is floored at 1
    pub fn new(page: i64, limit: i64) -> Self {
        let page = page.max(1);
        Self {
            page,
            limit,
            skip: (page - 1).saturating_mul(limit),
        }
    }

    /// Compute the state from a request query
    pub fn from_query(query: &Query, config: &PaginateConfig) -> Self {
        let page = parse_int_or(query.get_str("page"), 1);
        let limit = config.clamp_limit(parse_int_or(
            query.get_str("limit"),
            config.default_limit,
        ));
        Self::new(page, limit)
    }

    /// Alias of `skip`
    pub fn offset(&self) -> i64 {
        self.skip
    }

    /// Whether there is a page before this one
    pub fn has_previous_pages(&self) -> bool {
        self.page > 1
    }
}

/// One entry of a page navigation window
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageLink {
    /// Page number, 1-based
    pub number: i64,
    /// Path and query that loads this page
    pub url: String,
}
