//! Catalog Query Builder
//!
//! Maps the raw parameters of a list request onto a storage filter and a
//! pagination window. Nothing here can fail: malformed input is clamped or
//! ignored so the list endpoint never rejects a request.

use super::types::ListParams;
use crate::storage::filter::{PageWindow, PlantFilter};

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 24;
pub const MAX_LIMIT: u64 = 100;

/// Category value that means "no category filter".
pub const ALL_CATEGORIES: &str = "all";

/// A normalized list request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlantQuery {
    pub filter: PlantFilter,
    pub page: u64,
    pub limit: u64,
}

impl PlantQuery {
    pub fn from_params(params: &ListParams) -> Self {
        Self {
            filter: build_filter(params),
            page: normalize_page(params.page.as_deref()),
            limit: normalize_limit(params.limit.as_deref()),
        }
    }

    pub fn window(&self) -> PageWindow {
        PageWindow {
            skip: (self.page - 1).saturating_mul(self.limit),
            take: self.limit,
        }
    }
}

pub fn build_filter(params: &ListParams) -> PlantFilter {
    let text = params
        .q
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .map(str::to_string);

    let category = params
        .category
        .as_deref()
        .filter(|c| !c.is_empty() && *c != ALL_CATEGORIES)
        .map(str::to_string);

    // Any value other than "true" selects out-of-stock plants.
    let in_stock = params.in_stock.as_deref().map(|v| v == "true");

    PlantFilter {
        text,
        category,
        in_stock,
    }
}

/// Page number, falling back to 1 for anything below 1 or non-numeric.
pub fn normalize_page(raw: Option<&str>) -> u64 {
    match raw.and_then(parse_leading_int) {
        Some(page) if page >= 1 => page as u64,
        _ => DEFAULT_PAGE,
    }
}

/// Page size: non-numeric or below 1 falls back to the default, anything
/// above the maximum is capped.
pub fn normalize_limit(raw: Option<&str>) -> u64 {
    match raw.and_then(parse_leading_int) {
        Some(limit) if limit >= 1 => (limit as u64).min(MAX_LIMIT),
        _ => DEFAULT_LIMIT,
    }
}

/// Reads the integer prefix of `raw`: leading whitespace and an optional
/// sign are accepted, parsing stops at the first non-digit, and values
/// beyond the `i64` range saturate. `"12abc"` gives 12, `"abc"` gives `None`.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut value: i64 = 0;
    let mut seen_digit = false;
    for byte in digits.bytes() {
        if !byte.is_ascii_digit() {
            break;
        }
        seen_digit = true;
        value = value
            .saturating_mul(10)
            .saturating_add(i64::from(byte - b'0'));
    }

    if !seen_digit {
        return None;
    }
    Some(if negative { -value } else { value })
}
