use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::formatter::PetView;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 25;
pub const MAX_LIMIT: u64 = 100;
/// Largest offset a store query accepts (signed 64-bit on the wire).
pub const MAX_SKIP: u64 = i64::MAX as u64;

/// Raw `page` / `limit` query parameters, kept as text so that any value
/// can fall back to a default instead of failing the request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// Page number, starting at 1
    #[param(example = "1")]
    pub page: Option<String>,
    /// Page size, between 1 and 100
    #[param(example = "25")]
    pub limit: Option<String>,
}

impl PageQuery {
    /// Build from decoded query pairs. The first occurrence of a key wins.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "page" => &mut query.page,
                "limit" => &mut query.limit,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into());
            }
        }
        query
    }
}

/// Resolved page window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub limit: u64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl PageRequest {
    /// Resolve query text into a page window.
    ///
    /// Values are read like JavaScript's `parseInt`: leading whitespace and an
    /// optional sign, then digits up to the first non-digit. Missing or
    /// unparseable values use the defaults; parsed values are clamped
    /// (`page >= 1`, `1 <= limit <= 100`).
    pub fn from_query(query: &PageQuery) -> Self {
        let page = query
            .page
            .as_deref()
            .and_then(parse_leading_int)
            .map_or(DEFAULT_PAGE, |page| clamp(page, 1, u64::MAX));
        let limit = query
            .limit
            .as_deref()
            .and_then(parse_leading_int)
            .map_or(DEFAULT_LIMIT, |limit| clamp(limit, 1, MAX_LIMIT));

        Self { page, limit }
    }

    /// Number of records before this page, capped at [`MAX_SKIP`].
    pub fn skip(&self) -> u64 {
        (self.page - 1).saturating_mul(self.limit).min(MAX_SKIP)
    }
}

/// `pagination` block of a list response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Pagination {
    pub page: u64,
    pub limit: u64,
    pub total: u64,
    /// `ceil(total / limit)`, or 1 when there are no records
    pub pages: u64,
}

impl Pagination {
    pub fn new(request: PageRequest, total: u64) -> Self {
        let pages = if total == 0 {
            1
        } else {
            total.div_ceil(request.limit.max(1))
        };

        Self {
            page: request.page,
            limit: request.limit,
            total,
            pages,
        }
    }
}

/// `{ message, data, pagination }`
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PetListResponse {
    #[schema(example = "Pets retrieved successfully.")]
    pub message: String,
    pub data: Vec<PetView>,
    pub pagination: Pagination,
}

fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits: Vec<i64> = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .map(|b| i64::from(b - b'0'))
        .collect();
    if digits.is_empty() {
        return None;
    }

    let magnitude = digits
        .into_iter()
        .fold(0i64, |acc, d| acc.saturating_mul(10).saturating_add(d));

    Some(if negative { -magnitude } else { magnitude })
}

fn clamp(value: i64, min: u64, max: u64) -> u64 {
    u64::try_from(value).unwrap_or(0).clamp(min, max)
}
