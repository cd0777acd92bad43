//! Wire types shared across the snake_case API surfaces.

use serde::{Deserialize, Serialize};

/// Paginated list envelope.
///
/// `next`/`previous` are opaque URLs served by the API; pass their query
/// portion back via `limit`/`offset` list parameters to page through.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Paginated<T> {
    /// Total number of results across all pages.
    pub count: u64,
    /// URL of the next page, if any.
    #[serde(default)]
    pub next: Option<String>,
    /// URL of the previous page, if any.
    #[serde(default)]
    pub previous: Option<String>,
    /// Results for the current page.
    pub results: Vec<T>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paginated_roundtrip_defaults() {
        let json = serde_json::json!({"count": 1, "results": ["x"]});
        let page: Paginated<String> = serde_json::from_value(json).unwrap();
        assert_eq!(page.count, 1);
        assert_eq!(page.next, None);
        assert_eq!(page.previous, None);
        assert_eq!(page.results, vec!["x"]);
    }
}
