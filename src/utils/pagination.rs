//! Pagination and sort parsing for list endpoints
//!
//! Raw `?page=&limit=&sort=` query parameters are turned into a [`PageSpec`]
//! with a whitelisted ORDER BY clause, so repositories never interpolate
//! client input into SQL.

use serde::Deserialize;

const DEFAULT_LIMIT: u32 = 25;
const MAX_LIMIT: u32 = 100;

/// Raw query-string pagination parameters
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    /// Sort field, optionally prefixed with `-` for descending
    pub sort: Option<String>,
}

/// Resolved pagination spec consumed by repositories
#[derive(Debug, Clone, PartialEq)]
pub struct PageSpec {
    pub limit: i64,
    pub offset: i64,
    pub order_by: String,
}

impl PageParams {
    /// Resolve against a whitelist of sortable columns. Unknown sort fields
    /// fall back to `default_sort` (a `-` prefix means descending).
    pub fn to_spec(&self, allowed: &[&str], default_sort: &str) -> PageSpec {
        let page = self.page.unwrap_or(1).max(1);
        let limit = self.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);

        let sort = self.sort.as_deref().unwrap_or(default_sort);
        let order_by = parse_sort(sort, allowed)
            .or_else(|| parse_sort(default_sort, allowed))
            .unwrap_or_else(|| "created_at DESC".to_string());

        PageSpec {
            limit: i64::from(limit),
            // Widen before multiplying; page * limit can exceed u32
            offset: (i64::from(page) - 1) * i64::from(limit),
            order_by,
        }
    }
}

fn parse_sort(sort: &str, allowed: &[&str]) -> Option<String> {
    let (field, direction) = match sort.strip_prefix('-') {
        Some(field) => (field, "DESC"),
        None => (sort, "ASC"),
    };

    if allowed.contains(&field) {
        Some(format!("{} {}", field, direction))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALLOWED: &[&str] = &["name", "date", "created_at"];

    #[test]
    fn test_defaults() {
        let spec = PageParams::default().to_spec(ALLOWED, "-created_at");
        assert_eq!(
            spec,
            PageSpec {
                limit: 25,
                offset: 0,
                order_by: "created_at DESC".to_string(),
            }
        );
    }

    #[test]
    fn test_page_and_limit() {
        let params = PageParams {
            page: Some(3),
            limit: Some(10),
            sort: None,
        };
        let spec = params.to_spec(ALLOWED, "-created_at");
        assert_eq!(spec.limit, 10);
        assert_eq!(spec.offset, 20);
    }

    #[test]
    fn test_ascending_sort() {
        let params = PageParams {
            sort: Some("name".to_string()),
            ..Default::default()
        };
        assert_eq!(params.to_spec(ALLOWED, "-created_at").order_by, "name ASC");
    }

    #[test]
    fn test_descending_sort() {
        let params = PageParams {
            sort: Some("-date".to_string()),
            ..Default::default()
        };
        assert_eq!(params.to_spec(ALLOWED, "-created_at").order_by, "date DESC");
    }

    #[test]
    fn test_unknown_sort_falls_back() {
        let params = PageParams {
            sort: Some("password; DROP TABLE events".to_string()),
            ..Default::default()
        };
        assert_eq!(
            params.to_spec(ALLOWED, "-created_at").order_by,
            "created_at DESC"
        );
    }

    #[test]
    fn test_limit_is_clamped() {
        let params = PageParams {
            limit: Some(10_000),
            ..Default::default()
        };
        assert_eq!(params.to_spec(ALLOWED, "-created_at").limit, 100);
    }

    #[test]
    fn test_huge_page_number_does_not_overflow() {
        let params = PageParams {
            page: Some(u32::MAX),
            limit: Some(100),
            sort: None,
        };
        let spec = params.to_spec(ALLOWED, "-created_at");
        assert_eq!(spec.offset, (i64::from(u32::MAX) - 1) * 100);
        assert_eq!(spec.limit, 100);
    }

    #[test]
    fn test_zero_page_treated_as_first() {
        let params = PageParams {
            page: Some(0),
            ..Default::default()
        };
        assert_eq!(params.to_spec(ALLOWED, "-created_at").offset, 0);
    }
}
