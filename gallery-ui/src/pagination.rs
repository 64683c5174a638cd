//! Pagination utilities for the album table listing
//!
//! The API pages from 0 and reports the overall row count in the
//! `X-Total-Count` response header.

use std::fmt;

/// Header carrying the total number of rows behind a paged response
pub const TOTAL_COUNT_HEADER: &str = "x-total-count";

/// Sort direction for table listings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Asc => "asc",
            Direction::Desc => "desc",
        }
    }
}

/// `field,direction` sort as the API expects it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOrder {
    pub field: String,
    pub direction: Direction,
}

impl SortOrder {
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: Direction::Asc,
        }
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: Direction::Desc,
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.field, self.direction.as_str())
    }
}

impl std::str::FromStr for SortOrder {
    type Err = String;

    /// Parses `field` or `field,asc|desc`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(2, ',');
        let field = parts.next().unwrap_or_default().trim();
        if field.is_empty() {
            return Err("Sort field cannot be empty".to_string());
        }
        let direction = match parts.next().map(|d| d.trim().to_ascii_lowercase()) {
            None => Direction::Asc,
            Some(d) if d == "asc" => Direction::Asc,
            Some(d) if d == "desc" => Direction::Desc,
            Some(d) => return Err(format!("Unknown sort direction '{}'", d)),
        };
        Ok(Self {
            field: field.to_string(),
            direction,
        })
    }
}

/// Page request for the table listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// Page number (0-indexed)
    pub page: u32,
    pub size: u32,
    pub sort: Option<SortOrder>,
}

impl PageRequest {
    pub fn new(page: u32, size: u32) -> Self {
        Self {
            page,
            size,
            sort: None,
        }
    }

    pub fn sorted(mut self, sort: SortOrder) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("page", self.page.to_string()), ("size", self.size.to_string())];
        if let Some(sort) = &self.sort {
            pairs.push(("sort", sort.to_string()));
        }
        pairs
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(0, gallery_common::config::DEFAULT_PAGE_SIZE).sorted(SortOrder::asc("id"))
    }
}

/// Pagination metadata calculated from total results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Current page number (0-indexed, clamped)
    pub page: u32,
    /// Total number of pages
    pub total_pages: u32,
    /// 1-based index of the first item on the page (0 when empty)
    pub first_item: u64,
    /// 1-based index of the last item on the page (0 when empty)
    pub last_item: u64,
    pub total_items: u64,
}

/// Calculate pagination metadata from total results and requested page
///
/// Ensures page is within valid bounds [0, total_pages - 1].
///
/// # Examples
/// ```
/// use gallery_ui::pagination::calculate_pagination;
///
/// // 45 items at 20 per page = 3 pages (20 + 20 + 5)
/// let p = calculate_pagination(45, 2, 20);
/// assert_eq!(p.total_pages, 3);
/// assert_eq!((p.first_item, p.last_item), (41, 45));
///
/// // Requesting out-of-bounds page gets clamped
/// let p = calculate_pagination(45, 99, 20);
/// assert_eq!(p.page, 2);
/// ```
pub fn calculate_pagination(total_items: u64, requested_page: u32, page_size: u32) -> Pagination {
    let size = u64::from(page_size.max(1));
    // Page count saturates; the total comes from a server header
    let total_pages = u32::try_from(total_items.div_ceil(size)).unwrap_or(u32::MAX);
    let page = requested_page.min(total_pages.saturating_sub(1));

    let (first_item, last_item) = if total_items == 0 {
        (0, 0)
    } else {
        let first = u64::from(page).saturating_mul(size).saturating_add(1);
        (first, first.saturating_add(size - 1).min(total_items))
    };

    Pagination {
        page,
        total_pages,
        first_item,
        last_item,
        total_items,
    }
}

/// Parse the `X-Total-Count` header value, falling back to the item count
pub fn parse_total_count(header: Option<&str>, returned_items: usize) -> u64 {
    header
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(returned_items as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_normal() {
        let p = calculate_pagination(45, 1, 20);
        assert_eq!(p.page, 1);
        assert_eq!(p.total_pages, 3);
        assert_eq!(p.first_item, 21);
        assert_eq!(p.last_item, 40);
    }

    #[test]
    fn test_pagination_out_of_bounds_high() {
        let p = calculate_pagination(30, 99, 20);
        assert_eq!(p.page, 1); // Clamped to last page
        assert_eq!(p.total_pages, 2);
        assert_eq!(p.last_item, 30);
    }

    #[test]
    fn test_pagination_empty() {
        let p = calculate_pagination(0, 3, 20);
        assert_eq!(p.page, 0);
        assert_eq!(p.total_pages, 0);
        assert_eq!((p.first_item, p.last_item), (0, 0));
    }

    #[test]
    fn test_pagination_exact_page_boundary() {
        let p = calculate_pagination(40, 1, 20);
        assert_eq!(p.total_pages, 2);
        assert_eq!((p.first_item, p.last_item), (21, 40));
    }

    #[test]
    fn test_pagination_huge_total_does_not_overflow() {
        let total = parse_total_count(Some("18446744073709551615"), 3);
        let p = calculate_pagination(total, 0, 20);
        assert_eq!(p.total_pages, u32::MAX);
        assert_eq!((p.first_item, p.last_item), (1, 20));

        let p = calculate_pagination(u64::MAX, u32::MAX, 20);
        assert_eq!(p.page, u32::MAX - 1);
        assert_eq!(p.first_item, u64::from(u32::MAX - 1) * 20 + 1);
        assert_eq!(p.last_item, p.first_item + 19);
    }

    #[test]
    fn test_page_request_query_pairs() {
        let req = PageRequest::new(2, 10).sorted(SortOrder::desc("creationDate"));
        assert_eq!(
            req.to_query_pairs(),
            vec![
                ("page", "2".to_string()),
                ("size", "10".to_string()),
                ("sort", "creationDate,desc".to_string()),
            ]
        );
    }

    #[test]
    fn test_sort_order_parse() {
        assert_eq!("name".parse::<SortOrder>().unwrap(), SortOrder::asc("name"));
        assert_eq!("name,DESC".parse::<SortOrder>().unwrap(), SortOrder::desc("name"));
        assert!(",asc".parse::<SortOrder>().is_err());
        assert!("name,up".parse::<SortOrder>().is_err());
    }

    #[test]
    fn test_parse_total_count() {
        assert_eq!(parse_total_count(Some("42"), 3), 42);
        assert_eq!(parse_total_count(Some("garbage"), 3), 3);
        assert_eq!(parse_total_count(None, 7), 7);
    }
}
