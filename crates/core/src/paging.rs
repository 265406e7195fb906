//! Page requests and page keys for paginated sources
//!
//! Sources number their pages differently: the posts feed is offset based
//! and starts at page 0, the picture and repository feeds start at page 1.
//! [`PagingConfig`] records which, and [`Page`] derives the neighbouring
//! keys from what came back.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// How a source pages its results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagingConfig {
    /// Records requested per page
    pub page_size: u32,
    /// Index of the first page
    pub first_page: u32,
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self {
            page_size: 20,
            first_page: 0,
        }
    }
}

impl PagingConfig {
    /// Zero-based paging with the given size
    #[must_use]
    pub fn zero_based(page_size: u32) -> Self {
        Self {
            page_size,
            first_page: 0,
        }
    }

    /// One-based paging with the given size
    #[must_use]
    pub fn one_based(page_size: u32) -> Self {
        Self {
            page_size,
            first_page: 1,
        }
    }

    /// Request for the first page
    #[must_use]
    pub fn first(&self) -> PageRequest {
        PageRequest {
            page: self.first_page,
            page_size: self.page_size,
            first_page: self.first_page,
        }
    }

    /// Request for an arbitrary page
    pub fn request(&self, page: u32) -> Result<PageRequest> {
        if self.page_size == 0 {
            return Err(Error::invalid_page("page size must be greater than zero"));
        }
        if page < self.first_page {
            return Err(Error::invalid_page(format!(
                "page {page} is before the first page {}",
                self.first_page
            )));
        }

        Ok(PageRequest {
            page,
            page_size: self.page_size,
            first_page: self.first_page,
        })
    }
}

/// A single page to fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page index in the source's numbering
    pub page: u32,
    /// Records requested
    pub page_size: u32,
    first_page: u32,
}

impl PageRequest {
    /// Offset of the first record on this page, for `_start`/`_limit` APIs
    #[must_use]
    pub fn offset(&self) -> u64 {
        u64::from(self.page - self.first_page) * u64::from(self.page_size)
    }

    /// Whether this is the source's first page
    #[must_use]
    pub fn is_first(&self) -> bool {
        self.page == self.first_page
    }
}

/// A fetched page with its neighbouring keys
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Page index in the source's numbering
    pub page: u32,
    /// Records on this page
    pub items: Vec<T>,
    /// Previous page, `None` on the first page
    pub prev_key: Option<u32>,
    /// Next page, `None` once a page comes back empty or the index space is exhausted
    pub next_key: Option<u32>,
}

impl<T> Page<T> {
    /// Build a page from the records a request returned
    pub fn from_items(request: PageRequest, items: Vec<T>) -> Self {
        let prev_key = if request.is_first() {
            None
        } else {
            Some(request.page - 1)
        };
        let next_key = if items.is_empty() {
            None
        } else {
            request.page.checked_add(1)
        };

        Self {
            page: request.page,
            items,
            prev_key,
            next_key,
        }
    }

    /// True once no further pages should be requested
    #[must_use]
    pub fn end_of_pagination_reached(&self) -> bool {
        self.next_key.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_zero_based() {
        let config = PagingConfig::zero_based(20);
        assert_eq!(config.first().offset(), 0);
        assert_eq!(config.request(3).unwrap().offset(), 60);
    }

    #[test]
    fn test_offset_one_based() {
        let config = PagingConfig::one_based(10);
        assert_eq!(config.first().page, 1);
        assert_eq!(config.request(2).unwrap().offset(), 10);
    }

    #[test]
    fn test_first_page_has_no_prev_key() {
        let config = PagingConfig::zero_based(2);
        let page = Page::from_items(config.first(), vec![1, 2]);
        assert_eq!(page.prev_key, None);
        assert_eq!(page.next_key, Some(1));
        assert!(!page.end_of_pagination_reached());
    }

    #[test]
    fn test_empty_page_ends_pagination() {
        let config = PagingConfig::one_based(10);
        let page: Page<u8> = Page::from_items(config.request(4).unwrap(), vec![]);
        assert_eq!(page.prev_key, Some(3));
        assert_eq!(page.next_key, None);
        assert!(page.end_of_pagination_reached());
    }

    #[test]
    fn test_last_representable_page_ends_pagination() {
        let config = PagingConfig::one_based(10);
        let page = Page::from_items(config.request(u32::MAX).unwrap(), vec![1]);
        assert_eq!(page.prev_key, Some(u32::MAX - 1));
        assert_eq!(page.next_key, None);
        assert!(page.end_of_pagination_reached());
    }

    #[test]
    fn test_rejects_page_before_first() {
        let config = PagingConfig::one_based(10);
        assert!(config.request(0).is_err());
    }

    #[test]
    fn test_rejects_zero_page_size() {
        let config = PagingConfig::zero_based(0);
        assert!(config.request(0).is_err());
    }
}
