//! Zero-based page windows over an id-ordered collection.
//!
//! The arithmetic mirrors what the repositories do in SQL
//! (`LIMIT size OFFSET page * size`) so the in-memory store and the
//! PostgreSQL store report identical totals.

use crate::error::CoreError;

/// Default page size when the caller omits `size`.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// A validated request for one page of results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    size: u32,
}

impl PageRequest {
    /// Build a page request. `size` must be at least 1.
    pub fn new(page: u32, size: u32) -> Result<Self, CoreError> {
        if size == 0 {
            return Err(CoreError::Validation(
                "Page size must be at least 1".to_string(),
            ));
        }
        Ok(Self { page, size })
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    /// Number of rows skipped before this page starts.
    pub fn offset(&self) -> i64 {
        i64::from(self.page).saturating_mul(i64::from(self.size))
    }

    pub fn limit(&self) -> i64 {
        i64::from(self.size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// One page of results together with the totals for the whole collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub request: PageRequest,
    pub total_elements: i64,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, request: PageRequest, total_elements: i64) -> Self {
        Self {
            content,
            request,
            total_elements,
        }
    }

    /// Zero-based index of this page.
    pub fn number(&self) -> u32 {
        self.request.page()
    }

    /// `ceil(total_elements / size)`; zero for an empty collection.
    pub fn total_pages(&self) -> u32 {
        let size = i64::from(self.request.size());
        let pages = (self.total_elements.max(0) + size - 1) / size;
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    /// Slice a page out of an already id-ordered collection.
    pub fn from_ordered(all: Vec<T>, request: PageRequest) -> Self {
        let total_elements = all.len() as i64;
        let offset = usize::try_from(request.offset()).unwrap_or(usize::MAX);
        let content = all
            .into_iter()
            .skip(offset)
            .take(request.size() as usize)
            .collect();
        Self::new(content, request, total_elements)
    }
}
