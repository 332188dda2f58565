//! Page requests and paginated results.

use crate::model::pagination::PageDto;

pub const DEFAULT_PAGE_SIZE: u64 = 10;
pub const MAX_PAGE_SIZE: u64 = 100;

/// Normalized 1-based page request.
///
/// Construct with [`PageRequest::new`], which clamps out-of-range input instead of
/// rejecting it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub page_size: u64,
}

impl PageRequest {
    /// Builds a page request from raw query values.
    ///
    /// A page below 1 becomes 1. A page size below 1 falls back to the default and
    /// sizes above the maximum are capped.
    pub fn new(page: i64, page_size: i64) -> Self {
        let page_size = if page_size < 1 {
            DEFAULT_PAGE_SIZE
        } else {
            (page_size as u64).min(MAX_PAGE_SIZE)
        };

        Self {
            page: page.max(1) as u64,
            page_size,
        }
    }

    /// Zero-based page index as expected by SeaORM's paginator.
    pub fn index(&self) -> u64 {
        self.page - 1
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// One page of domain models with totals.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u64,
    pub page_size: u64,
    pub total_items: u64,
    pub total_pages: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, request: PageRequest, total_items: u64) -> Self {
        Self {
            items,
            page: request.page,
            page_size: request.page_size,
            total_items,
            total_pages: total_items.div_ceil(request.page_size),
        }
    }

    /// Converts every item, keeping the page metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            page_size: self.page_size,
            total_items: self.total_items,
            total_pages: self.total_pages,
        }
    }

    pub fn into_dto<D>(self, f: impl FnMut(T) -> D) -> PageDto<D> {
        let page = self.map(f);

        PageDto {
            page: page.page,
            page_size: page.page_size,
            total_items: page.total_items,
            total_pages: page.total_pages,
            items: page.items,
        }
    }
}
