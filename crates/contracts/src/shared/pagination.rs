//! Offset-based pagination arithmetic shared by list screens.
//!
//! Pages are 1-based: page `n` with page size `s` covers `skip = (n - 1) * s, take = s`.

use serde::{Deserialize, Serialize};

/// Upper bound on rendered page-number buttons
pub const MAX_PAGE_BUTTONS: usize = 5;

/// Derived pagination summary, recomputed after every list fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationInfo {
    pub current_page: usize,
    pub total_pages: usize,
    pub page_size: usize,
    pub total_count: usize,
    pub has_next: bool,
    pub has_previous: bool,
}

impl PaginationInfo {
    /// Empty first page for the given page size
    pub fn first(page_size: usize) -> Self {
        Self::calculate(0, 0, page_size)
    }

    /// Builds the summary from the server's total and the request that produced it.
    ///
    /// `current_page` is clamped into `[1, total_pages]`.
    pub fn calculate(total_count: usize, skip: usize, take: usize) -> Self {
        let take = take.max(1);
        let total_pages = total_pages(total_count, take);
        let current_page = (skip / take + 1).min(total_pages);
        Self {
            current_page,
            total_pages,
            page_size: take,
            total_count,
            has_next: current_page < total_pages,
            has_previous: current_page > 1,
        }
    }

    pub fn skip(&self) -> usize {
        skip_for_page(self.current_page, self.page_size)
    }

    pub fn page_window(&self) -> Vec<usize> {
        page_window(self.current_page, self.total_pages)
    }

    pub fn contains_page(&self, page: usize) -> bool {
        (1..=self.total_pages).contains(&page)
    }
}

/// `max(1, ceil(total_count / take))`
pub fn total_pages(total_count: usize, take: usize) -> usize {
    let take = take.max(1);
    total_count.div_ceil(take).max(1)
}

pub fn skip_for_page(page: usize, page_size: usize) -> usize {
    page.saturating_sub(1) * page_size
}

/// Page numbers to render, at most [`MAX_PAGE_BUTTONS`], centered on the current page
/// where possible.
pub fn page_window(current_page: usize, total_pages: usize) -> Vec<usize> {
    let total_pages = total_pages.max(1);
    let current_page = current_page.clamp(1, total_pages);

    if total_pages <= MAX_PAGE_BUTTONS {
        return (1..=total_pages).collect();
    }
    if current_page <= 3 {
        return (1..=MAX_PAGE_BUTTONS).collect();
    }
    if current_page >= total_pages - 2 {
        return (total_pages - MAX_PAGE_BUTTONS + 1..=total_pages).collect();
    }
    (current_page - 2..=current_page + 2).collect()
}
