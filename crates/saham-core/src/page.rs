//! Fixed-size pagination over ordered sequences.

use serde::{Deserialize, Serialize};

/// Current page number and page size.
///
/// Page numbers are 1-based. Out-of-range requests clamp into the valid
/// range instead of failing, so a filter that shrinks the set can never
/// leave the view on a page past the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pager {
    page: usize,
    per_page: usize,
}

impl Pager {
    /// Creates a pager on page 1. A zero page size is treated as 1.
    #[must_use]
    pub fn new(per_page: usize) -> Self {
        Self {
            page: 1,
            per_page: per_page.max(1),
        }
    }

    /// The requested page number.
    #[must_use]
    pub fn page(&self) -> usize {
        self.page
    }

    /// The page size.
    #[must_use]
    pub fn per_page(&self) -> usize {
        self.per_page
    }

    /// Requests a page; values below 1 become 1. Clamping against the upper
    /// bound happens at slice time, when the sequence length is known.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Returns to page 1. Called whenever the filter or sort changes.
    pub fn reset(&mut self) {
        self.page = 1;
    }

    /// Total page count for a sequence of `len` items; never zero.
    #[must_use]
    pub fn total_pages(&self, len: usize) -> usize {
        len.div_ceil(self.per_page).max(1)
    }

    /// The requested page clamped into `[1, total_pages]`.
    #[must_use]
    pub fn clamped_page(&self, len: usize) -> usize {
        self.page.clamp(1, self.total_pages(len))
    }

    /// The slice of `items` on the current (clamped) page.
    #[must_use]
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let page = self.clamped_page(items.len());
        let start = (page - 1) * self.per_page;
        let end = (start + self.per_page).min(items.len());
        &items[start.min(items.len())..end]
    }
}

impl Default for Pager {
    fn default() -> Self {
        Self::new(10)
    }
}
