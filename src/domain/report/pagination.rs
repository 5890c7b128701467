use std::ops::Range;

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// 1-based page cursor over an ordered view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: usize,
    page_size: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Pagination {
    /// A `page_size` below 1 is clamped to 1.
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Any page index is accepted; one past the end simply yields an empty page.
    pub fn go_to(&mut self, page: usize) {
        self.page = page;
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page = 1;
    }

    pub fn reset(&mut self) {
        self.page = 1;
    }

    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.page_size)
    }

    /// Slice bounds of the current page, clamped to `0..total`.
    pub fn range(&self, total: usize) -> Range<usize> {
        let Some(first) = self.page.checked_sub(1) else {
            return 0..0;
        };
        let start = first.saturating_mul(self.page_size).min(total);
        let end = start.saturating_add(self.page_size).min(total);
        start..end
    }

    pub fn slice<'a, T>(&self, view: &'a [T]) -> &'a [T] {
        &view[self.range(view.len())]
    }
}
