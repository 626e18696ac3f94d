//! Page arithmetic for paginated platform listings.

/// Records per page unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Slice bounds and page counters for one request.
///
/// The slice honors the requested page as given: a page below 1 skips
/// nothing (so it returns the first page's items) and a page past the end
/// yields an empty slice. Only `reported_page` is clamped into
/// `1..=max(total_pages, 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// First item index (inclusive).
    pub start: usize,
    /// Last item index (exclusive).
    pub end: usize,
    /// `ceil(total_items / page_size)`; zero when there are no items.
    pub total_pages: usize,
    /// The requested page clamped into the valid range.
    pub reported_page: usize,
}

impl PageWindow {
    /// Compute the window for `requested` over `total_items` items.
    ///
    /// A `page_size` of zero is treated as one.
    pub fn compute(requested: i64, page_size: usize, total_items: usize) -> Self {
        let page_size = page_size.max(1);
        let total_pages = total_items.div_ceil(page_size);

        let skipped_pages =
            usize::try_from(requested.saturating_sub(1).max(0)).unwrap_or(usize::MAX);
        let start = skipped_pages.saturating_mul(page_size).min(total_items);
        let end = start.saturating_add(page_size).min(total_items);

        let last_page = total_pages.max(1);
        let reported_page = if requested < 1 {
            1
        } else {
            usize::try_from(requested)
                .unwrap_or(usize::MAX)
                .min(last_page)
        };

        Self {
            start,
            end,
            total_pages,
            reported_page,
        }
    }

    /// Number of items inside the window.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the window selects nothing.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}
