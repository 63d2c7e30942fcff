use shared_types::PaginationMeta;

/// Paging position of a list view.
///
/// `total_pages` is never below 1 and `current_page` never leaves
/// `1..=total_pages` once a page has been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    pub current_page: u32,
    pub total_pages: u32,
    pub total_count: u64,
    pub page_size: u32,
}

impl PageState {
    pub fn new(page_size: u32) -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
            total_count: 0,
            page_size: page_size.max(1),
        }
    }

    /// Adopt the position the service reported for a loaded page.
    pub fn apply_meta(&mut self, meta: &PaginationMeta) {
        self.total_pages = meta.pages.max(1);
        self.total_count = meta.total;
        self.current_page = meta.page.clamp(1, self.total_pages);
    }

    pub fn contains(&self, page: u32) -> bool {
        (1..=self.total_pages).contains(&page)
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Whether the view should draw page controls at all.
    pub fn is_paged(&self) -> bool {
        self.total_pages > 1
    }

    pub fn window(&self, max_visible: u32) -> Vec<u32> {
        page_window(self.current_page, self.total_pages, max_visible)
    }

    /// "Showing X to Y of Z results" for the current page.
    pub fn summary(&self) -> String {
        if self.total_count == 0 {
            return "Showing 0 to 0 of 0 results".to_string();
        }
        let size = u64::from(self.page_size);
        let first = u64::from(self.current_page - 1) * size + 1;
        let last = (u64::from(self.current_page) * size).min(self.total_count);
        format!("Showing {first} to {last} of {} results", self.total_count)
    }
}

/// Contiguous run of at most `max_visible` page numbers centred on `current`
/// where possible and shifted to stay inside `1..=total`.
pub fn page_window(current: u32, total: u32, max_visible: u32) -> Vec<u32> {
    if max_visible == 0 || total == 0 {
        return Vec::new();
    }
    let current = current.clamp(1, total);
    let mut start = current.saturating_sub(max_visible / 2).max(1);
    let end = (start + max_visible - 1).min(total);
    if end - start + 1 < max_visible {
        start = (end + 1).saturating_sub(max_visible).max(1);
    }
    (start..=end).collect()
}
