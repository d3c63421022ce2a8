//! Pagination
//!
//! Page cursor for the list endpoint. The page index has no upper bound;
//! the API simply returns an empty page past the end.

/// Page index plus page size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    pub page: u32,
    pub page_size: u32,
}

impl Pager {
    pub fn new(page_size: u32) -> Self {
        Self { page: 0, page_size }
    }

    /// `offset` query parameter for the list endpoint
    pub fn offset(&self) -> u32 {
        self.page.saturating_mul(self.page_size)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 0
    }

    pub fn previous(self) -> Self {
        Self { page: self.page.saturating_sub(1), ..self }
    }

    pub fn next(self) -> Self {
        Self { page: self.page.saturating_add(1), ..self }
    }

    /// 1-based page label
    pub fn label(&self) -> String {
        format!("Page {}", self.page.saturating_add(1))
    }
}
