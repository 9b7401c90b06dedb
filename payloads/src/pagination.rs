use serde::{Deserialize, Serialize};

/// Paging metadata as reported by the server. The server is the source of
/// truth for the total; the client never counts rows itself.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
pub struct PageInfo {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
}

impl PageInfo {
    pub fn total_pages(&self) -> u64 {
        if self.limit == 0 {
            return 0;
        }
        self.total.div_ceil(u64::from(self.limit))
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        u64::from(self.page) < self.total_pages()
    }

    /// 1-based index range of the rows on this page, or None if the page is
    /// past the end.
    pub fn row_range(&self) -> Option<(u64, u64)> {
        let start = u64::from(self.page.saturating_sub(1)) * u64::from(self.limit) + 1;
        if self.limit == 0 || start > self.total {
            return None;
        }
        let end = (start + u64::from(self.limit) - 1).min(self.total);
        Some((start, end))
    }
}

/// Enabled state of the Previous/Next buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagerButtons {
    pub previous_enabled: bool,
    pub next_enabled: bool,
}

impl PagerButtons {
    /// Both buttons are disabled while a request is in flight.
    pub fn new(info: &PageInfo, is_loading: bool) -> Self {
        Self {
            previous_enabled: !is_loading && info.has_previous(),
            next_enabled: !is_loading && info.has_next(),
        }
    }
}

/// What a list table body shows. An empty page is one explanatory row,
/// never an empty table.
#[derive(Debug, PartialEq)]
pub enum TableBody<'a, T> {
    Placeholder(&'a str),
    Rows(&'a [T]),
}

impl<'a, T> TableBody<'a, T> {
    pub fn new(items: &'a [T], empty_message: &'a str) -> Self {
        if items.is_empty() {
            Self::Placeholder(empty_message)
        } else {
            Self::Rows(items)
        }
    }

    pub fn row_count(&self) -> usize {
        match self {
            Self::Placeholder(_) => 1,
            Self::Rows(items) => items.len(),
        }
    }
}
