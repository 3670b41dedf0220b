use crate::core::search::build_advocate_filter;
use crate::domain::model::AdvocateRow;

pub const PAGE_SIZE: usize = 25;

/// 已顯示的頁數，永遠 >= 1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationWindow {
    pages_shown: usize,
    page_size: usize,
}

impl PaginationWindow {
    pub fn new(page_size: usize) -> Self {
        Self {
            pages_shown: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn pages_shown(&self) -> usize {
        self.pages_shown
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// 可顯示的最大筆數
    pub fn limit(&self) -> usize {
        self.page_size.saturating_mul(self.pages_shown)
    }

    pub fn reset(&mut self) {
        self.pages_shown = 1;
    }

    pub fn has_more(&self, filtered_len: usize) -> bool {
        self.limit() < filtered_len
    }

    /// Reveals one more page. Returns `false` and leaves the window alone
    /// once every filtered record is already visible.
    pub fn load_more(&mut self, filtered_len: usize) -> bool {
        if !self.has_more(filtered_len) {
            return false;
        }
        self.pages_shown += 1;
        true
    }
}

impl Default for PaginationWindow {
    fn default() -> Self {
        Self::new(PAGE_SIZE)
    }
}

pub fn filter_advocates<'a>(records: &'a [AdvocateRow], query: &str) -> Vec<&'a AdvocateRow> {
    let predicate = build_advocate_filter(query);
    records.iter().filter(|row| predicate(*row)).collect()
}

/// Pure derivation of the rows on screen from `(records, query, pages_shown)`.
/// Recomputed from scratch on every call; fetch order is preserved.
pub fn visible_rows<'a>(
    records: &'a [AdvocateRow],
    query: &str,
    pages_shown: usize,
    page_size: usize,
) -> Vec<&'a AdvocateRow> {
    let limit = page_size.max(1).saturating_mul(pages_shown.max(1));
    let predicate = build_advocate_filter(query);
    records.iter().filter(|row| predicate(*row)).take(limit).collect()
}
