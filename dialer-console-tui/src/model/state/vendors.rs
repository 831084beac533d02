//! Vendor list state

use dialer_console_api::Vendor;
use dialer_console_core::types::{ListQuery, Paged, filter_and_page};

/// Vendor rows as fetched, plus the query deriving the visible page
#[derive(Debug, Clone, Default)]
pub struct VendorsState {
    pub rows: Vec<Vendor>,
    pub query: ListQuery,
    pub selected: usize,
    pub loading: bool,
    pub error: Option<String>,
}

impl VendorsState {
    pub fn page(&self) -> Paged<Vendor> {
        filter_and_page(&self.rows, &self.query)
    }

    pub fn begin_loading(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn set_rows(&mut self, rows: Vec<Vendor>) {
        self.rows = rows;
        self.loading = false;
        self.error = None;
        self.clamp();
    }

    pub fn fail(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    pub fn select_next(&mut self) {
        let len = self.page().items.len();
        if len > 0 && self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.page().items.len().saturating_sub(1);
    }

    pub fn selected_vendor(&self) -> Option<Vendor> {
        self.page().items.into_iter().nth(self.selected)
    }

    pub fn next_page(&mut self) {
        let paged = self.page();
        if paged.page < paged.page_count {
            self.query.page = paged.page + 1;
            self.selected = 0;
        }
    }

    pub fn prev_page(&mut self) {
        let paged = self.page();
        if paged.page > 1 {
            self.query.page = paged.page - 1;
            self.selected = 0;
        }
    }

    pub fn push_search(&mut self, ch: char) {
        let keyword = format!("{}{ch}", self.query.keyword);
        self.query.set_keyword(keyword);
        self.selected = 0;
    }

    pub fn pop_search(&mut self) {
        let mut keyword = self.query.keyword.clone();
        keyword.pop();
        self.query.set_keyword(keyword);
        self.selected = 0;
    }

    pub fn clear_search(&mut self) {
        self.query.set_keyword("");
        self.selected = 0;
    }

    pub fn set_page_size(&mut self, page_size: u32) {
        self.query.page_size = page_size.max(1);
        self.query.page = 1;
        self.selected = 0;
    }

    fn clamp(&mut self) {
        let paged = self.page();
        self.query.page = paged.page;
        let len = paged.items.len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }
}
