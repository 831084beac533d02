//! Call log state
//!
//! The feed is read-only. Besides the keyword search it offers two category
//! filters over the distinct event and result values present in the data.

use dialer_console_api::CallLog;
use dialer_console_core::types::{
    ListQuery, Paged, distinct_events, distinct_results, filter_and_page_where,
};

/// Call event rows together with their facet filters
#[derive(Debug, Clone, Default)]
pub struct CallLogsState {
    pub rows: Vec<CallLog>,
    /// Active event filter; `None` shows every event
    pub event_filter: Option<String>,
    /// Active result filter; `None` shows every result
    pub result_filter: Option<String>,
    pub query: ListQuery,
    pub selected: usize,
    pub loading: bool,
    pub error: Option<String>,
}

impl CallLogsState {
    pub fn page(&self) -> Paged<CallLog> {
        filter_and_page_where(&self.rows, &self.query, |row| {
            self.event_filter
                .as_ref()
                .is_none_or(|event| &row.event == event)
                && self
                    .result_filter
                    .as_ref()
                    .is_none_or(|result| &row.result == result)
        })
    }

    pub fn begin_loading(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn set_rows(&mut self, rows: Vec<CallLog>) {
        self.rows = rows;
        self.loading = false;
        self.error = None;
        self.clamp();
    }

    pub fn fail(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    /// Advances the event filter through the distinct values, then back to all.
    pub fn cycle_event_filter(&mut self) {
        self.event_filter = next_option(&distinct_events(&self.rows), self.event_filter.as_ref());
        self.query.page = 1;
        self.selected = 0;
    }

    /// Advances the result filter through the distinct values, then back to all.
    pub fn cycle_result_filter(&mut self) {
        self.result_filter =
            next_option(&distinct_results(&self.rows), self.result_filter.as_ref());
        self.query.page = 1;
        self.selected = 0;
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

/// `None -> first -> ... -> last -> None` over a facet's options.
fn next_option(options: &[String], current: Option<&String>) -> Option<String> {
    let Some(current) = current else {
        return options.first().cloned();
    };
    let index = options.iter().position(|option| option == current)?;
    options.get(index + 1).cloned()
}
