//! Plan list state

use dialer_console_api::Plan;
use dialer_console_core::types::{ListQuery, Paged, filter_and_page};

/// Plan catalogue as fetched, plus the query deriving the visible page
#[derive(Debug, Clone, Default)]
pub struct PlansState {
    pub rows: Vec<Plan>,
    pub query: ListQuery,
    /// Selection within the current page
    pub selected: usize,
    pub loading: bool,
    pub error: Option<String>,
}

impl PlansState {
    /// The page the view renders. Pure derivation from rows and query.
    pub fn page(&self) -> Paged<Plan> {
        filter_and_page(&self.rows, &self.query)
    }

    pub fn begin_loading(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn set_rows(&mut self, rows: Vec<Plan>) {
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

    pub fn selected_plan(&self) -> Option<Plan> {
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

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(code: i64, name: &str) -> Plan {
        Plan {
            plan_code: code,
            plan_name: name.to_string(),
            country: "US".to_string(),
            description: "Monthly bundle".to_string(),
            price: "12".to_string(),
            call_limit: "100".to_string(),
            sms_limit: "50".to_string(),
            data_limit: "1GB".to_string(),
            validity: "30 days".to_string(),
            number_assign: "2".to_string(),
        }
    }

    fn loaded(count: i64) -> PlansState {
        let mut state = PlansState::default();
        state.set_rows((1..=count).map(|i| plan(i, &format!("Plan {i}"))).collect());
        state
    }

    #[test]
    fn selection_clamps_to_the_visible_page() {
        let mut state = loaded(3);
        state.select_previous();
        assert_eq!(state.selected, 0);
        state.select_last();
        assert_eq!(state.selected, 2);
        state.select_next();
        assert_eq!(state.selected, 2);
    }

    #[test]
    fn paging_moves_within_bounds_and_resets_selection() {
        let mut state = loaded(25);
        state.selected = 4;

        state.next_page();
        assert_eq!(state.page().page, 2);
        assert_eq!(state.selected, 0);

        state.next_page();
        state.next_page(); // already on the last page
        assert_eq!(state.page().page, 3);

        state.prev_page();
        assert_eq!(state.page().page, 2);
    }

    #[test]
    fn search_narrows_and_returns_to_page_one() {
        let mut state = loaded(25);
        state.next_page();

        state.push_search('1');
        let paged = state.page();
        assert_eq!(paged.page, 1);
        // "1" matches Plan 1, 10..19, 21 by name or code digits
        assert!(paged.total_count > 0);

        state.clear_search();
        assert_eq!(state.page().total_count, 25);
    }

    #[test]
    fn set_rows_clamps_a_stale_selection() {
        let mut state = loaded(10);
        state.selected = 9;
        state.set_rows(vec![plan(1, "Only")]);
        assert_eq!(state.selected, 0);
        assert_eq!(state.selected_plan().unwrap().plan_code, 1);
    }

    #[test]
    fn failure_keeps_rows_but_records_the_message() {
        let mut state = loaded(2);
        state.begin_loading();
        state.fail("boom".to_string());
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("boom"));
        assert_eq!(state.rows.len(), 2);
    }
}
