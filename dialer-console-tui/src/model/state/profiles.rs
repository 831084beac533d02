//! Profile list state

use dialer_console_api::Profile;
use dialer_console_core::types::{ListQuery, Paged, filter_and_page};

/// Profile rows as fetched, plus the query deriving the visible page
#[derive(Debug, Clone, Default)]
pub struct ProfilesState {
    pub rows: Vec<Profile>,
    pub query: ListQuery,
    pub selected: usize,
    pub loading: bool,
    pub error: Option<String>,
}

impl ProfilesState {
    pub fn page(&self) -> Paged<Profile> {
        filter_and_page(&self.rows, &self.query)
    }

    pub fn begin_loading(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn set_rows(&mut self, rows: Vec<Profile>) {
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

    pub fn selected_profile(&self) -> Option<Profile> {
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

    fn profile(id: i64, name: &str, email: &str) -> Profile {
        Profile {
            id,
            name: name.to_string(),
            aucode: format!("AU{id}"),
            email: email.to_string(),
            phone: "555-0100".to_string(),
            password: "hunter2".to_string(),
        }
    }

    #[test]
    fn search_matches_name_email_or_phone_only() {
        let mut state = ProfilesState::default();
        state.set_rows(vec![
            profile(1, "Alice", "alice@example.com"),
            profile(2, "Bob", "bob@example.com"),
        ]);

        for ch in "alice".chars() {
            state.push_search(ch);
        }
        assert_eq!(state.page().total_count, 1);

        // aucode is not a searchable field on profiles
        state.clear_search();
        for ch in "au1".chars() {
            state.push_search(ch);
        }
        assert_eq!(state.page().total_count, 0);
    }

    #[test]
    fn selected_profile_tracks_the_highlight() {
        let mut state = ProfilesState::default();
        state.set_rows(vec![
            profile(1, "Alice", "alice@example.com"),
            profile(2, "Bob", "bob@example.com"),
        ]);
        state.select_next();
        assert_eq!(state.selected_profile().unwrap().id, 2);
    }
}
