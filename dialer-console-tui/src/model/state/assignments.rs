//! Number-to-plan assignment state
//!
//! On top of the usual keyword search this screen filters by remaining
//! validity buckets and displays the aggregate call limit the endpoint
//! reports alongside the rows.

use dialer_console_api::{NumberAssignment, NumberAssignmentReport};
use dialer_console_core::types::{DaysLeftBucket, ListQuery, Paged, filter_and_page_where};

/// Assignment rows, the days-left bucket filter and the report aggregate
#[derive(Debug, Clone, Default)]
pub struct AssignmentsState {
    pub rows: Vec<NumberAssignment>,
    /// Aggregate call allowance reported with the listing
    pub total_call_limit: i64,
    /// Active bucket filter; `None` shows every row
    pub bucket: Option<DaysLeftBucket>,
    pub query: ListQuery,
    pub selected: usize,
    pub loading: bool,
    pub error: Option<String>,
}

impl AssignmentsState {
    /// Rows with an unparsable days-left land in no bucket, so any active
    /// bucket filter hides them.
    pub fn page(&self) -> Paged<NumberAssignment> {
        filter_and_page_where(&self.rows, &self.query, |row| match self.bucket {
            Some(bucket) => bucket.contains(&row.days_left),
            None => true,
        })
    }

    pub fn begin_loading(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn set_report(&mut self, report: NumberAssignmentReport) {
        self.rows = report.assignments;
        self.total_call_limit = report.total_call_limit;
        self.loading = false;
        self.error = None;
        self.clamp();
    }

    pub fn fail(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    /// Advances the bucket filter: all rows, then each bucket in order.
    pub fn cycle_bucket(&mut self) {
        self.bucket = match self.bucket {
            None => Some(DaysLeftBucket::UnderWeek),
            Some(DaysLeftBucket::UnderWeek) => Some(DaysLeftBucket::OneToTwoWeeks),
            Some(DaysLeftBucket::OneToTwoWeeks) => Some(DaysLeftBucket::BeyondTwoWeeks),
            Some(DaysLeftBucket::BeyondTwoWeeks) => None,
        };
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
