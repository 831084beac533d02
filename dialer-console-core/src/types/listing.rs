//! Client-side list derivation: keyword filtering and pagination
//!
//! Listings are fetched whole; every view is a pure function of the rows, the
//! query and any extra predicate. Source order is always preserved.

use serde::{Deserialize, Serialize};

use dialer_console_api::{CallLog, NumberAssignment, Plan, Profile, UnallocatedNumber, Vendor};

/// Default rows per page across the console's tables.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Query state for one listing screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    /// Free-text search, matched case-insensitively
    pub keyword: String,
    /// 1-based page number; clamped against the filtered set on derivation
    pub page: u32,
    /// Rows per page
    pub page_size: u32,
}

impl ListQuery {
    /// A blank query on page 1.
    #[must_use]
    pub fn new(page_size: u32) -> Self {
        Self {
            keyword: String::new(),
            page: 1,
            page_size: page_size.max(1),
        }
    }

    /// Replaces the keyword and returns to page 1.
    pub fn set_keyword(&mut self, keyword: impl Into<String>) {
        self.keyword = keyword.into();
        self.page = 1;
    }
}

impl Default for ListQuery {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

/// One derived page of a filtered listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paged<T> {
    /// Rows on the current page, in source order
    pub items: Vec<T>,
    /// Clamped 1-based page number
    pub page: u32,
    /// Rows per page
    pub page_size: u32,
    /// Filtered row count across all pages
    pub total_count: u32,
    /// `ceil(total_count / page_size)`; 0 when the filtered set is empty
    pub page_count: u32,
}

impl<T: Clone> Paged<T> {
    fn slice(filtered: &[&T], page: u32, page_size: u32) -> Self {
        let page_size = page_size.max(1);
        let total_count = u32::try_from(filtered.len()).unwrap_or(u32::MAX);
        let page_count = total_count.div_ceil(page_size);
        let page = page.clamp(1, page_count.max(1));
        let start = ((page - 1) * page_size) as usize;
        let items = filtered
            .iter()
            .skip(start)
            .take(page_size as usize)
            .map(|row| (*row).clone())
            .collect();
        Self {
            items,
            page,
            page_size,
            total_count,
            page_count,
        }
    }
}

/// Case-insensitive substring match over a row's searchable fields.
///
/// `needle` arrives trimmed and lowercased; implementations only lowercase
/// their own fields.
pub trait KeywordFilter {
    fn matches_keyword(&self, needle: &str) -> bool;
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

impl KeywordFilter for Plan {
    fn matches_keyword(&self, needle: &str) -> bool {
        self.plan_code.to_string().contains(needle)
            || contains_ci(&self.plan_name, needle)
            || contains_ci(&self.country, needle)
            || contains_ci(&self.description, needle)
            || contains_ci(&self.price, needle)
            || contains_ci(&self.call_limit, needle)
            || contains_ci(&self.sms_limit, needle)
            || contains_ci(&self.data_limit, needle)
            || contains_ci(&self.validity, needle)
    }
}

impl KeywordFilter for Vendor {
    fn matches_keyword(&self, needle: &str) -> bool {
        contains_ci(&self.vendor_name, needle)
            || contains_ci(&self.vendor_code, needle)
            || contains_ci(&self.vendor_planlist, needle)
            || contains_ci(&self.description, needle)
            || contains_ci(&self.price, needle)
            || contains_ci(&self.usercode, needle)
    }
}

impl KeywordFilter for Profile {
    fn matches_keyword(&self, needle: &str) -> bool {
        contains_ci(&self.name, needle)
            || contains_ci(&self.email, needle)
            || contains_ci(&self.phone, needle)
    }
}

impl KeywordFilter for CallLog {
    fn matches_keyword(&self, needle: &str) -> bool {
        contains_ci(&self.call_id, needle) || contains_ci(&self.caller_number, needle)
    }
}

impl KeywordFilter for UnallocatedNumber {
    fn matches_keyword(&self, needle: &str) -> bool {
        self.number_code.to_string().contains(needle) || contains_ci(&self.number, needle)
    }
}

impl KeywordFilter for NumberAssignment {
    fn matches_keyword(&self, needle: &str) -> bool {
        contains_ci(&self.number, needle)
            || self.plan_code.to_string().contains(needle)
            || contains_ci(&self.aucode, needle)
            || contains_ci(&self.user_email, needle)
    }
}

/// Filters by keyword and derives the requested page.
#[must_use]
pub fn filter_and_page<T>(rows: &[T], query: &ListQuery) -> Paged<T>
where
    T: KeywordFilter + Clone,
{
    filter_and_page_where(rows, query, |_| true)
}

/// [`filter_and_page`] with an extra per-screen predicate (category dropdowns,
/// days-left buckets).
#[must_use]
pub fn filter_and_page_where<T>(
    rows: &[T],
    query: &ListQuery,
    extra: impl Fn(&T) -> bool,
) -> Paged<T>
where
    T: KeywordFilter + Clone,
{
    let needle = query.keyword.trim().to_lowercase();
    let filtered: Vec<&T> = rows
        .iter()
        .filter(|row| (needle.is_empty() || row.matches_keyword(&needle)) && extra(row))
        .collect();
    Paged::slice(&filtered, query.page, query.page_size)
}

// ============ Days-left buckets ============

/// Remaining-validity buckets for the DID plan listing filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DaysLeftBucket {
    /// Fewer than 7 days left
    UnderWeek,
    /// 7 to 15 days left
    OneToTwoWeeks,
    /// More than 15 days left
    BeyondTwoWeeks,
}

impl DaysLeftBucket {
    pub const ALL: [Self; 3] = [Self::UnderWeek, Self::OneToTwoWeeks, Self::BeyondTwoWeeks];

    /// Filter dropdown label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::UnderWeek => "Under 7 days",
            Self::OneToTwoWeeks => "7-15 days",
            Self::BeyondTwoWeeks => "Over 15 days",
        }
    }

    /// Buckets a human string like `"12 days"`; unparsable strings land in no
    /// bucket.
    #[must_use]
    pub fn of(days_left: &str) -> Option<Self> {
        let days = parse_days_left(days_left)?;
        Some(if days < 7 {
            Self::UnderWeek
        } else if days <= 15 {
            Self::OneToTwoWeeks
        } else {
            Self::BeyondTwoWeeks
        })
    }

    /// Whether `days_left` falls into this bucket.
    #[must_use]
    pub fn contains(self, days_left: &str) -> bool {
        Self::of(days_left) == Some(self)
    }
}

/// Leading integer of a remaining-validity string (`"12 days"` -> 12).
#[must_use]
pub fn parse_days_left(value: &str) -> Option<i64> {
    let digits: String = value
        .trim()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().ok()
}

/// Urgency of a days-left value, driving the badge color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DaysLeftSeverity {
    /// 3 days or fewer
    Critical,
    /// 4 to 7 days
    Warning,
    /// More than 7 days
    Healthy,
}

/// Badge severity for a remaining-validity string; `None` for unparsable
/// values (neutral badge).
#[must_use]
pub fn days_left_severity(days_left: &str) -> Option<DaysLeftSeverity> {
    let days = parse_days_left(days_left)?;
    Some(if days <= 3 {
        DaysLeftSeverity::Critical
    } else if days <= 7 {
        DaysLeftSeverity::Warning
    } else {
        DaysLeftSeverity::Healthy
    })
}

// ============ Call log facets ============

/// How a call ended, driving the result color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallResultKind {
    Completed,
    Failed,
    InProgress,
    Other,
}

/// Classifies a raw result value from the call-event feed.
#[must_use]
pub fn classify_call_result(result: &str) -> CallResultKind {
    match result.trim().to_lowercase().as_str() {
        "completed" => CallResultKind::Completed,
        "failed" => CallResultKind::Failed,
        "in-progress" | "in progress" | "ongoing" => CallResultKind::InProgress,
        _ => CallResultKind::Other,
    }
}

/// Distinct event names present in the feed, sorted, for the filter dropdown.
#[must_use]
pub fn distinct_events(rows: &[CallLog]) -> Vec<String> {
    distinct_values(rows.iter().map(|row| row.event.as_str()))
}

/// Distinct result values present in the feed, sorted, for the filter dropdown.
#[must_use]
pub fn distinct_results(rows: &[CallLog]) -> Vec<String> {
    distinct_values(rows.iter().map(|row| row.result.as_str()))
}

fn distinct_values<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut out: Vec<String> = values
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .collect();
    out.sort();
    out.dedup();
    out
}
