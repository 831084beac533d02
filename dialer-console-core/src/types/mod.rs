//! Type definition module

mod listing;
mod session;

pub use listing::{
    CallResultKind, DEFAULT_PAGE_SIZE, DaysLeftBucket, DaysLeftSeverity, KeywordFilter, ListQuery,
    Paged, classify_call_result, days_left_severity, distinct_events, distinct_results,
    filter_and_page, filter_and_page_where, parse_days_left,
};
pub use session::{Session, SessionUser, StoredSession, UiPrefs};

// Re-export the API client's public types
pub use dialer_console_api::{
    AccessToken, CallLog, CreatePlanRequest, CreateVendorRequest, LoginRequest, LoginResponse,
    LoginUser, NumberAssignment, NumberAssignmentReport, Plan, Profile, RegisterRequest,
    ResetPasswordRequest, SendOtpRequest, UnallocatedNumber, UpdateVendorRequest, Vendor,
    VerifyOtpRequest,
};
