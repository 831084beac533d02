//! Completion events from the backend task layer
//!
//! Each network operation runs on the backend runtime and reports exactly one
//! of these over the event channel. Failures arrive already reduced to
//! display copy; the session-expired case is flagged so screens can leave
//! the redirect to the session watcher.

use dialer_console_api::{
    CallLog, NumberAssignmentReport, Plan, Profile, UnallocatedNumber, Vendor,
};
use dialer_console_core::CoreError;
use dialer_console_core::types::Session;

/// A failed backend task, reduced to what the update layer needs
#[derive(Debug, Clone)]
pub struct TaskError {
    /// Inline display copy
    pub message: String,
    /// The session expired while this task ran. The session watcher already
    /// forces the login page, so the owning screen must not show the message
    /// a second time.
    pub expired: bool,
}

impl From<&CoreError> for TaskError {
    fn from(err: &CoreError) -> Self {
        let expired = match err {
            CoreError::AuthenticationRequired => true,
            CoreError::Api(api) => api.is_auth_expired(),
            _ => false,
        };
        Self {
            message: err.user_message(),
            expired,
        }
    }
}

/// Outcome of one backend task.
pub type TaskResult<T> = Result<T, TaskError>;

/// One finished backend task
#[derive(Debug, Clone)]
pub enum BackendEvent {
    LoggedIn(Session),
    LoginFailed(String),
    RegisterDone,
    RegisterFailed(String),
    OtpSent,
    OtpSendFailed(String),
    OtpVerified,
    OtpVerifyFailed(String),
    PasswordResetDone,
    PasswordResetFailed(String),
    LoggedOut,
    PlansLoaded(TaskResult<Vec<Plan>>),
    PlanSaved(TaskResult<()>),
    VendorsLoaded(TaskResult<Vec<Vendor>>),
    VendorSaved(TaskResult<()>),
    ProfilesLoaded(TaskResult<Vec<Profile>>),
    ProfileSaved(TaskResult<()>),
    ProfileDeleted(TaskResult<()>),
    NumbersLoaded(TaskResult<Vec<UnallocatedNumber>>),
    AssignmentsLoaded(TaskResult<NumberAssignmentReport>),
    CallLogsLoaded(TaskResult<Vec<CallLog>>),
}
