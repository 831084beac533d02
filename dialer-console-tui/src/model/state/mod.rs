//! Per-page state

mod assignments;
mod auth;
mod call_logs;
mod modal;
mod numbers;
mod plans;
mod profiles;
mod settings;
mod vendors;

pub use assignments::AssignmentsState;
pub use auth::{ForgotPasswordState, LoginState, RegisterState, ResetStep};
pub use call_logs::CallLogsState;
pub use modal::{Modal, ModalState};
pub use numbers::NumbersState;
pub use plans::PlansState;
pub use profiles::ProfilesState;
pub use settings::{PAGE_SIZES, SettingItem, SettingsState, Theme};
pub use vendors::VendorsState;
