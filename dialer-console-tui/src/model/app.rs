//! Root application state

use dialer_console_api::DEFAULT_API_BASE;
use dialer_console_core::types::Session;

use super::focus::FocusPanel;
use super::navigation::NavigationState;
use super::page::Page;
use super::state::{
    AssignmentsState, CallLogsState, ForgotPasswordState, LoginState, ModalState, NumbersState,
    PlansState, ProfilesState, RegisterState, SettingsState, VendorsState,
};

/// The whole mutable state of the console
pub struct App {
    pub should_quit: bool,
    pub focus: FocusPanel,
    pub navigation: NavigationState,
    pub current_page: Page,
    /// Render-side mirror of the session; the backend's manager owns the truth
    pub session: Option<Session>,
    /// Sidebar collapse preference, persisted across restarts
    pub sidebar_open: bool,
    /// While set, printable keys feed the current page's search box
    pub searching: bool,
    /// One-line notice shown in the status bar
    pub status_message: Option<String>,
    /// Base URL shown on the dashboard
    pub base_url: String,
    pub login: LoginState,
    pub register: RegisterState,
    pub forgot: ForgotPasswordState,
    pub plans: PlansState,
    pub vendors: VendorsState,
    pub profiles: ProfilesState,
    pub numbers: NumbersState,
    pub assignments: AssignmentsState,
    pub call_logs: CallLogsState,
    pub settings: SettingsState,
    pub modal: ModalState,
}

impl App {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            focus: FocusPanel::Navigation,
            navigation: NavigationState::new(),
            current_page: Page::Login,
            session: None,
            sidebar_open: true,
            searching: false,
            status_message: None,
            base_url: DEFAULT_API_BASE.to_string(),
            login: LoginState::default(),
            register: RegisterState::default(),
            forgot: ForgotPasswordState::default(),
            plans: PlansState::default(),
            vendors: VendorsState::default(),
            profiles: ProfilesState::default(),
            numbers: NumbersState::default(),
            assignments: AssignmentsState::default(),
            call_logs: CallLogsState::default(),
            settings: SettingsState::new(),
            modal: ModalState::default(),
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Applies a new rows-per-page to every listing, back on page 1.
    pub fn set_page_size(&mut self, page_size: u32) {
        self.plans.set_page_size(page_size);
        self.vendors.set_page_size(page_size);
        self.profiles.set_page_size(page_size);
        self.numbers.set_page_size(page_size);
        self.assignments.set_page_size(page_size);
        self.call_logs.set_page_size(page_size);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_the_login_page_without_a_session() {
        let app = App::new();
        assert_eq!(app.current_page, Page::Login);
        assert!(app.session.is_none());
        assert!(!app.should_quit);
        assert!(app.sidebar_open);
    }

    #[test]
    fn page_size_reaches_every_listing() {
        let mut app = App::new();
        app.set_page_size(50);
        assert_eq!(app.plans.query.page_size, 50);
        assert_eq!(app.vendors.query.page_size, 50);
        assert_eq!(app.profiles.query.page_size, 50);
        assert_eq!(app.numbers.query.page_size, 50);
        assert_eq!(app.assignments.query.page_size, 50);
        assert_eq!(app.call_logs.query.page_size, 50);
    }
}
