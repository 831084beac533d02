//! State transitions
//!
//! The update layer consumes messages and is the only place that mutates
//! [`App`]. Handlers never perform network work themselves: they call the
//! backend's `spawn_*` methods and fold the completion events back in when
//! they arrive as [`AppMessage::Backend`].

mod auth;
mod content;
mod events;
mod modal;
mod navigation;

pub use events::apply_session_transition;

use dialer_console_core::types::UiPrefs;

use crate::backend::CoreService;
use crate::message::AppMessage;
use crate::model::{App, Page};

/// Applies one message to the model.
pub fn update(app: &mut App, msg: AppMessage, backend: &CoreService) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::ToggleFocus => {
            // Focus stays put while a modal is open.
            if !app.modal.is_open() {
                app.focus.toggle();
            }
        }

        AppMessage::ToggleSidebar => {
            app.sidebar_open = !app.sidebar_open;
            backend.save_prefs(UiPrefs {
                sidebar_open: app.sidebar_open,
            });
        }

        AppMessage::Logout => {
            backend.spawn_logout();
        }

        AppMessage::Navigation(nav_msg) => {
            navigation::update(app, nav_msg, backend);
        }

        AppMessage::Content(content_msg) => {
            content::update(app, content_msg, backend);
        }

        AppMessage::Modal(modal_msg) => {
            modal::update(app, modal_msg, backend);
        }

        AppMessage::Auth(auth_msg) => {
            auth::update(app, auth_msg, backend);
        }

        AppMessage::Backend(event) => {
            events::update(app, event, backend);
        }

        AppMessage::GoBack => {
            if app.modal.is_open() {
                app.modal.close();
            } else if matches!(app.current_page, Page::Register | Page::ForgotPassword) {
                auth::back_to_login(app);
            }
        }

        AppMessage::Refresh => {
            if refresh_page(app, backend) {
                app.set_status("Refreshing...");
            }
        }

        AppMessage::ShowHelp => {
            app.modal.show_help();
        }

        AppMessage::Noop => {}
    }
}

/// Switches to a page and kicks off the fetch it needs.
pub(crate) fn enter_page(app: &mut App, page: Page, backend: &CoreService) {
    app.current_page = page;
    app.clear_status();
    refresh_page(app, backend);
}

/// Starts the fetch behind the current page. Returns `false` on pages with
/// nothing to load.
fn refresh_page(app: &mut App, backend: &CoreService) -> bool {
    match app.current_page {
        Page::Plans => {
            app.plans.begin_loading();
            backend.spawn_fetch_plans();
        }
        Page::Vendors => {
            app.vendors.begin_loading();
            backend.spawn_fetch_vendors();
        }
        Page::Profiles => {
            app.profiles.begin_loading();
            backend.spawn_fetch_profiles();
        }
        Page::Numbers => {
            app.numbers.begin_loading();
            backend.spawn_fetch_numbers();
        }
        Page::Assignments => {
            app.assignments.begin_loading();
            backend.spawn_fetch_assignments();
        }
        Page::CallLogs => {
            app.call_logs.begin_loading();
            backend.spawn_fetch_call_logs();
        }
        _ => return false,
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{AppConfig, ConfigService};
    use crate::model::FocusPanel;

    fn backend() -> CoreService {
        CoreService::new(&AppConfig::default(), ConfigService::new()).unwrap()
    }

    #[test]
    fn quit_sets_the_flag() {
        let backend = backend();
        let mut app = App::new();
        update(&mut app, AppMessage::Quit, &backend);
        assert!(app.should_quit);
    }

    #[test]
    fn focus_does_not_move_while_a_modal_is_open() {
        let backend = backend();
        let mut app = App::new();
        app.current_page = Page::Plans;
        app.modal.show_help();

        update(&mut app, AppMessage::ToggleFocus, &backend);
        assert_eq!(app.focus, FocusPanel::Navigation);

        app.modal.close();
        update(&mut app, AppMessage::ToggleFocus, &backend);
        assert_eq!(app.focus, FocusPanel::Content);
    }

    #[test]
    fn go_back_closes_the_modal_before_anything_else() {
        let backend = backend();
        let mut app = App::new();
        app.current_page = Page::Plans;
        app.modal.show_plan_create();

        update(&mut app, AppMessage::GoBack, &backend);
        assert!(!app.modal.is_open());
        assert_eq!(app.current_page, Page::Plans);
    }

    #[test]
    fn go_back_abandons_the_register_flow() {
        let backend = backend();
        let mut app = App::new();
        app.current_page = Page::Register;
        app.register.email = "typed@clay.in".to_string();

        update(&mut app, AppMessage::GoBack, &backend);
        assert_eq!(app.current_page, Page::Login);
        assert!(app.register.email.is_empty());
    }

    #[test]
    fn help_opens_the_reference_modal() {
        let backend = backend();
        let mut app = App::new();
        update(&mut app, AppMessage::ShowHelp, &backend);
        assert!(app.modal.is_open());
    }
}
