//! Backend completion events
//!
//! Folds one finished task back into the model. Expired-session failures
//! stay quiet here: the epoch watcher owns that redirect, and surfacing the
//! message per task would repeat it once per in-flight request.

use crate::backend::CoreService;
use crate::message::BackendEvent;
use crate::model::state::{ForgotPasswordState, LoginState, RegisterState, ResetStep};
use crate::model::{App, FocusPanel, NavItemId, Page};

pub fn update(app: &mut App, event: BackendEvent, backend: &CoreService) {
    match event {
        // ========== Auth flows ==========
        BackendEvent::LoggedIn(session) => {
            let name = session.display_name();
            app.session = Some(session);
            app.login = LoginState::default();
            app.focus = FocusPanel::Navigation;
            app.navigation.select_id(NavItemId::Home);
            super::enter_page(app, Page::Home, backend);
            app.set_status(format!("Signed in as {name}"));
        }
        BackendEvent::LoginFailed(message) => {
            app.login.loading = false;
            app.login.error = Some(message);
        }

        BackendEvent::RegisterDone => {
            app.register = RegisterState::default();
            app.current_page = Page::Login;
            app.set_status("Account created. Please log in.");
        }
        BackendEvent::RegisterFailed(message) => {
            app.register.loading = false;
            app.register.error = Some(message);
        }

        BackendEvent::OtpSent => {
            app.forgot.loading = false;
            if app.forgot.step == ResetStep::Email {
                app.forgot.enter_step(ResetStep::Otp);
            }
            app.forgot.start_resend_cooldown();
            app.set_status("OTP sent.");
        }
        BackendEvent::OtpSendFailed(message) => {
            app.forgot.loading = false;
            app.forgot.error = Some(message);
        }

        BackendEvent::OtpVerified => {
            app.forgot.loading = false;
            app.forgot.enter_step(ResetStep::NewPassword);
        }
        BackendEvent::OtpVerifyFailed(message) => {
            app.forgot.loading = false;
            app.forgot.error = Some(message);
        }

        BackendEvent::PasswordResetDone => {
            app.forgot = ForgotPasswordState::default();
            app.current_page = Page::Login;
            app.set_status("Password reset. Please log in.");
        }
        BackendEvent::PasswordResetFailed(message) => {
            app.forgot.loading = false;
            app.forgot.error = Some(message);
        }

        BackendEvent::LoggedOut => {
            app.session = None;
            app.login = LoginState::default();
            app.modal.close();
            app.searching = false;
            app.focus = FocusPanel::Navigation;
            app.current_page = Page::Login;
            app.set_status("Signed out.");
        }

        // ========== Listings ==========
        BackendEvent::PlansLoaded(result) => match result {
            Ok(rows) => app.plans.set_rows(rows),
            Err(err) if err.expired => app.plans.loading = false,
            Err(err) => app.plans.fail(err.message),
        },
        BackendEvent::VendorsLoaded(result) => match result {
            Ok(rows) => app.vendors.set_rows(rows),
            Err(err) if err.expired => app.vendors.loading = false,
            Err(err) => app.vendors.fail(err.message),
        },
        BackendEvent::ProfilesLoaded(result) => match result {
            Ok(rows) => app.profiles.set_rows(rows),
            Err(err) if err.expired => app.profiles.loading = false,
            Err(err) => app.profiles.fail(err.message),
        },
        BackendEvent::NumbersLoaded(result) => match result {
            Ok(rows) => app.numbers.set_rows(rows),
            Err(err) if err.expired => app.numbers.loading = false,
            Err(err) => app.numbers.fail(err.message),
        },
        BackendEvent::AssignmentsLoaded(result) => match result {
            Ok(report) => app.assignments.set_report(report),
            Err(err) if err.expired => app.assignments.loading = false,
            Err(err) => app.assignments.fail(err.message),
        },
        BackendEvent::CallLogsLoaded(result) => match result {
            Ok(rows) => app.call_logs.set_rows(rows),
            Err(err) if err.expired => app.call_logs.loading = false,
            Err(err) => app.call_logs.fail(err.message),
        },

        // ========== Saves ==========
        BackendEvent::PlanSaved(result) => match result {
            Ok(()) => {
                app.modal.close();
                app.set_status("Plan saved.");
                app.plans.begin_loading();
                backend.spawn_fetch_plans();
            }
            Err(err) if err.expired => {}
            Err(err) => app.modal.set_form_error(err.message),
        },
        BackendEvent::VendorSaved(result) => match result {
            Ok(()) => {
                app.modal.close();
                app.set_status("Vendor saved.");
                app.vendors.begin_loading();
                backend.spawn_fetch_vendors();
            }
            Err(err) if err.expired => {}
            Err(err) => app.modal.set_form_error(err.message),
        },
        BackendEvent::ProfileSaved(result) => match result {
            Ok(()) => {
                app.modal.close();
                app.set_status("Profile saved.");
                app.profiles.begin_loading();
                backend.spawn_fetch_profiles();
            }
            Err(err) if err.expired => {}
            Err(err) => app.modal.set_form_error(err.message),
        },
        BackendEvent::ProfileDeleted(result) => match result {
            Ok(()) => {
                app.modal.close();
                app.set_status("Profile deleted.");
                app.profiles.begin_loading();
                backend.spawn_fetch_profiles();
            }
            Err(err) if err.expired => {}
            Err(err) => {
                // The confirm dialog has no inline slot, so failures get
                // their own notice.
                app.modal.close();
                app.modal.show_error("Delete failed", err.message);
            }
        },
    }
}

/// Resyncs the model after a session epoch change. An expiry lands back on
/// the login page with fixed copy; an explicit logout already produced its
/// own messaging through [`BackendEvent::LoggedOut`] before this runs.
pub fn apply_session_transition(app: &mut App, backend: &CoreService) {
    let was_signed_in = app.session.is_some();
    app.session = backend.current_session();
    if was_signed_in && app.session.is_none() && !app.current_page.is_auth_page() {
        app.modal.close();
        app.searching = false;
        app.login = LoginState::default();
        app.focus = FocusPanel::Navigation;
        app.current_page = Page::Login;
        app.set_status("Your session has expired. Please log in again.");
    }
}
