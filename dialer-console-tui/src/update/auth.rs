//! Messages for the three pre-login pages
//!
//! Form values are validated here with the same helpers the services use,
//! so a submit that would fail validation never leaves the process. The
//! actual requests run on the backend; the completion events land in
//! `events::update`.

use dialer_console_core::services::RegistrationForm;
use dialer_console_core::utils::validation;

use crate::backend::CoreService;
use crate::message::AuthMessage;
use crate::model::state::{ForgotPasswordState, RegisterState, ResetStep};
use crate::model::{App, Page};

pub fn update(app: &mut App, msg: AuthMessage, backend: &CoreService) {
    match app.current_page {
        Page::Login => update_login(app, msg, backend),
        Page::Register => update_register(app, msg, backend),
        Page::ForgotPassword => update_forgot(app, msg, backend),
        _ => {}
    }
}

/// Drops any in-progress auth flow and lands on a fresh login form.
pub(crate) fn back_to_login(app: &mut App) {
    app.register = RegisterState::default();
    app.forgot = ForgotPasswordState::default();
    app.current_page = Page::Login;
    app.clear_status();
}

fn update_login(app: &mut App, msg: AuthMessage, backend: &CoreService) {
    match msg {
        AuthMessage::Input(ch) => {
            let login = &mut app.login;
            match login.focus {
                0 => login.email.push(ch),
                1 => login.password.push(ch),
                _ => return,
            }
            login.error = None;
        }
        AuthMessage::Backspace => {
            let login = &mut app.login;
            match login.focus {
                0 => {
                    login.email.pop();
                }
                1 => {
                    login.password.pop();
                }
                _ => {}
            }
        }
        AuthMessage::NextField => app.login.next_field(),
        AuthMessage::PrevField => app.login.prev_field(),
        AuthMessage::Confirm => match app.login.focus {
            3 => {
                app.register = RegisterState::default();
                app.current_page = Page::Register;
                app.clear_status();
            }
            4 => {
                app.forgot = ForgotPasswordState::default();
                app.current_page = Page::ForgotPassword;
                app.clear_status();
            }
            _ => submit_login(app, backend),
        },
    }
}

fn submit_login(app: &mut App, backend: &CoreService) {
    let login = &mut app.login;
    if login.loading {
        return;
    }
    let check = validation::required(&login.email, "Email")
        .and_then(|()| validation::required(&login.password, "Password"));
    if let Err(err) = check {
        login.error = Some(err.user_message());
        return;
    }
    login.error = None;
    login.loading = true;
    backend.spawn_login(login.email.clone(), login.password.clone());
}

fn update_register(app: &mut App, msg: AuthMessage, backend: &CoreService) {
    match msg {
        AuthMessage::Input(ch) => {
            let register = &mut app.register;
            match register.focus {
                0 => register.name.push(ch),
                1 => register.email.push(ch),
                2 => register.phone.push(ch),
                3 => register.document.push(ch),
                4 => register.password.push(ch),
                5 => register.confirm_password.push(ch),
                _ => return,
            }
            register.error = None;
        }
        AuthMessage::Backspace => {
            let register = &mut app.register;
            match register.focus {
                0 => {
                    register.name.pop();
                }
                1 => {
                    register.email.pop();
                }
                2 => {
                    register.phone.pop();
                }
                3 => {
                    register.document.pop();
                }
                4 => {
                    register.password.pop();
                }
                5 => {
                    register.confirm_password.pop();
                }
                _ => {}
            }
        }
        AuthMessage::NextField => app.register.next_field(),
        AuthMessage::PrevField => app.register.prev_field(),
        AuthMessage::Confirm => {
            if app.register.focus == 7 {
                back_to_login(app);
            } else {
                submit_register(app, backend);
            }
        }
    }
}

fn submit_register(app: &mut App, backend: &CoreService) {
    let register = &mut app.register;
    if register.loading {
        return;
    }
    let complete = [
        &register.name,
        &register.email,
        &register.phone,
        &register.document,
        &register.password,
        &register.confirm_password,
    ]
    .iter()
    .all(|value| !value.trim().is_empty());
    if !complete {
        register.error = Some("All fields are required".to_string());
        return;
    }
    if let Err(err) =
        validation::require_matching_passwords(&register.password, &register.confirm_password)
    {
        register.error = Some(err.user_message());
        return;
    }
    register.error = None;
    register.loading = true;
    backend.spawn_register(RegistrationForm {
        name: register.name.clone(),
        email: register.email.clone(),
        phone: register.phone.clone(),
        document: register.document.clone(),
        password: register.password.clone(),
        confirm_password: register.confirm_password.clone(),
    });
}

fn update_forgot(app: &mut App, msg: AuthMessage, backend: &CoreService) {
    match msg {
        AuthMessage::Input(ch) => {
            let forgot = &mut app.forgot;
            match (forgot.step, forgot.focus) {
                (ResetStep::Email, 0) => forgot.email.push(ch),
                (ResetStep::Otp, 0) => {
                    // Six digits, nothing else.
                    if !ch.is_ascii_digit() || forgot.otp.len() >= 6 {
                        return;
                    }
                    forgot.otp.push(ch);
                }
                (ResetStep::NewPassword, 0) => forgot.new_password.push(ch),
                (ResetStep::NewPassword, 1) => forgot.confirm_password.push(ch),
                _ => return,
            }
            forgot.error = None;
        }
        AuthMessage::Backspace => {
            let forgot = &mut app.forgot;
            match (forgot.step, forgot.focus) {
                (ResetStep::Email, 0) => {
                    forgot.email.pop();
                }
                (ResetStep::Otp, 0) => {
                    forgot.otp.pop();
                }
                (ResetStep::NewPassword, 0) => {
                    forgot.new_password.pop();
                }
                (ResetStep::NewPassword, 1) => {
                    forgot.confirm_password.pop();
                }
                _ => {}
            }
        }
        AuthMessage::NextField => app.forgot.next_field(),
        AuthMessage::PrevField => app.forgot.prev_field(),
        AuthMessage::Confirm => confirm_forgot(app, backend),
    }
}

fn confirm_forgot(app: &mut App, backend: &CoreService) {
    if app.forgot.loading {
        return;
    }
    match app.forgot.step {
        ResetStep::Email => match app.forgot.focus {
            2 => back_to_login(app),
            _ => send_otp(app, backend),
        },
        ResetStep::Otp => match app.forgot.focus {
            2 => {
                if app.forgot.can_resend() {
                    send_otp(app, backend);
                }
            }
            3 => back_to_login(app),
            _ => verify_otp(app, backend),
        },
        ResetStep::NewPassword => submit_new_password(app, backend),
    }
}

fn send_otp(app: &mut App, backend: &CoreService) {
    let forgot = &mut app.forgot;
    if let Err(err) = validation::require_email(&forgot.email) {
        forgot.error = Some(err.user_message());
        return;
    }
    forgot.error = None;
    forgot.loading = true;
    backend.spawn_send_reset_otp(forgot.email.clone());
}

fn verify_otp(app: &mut App, backend: &CoreService) {
    let forgot = &mut app.forgot;
    if let Err(err) = validation::require_otp(&forgot.otp) {
        forgot.error = Some(err.user_message());
        return;
    }
    forgot.error = None;
    forgot.loading = true;
    backend.spawn_verify_reset_otp(forgot.email.clone(), forgot.otp.clone());
}

fn submit_new_password(app: &mut App, backend: &CoreService) {
    let forgot = &mut app.forgot;
    let check = validation::require_new_password(&forgot.new_password).and_then(|()| {
        validation::require_matching_passwords(&forgot.new_password, &forgot.confirm_password)
    });
    if let Err(err) = check {
        forgot.error = Some(err.user_message());
        return;
    }
    forgot.error = None;
    forgot.loading = true;
    backend.spawn_reset_password(
        forgot.email.clone(),
        forgot.otp.clone(),
        forgot.new_password.clone(),
        forgot.confirm_password.clone(),
    );
}
