//! Dialog messages
//!
//! Form dialogs are plain field editors; submits go straight to the
//! services, which own the form validation. A rejected submit comes back as
//! a saved-event failure and lands in the dialog through
//! `ModalState::set_form_error`.

use dialer_console_api::{CreatePlanRequest, Plan, Profile};
use dialer_console_core::services::VendorForm;

use crate::backend::CoreService;
use crate::message::ModalMessage;
use crate::model::App;
use crate::model::state::Modal;

/// Editable slots per form dialog. The confirm-delete dialog has its own
/// two-slot toggle instead.
const PLAN_FIELDS: usize = 8;
const VENDOR_FIELDS: usize = 4;
const PROFILE_FIELDS: usize = 4;

pub fn update(app: &mut App, msg: ModalMessage, backend: &CoreService) {
    match msg {
        ModalMessage::Close => {
            app.modal.close();
        }
        ModalMessage::NextField => {
            move_focus(app, true);
        }
        ModalMessage::PrevField => {
            move_focus(app, false);
        }
        ModalMessage::Input(ch) => {
            handle_input(app, ch);
        }
        ModalMessage::Backspace => {
            handle_backspace(app);
        }
        ModalMessage::ToggleDeleteFocus => {
            if let Some(Modal::ConfirmDeleteProfile { focus, .. }) = &mut app.modal.active {
                *focus = 1 - *focus;
            }
        }
        ModalMessage::Confirm => {
            handle_confirm(app, backend);
        }
    }
}

fn move_focus(app: &mut App, forward: bool) {
    let Some(modal) = &mut app.modal.active else {
        return;
    };
    let (focus, count) = match modal {
        Modal::PlanForm { focus, .. } => (focus, PLAN_FIELDS),
        Modal::VendorForm { focus, .. } => (focus, VENDOR_FIELDS),
        Modal::ProfileForm { focus, .. } => (focus, PROFILE_FIELDS),
        _ => return,
    };
    if forward {
        *focus = (*focus + 1) % count;
    } else {
        *focus = (*focus + count - 1) % count;
    }
}

fn handle_input(app: &mut App, ch: char) {
    let Some(modal) = &mut app.modal.active else {
        return;
    };
    match modal {
        Modal::PlanForm {
            plan_name,
            country,
            description,
            price,
            call_limit,
            sms_limit,
            data_limit,
            validity,
            focus,
            error,
            ..
        } => {
            let field = match *focus {
                0 => plan_name,
                1 => country,
                2 => description,
                3 => price,
                4 => call_limit,
                5 => sms_limit,
                6 => data_limit,
                7 => validity,
                _ => return,
            };
            field.push(ch);
            *error = None;
        }
        Modal::VendorForm {
            vendor_name,
            vendor_planlist,
            price,
            description,
            focus,
            error,
            ..
        } => {
            let field = match *focus {
                0 => vendor_name,
                1 => vendor_planlist,
                2 => price,
                3 => description,
                _ => return,
            };
            field.push(ch);
            *error = None;
        }
        Modal::ProfileForm {
            name,
            email,
            phone,
            password,
            focus,
            error,
            ..
        } => {
            let field = match *focus {
                0 => name,
                1 => email,
                2 => phone,
                3 => password,
                _ => return,
            };
            field.push(ch);
            *error = None;
        }
        _ => {}
    }
}

fn handle_backspace(app: &mut App) {
    let Some(modal) = &mut app.modal.active else {
        return;
    };
    match modal {
        Modal::PlanForm {
            plan_name,
            country,
            description,
            price,
            call_limit,
            sms_limit,
            data_limit,
            validity,
            focus,
            ..
        } => {
            let field = match *focus {
                0 => plan_name,
                1 => country,
                2 => description,
                3 => price,
                4 => call_limit,
                5 => sms_limit,
                6 => data_limit,
                7 => validity,
                _ => return,
            };
            field.pop();
        }
        Modal::VendorForm {
            vendor_name,
            vendor_planlist,
            price,
            description,
            focus,
            ..
        } => {
            let field = match *focus {
                0 => vendor_name,
                1 => vendor_planlist,
                2 => price,
                3 => description,
                _ => return,
            };
            field.pop();
        }
        Modal::ProfileForm {
            name,
            email,
            phone,
            password,
            focus,
            ..
        } => {
            let field = match *focus {
                0 => name,
                1 => email,
                2 => phone,
                3 => password,
                _ => return,
            };
            field.pop();
        }
        _ => {}
    }
}

fn handle_confirm(app: &mut App, backend: &CoreService) {
    match &app.modal.active {
        Some(Modal::PlanForm { .. }) => submit_plan(app, backend),
        Some(Modal::VendorForm { .. }) => submit_vendor(app, backend),
        Some(Modal::ProfileForm { .. }) => submit_profile(app, backend),
        Some(Modal::ConfirmDeleteProfile { .. }) => confirm_delete(app, backend),
        Some(Modal::Help | Modal::Error { .. }) => app.modal.close(),
        None => {}
    }
}

fn submit_plan(app: &mut App, backend: &CoreService) {
    let Some(Modal::PlanForm {
        plan_code,
        plan_name,
        country,
        description,
        price,
        call_limit,
        sms_limit,
        data_limit,
        validity,
        number_assign,
        error,
        loading,
        ..
    }) = &mut app.modal.active
    else {
        return;
    };
    if *loading {
        return;
    }
    *error = None;
    *loading = true;
    match plan_code {
        Some(code) => backend.spawn_update_plan(Plan {
            plan_code: *code,
            plan_name: plan_name.clone(),
            country: country.clone(),
            description: description.clone(),
            price: price.clone(),
            call_limit: call_limit.clone(),
            sms_limit: sms_limit.clone(),
            data_limit: data_limit.clone(),
            validity: validity.clone(),
            number_assign: number_assign.clone(),
        }),
        None => backend.spawn_create_plan(CreatePlanRequest {
            planname: plan_name.clone(),
            country: country.clone(),
            description: description.clone(),
            price: price.clone(),
            call_limit: call_limit.clone(),
            sms_limit: sms_limit.clone(),
            data_limit: data_limit.clone(),
            validity: validity.clone(),
            number_assign: number_assign.clone(),
            ..CreatePlanRequest::default()
        }),
    }
}

fn submit_vendor(app: &mut App, backend: &CoreService) {
    let Some(Modal::VendorForm {
        vendor_code,
        vendor_name,
        vendor_planlist,
        price,
        description,
        error,
        loading,
        ..
    }) = &mut app.modal.active
    else {
        return;
    };
    if *loading {
        return;
    }
    *error = None;
    *loading = true;
    let form = VendorForm {
        vendor_name: vendor_name.clone(),
        vendor_planlist: vendor_planlist.clone(),
        price: price.clone(),
        description: description.clone(),
    };
    match vendor_code {
        Some(code) => backend.spawn_update_vendor(code.clone(), form),
        None => backend.spawn_create_vendor(form),
    }
}

fn submit_profile(app: &mut App, backend: &CoreService) {
    let Some(Modal::ProfileForm {
        id,
        aucode,
        name,
        email,
        phone,
        password,
        error,
        loading,
        ..
    }) = &mut app.modal.active
    else {
        return;
    };
    if *loading {
        return;
    }
    *error = None;
    *loading = true;
    backend.spawn_update_profile(Profile {
        id: *id,
        name: name.clone(),
        aucode: aucode.clone(),
        email: email.clone(),
        phone: phone.clone(),
        password: password.clone(),
    });
}

fn confirm_delete(app: &mut App, backend: &CoreService) {
    let Some(Modal::ConfirmDeleteProfile {
        aucode,
        focus,
        loading,
        ..
    }) = &mut app.modal.active
    else {
        return;
    };
    if *loading {
        return;
    }
    if *focus == 1 {
        *loading = true;
        let aucode = aucode.clone();
        backend.spawn_delete_profile(aucode);
        return;
    }
    app.modal.close();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{AppConfig, ConfigService};

    fn backend() -> CoreService {
        CoreService::new(&AppConfig::default(), ConfigService::new()).unwrap()
    }

    fn profile() -> Profile {
        Profile {
            id: 3,
            name: "Jo".to_string(),
            aucode: "AU3".to_string(),
            email: "jo@clay.in".to_string(),
            phone: "123".to_string(),
            password: "pw".to_string(),
        }
    }

    #[test]
    fn tab_cycles_through_every_plan_field() {
        let backend = backend();
        let mut app = App::new();
        app.modal.show_plan_create();
        for _ in 0..PLAN_FIELDS {
            update(&mut app, ModalMessage::NextField, &backend);
        }
        let Some(Modal::PlanForm { focus, .. }) = &app.modal.active else {
            panic!("expected a plan form");
        };
        assert_eq!(*focus, 0);
    }

    #[test]
    fn typing_fills_the_focused_field_and_clears_the_error() {
        let backend = backend();
        let mut app = App::new();
        app.modal.show_vendor_create();
        app.modal.set_form_error("Price must be a number".to_string());

        update(&mut app, ModalMessage::Input('x'), &backend);

        let Some(Modal::VendorForm {
            vendor_name, error, ..
        }) = &app.modal.active
        else {
            panic!("expected a vendor form");
        };
        assert_eq!(vendor_name, "x");
        assert!(error.is_none());
    }

    #[test]
    fn delete_needs_the_delete_slot_focused() {
        let backend = backend();
        let mut app = App::new();
        app.modal.show_confirm_delete_profile(&profile());

        // Cancel is focused first, so Enter just closes the dialog.
        update(&mut app, ModalMessage::Confirm, &backend);
        assert!(!app.modal.is_open());

        app.modal.show_confirm_delete_profile(&profile());
        update(&mut app, ModalMessage::ToggleDeleteFocus, &backend);
        update(&mut app, ModalMessage::Confirm, &backend);
        let Some(Modal::ConfirmDeleteProfile { loading, .. }) = &app.modal.active else {
            panic!("expected the dialog to stay open while deleting");
        };
        assert!(*loading);
    }

    #[test]
    fn submitting_a_form_marks_it_loading() {
        let backend = backend();
        let mut app = App::new();
        app.modal.show_plan_create();
        update(&mut app, ModalMessage::Confirm, &backend);
        let Some(Modal::PlanForm { loading, .. }) = &app.modal.active else {
            panic!("expected a plan form");
        };
        assert!(*loading);

        // A second Enter while in flight is ignored.
        update(&mut app, ModalMessage::Confirm, &backend);
    }

    #[test]
    fn enter_dismisses_the_help_overlay() {
        let backend = backend();
        let mut app = App::new();
        app.modal.show_help();
        update(&mut app, ModalMessage::Confirm, &backend);
        assert!(!app.modal.is_open());
    }
}
