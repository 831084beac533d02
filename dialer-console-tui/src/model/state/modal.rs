//! Modal dialog state
//!
//! One enum variant per dialog, with the form fields inlined. The update
//! layer mutates the active variant in place; the view renders it over the
//! page content.

use dialer_console_api::{Plan, Profile, Vendor};

/// Every dialog the console can open
#[derive(Debug, Clone)]
pub enum Modal {
    /// Create or edit a plan; `plan_code` is `Some` when editing
    PlanForm {
        plan_code: Option<i64>,
        plan_name: String,
        country: String,
        description: String,
        price: String,
        call_limit: String,
        sms_limit: String,
        data_limit: String,
        validity: String,
        /// Fixed to `"2"` on create; carried through unchanged on edit
        number_assign: String,
        focus: usize,
        error: Option<String>,
        loading: bool,
    },
    /// Create or edit a vendor; `vendor_code` is `Some` when editing
    VendorForm {
        vendor_code: Option<String>,
        vendor_name: String,
        vendor_planlist: String,
        price: String,
        description: String,
        focus: usize,
        error: Option<String>,
        loading: bool,
    },
    /// Edit a user profile; the whole record is resubmitted
    ProfileForm {
        id: i64,
        aucode: String,
        name: String,
        email: String,
        phone: String,
        password: String,
        focus: usize,
        error: Option<String>,
        loading: bool,
    },
    /// Delete confirmation for a profile; focus 0 = cancel, 1 = delete
    ConfirmDeleteProfile {
        name: String,
        aucode: String,
        focus: usize,
        loading: bool,
    },
    /// Key binding reference
    Help,
    /// Blocking notice for failures with no form to land on
    Error { title: String, message: String },
}

/// Holds the active modal, if any
#[derive(Debug, Clone, Default)]
pub struct ModalState {
    pub active: Option<Modal>,
}

impl ModalState {
    pub fn show(&mut self, modal: Modal) {
        self.active = Some(modal);
    }

    pub fn close(&mut self) {
        self.active = None;
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    pub fn show_plan_create(&mut self) {
        self.show(Modal::PlanForm {
            plan_code: None,
            plan_name: String::new(),
            country: String::new(),
            description: String::new(),
            price: String::new(),
            call_limit: String::new(),
            sms_limit: String::new(),
            data_limit: String::new(),
            validity: String::new(),
            number_assign: "2".to_string(),
            focus: 0,
            error: None,
            loading: false,
        });
    }

    pub fn show_plan_edit(&mut self, plan: &Plan) {
        self.show(Modal::PlanForm {
            plan_code: Some(plan.plan_code),
            plan_name: plan.plan_name.clone(),
            country: plan.country.clone(),
            description: plan.description.clone(),
            price: plan.price.clone(),
            call_limit: plan.call_limit.clone(),
            sms_limit: plan.sms_limit.clone(),
            data_limit: plan.data_limit.clone(),
            validity: plan.validity.clone(),
            number_assign: plan.number_assign.clone(),
            focus: 0,
            error: None,
            loading: false,
        });
    }

    pub fn show_vendor_create(&mut self) {
        self.show(Modal::VendorForm {
            vendor_code: None,
            vendor_name: String::new(),
            vendor_planlist: String::new(),
            price: String::new(),
            description: String::new(),
            focus: 0,
            error: None,
            loading: false,
        });
    }

    pub fn show_vendor_edit(&mut self, vendor: &Vendor) {
        self.show(Modal::VendorForm {
            vendor_code: Some(vendor.vendor_code.clone()),
            vendor_name: vendor.vendor_name.clone(),
            vendor_planlist: vendor.vendor_planlist.clone(),
            price: vendor.price.clone(),
            description: vendor.description.clone(),
            focus: 0,
            error: None,
            loading: false,
        });
    }

    pub fn show_profile_edit(&mut self, profile: &Profile) {
        self.show(Modal::ProfileForm {
            id: profile.id,
            aucode: profile.aucode.clone(),
            name: profile.name.clone(),
            email: profile.email.clone(),
            phone: profile.phone.clone(),
            password: profile.password.clone(),
            focus: 0,
            error: None,
            loading: false,
        });
    }

    pub fn show_confirm_delete_profile(&mut self, profile: &Profile) {
        self.show(Modal::ConfirmDeleteProfile {
            name: profile.name.clone(),
            aucode: profile.aucode.clone(),
            focus: 0,
            loading: false,
        });
    }

    pub fn show_help(&mut self) {
        self.show(Modal::Help);
    }

    pub fn show_error(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.show(Modal::Error {
            title: title.into(),
            message: message.into(),
        });
    }

    /// Routes a backend failure into the open form. No-op when the user
    /// already closed the dialog.
    pub fn set_form_error(&mut self, message: String) {
        match &mut self.active {
            Some(
                Modal::PlanForm { error, loading, .. }
                | Modal::VendorForm { error, loading, .. }
                | Modal::ProfileForm { error, loading, .. },
            ) => {
                *error = Some(message);
                *loading = false;
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_create_pins_number_assign() {
        let mut modal = ModalState::default();
        modal.show_plan_create();
        let Some(Modal::PlanForm {
            plan_code,
            number_assign,
            ..
        }) = &modal.active
        else {
            panic!("expected a plan form");
        };
        assert!(plan_code.is_none());
        assert_eq!(number_assign, "2");
    }

    #[test]
    fn form_error_lands_in_the_open_dialog() {
        let mut modal = ModalState::default();
        modal.show_vendor_create();
        modal.set_form_error("Price must be a number".to_string());
        let Some(Modal::VendorForm { error, loading, .. }) = &modal.active else {
            panic!("expected a vendor form");
        };
        assert_eq!(error.as_deref(), Some("Price must be a number"));
        assert!(!loading);
    }

    #[test]
    fn form_error_after_close_is_dropped() {
        let mut modal = ModalState::default();
        modal.show_plan_create();
        modal.close();
        modal.set_form_error("too late".to_string());
        assert!(!modal.is_open());
    }
}
