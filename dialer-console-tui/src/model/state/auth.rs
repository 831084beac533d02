//! Form state for the three pre-login pages
//!
//! Each form owns its entered values, a focus index over its fields and
//! action slots, and the inline error from the last submit. Values survive a
//! failed submit; only a successful one clears them.

use std::time::{Duration, Instant};

use dialer_console_core::services::OTP_RESEND_COOLDOWN_SECS;

/// Sign-in form
#[derive(Debug, Clone, Default)]
pub struct LoginState {
    pub email: String,
    pub password: String,
    /// 0 email, 1 password, 2 sign in, 3 register link, 4 reset link
    pub focus: usize,
    pub error: Option<String>,
    pub loading: bool,
}

impl LoginState {
    pub const FIELDS: usize = 5;

    pub fn next_field(&mut self) {
        self.focus = (self.focus + 1) % Self::FIELDS;
    }

    pub fn prev_field(&mut self) {
        self.focus = (self.focus + Self::FIELDS - 1) % Self::FIELDS;
    }
}

/// Self-registration form
#[derive(Debug, Clone, Default)]
pub struct RegisterState {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub document: String,
    pub password: String,
    pub confirm_password: String,
    /// 0..=5 the fields above, 6 create button, 7 back link
    pub focus: usize,
    pub error: Option<String>,
    pub loading: bool,
}

impl RegisterState {
    pub const FIELDS: usize = 8;

    pub fn next_field(&mut self) {
        self.focus = (self.focus + 1) % Self::FIELDS;
    }

    pub fn prev_field(&mut self) {
        self.focus = (self.focus + Self::FIELDS - 1) % Self::FIELDS;
    }
}

/// Steps of the password reset flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResetStep {
    /// Enter the account email and request an OTP
    #[default]
    Email,
    /// Enter the 6-digit OTP
    Otp,
    /// Choose the new password
    NewPassword,
}

/// Password reset form, spanning all three steps
#[derive(Debug, Clone, Default)]
pub struct ForgotPasswordState {
    pub step: ResetStep,
    pub email: String,
    pub otp: String,
    pub new_password: String,
    pub confirm_password: String,
    pub focus: usize,
    pub error: Option<String>,
    pub loading: bool,
    /// Set after each OTP send; resending unlocks when it elapses
    pub resend_available_at: Option<Instant>,
}

impl ForgotPasswordState {
    /// Focusable slots in the current step.
    pub fn field_count(&self) -> usize {
        match self.step {
            ResetStep::Email => 3,       // email, send, back
            ResetStep::Otp => 4,         // otp, verify, resend, back
            ResetStep::NewPassword => 3, // new password, confirm, reset
        }
    }

    pub fn next_field(&mut self) {
        let count = self.field_count();
        self.focus = (self.focus + 1) % count;
    }

    pub fn prev_field(&mut self) {
        let count = self.field_count();
        self.focus = (self.focus + count - 1) % count;
    }

    /// Moves to another step, resetting focus and the inline error.
    pub fn enter_step(&mut self, step: ResetStep) {
        self.step = step;
        self.focus = 0;
        self.error = None;
    }

    pub fn start_resend_cooldown(&mut self) {
        self.resend_available_at =
            Some(Instant::now() + Duration::from_secs(OTP_RESEND_COOLDOWN_SECS));
    }

    /// Seconds left before another OTP may be requested; `None` once allowed.
    pub fn resend_wait_secs(&self) -> Option<u64> {
        let at = self.resend_available_at?;
        let left = at.saturating_duration_since(Instant::now());
        if left.is_zero() {
            None
        } else {
            Some(left.as_secs().max(1))
        }
    }

    pub fn can_resend(&self) -> bool {
        self.resend_wait_secs().is_none()
    }
}
