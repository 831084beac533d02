//! Form validation helpers
//!
//! Every failure message is the exact copy shown inline next to the form;
//! a validation failure never issues a network request.

use crate::error::{CoreError, CoreResult};

/// Human label for a form field name: `"planname"` -> `"Planname"`,
/// `"vendor_name"` -> `"Vendor Name"`.
#[must_use]
pub fn humanize_field(field: &str) -> String {
    field
        .split('_')
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Rejects a blank value with `"<label> is required"`.
pub fn required(value: &str, label: &str) -> CoreResult<()> {
    if value.trim().is_empty() {
        return Err(CoreError::ValidationError(format!("{label} is required")));
    }
    Ok(())
}

/// [`required`] with the label derived from the form field name.
pub fn required_field(value: &str, field: &str) -> CoreResult<()> {
    required(value, &humanize_field(field))
}

/// Rejects a blank email address.
pub fn require_email(email: &str) -> CoreResult<()> {
    if email.trim().is_empty() {
        return Err(CoreError::ValidationError(
            "Please enter a valid email address".to_string(),
        ));
    }
    Ok(())
}

/// Rejects anything but exactly 6 ASCII digits.
pub fn require_otp(otp: &str) -> CoreResult<()> {
    let otp = otp.trim();
    if otp.len() != 6 || !otp.chars().all(|c| c.is_ascii_digit()) {
        return Err(CoreError::ValidationError(
            "Please enter a complete 6-digit OTP".to_string(),
        ));
    }
    Ok(())
}

/// Rejects passwords shorter than 8 characters.
pub fn require_new_password(password: &str) -> CoreResult<()> {
    if password.chars().count() < 8 {
        return Err(CoreError::ValidationError(
            "Password must be at least 8 characters long".to_string(),
        ));
    }
    Ok(())
}

/// Rejects a mismatched confirmation.
pub fn require_matching_passwords(password: &str, confirm: &str) -> CoreResult<()> {
    if password != confirm {
        return Err(CoreError::ValidationError(
            "Passwords do not match".to_string(),
        ));
    }
    Ok(())
}
