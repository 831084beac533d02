//! Pre-login form messages

/// Interactions with the login, registration and reset forms
#[derive(Debug, Clone)]
pub enum AuthMessage {
    Input(char),
    Backspace,
    NextField,
    PrevField,
    /// Submit the form, or activate the focused link
    Confirm,
}
