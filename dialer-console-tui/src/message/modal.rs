//! Dialog messages

/// Interactions with the active dialog
#[derive(Debug, Clone)]
pub enum ModalMessage {
    /// Esc or Ctrl+C: dismiss without saving
    Close,
    NextField,
    PrevField,
    /// Submit the form, or the focused button on a confirmation
    Confirm,
    /// Switch between cancel and delete on a confirmation
    ToggleDeleteFocus,
    Input(char),
    Backspace,
}
