//! Sidebar messages

/// Interactions with the navigation list
#[derive(Debug, Clone)]
pub enum NavigationMessage {
    SelectPrevious,
    SelectNext,
    SelectFirst,
    SelectLast,
    /// Open the highlighted page
    Confirm,
}
