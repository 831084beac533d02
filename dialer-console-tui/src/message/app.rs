//! Top-level messages

use super::auth::AuthMessage;
use super::backend::BackendEvent;
use super::content::ContentMessage;
use super::modal::ModalMessage;
use super::navigation::NavigationMessage;

/// Everything the update layer can be asked to do
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// Leave the application
    Quit,
    /// Tab between the sidebar and the content area
    ToggleFocus,
    /// Collapse or expand the sidebar (persisted preference)
    ToggleSidebar,
    /// End the session and return to the login page
    Logout,
    /// Sidebar list interaction
    Navigation(NavigationMessage),
    /// Content area interaction
    Content(ContentMessage),
    /// Dialog interaction
    Modal(ModalMessage),
    /// Pre-login form interaction
    Auth(AuthMessage),
    /// A backend task finished
    Backend(BackendEvent),
    /// Esc: close the dialog, or leave a sub-page
    GoBack,
    /// Refetch the current page's data
    Refresh,
    /// Open the key binding reference
    ShowHelp,
    /// Nothing to do
    Noop,
}
