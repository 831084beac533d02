//! Focus state: which panel receives keyboard input

/// The two focusable panels of the main layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPanel {
    /// Left navigation sidebar
    #[default]
    Navigation,
    /// Right content area
    Content,
}

impl FocusPanel {
    /// Tab switches between the two panels.
    pub fn toggle(&mut self) {
        *self = match self {
            Self::Navigation => Self::Content,
            Self::Content => Self::Navigation,
        };
    }

    pub fn is_navigation(self) -> bool {
        self == Self::Navigation
    }

    pub fn is_content(self) -> bool {
        self == Self::Content
    }
}
