//! Page definitions

/// Every screen the console can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    /// Sign-in form; the landing page without a session
    #[default]
    Login,
    /// Self-registration form
    Register,
    /// Password reset flow (email, OTP, new password)
    ForgotPassword,
    /// Dashboard shown after sign-in
    Home,
    /// Plan catalogue
    Plans,
    /// Vendor list
    Vendors,
    /// User profile list
    Profiles,
    /// Unallocated DID numbers
    Numbers,
    /// Number-to-plan assignments
    Assignments,
    /// Call event feed
    CallLogs,
    /// Theme and paging preferences
    Settings,
}

impl Page {
    /// Title rendered on the content block.
    pub fn title(self) -> &'static str {
        match self {
            Self::Login => "Sign In",
            Self::Register => "Create Account",
            Self::ForgotPassword => "Reset Password",
            Self::Home => "Home",
            Self::Plans => "Plans",
            Self::Vendors => "Vendors",
            Self::Profiles => "Profiles",
            Self::Numbers => "Unallocated Numbers",
            Self::Assignments => "Number Plan Details",
            Self::CallLogs => "Call Logs",
            Self::Settings => "Settings",
        }
    }

    /// Pages reachable without a session. They take over the whole frame and
    /// route printable keys into their form fields.
    pub fn is_auth_page(self) -> bool {
        matches!(self, Self::Login | Self::Register | Self::ForgotPassword)
    }
}
