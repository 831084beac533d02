//! Session state types

use serde::{Deserialize, Serialize};

use dialer_console_api::{AccessToken, DEFAULT_ROLE, LoginResponse};

/// Cached user identity attached to a session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    /// Display name, when the backend resolved one
    #[serde(default)]
    pub name: Option<String>,
    /// Email address
    #[serde(default)]
    pub email: Option<String>,
    /// Account code
    #[serde(default)]
    pub aucode: Option<String>,
}

/// An authenticated session
///
/// Replaced wholesale on login, never field-mutated; destroyed on logout or
/// any 401.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Bearer token, prefix-agnostic
    pub token: AccessToken,
    /// Cached user identity
    pub user: SessionUser,
    /// Role sent on mutation endpoints
    pub role: String,
}

impl Session {
    /// Builds a session from a login response.
    ///
    /// `login_email` is the address the user signed in with; it backfills the
    /// email when the response carries no user object.
    #[must_use]
    pub fn from_login(response: &LoginResponse, login_email: &str) -> Self {
        let login_user = response.user.as_ref();
        let user = SessionUser {
            name: login_user.and_then(|u| u.name.clone()),
            email: login_user
                .and_then(|u| u.email.clone())
                .or_else(|| Some(login_email.to_string())),
            aucode: login_user
                .and_then(|u| u.aucode.clone())
                .or_else(|| response.aucode.clone()),
        };
        Self {
            token: AccessToken::new(response.token.clone()),
            user,
            role: DEFAULT_ROLE.to_string(),
        }
    }

    /// The name shown in the header: user name, then account code, then the
    /// local part of the email. Empty when the backend sent no identity.
    #[must_use]
    pub fn display_name(&self) -> String {
        if let Some(name) = &self.user.name {
            if !name.trim().is_empty() {
                return name.clone();
            }
        }
        if let Some(aucode) = &self.user.aucode {
            if !aucode.trim().is_empty() {
                return aucode.clone();
            }
        }
        if let Some(email) = &self.user.email {
            if let Some(local) = email.split('@').next() {
                return local.to_string();
            }
        }
        String::new()
    }
}

/// On-disk session record: the auth flag, the bearer token and the cached user
///
/// A record without the auth flag, or with a blank token, never authenticates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSession {
    /// Auth flag; `false` means the record is a leftover and is ignored
    #[serde(default)]
    pub authenticated: bool,
    /// Bearer token as stored (may carry the `Bearer ` prefix)
    #[serde(default)]
    pub token: String,
    /// Cached user identity
    #[serde(default)]
    pub user: SessionUser,
    /// Role sent on mutation endpoints
    #[serde(default = "default_role")]
    pub role: String,
}

fn default_role() -> String {
    DEFAULT_ROLE.to_string()
}

impl StoredSession {
    /// The record persisted for a live session.
    #[must_use]
    pub fn from_session(session: &Session) -> Self {
        Self {
            authenticated: true,
            token: session.token.as_stored().to_string(),
            user: session.user.clone(),
            role: session.role.clone(),
        }
    }

    /// Converts back into a live session, refusing unauthenticated records and
    /// blank tokens.
    #[must_use]
    pub fn into_session(self) -> Option<Session> {
        if !self.authenticated {
            return None;
        }
        let token = AccessToken::new(self.token);
        if token.is_empty() {
            return None;
        }
        Some(Session {
            token,
            user: self.user,
            role: self.role,
        })
    }
}

/// UI preferences persisted alongside the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiPrefs {
    /// Whether the navigation sidebar is expanded
    #[serde(default = "default_sidebar_open")]
    pub sidebar_open: bool,
}

fn default_sidebar_open() -> bool {
    true
}

impl Default for UiPrefs {
    fn default() -> Self {
        Self { sidebar_open: true }
    }
}
