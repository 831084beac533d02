//! Bearer token handling.
//!
//! Login responses hand back a raw JWT, but historically the stored value has
//! sometimes already carried the `Bearer ` prefix. [`AccessToken`] absorbs both
//! forms so the outgoing `Authorization` header always carries exactly one
//! prefix.

use serde::{Deserialize, Serialize};

/// Name of the role header some endpoints require alongside the bearer token.
pub const ROLE_HEADER: &str = "role";

/// Role sent when the session has none stored.
pub const DEFAULT_ROLE: &str = "admin";

/// A bearer token as stored in the session, prefix-agnostic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccessToken(String);

impl AccessToken {
    /// Wraps a stored token value, trimming stray whitespace.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into().trim().to_string())
    }

    /// The token exactly as stored (may or may not carry the prefix).
    #[must_use]
    pub fn as_stored(&self) -> &str {
        &self.0
    }

    /// The bare token with any `Bearer ` prefix removed.
    #[must_use]
    pub fn bare(&self) -> &str {
        self.0.strip_prefix("Bearer ").unwrap_or(&self.0)
    }

    /// The value for the `Authorization` header, guaranteed single-prefixed.
    #[must_use]
    pub fn authorization_value(&self) -> String {
        format!("Bearer {}", self.bare())
    }

    /// Whether the token is empty (an empty token never authenticates).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bare().is_empty()
    }
}

impl std::fmt::Display for AccessToken {
    /// Tokens never appear in logs or screens in full.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let bare = self.bare();
        if bare.len() <= 8 {
            write!(f, "<token>")
        } else {
            let mut cut = 8;
            // Back off to a char boundary so multi-byte text cannot split.
            while cut > 0 && !bare.is_char_boundary(cut) {
                cut -= 1;
            }
            write!(f, "{}…", &bare[..cut])
        }
    }
}
