//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use dialer_console_api::ApiError;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// The operation requires a signed-in user and no session is present
    #[error("Not signed in")]
    AuthenticationRequired,

    /// The backend rejected the login (bad credentials, unknown account)
    #[error("{}", .message.as_deref().unwrap_or("Login failed. Please check your credentials."))]
    LoginRejected { message: Option<String> },

    /// A form field failed client-side validation; the message is display copy
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Session store failure
    #[error("Storage error: {0}")]
    StorageError(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// API error (converted from the client library)
    #[error("{0}")]
    Api(#[from] ApiError),
}

impl CoreError {
    /// Whether this is expected behavior (absent session, user input, backend
    /// reject), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error`
    /// when returning `false`.
    /// **Please update this method simultaneously when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::AuthenticationRequired
            | Self::LoginRejected { .. }
            | Self::ValidationError(_) => true,
            Self::Api(e) => e.is_expected(),
            Self::StorageError(_) | Self::SerializationError(_) => false,
        }
    }

    /// The message to show inline in the UI.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::AuthenticationRequired => {
                "Your session has expired. Please log in again.".to_string()
            }
            Self::LoginRejected { .. } => self.to_string(),
            Self::ValidationError(msg) => msg.clone(),
            Self::Api(e) => e.user_message(),
            Self::StorageError(_) | Self::SerializationError(_) => self.to_string(),
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
