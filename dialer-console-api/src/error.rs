use serde::{Deserialize, Serialize};

/// Unified error type for all dialer API operations.
///
/// Each variant includes an `endpoint` field identifying which API call produced
/// the error, plus variant-specific context. All variants are serializable for
/// structured error reporting.
///
/// There is no automatic retry anywhere in this client: transient failures
/// ([`NetworkError`](Self::NetworkError), [`Timeout`](Self::Timeout)) are
/// reported to the caller, who re-triggers the operation manually.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ApiError {
    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    NetworkError {
        /// Endpoint that produced the error.
        endpoint: String,
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Endpoint that produced the error.
        endpoint: String,
        /// Error details.
        detail: String,
    },

    /// The server answered HTTP 401: the bearer token is missing, invalid or expired.
    ///
    /// Callers must purge the stored session and return to the login screen.
    Unauthorized {
        /// Endpoint that produced the error.
        endpoint: String,
        /// Original error message from the API, if available.
        raw_message: Option<String>,
    },

    /// The server answered HTTP 403: the authenticated user lacks permission.
    PermissionDenied {
        /// Endpoint that produced the error.
        endpoint: String,
        /// Original error message from the API, if available.
        raw_message: Option<String>,
    },

    /// The server answered HTTP 404 for the addressed resource.
    NotFound {
        /// Endpoint that produced the error.
        endpoint: String,
        /// Human description of what was being addressed (e.g. a vendor code).
        resource: String,
        /// Original error message from the API, if available.
        raw_message: Option<String>,
    },

    /// The server rejected the request with a non-2xx status other than 401/403/404.
    RequestFailed {
        /// Endpoint that produced the error.
        endpoint: String,
        /// HTTP status code of the response.
        status: u16,
        /// Server-provided `message` field, if the body carried one.
        message: Option<String>,
    },

    /// The server answered HTTP 200 but the response envelope signalled failure.
    ///
    /// The API wraps payloads in envelopes carrying their own status field; a
    /// 200 transport status with a failing envelope is a logical failure, never
    /// a success.
    EnvelopeFailure {
        /// Endpoint that produced the error.
        endpoint: String,
        /// Envelope status value, if the body carried one.
        envelope_status: Option<i64>,
        /// Server-provided `message` field, if the body carried one.
        message: Option<String>,
    },

    /// Failed to parse the API response body.
    ParseError {
        /// Endpoint that produced the error.
        endpoint: String,
        /// Details about the parse failure.
        detail: String,
    },

    /// Failed to serialize a request body.
    SerializationError {
        /// Endpoint that produced the error.
        endpoint: String,
        /// Details about the serialization failure.
        detail: String,
    },
}

impl ApiError {
    /// Whether this error represents expected behavior (stale session, server-side
    /// validation reject, missing resource), used for log level selection.
    ///
    /// Returns `true` for `warn`-level errors, `false` for `error`-level ones.
    /// **Update this method when adding variants.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Unauthorized { .. }
            | Self::PermissionDenied { .. }
            | Self::NotFound { .. }
            | Self::EnvelopeFailure { .. } => true,
            // Client-correctable rejects are expected; 5xx responses are not.
            Self::RequestFailed { status, .. } => *status < 500,
            Self::NetworkError { .. }
            | Self::Timeout { .. }
            | Self::ParseError { .. }
            | Self::SerializationError { .. } => false,
        }
    }

    /// Whether this error must terminate the session (HTTP 401).
    #[must_use]
    pub fn is_auth_expired(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    /// The message to surface inline in the UI, mirroring what the server said
    /// where possible.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Unauthorized { .. } => {
                "Your session has expired. Please log in again.".to_string()
            }
            Self::RequestFailed {
                status,
                message: Some(msg),
                ..
            } => format!("{msg} (HTTP {status})"),
            Self::RequestFailed {
                status,
                message: None,
                ..
            } => format!("Request failed with status {status}"),
            Self::EnvelopeFailure {
                message: Some(msg), ..
            } => msg.clone(),
            Self::EnvelopeFailure { message: None, .. } => {
                "Received unexpected data format from server".to_string()
            }
            Self::NetworkError { detail, .. } => format!("Network error: {detail}"),
            other => other.to_string(),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { endpoint, detail } => {
                write!(f, "[{endpoint}] Network error: {detail}")
            }
            Self::Timeout { endpoint, detail } => {
                write!(f, "[{endpoint}] Request timeout: {detail}")
            }
            Self::Unauthorized {
                endpoint,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{endpoint}] Authentication expired: {msg}")
                } else {
                    write!(f, "[{endpoint}] Authentication expired")
                }
            }
            Self::PermissionDenied {
                endpoint,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{endpoint}] Permission denied: {msg}")
                } else {
                    write!(f, "[{endpoint}] Permission denied")
                }
            }
            Self::NotFound {
                endpoint, resource, ..
            } => {
                write!(f, "[{endpoint}] '{resource}' not found")
            }
            Self::RequestFailed {
                endpoint,
                status,
                message,
            } => {
                if let Some(msg) = message {
                    write!(f, "[{endpoint}] Request failed ({status}): {msg}")
                } else {
                    write!(f, "[{endpoint}] Request failed with status {status}")
                }
            }
            Self::EnvelopeFailure {
                endpoint,
                envelope_status,
                message,
            } => match (envelope_status, message) {
                (_, Some(msg)) => write!(f, "[{endpoint}] Server reported failure: {msg}"),
                (Some(code), None) => {
                    write!(f, "[{endpoint}] Server reported failure (status {code})")
                }
                (None, None) => write!(f, "[{endpoint}] Server reported failure"),
            },
            Self::ParseError { endpoint, detail } => {
                write!(f, "[{endpoint}] Parse error: {detail}")
            }
            Self::SerializationError { endpoint, detail } => {
                write!(f, "[{endpoint}] Serialization error: {detail}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Convenience type alias for `Result<T, ApiError>`.
pub type Result<T> = std::result::Result<T, ApiError>;
