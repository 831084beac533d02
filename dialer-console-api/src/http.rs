//! Generic HTTP request plumbing
//!
//! Reusable request processing shared by every endpoint call: sending the
//! request, logging, splitting transport failures from readable responses.
//! Endpoint methods keep full control of URL, headers and body and construct
//! the `RequestBuilder` themselves.
//!
//! There is deliberately no retry or backoff here. Transient failures surface
//! to the screen and the user re-triggers the action (e.g. the refresh key).

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// Maximum number of characters of a response body to include in logs.
///
/// Bodies can carry tokens and profile data; logs only ever see a prefix.
const LOG_BODY_LIMIT: usize = 256;

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns the response status and text.
    ///
    /// # Arguments
    /// * `request_builder` - configured request constructor (URL, headers, body)
    /// * `method_name` - request method name (such as "GET", "POST", used for logs)
    /// * `endpoint` - endpoint path (log tag and error context)
    ///
    /// # Returns
    /// * `Ok((status_code, response_text))` - any readable response, regardless of status
    /// * `Err(ApiError::Timeout)` - the request timed out
    /// * `Err(ApiError::NetworkError)` - no response at all, or 502-504
    pub async fn execute_request(
        request_builder: RequestBuilder,
        method_name: &str,
        endpoint: &str,
    ) -> Result<(u16, String), ApiError> {
        log::debug!("[{endpoint}] {method_name}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ApiError::Timeout {
                    endpoint: endpoint.to_string(),
                    detail: e.to_string(),
                }
            } else {
                ApiError::NetworkError {
                    endpoint: endpoint.to_string(),
                    detail: e.to_string(),
                }
            }
        })?;

        let status_code = response.status().as_u16();
        log::debug!("[{endpoint}] Response Status: {status_code}");

        // Gateway errors carry no usable body; report them as connectivity failures.
        if matches!(status_code, 502..=504) {
            let body = response.text().await.unwrap_or_default();
            log::warn!("[{endpoint}] Server error (HTTP {status_code})");
            return Err(ApiError::NetworkError {
                endpoint: endpoint.to_string(),
                detail: format!("HTTP {status_code}: {body}"),
            });
        }

        let response_text = response.text().await.map_err(|e| ApiError::NetworkError {
            endpoint: endpoint.to_string(),
            detail: format!("Failed to read response body: {e}"),
        })?;

        log::debug!(
            "[{endpoint}] Response Body: {}",
            truncate_for_log(&response_text)
        );

        Ok((status_code, response_text))
    }

    /// Parse a JSON response body.
    ///
    /// # Arguments
    /// * `response_text` - JSON text
    /// * `endpoint` - endpoint path (used for error context)
    ///
    /// # Returns
    /// * `Ok(T)` - successfully parsed
    /// * `Err(ApiError::ParseError)` - parsing failed
    pub fn parse_json<T>(response_text: &str, endpoint: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[{endpoint}] JSON parse failed: {e}");
            log::error!("[{endpoint}] Raw response: {}", truncate_for_log(response_text));
            ApiError::ParseError {
                endpoint: endpoint.to_string(),
                detail: e.to_string(),
            }
        })
    }
}

/// Truncate a response body for safe logging.
///
/// Returns the original string if it's within the limit, otherwise the first
/// `LOG_BODY_LIMIT` characters with a suffix indicating the total length.
pub(crate) fn truncate_for_log(s: &str) -> String {
    if s.len() <= LOG_BODY_LIMIT {
        s.to_string()
    } else {
        let mut cut = LOG_BODY_LIMIT;
        // Back off to a char boundary so multi-byte text cannot split.
        while cut > 0 && !s.is_char_boundary(cut) {
            cut -= 1;
        }
        format!("{}... [truncated, total {} bytes]", &s[..cut], s.len())
    }
}
