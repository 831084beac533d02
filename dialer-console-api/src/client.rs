//! HTTP implementation of [`DialerGateway`].
//!
//! One client instance serves the whole console. Requests never log their
//! bodies: login, register and profile payloads carry credentials.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::envelope::{
    AckEnvelope, AssignmentsEnvelope, CallEventsEnvelope, DataEnvelope, LoginEnvelope,
    VendorsEnvelope,
};
use crate::error::{ApiError, Result};
use crate::http::HttpUtils;
use crate::token::{AccessToken, ROLE_HEADER};
use crate::traits::DialerGateway;
use crate::types::{
    CallLog, CreatePlanRequest, CreateVendorRequest, LoginRequest, LoginResponse,
    NumberAssignmentReport, Plan, Profile, RegisterRequest, ResetPasswordRequest, SendOtpRequest,
    UnallocatedNumber, UpdateVendorRequest, Vendor, VerifyOtpRequest,
};

/// Base URL of the staging backend.
pub const DEFAULT_API_BASE: &str = "https://stagedialer.clay.in/api";

/// Default connect timeout (seconds).
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// Default request timeout (seconds).
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Typed client for the dialer REST API.
pub struct DialerClient {
    pub(crate) client: Client,
    pub(crate) base_url: String,
}

impl DialerClient {
    /// Creates a client against the given base URL (trailing slash tolerated).
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: create_http_client(),
            base_url,
        }
    }

    /// Creates a client against the staging backend.
    #[must_use]
    pub fn staging() -> Self {
        Self::new(DEFAULT_API_BASE)
    }

    /// The base URL this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/{endpoint}", self.base_url)
    }

    /// Maps a non-2xx transport status onto the error taxonomy.
    ///
    /// 401 and 403 get their own variants; everything else becomes
    /// [`ApiError::RequestFailed`] carrying the server message when the body
    /// held one.
    fn error_for_status(status: u16, body: &str, endpoint: &str) -> ApiError {
        let message = extract_message(body);
        match status {
            401 => ApiError::Unauthorized {
                endpoint: endpoint.to_string(),
                raw_message: message,
            },
            403 => ApiError::PermissionDenied {
                endpoint: endpoint.to_string(),
                raw_message: message,
            },
            _ => ApiError::RequestFailed {
                endpoint: endpoint.to_string(),
                status,
                message,
            },
        }
    }

    /// Authenticated GET returning the endpoint's envelope type.
    async fn get_enveloped<T: DeserializeOwned>(
        &self,
        token: &AccessToken,
        endpoint: &str,
    ) -> Result<T> {
        let builder = self
            .client
            .get(self.url(endpoint))
            .header("Authorization", token.authorization_value());
        let (status, body) = HttpUtils::execute_request(builder, "GET", endpoint).await?;
        if !(200..300).contains(&status) {
            return Err(Self::error_for_status(status, &body, endpoint));
        }
        HttpUtils::parse_json(&body, endpoint)
    }

    /// Authenticated, role-gated mutation expecting an acknowledgement envelope.
    async fn send_ack<B: Serialize>(
        &self,
        method: reqwest::Method,
        token: &AccessToken,
        role: &str,
        endpoint: &str,
        body: &B,
    ) -> Result<()> {
        let method_name = method.as_str().to_string();
        let builder = self
            .client
            .request(method, self.url(endpoint))
            .header("Authorization", token.authorization_value())
            .header(ROLE_HEADER, role)
            .json(body);
        let (status, body) = HttpUtils::execute_request(builder, &method_name, endpoint).await?;
        if !(200..300).contains(&status) {
            return Err(Self::error_for_status(status, &body, endpoint));
        }
        let ack: AckEnvelope = HttpUtils::parse_json(&body, endpoint)?;
        ack.into_result(endpoint)
    }

    /// Unauthenticated POST where transport 2xx alone means success.
    ///
    /// The auth endpoints answer plain 2xx bodies with no reliable envelope;
    /// on failure the body text (or its `message` field) becomes the error.
    async fn post_plain<B: Serialize>(&self, endpoint: &str, body: &B) -> Result<()> {
        let builder = self.client.post(self.url(endpoint)).json(body);
        let (status, body) = HttpUtils::execute_request(builder, "POST", endpoint).await?;
        if (200..300).contains(&status) {
            Ok(())
        } else {
            Err(Self::error_for_status(status, &body, endpoint))
        }
    }
}

#[async_trait]
impl DialerGateway for DialerClient {
    async fn login(&self, req: &LoginRequest) -> Result<LoginResponse> {
        let endpoint = "auth/login";
        let builder = self.client.post(self.url(endpoint)).json(req);
        let (status, body) = HttpUtils::execute_request(builder, "POST", endpoint).await?;
        if !(200..300).contains(&status) {
            return Err(Self::error_for_status(status, &body, endpoint));
        }
        let envelope: LoginEnvelope = HttpUtils::parse_json(&body, endpoint)?;
        envelope.into_result(endpoint)
    }

    async fn register(&self, req: &RegisterRequest) -> Result<()> {
        self.post_plain("auth/register", req).await
    }

    async fn send_otp(&self, req: &SendOtpRequest) -> Result<()> {
        self.post_plain("auth/send-otp", req).await
    }

    async fn verify_otp(&self, req: &VerifyOtpRequest) -> Result<()> {
        self.post_plain("auth/verify-otp", req).await
    }

    async fn reset_password(&self, req: &ResetPasswordRequest) -> Result<()> {
        self.post_plain("auth/reset-password", req).await
    }

    async fn list_plans(&self, token: &AccessToken) -> Result<Vec<Plan>> {
        let endpoint = "plan/sinchplan";
        let envelope: DataEnvelope<Vec<Plan>> = self.get_enveloped(token, endpoint).await?;
        envelope.into_result(endpoint)
    }

    async fn create_plan(
        &self,
        token: &AccessToken,
        role: &str,
        req: &CreatePlanRequest,
    ) -> Result<()> {
        self.send_ack(reqwest::Method::POST, token, role, "plan/create", req)
            .await
    }

    async fn update_plan(&self, token: &AccessToken, role: &str, plan: &Plan) -> Result<()> {
        self.send_ack(reqwest::Method::POST, token, role, "plan/create/update", plan)
            .await
    }

    async fn list_vendors(&self, token: &AccessToken) -> Result<Vec<Vendor>> {
        let endpoint = "vendor/getvendors";
        let envelope: VendorsEnvelope = self.get_enveloped(token, endpoint).await?;
        envelope.into_result(endpoint)
    }

    async fn create_vendor(
        &self,
        token: &AccessToken,
        role: &str,
        req: &CreateVendorRequest,
    ) -> Result<()> {
        self.send_ack(
            reqwest::Method::POST,
            token,
            role,
            "vendor/createvendor",
            req,
        )
        .await
    }

    async fn update_vendor(
        &self,
        token: &AccessToken,
        role: &str,
        vendor_code: &str,
        req: &UpdateVendorRequest,
    ) -> Result<()> {
        let endpoint = format!("vendor/updatevendor/{vendor_code}");
        self.send_ack(reqwest::Method::POST, token, role, &endpoint, req)
            .await
            .map_err(|e| match e {
                ApiError::RequestFailed {
                    endpoint,
                    status: 404,
                    message,
                } => ApiError::NotFound {
                    endpoint,
                    resource: vendor_code.to_string(),
                    raw_message: message,
                },
                other => other,
            })
    }

    async fn list_profiles(&self, token: &AccessToken) -> Result<Vec<Profile>> {
        let endpoint = "profile";
        let envelope: DataEnvelope<Vec<Profile>> = self.get_enveloped(token, endpoint).await?;
        envelope.into_result(endpoint)
    }

    async fn update_profile(&self, token: &AccessToken, profile: &Profile) -> Result<()> {
        let endpoint = "profile/users";
        let builder = self
            .client
            .put(self.url(endpoint))
            .header("Authorization", token.authorization_value())
            .json(profile);
        let (status, body) = HttpUtils::execute_request(builder, "PUT", endpoint).await?;
        if !(200..300).contains(&status) {
            return Err(Self::error_for_status(status, &body, endpoint));
        }
        let ack: AckEnvelope = HttpUtils::parse_json(&body, endpoint)?;
        ack.into_result(endpoint)
    }

    async fn delete_profile(&self, token: &AccessToken, aucode: &str) -> Result<()> {
        let endpoint = format!("profile/users/aucode/{aucode}");
        let builder = self
            .client
            .delete(self.url(&endpoint))
            .header("Authorization", token.authorization_value());
        let (status, body) = HttpUtils::execute_request(builder, "DELETE", &endpoint).await?;
        if (200..300).contains(&status) {
            Ok(())
        } else {
            Err(
                match Self::error_for_status(status, &body, &endpoint) {
                    ApiError::RequestFailed {
                        endpoint,
                        status: 404,
                        message,
                    } => ApiError::NotFound {
                        endpoint,
                        resource: aucode.to_string(),
                        raw_message: message,
                    },
                    other => other,
                },
            )
        }
    }

    async fn unallocated_numbers(&self, token: &AccessToken) -> Result<Vec<UnallocatedNumber>> {
        let endpoint = "sinch/unallocated-numbers";
        let envelope: DataEnvelope<Vec<UnallocatedNumber>> =
            self.get_enveloped(token, endpoint).await?;
        envelope.into_result(endpoint)
    }

    async fn number_assignments(&self, token: &AccessToken) -> Result<NumberAssignmentReport> {
        let endpoint = "sinch/sinchnumberplandetails";
        let envelope: AssignmentsEnvelope = self.get_enveloped(token, endpoint).await?;
        let (assignments, total_call_limit) = envelope.into_result(endpoint)?;
        Ok(NumberAssignmentReport {
            assignments,
            total_call_limit,
        })
    }

    async fn call_events(&self, token: &AccessToken) -> Result<Vec<CallLog>> {
        let endpoint = "calllog/call-events";
        let envelope: CallEventsEnvelope = self.get_enveloped(token, endpoint).await?;
        Ok(envelope.into_rows().into_iter().map(CallLog::from).collect())
    }
}

/// Creates the shared HTTP client with timeout configuration.
fn create_http_client() -> Client {
    Client::builder()
        .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
        .build()
        .expect("Failed to create HTTP client")
}

/// Pulls a human-readable message out of an error body.
///
/// JSON bodies contribute their `message` field; anything else is used as-is
/// when non-empty.
fn extract_message(body: &str) -> Option<String> {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        message: Option<String>,
    }

    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        if let Some(message) = parsed.message {
            if !message.trim().is_empty() {
                return Some(message);
            }
        }
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
