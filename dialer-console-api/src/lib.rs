//! # dialer-console-api
//!
//! Typed client for the dialer platform REST API: authentication flows,
//! top-up plans, vendors, Sinch DID numbers, call logs and user profiles.
//!
//! ## Endpoints
//!
//! | Area | Endpoints |
//! |------|-----------|
//! | Auth | `auth/login`, `auth/register`, `auth/send-otp`, `auth/verify-otp`, `auth/reset-password` |
//! | Plans | `plan/sinchplan`, `plan/create`, `plan/create/update` |
//! | Vendors | `vendor/getvendors`, `vendor/createvendor`, `vendor/updatevendor/:code` |
//! | Sinch | `sinch/unallocated-numbers`, `sinch/sinchnumberplandetails` |
//! | Call logs | `calllog/call-events` |
//! | Profiles | `profile`, `profile/users`, `profile/users/aucode/:aucode` |
//!
//! The backend's response envelopes drifted over time (`statusCode`+`data` on
//! most endpoints, `status`+`vendors` on vendor listings, a bare `data` array
//! on the call-event feed). This crate normalizes all of them behind typed
//! decoding; consumers only ever see payload types or [`ApiError`].
//!
//! ## TLS Backend
//!
//! - **`native-tls`** *(default)* — Use the platform's native TLS implementation.
//! - **`rustls`** — Use rustls. Recommended for cross-compilation.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use dialer_console_api::{AccessToken, DialerClient, DialerGateway, LoginRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = DialerClient::staging();
//!
//!     // 1. Exchange credentials for a token
//!     let login = client
//!         .login(&LoginRequest {
//!             email: "admin@example.com".to_string(),
//!             password: "secret".to_string(),
//!         })
//!         .await?;
//!     let token = AccessToken::new(login.token);
//!
//!     // 2. Authenticated calls take the token explicitly
//!     let plans = client.list_plans(&token).await?;
//!     for plan in &plans {
//!         println!("{} ({})", plan.plan_name, plan.validity);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ApiError>`](ApiError). Notable variants:
//!
//! - [`ApiError::Unauthorized`] — HTTP 401; the session must be purged
//! - [`ApiError::EnvelopeFailure`] — transport 200 with a failing envelope
//! - [`ApiError::NetworkError`] / [`ApiError::Timeout`] — connectivity
//!
//! Nothing retries automatically; the console re-triggers actions manually.

mod client;
mod envelope;
mod error;
mod http;
mod token;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{ApiError, Result};

// Re-export the client and its gateway seam
pub use client::{DEFAULT_API_BASE, DialerClient};
pub use traits::DialerGateway;

// Re-export token handling
pub use token::{AccessToken, DEFAULT_ROLE, ROLE_HEADER};

// Re-export wire types
pub use types::{
    CallEventPayload, CallEventRecord, CallLog, CreatePlanRequest, CreateVendorRequest,
    LoginRequest, LoginResponse, LoginUser, NumberAssignment, NumberAssignmentReport, Plan,
    Profile, RegisterRequest, ResetPasswordRequest, SendOtpRequest, UnallocatedNumber,
    UpdateVendorRequest, Vendor, VerifyOtpRequest,
};

// Re-export utils module
pub use utils::datetime;
