use async_trait::async_trait;

use crate::error::Result;
use crate::token::AccessToken;
use crate::types::{
    CallLog, CreatePlanRequest, CreateVendorRequest, LoginRequest, LoginResponse,
    NumberAssignmentReport, Plan, Profile, RegisterRequest, ResetPasswordRequest, SendOtpRequest,
    UnallocatedNumber, UpdateVendorRequest, Vendor, VerifyOtpRequest,
};

/// Remote dialer API, one method per endpoint.
///
/// This is the seam between the service layer and the wire: the real
/// [`DialerClient`](crate::DialerClient) implements it over HTTP, test doubles
/// implement it in memory. Authenticated operations take the session token
/// explicitly so the trait itself stays stateless; mutation endpoints that the
/// backend gates by role additionally take the role header value.
#[async_trait]
pub trait DialerGateway: Send + Sync {
    // ---- Auth (no token) ----

    /// Exchange credentials for a bearer token.
    async fn login(&self, req: &LoginRequest) -> Result<LoginResponse>;

    /// Self-register a new account (role is fixed to `user` in the payload).
    async fn register(&self, req: &RegisterRequest) -> Result<()>;

    /// Send a one-time password to an email address.
    async fn send_otp(&self, req: &SendOtpRequest) -> Result<()>;

    /// Verify a one-time password.
    async fn verify_otp(&self, req: &VerifyOtpRequest) -> Result<()>;

    /// Reset a password using a verified OTP.
    async fn reset_password(&self, req: &ResetPasswordRequest) -> Result<()>;

    // ---- Plans ----

    /// Fetch all top-up plans.
    async fn list_plans(&self, token: &AccessToken) -> Result<Vec<Plan>>;

    /// Create a plan.
    async fn create_plan(
        &self,
        token: &AccessToken,
        role: &str,
        req: &CreatePlanRequest,
    ) -> Result<()>;

    /// Update a plan by resubmitting the whole record.
    async fn update_plan(&self, token: &AccessToken, role: &str, plan: &Plan) -> Result<()>;

    // ---- Vendors ----

    /// Fetch all vendors.
    async fn list_vendors(&self, token: &AccessToken) -> Result<Vec<Vendor>>;

    /// Create a vendor.
    async fn create_vendor(
        &self,
        token: &AccessToken,
        role: &str,
        req: &CreateVendorRequest,
    ) -> Result<()>;

    /// Update a vendor addressed by its code.
    async fn update_vendor(
        &self,
        token: &AccessToken,
        role: &str,
        vendor_code: &str,
        req: &UpdateVendorRequest,
    ) -> Result<()>;

    // ---- Profiles ----

    /// Fetch all user profiles.
    async fn list_profiles(&self, token: &AccessToken) -> Result<Vec<Profile>>;

    /// Update a profile by resubmitting the whole record.
    async fn update_profile(&self, token: &AccessToken, profile: &Profile) -> Result<()>;

    /// Delete a profile addressed by account code.
    async fn delete_profile(&self, token: &AccessToken, aucode: &str) -> Result<()>;

    // ---- Sinch numbers ----

    /// Fetch the unallocated DID numbers.
    async fn unallocated_numbers(&self, token: &AccessToken) -> Result<Vec<UnallocatedNumber>>;

    /// Fetch number-to-plan assignments plus the aggregate call limit.
    async fn number_assignments(&self, token: &AccessToken) -> Result<NumberAssignmentReport>;

    // ---- Call logs ----

    /// Fetch the call-event feed, normalized into display rows.
    async fn call_events(&self, token: &AccessToken) -> Result<Vec<CallLog>>;
}
