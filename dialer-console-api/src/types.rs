use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============ Auth ============

/// Credentials for `POST /auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Account email address.
    pub email: String,
    /// Account password.
    pub password: String,
}

/// Successful login payload.
///
/// The backend answers with at least a JWT; the user object and `aucode` are
/// present depending on account type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Bearer token (raw JWT, without prefix).
    pub token: String,
    /// User record, when the backend resolves one.
    #[serde(default)]
    pub user: Option<LoginUser>,
    /// Account code, for accounts not backed by a full user record.
    #[serde(default)]
    pub aucode: Option<String>,
}

/// User object embedded in a login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginUser {
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Email address.
    #[serde(default)]
    pub email: Option<String>,
    /// Account code.
    #[serde(default)]
    pub aucode: Option<String>,
}

/// Payload for `POST /auth/register`.
///
/// `role` is always `user` for self-registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    /// Full name.
    pub name: String,
    /// Email address (becomes the login).
    pub email: String,
    /// Phone number.
    pub phonenumber: String,
    /// Fixed to `user` for this flow.
    pub role: String,
    /// Identity document number.
    pub document: String,
    /// Chosen password.
    pub password: String,
}

impl RegisterRequest {
    /// Builds a self-registration payload with the fixed `user` role.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phonenumber: impl Into<String>,
        document: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phonenumber: phonenumber.into(),
            role: "user".to_string(),
            document: document.into(),
            password: password.into(),
        }
    }
}

/// Payload for `POST /auth/send-otp`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendOtpRequest {
    /// Email address to deliver the OTP to.
    pub email: String,
    /// What the OTP authorizes, e.g. `reset_password`.
    pub purpose: String,
}

/// Payload for `POST /auth/verify-otp`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyOtpRequest {
    /// Email the OTP was sent to.
    pub email: String,
    /// The 6-digit code.
    pub otp: String,
}

/// Payload for `POST /auth/reset-password`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetPasswordRequest {
    /// Email the reset OTP was sent to.
    pub email: String,
    /// The 6-digit code.
    pub otp: String,
    /// Replacement password.
    #[serde(rename = "newPassword")]
    pub new_password: String,
}

// ============ Plans ============

/// A top-up/SIM plan as served by `GET /plan/sinchplan`.
///
/// Everything except the plan code travels as a string on the wire; the
/// backend owns all validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    /// Server-assigned plan code.
    #[serde(rename = "plancode")]
    pub plan_code: i64,
    /// Plan name.
    #[serde(rename = "planname")]
    pub plan_name: String,
    /// Country the plan applies to.
    #[serde(default)]
    pub country: String,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Price, pre-formatted by the backend.
    #[serde(default)]
    pub price: String,
    /// Call allowance.
    #[serde(default)]
    pub call_limit: String,
    /// SMS allowance.
    #[serde(default)]
    pub sms_limit: String,
    /// Data allowance.
    #[serde(default)]
    pub data_limit: String,
    /// Validity period, e.g. `"30 days"`.
    #[serde(default)]
    pub validity: String,
    /// Numbers assigned per plan.
    #[serde(default)]
    pub number_assign: String,
}

/// Payload for `POST /plan/create`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlanRequest {
    /// Plan name.
    pub planname: String,
    /// Country the plan applies to.
    pub country: String,
    /// Free-text description.
    pub description: String,
    /// Price as entered.
    pub price: String,
    /// Call allowance.
    pub call_limit: String,
    /// SMS allowance.
    pub sms_limit: String,
    /// Data allowance.
    pub data_limit: String,
    /// Validity period.
    pub validity: String,
    /// Numbers assigned per plan. The product fixes this to `"2"`.
    pub number_assign: String,
    /// Creation marker the endpoint expects.
    pub flag: String,
}

impl Default for CreatePlanRequest {
    fn default() -> Self {
        Self {
            planname: String::new(),
            country: String::new(),
            description: String::new(),
            price: String::new(),
            call_limit: String::new(),
            sms_limit: String::new(),
            data_limit: String::new(),
            validity: String::new(),
            number_assign: "2".to_string(),
            flag: "create".to_string(),
        }
    }
}

// ============ Vendors ============

/// A vendor as served by `GET /vendor/getvendors`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vendor {
    /// Row id.
    pub id: i64,
    /// Server-assigned vendor code.
    #[serde(rename = "vendorcode")]
    pub vendor_code: String,
    /// Vendor name.
    pub vendor_name: String,
    /// Comma-separated plan list the vendor resells.
    #[serde(default)]
    pub vendor_planlist: String,
    /// Price, pre-formatted by the backend.
    #[serde(default)]
    pub price: String,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Owning user code.
    #[serde(default)]
    pub usercode: String,
    /// Creation timestamp.
    #[serde(default, with = "crate::utils::datetime")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update timestamp.
    #[serde(default, with = "crate::utils::datetime")]
    pub update_date: Option<DateTime<Utc>>,
}

/// Payload for `POST /vendor/createvendor`.
///
/// Unlike plans, the vendor endpoints take price as a number.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateVendorRequest {
    /// Vendor name.
    pub vendor_name: String,
    /// Comma-separated plan list.
    pub vendor_planlist: String,
    /// Price as a number.
    pub price: f64,
    /// Free-text description.
    pub description: String,
    /// Owning user code.
    pub usercode: String,
}

/// Payload for `POST /vendor/updatevendor/:vendorcode`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateVendorRequest {
    /// Vendor name.
    pub vendor_name: String,
    /// Comma-separated plan list.
    pub vendor_planlist: String,
    /// Price as a number.
    pub price: f64,
    /// Free-text description.
    pub description: String,
}

// ============ Profiles ============

/// A user profile row as served by `GET /profile`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Row id.
    pub id: i64,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Account code (delete key).
    #[serde(default)]
    pub aucode: String,
    /// Email address.
    #[serde(default)]
    pub email: String,
    /// Phone number.
    #[serde(default)]
    pub phone: String,
    /// Password as stored upstream. Served by this backend as-is.
    #[serde(default)]
    pub password: String,
}

// ============ Sinch Numbers ============

/// An unallocated DID number, from `GET /sinch/unallocated-numbers`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnallocatedNumber {
    /// Server-assigned number code.
    #[serde(rename = "sinchnumbercode")]
    pub number_code: i64,
    /// The DID number itself.
    #[serde(rename = "sinchnumber")]
    pub number: String,
    /// Whether the number is already allocated.
    #[serde(default)]
    pub allocated: bool,
}

/// Number-assignment listing plus the aggregate the endpoint reports with it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NumberAssignmentReport {
    /// Assignment rows.
    pub assignments: Vec<NumberAssignment>,
    /// Aggregate call allowance across the listed assignments.
    pub total_call_limit: i64,
}

/// A number-to-plan assignment, from `GET /sinch/sinchnumberplandetails`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumberAssignment {
    /// Server-assigned number code.
    #[serde(rename = "sinchnumbercode")]
    pub number_code: i64,
    /// Plan code the number is assigned to.
    #[serde(rename = "sinchplancode")]
    pub plan_code: i64,
    /// The DID number.
    #[serde(rename = "sinchnumber")]
    pub number: String,
    /// Buying price, pre-formatted by the backend.
    #[serde(rename = "buyingprice", default)]
    pub buying_price: String,
    /// Validity period of the assignment.
    #[serde(default)]
    pub validity: String,
    /// Remaining validity as a human string, e.g. `"12 days"`.
    #[serde(rename = "dayleft", default)]
    pub days_left: String,
    /// Assigned account code.
    #[serde(default)]
    pub aucode: String,
    /// Assigned user's email.
    #[serde(default)]
    pub user_email: String,
    /// Assignment timestamp.
    #[serde(rename = "createdDate", default, with = "crate::utils::datetime")]
    pub created_at: Option<DateTime<Utc>>,
}

// ============ Call Logs ============

/// Raw call event row from `GET /calllog/call-events`.
///
/// The feed is loosely shaped; every field is optional and the caller number
/// may arrive as `from_number` or `cli` depending on the trunk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallEventRecord {
    /// Owning user, when resolved.
    #[serde(default)]
    pub user: Option<String>,
    /// Call id.
    #[serde(default)]
    pub call_id: Option<String>,
    /// Caller number (primary field).
    #[serde(default)]
    pub from_number: Option<String>,
    /// Caller number (fallback field on some trunks).
    #[serde(default)]
    pub cli: Option<String>,
    /// Event name, e.g. `call.ended`.
    #[serde(default)]
    pub event: Option<String>,
    /// Call result, e.g. `completed` / `failed` / `in-progress`.
    #[serde(default)]
    pub result: Option<String>,
    /// Row creation timestamp (fallback when the payload carries none).
    #[serde(default)]
    pub created_at: Option<String>,
    /// Raw event payload from the trunk.
    #[serde(default)]
    pub raw_payload: Option<CallEventPayload>,
}

/// Subset of the trunk payload the console reads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallEventPayload {
    /// Event timestamp as reported by the trunk.
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// A normalized call log row for display and filtering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallLog {
    /// Owning user, empty when unresolved.
    pub user: String,
    /// Call id, empty when the trunk sent none.
    pub call_id: String,
    /// Caller number, preferring `from_number` over `cli`.
    pub caller_number: String,
    /// Event name.
    pub event: String,
    /// Call result.
    pub result: String,
    /// Start timestamp, trunk payload first, row timestamp as fallback.
    pub started_at: Option<String>,
}

impl From<CallEventRecord> for CallLog {
    fn from(raw: CallEventRecord) -> Self {
        let caller_number = raw.from_number.or(raw.cli).unwrap_or_default();
        let started_at = raw
            .raw_payload
            .and_then(|p| p.timestamp)
            .or(raw.created_at);
        Self {
            user: raw.user.unwrap_or_default(),
            call_id: raw.call_id.unwrap_or_default(),
            caller_number,
            event: raw.event.unwrap_or_default(),
            result: raw.result.unwrap_or_default(),
            started_at,
        }
    }
}
