//! Response envelopes.
//!
//! The backend wraps payloads in envelopes whose field names have drifted
//! across endpoints: plan, Sinch and profile endpoints answer
//! `{statusCode, data}`, vendor endpoints answer `{status, vendors}`, the
//! call-event feed answers a bare `{data}`, and mutation acks carry either
//! status field name. This module owns that drift entirely; callers see typed
//! payloads or [`ApiError`], never the raw shapes.
//!
//! A transport-level 200 with a non-200 envelope status is a logical failure.

use serde::Deserialize;

use crate::error::ApiError;
use crate::types::{CallEventRecord, LoginResponse, LoginUser, NumberAssignment, Vendor};

/// Envelope status value that signals success.
const ENVELOPE_OK: i64 = 200;

/// `{statusCode, message?, data}` — plan, Sinch and profile endpoints.
#[derive(Debug, Deserialize)]
pub struct DataEnvelope<T> {
    /// Envelope status; success is exactly 200.
    #[serde(rename = "statusCode")]
    pub status_code: Option<i64>,
    /// Server message, mostly present on failure.
    #[serde(default)]
    pub message: Option<String>,
    /// Payload, present on success.
    #[serde(default)]
    pub data: Option<T>,
}

impl<T> DataEnvelope<T> {
    /// Unwraps the payload, turning a failing envelope into an error.
    pub fn into_result(self, endpoint: &str) -> Result<T, ApiError> {
        match (self.status_code, self.data) {
            (Some(ENVELOPE_OK), Some(data)) => Ok(data),
            (Some(ENVELOPE_OK), None) => Err(ApiError::ParseError {
                endpoint: endpoint.to_string(),
                detail: "envelope reported success but carried no data".to_string(),
            }),
            (status, _) => Err(ApiError::EnvelopeFailure {
                endpoint: endpoint.to_string(),
                envelope_status: status,
                message: self.message,
            }),
        }
    }
}

/// `{statusCode, data, totalCallLimit}` — the number-assignment listing.
#[derive(Debug, Deserialize)]
pub struct AssignmentsEnvelope {
    /// Envelope status; success is exactly 200.
    #[serde(rename = "statusCode")]
    pub status_code: Option<i64>,
    /// Server message, mostly present on failure.
    #[serde(default)]
    pub message: Option<String>,
    /// Assignment rows.
    #[serde(default)]
    pub data: Option<Vec<NumberAssignment>>,
    /// Aggregate call allowance across the listed assignments.
    #[serde(rename = "totalCallLimit", default)]
    pub total_call_limit: Option<i64>,
}

impl AssignmentsEnvelope {
    /// Unwraps rows plus the aggregate call limit.
    pub fn into_result(self, endpoint: &str) -> Result<(Vec<NumberAssignment>, i64), ApiError> {
        if self.status_code == Some(ENVELOPE_OK) {
            Ok((
                self.data.unwrap_or_default(),
                self.total_call_limit.unwrap_or(0),
            ))
        } else {
            Err(ApiError::EnvelopeFailure {
                endpoint: endpoint.to_string(),
                envelope_status: self.status_code,
                message: self.message,
            })
        }
    }
}

/// `{status, vendors}` — the vendor listing drifted to its own field names.
#[derive(Debug, Deserialize)]
pub struct VendorsEnvelope {
    /// Envelope status under the drifted name; success is exactly 200.
    pub status: Option<i64>,
    /// Server message, mostly present on failure.
    #[serde(default)]
    pub message: Option<String>,
    /// Vendor rows under the drifted name.
    #[serde(default)]
    pub vendors: Option<Vec<Vendor>>,
}

impl VendorsEnvelope {
    /// Unwraps the vendor rows, turning a failing envelope into an error.
    pub fn into_result(self, endpoint: &str) -> Result<Vec<Vendor>, ApiError> {
        if self.status == Some(ENVELOPE_OK) {
            Ok(self.vendors.unwrap_or_default())
        } else {
            Err(ApiError::EnvelopeFailure {
                endpoint: endpoint.to_string(),
                envelope_status: self.status,
                message: self.message,
            })
        }
    }
}

/// `{data}` — the call-event feed has no status field at all.
#[derive(Debug, Deserialize)]
pub struct CallEventsEnvelope {
    /// Event rows; an absent field means an empty feed.
    #[serde(default)]
    pub data: Option<Vec<CallEventRecord>>,
}

impl CallEventsEnvelope {
    /// Unwraps the rows; a missing `data` field is an empty feed, not an error.
    pub fn into_rows(self) -> Vec<CallEventRecord> {
        self.data.unwrap_or_default()
    }
}

/// Login response body: a token on success, a bare message on failure.
///
/// The login endpoint can answer transport 200 without a token (e.g. a
/// disabled account); that is a failure regardless of HTTP status.
#[derive(Debug, Deserialize)]
pub struct LoginEnvelope {
    /// Bearer token, present on success.
    #[serde(default)]
    pub token: Option<String>,
    /// User record, when the backend resolves one.
    #[serde(default)]
    pub user: Option<LoginUser>,
    /// Account code, for accounts without a full user record.
    #[serde(default)]
    pub aucode: Option<String>,
    /// Failure message when no token was issued.
    #[serde(default)]
    pub message: Option<String>,
}

impl LoginEnvelope {
    /// Requires a non-empty token; anything else is a logical failure.
    pub fn into_result(self, endpoint: &str) -> Result<LoginResponse, ApiError> {
        match self.token {
            Some(token) if !token.trim().is_empty() => Ok(LoginResponse {
                token,
                user: self.user,
                aucode: self.aucode,
            }),
            _ => Err(ApiError::EnvelopeFailure {
                endpoint: endpoint.to_string(),
                envelope_status: None,
                message: self.message,
            }),
        }
    }
}

/// Mutation acknowledgement carrying either status field name.
#[derive(Debug, Deserialize)]
pub struct AckEnvelope {
    /// Status under the common name.
    #[serde(rename = "statusCode")]
    pub status_code: Option<i64>,
    /// Status under the vendor-endpoint name.
    #[serde(default)]
    pub status: Option<i64>,
    /// Server message, mostly present on failure.
    #[serde(default)]
    pub message: Option<String>,
}

impl AckEnvelope {
    /// Succeeds only on an explicit 200 under either field name.
    pub fn into_result(self, endpoint: &str) -> Result<(), ApiError> {
        let status = self.status_code.or(self.status);
        if status == Some(ENVELOPE_OK) {
            Ok(())
        } else {
            Err(ApiError::EnvelopeFailure {
                endpoint: endpoint.to_string(),
                envelope_status: status,
                message: self.message,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Plan;

    #[test]
    fn data_envelope_unwraps_success() {
        let json = r#"{"statusCode": 200, "data": [{"plancode": 1, "planname": "A"}]}"#;
        let env: DataEnvelope<Vec<Plan>> = serde_json::from_str(json).unwrap();
        let plans = env.into_result("plan/sinchplan").unwrap();
        assert_eq!(plans.len(), 1);
        assert_eq!(plans[0].plan_name, "A");
    }

    #[test]
    fn data_envelope_http_ok_logical_failure() {
        let json = r#"{"statusCode": 500, "message": "db down", "data": null}"#;
        let env: DataEnvelope<Vec<Plan>> = serde_json::from_str(json).unwrap();
        let err = env.into_result("plan/sinchplan").unwrap_err();
        match err {
            ApiError::EnvelopeFailure {
                envelope_status,
                message,
                ..
            } => {
                assert_eq!(envelope_status, Some(500));
                assert_eq!(message.as_deref(), Some("db down"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn data_envelope_missing_status_is_failure() {
        let json = r#"{"data": []}"#;
        let env: DataEnvelope<Vec<Plan>> = serde_json::from_str(json).unwrap();
        assert!(matches!(
            env.into_result("plan/sinchplan"),
            Err(ApiError::EnvelopeFailure {
                envelope_status: None,
                ..
            })
        ));
    }

    #[test]
    fn data_envelope_success_without_data_is_parse_error() {
        let json = r#"{"statusCode": 200}"#;
        let env: DataEnvelope<Vec<Plan>> = serde_json::from_str(json).unwrap();
        assert!(matches!(
            env.into_result("plan/sinchplan"),
            Err(ApiError::ParseError { .. })
        ));
    }

    #[test]
    fn vendors_envelope_uses_drifted_names() {
        let json = r#"{"status": 200, "vendors": [
            {"id": 1, "vendorcode": "V1", "vendor_name": "Acme"}
        ]}"#;
        let env: VendorsEnvelope = serde_json::from_str(json).unwrap();
        let vendors = env.into_result("vendor/getvendors").unwrap();
        assert_eq!(vendors[0].vendor_name, "Acme");
    }

    #[test]
    fn vendors_envelope_failure() {
        let json = r#"{"status": 403, "message": "nope"}"#;
        let env: VendorsEnvelope = serde_json::from_str(json).unwrap();
        assert!(matches!(
            env.into_result("vendor/getvendors"),
            Err(ApiError::EnvelopeFailure {
                envelope_status: Some(403),
                ..
            })
        ));
    }

    #[test]
    fn assignments_envelope_carries_total_call_limit() {
        let json = r#"{"statusCode": 200, "data": [], "totalCallLimit": 750}"#;
        let env: AssignmentsEnvelope = serde_json::from_str(json).unwrap();
        let (rows, total) = env.into_result("sinch/sinchnumberplandetails").unwrap();
        assert!(rows.is_empty());
        assert_eq!(total, 750);
    }

    #[test]
    fn call_events_envelope_tolerates_missing_data() {
        let env: CallEventsEnvelope = serde_json::from_str("{}").unwrap();
        assert!(env.into_rows().is_empty());
    }

    #[test]
    fn login_envelope_with_token_succeeds() {
        let json = r#"{"token": "abc.def", "user": {"name": "Ops"}, "aucode": "AU1"}"#;
        let env: LoginEnvelope = serde_json::from_str(json).unwrap();
        let resp = env.into_result("auth/login").unwrap();
        assert_eq!(resp.token, "abc.def");
        assert_eq!(resp.aucode.as_deref(), Some("AU1"));
    }

    #[test]
    fn login_envelope_without_token_fails() {
        let json = r#"{"message": "Account disabled"}"#;
        let env: LoginEnvelope = serde_json::from_str(json).unwrap();
        let err = env.into_result("auth/login").unwrap_err();
        assert!(matches!(
            err,
            ApiError::EnvelopeFailure {
                message: Some(_),
                ..
            }
        ));
    }

    #[test]
    fn login_envelope_blank_token_fails() {
        let json = r#"{"token": "  "}"#;
        let env: LoginEnvelope = serde_json::from_str(json).unwrap();
        assert!(env.into_result("auth/login").is_err());
    }

    #[test]
    fn ack_envelope_accepts_status_code_name() {
        let env: AckEnvelope = serde_json::from_str(r#"{"statusCode": 200}"#).unwrap();
        assert!(env.into_result("plan/create").is_ok());
    }

    #[test]
    fn ack_envelope_accepts_status_name() {
        let env: AckEnvelope = serde_json::from_str(r#"{"status": 200}"#).unwrap();
        assert!(env.into_result("vendor/createvendor").is_ok());
    }

    #[test]
    fn ack_envelope_without_explicit_ok_fails() {
        let env: AckEnvelope = serde_json::from_str(r#"{"message": "created"}"#).unwrap();
        assert!(matches!(
            env.into_result("plan/create"),
            Err(ApiError::EnvelopeFailure {
                envelope_status: None,
                ..
            })
        ));
    }

    #[test]
    fn ack_envelope_non_200_fails_with_message() {
        let env: AckEnvelope =
            serde_json::from_str(r#"{"statusCode": 400, "message": "Plan exists"}"#).unwrap();
        let err = env.into_result("plan/create").unwrap_err();
        assert_eq!(err.user_message(), "Plan exists");
    }
}
