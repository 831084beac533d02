//! Test helper module
//!
//! Mock implementations and factory helpers shared by the unit tests.

use std::sync::Arc;

use async_trait::async_trait;
use dialer_console_api::{
    AccessToken, ApiError, CallLog, CreatePlanRequest, CreateVendorRequest, DialerGateway,
    LoginRequest, LoginResponse, LoginUser, NumberAssignment, NumberAssignmentReport, Plan,
    Profile, RegisterRequest, ResetPasswordRequest, SendOtpRequest, UnallocatedNumber,
    UpdateVendorRequest, Vendor, VerifyOtpRequest,
};
use tokio::sync::RwLock;

use crate::error::{CoreError, CoreResult};
use crate::services::ServiceContext;
use crate::traits::SessionStore;
use crate::types::{Session, SessionUser, StoredSession, UiPrefs};

// ===== MockSessionStore =====

pub struct MockSessionStore {
    session: RwLock<Option<StoredSession>>,
    prefs: RwLock<UiPrefs>,
    /// If Some, save returns this error (for persistence-failure paths)
    save_error: RwLock<Option<String>>,
    /// If Some, clear returns this error (for purge-failure paths)
    clear_error: RwLock<Option<String>>,
}

impl MockSessionStore {
    pub fn new() -> Self {
        Self {
            session: RwLock::new(None),
            prefs: RwLock::new(UiPrefs::default()),
            save_error: RwLock::new(None),
            clear_error: RwLock::new(None),
        }
    }

    pub async fn set_save_error(&self, err: Option<String>) {
        *self.save_error.write().await = err;
    }

    pub async fn set_clear_error(&self, err: Option<String>) {
        *self.clear_error.write().await = err;
    }

    /// The record as persisted, bypassing the trait.
    pub async fn stored(&self) -> Option<StoredSession> {
        self.session.read().await.clone()
    }
}

#[async_trait]
impl SessionStore for MockSessionStore {
    async fn load(&self) -> CoreResult<Option<StoredSession>> {
        Ok(self.session.read().await.clone())
    }

    async fn save(&self, session: &StoredSession) -> CoreResult<()> {
        if let Some(ref msg) = *self.save_error.read().await {
            return Err(CoreError::StorageError(msg.clone()));
        }
        *self.session.write().await = Some(session.clone());
        Ok(())
    }

    async fn clear(&self) -> CoreResult<()> {
        if let Some(ref msg) = *self.clear_error.read().await {
            return Err(CoreError::StorageError(msg.clone()));
        }
        *self.session.write().await = None;
        Ok(())
    }

    async fn load_prefs(&self) -> CoreResult<UiPrefs> {
        Ok(self.prefs.read().await.clone())
    }

    async fn save_prefs(&self, prefs: &UiPrefs) -> CoreResult<()> {
        *self.prefs.write().await = prefs.clone();
        Ok(())
    }
}

// ===== MockGateway =====

/// In-memory gateway double. Reads serve seeded rows, writes are captured in
/// the public vectors, and `set_failure` makes every subsequent call fail.
pub struct MockGateway {
    plans: RwLock<Vec<Plan>>,
    vendors: RwLock<Vec<Vendor>>,
    profiles: RwLock<Vec<Profile>>,
    numbers: RwLock<Vec<UnallocatedNumber>>,
    report: RwLock<NumberAssignmentReport>,
    call_logs: RwLock<Vec<CallLog>>,
    login_error: RwLock<Option<ApiError>>,
    failure: RwLock<Option<ApiError>>,
    calls: RwLock<Vec<String>>,
    pub registrations: RwLock<Vec<RegisterRequest>>,
    pub otp_requests: RwLock<Vec<SendOtpRequest>>,
    pub otp_verifications: RwLock<Vec<VerifyOtpRequest>>,
    pub password_resets: RwLock<Vec<ResetPasswordRequest>>,
    pub created_plans: RwLock<Vec<CreatePlanRequest>>,
    pub updated_plans: RwLock<Vec<Plan>>,
    pub created_vendors: RwLock<Vec<CreateVendorRequest>>,
    pub updated_vendors: RwLock<Vec<(String, UpdateVendorRequest)>>,
    pub updated_profiles: RwLock<Vec<Profile>>,
    pub deleted_profiles: RwLock<Vec<String>>,
}

impl MockGateway {
    pub fn new() -> Self {
        Self {
            plans: RwLock::new(Vec::new()),
            vendors: RwLock::new(Vec::new()),
            profiles: RwLock::new(Vec::new()),
            numbers: RwLock::new(Vec::new()),
            report: RwLock::new(NumberAssignmentReport::default()),
            call_logs: RwLock::new(Vec::new()),
            login_error: RwLock::new(None),
            failure: RwLock::new(None),
            calls: RwLock::new(Vec::new()),
            registrations: RwLock::new(Vec::new()),
            otp_requests: RwLock::new(Vec::new()),
            otp_verifications: RwLock::new(Vec::new()),
            password_resets: RwLock::new(Vec::new()),
            created_plans: RwLock::new(Vec::new()),
            updated_plans: RwLock::new(Vec::new()),
            created_vendors: RwLock::new(Vec::new()),
            updated_vendors: RwLock::new(Vec::new()),
            updated_profiles: RwLock::new(Vec::new()),
            deleted_profiles: RwLock::new(Vec::new()),
        }
    }

    pub async fn set_plans(&self, rows: Vec<Plan>) {
        *self.plans.write().await = rows;
    }

    pub async fn set_vendors(&self, rows: Vec<Vendor>) {
        *self.vendors.write().await = rows;
    }

    pub async fn set_profiles(&self, rows: Vec<Profile>) {
        *self.profiles.write().await = rows;
    }

    pub async fn set_numbers(&self, rows: Vec<UnallocatedNumber>) {
        *self.numbers.write().await = rows;
    }

    pub async fn set_report(&self, report: NumberAssignmentReport) {
        *self.report.write().await = report;
    }

    pub async fn set_call_logs(&self, rows: Vec<CallLog>) {
        *self.call_logs.write().await = rows;
    }

    /// Makes login fail with `err`; other endpoints are unaffected.
    pub async fn set_login_error(&self, err: ApiError) {
        *self.login_error.write().await = Some(err);
    }

    /// Makes every authenticated call fail with `err` until reset.
    pub async fn set_failure(&self, err: ApiError) {
        *self.failure.write().await = Some(err);
    }

    /// How many gateway methods have been invoked.
    pub async fn call_count(&self) -> usize {
        self.calls.read().await.len()
    }

    async fn record(&self, method: &str) -> Result<(), ApiError> {
        self.calls.write().await.push(method.to_string());
        match &*self.failure.read().await {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl DialerGateway for MockGateway {
    async fn login(&self, req: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.calls.write().await.push("login".to_string());
        if let Some(err) = &*self.login_error.read().await {
            return Err(err.clone());
        }
        Ok(LoginResponse {
            token: "test-token-12345".to_string(),
            user: Some(LoginUser {
                name: Some("Test Admin".to_string()),
                email: Some(req.email.clone()),
                aucode: Some("AU1001".to_string()),
            }),
            aucode: None,
        })
    }

    async fn register(&self, req: &RegisterRequest) -> Result<(), ApiError> {
        self.record("register").await?;
        self.registrations.write().await.push(req.clone());
        Ok(())
    }

    async fn send_otp(&self, req: &SendOtpRequest) -> Result<(), ApiError> {
        self.record("send_otp").await?;
        self.otp_requests.write().await.push(req.clone());
        Ok(())
    }

    async fn verify_otp(&self, req: &VerifyOtpRequest) -> Result<(), ApiError> {
        self.record("verify_otp").await?;
        self.otp_verifications.write().await.push(req.clone());
        Ok(())
    }

    async fn reset_password(&self, req: &ResetPasswordRequest) -> Result<(), ApiError> {
        self.record("reset_password").await?;
        self.password_resets.write().await.push(req.clone());
        Ok(())
    }

    async fn list_plans(&self, _token: &AccessToken) -> Result<Vec<Plan>, ApiError> {
        self.record("list_plans").await?;
        Ok(self.plans.read().await.clone())
    }

    async fn create_plan(
        &self,
        _token: &AccessToken,
        _role: &str,
        req: &CreatePlanRequest,
    ) -> Result<(), ApiError> {
        self.record("create_plan").await?;
        self.created_plans.write().await.push(req.clone());
        Ok(())
    }

    async fn update_plan(
        &self,
        _token: &AccessToken,
        _role: &str,
        plan: &Plan,
    ) -> Result<(), ApiError> {
        self.record("update_plan").await?;
        self.updated_plans.write().await.push(plan.clone());
        Ok(())
    }

    async fn list_vendors(&self, _token: &AccessToken) -> Result<Vec<Vendor>, ApiError> {
        self.record("list_vendors").await?;
        Ok(self.vendors.read().await.clone())
    }

    async fn create_vendor(
        &self,
        _token: &AccessToken,
        _role: &str,
        req: &CreateVendorRequest,
    ) -> Result<(), ApiError> {
        self.record("create_vendor").await?;
        self.created_vendors.write().await.push(req.clone());
        Ok(())
    }

    async fn update_vendor(
        &self,
        _token: &AccessToken,
        _role: &str,
        vendor_code: &str,
        req: &UpdateVendorRequest,
    ) -> Result<(), ApiError> {
        self.record("update_vendor").await?;
        self.updated_vendors
            .write()
            .await
            .push((vendor_code.to_string(), req.clone()));
        Ok(())
    }

    async fn list_profiles(&self, _token: &AccessToken) -> Result<Vec<Profile>, ApiError> {
        self.record("list_profiles").await?;
        Ok(self.profiles.read().await.clone())
    }

    async fn update_profile(
        &self,
        _token: &AccessToken,
        profile: &Profile,
    ) -> Result<(), ApiError> {
        self.record("update_profile").await?;
        self.updated_profiles.write().await.push(profile.clone());
        Ok(())
    }

    async fn delete_profile(&self, _token: &AccessToken, aucode: &str) -> Result<(), ApiError> {
        self.record("delete_profile").await?;
        self.deleted_profiles.write().await.push(aucode.to_string());
        Ok(())
    }

    async fn unallocated_numbers(
        &self,
        _token: &AccessToken,
    ) -> Result<Vec<UnallocatedNumber>, ApiError> {
        self.record("unallocated_numbers").await?;
        Ok(self.numbers.read().await.clone())
    }

    async fn number_assignments(
        &self,
        _token: &AccessToken,
    ) -> Result<NumberAssignmentReport, ApiError> {
        self.record("number_assignments").await?;
        Ok(self.report.read().await.clone())
    }

    async fn call_events(&self, _token: &AccessToken) -> Result<Vec<CallLog>, ApiError> {
        self.record("call_events").await?;
        Ok(self.call_logs.read().await.clone())
    }
}

// ===== Factories =====

/// A live session as produced by a successful login.
pub fn test_session() -> Session {
    Session {
        token: AccessToken::new("test-token-12345"),
        user: SessionUser {
            name: Some("Test Admin".to_string()),
            email: Some("ops@example.com".to_string()),
            aucode: Some("AU1001".to_string()),
        },
        role: "admin".to_string(),
    }
}

/// The matching on-disk record.
pub fn test_stored_session() -> StoredSession {
    StoredSession::from_session(&test_session())
}

/// A registration form with every field filled and matching passwords.
pub fn registration_form() -> crate::services::RegistrationForm {
    crate::services::RegistrationForm {
        name: "Test User".to_string(),
        email: "new@example.com".to_string(),
        phone: "+14155550123".to_string(),
        document: "DOC-4521".to_string(),
        password: "secret123".to_string(),
        confirm_password: "secret123".to_string(),
    }
}

pub fn sample_plan(code: i64, name: &str) -> Plan {
    Plan {
        plan_code: code,
        plan_name: name.to_string(),
        country: "US".to_string(),
        description: "Monthly bundle".to_string(),
        price: "10".to_string(),
        call_limit: "100".to_string(),
        sms_limit: "50".to_string(),
        data_limit: "2GB".to_string(),
        validity: "30 days".to_string(),
        number_assign: "2".to_string(),
    }
}

pub fn sample_vendor(code: &str, name: &str) -> Vendor {
    Vendor {
        id: 1,
        vendor_code: code.to_string(),
        vendor_name: name.to_string(),
        vendor_planlist: "Starter,Lite".to_string(),
        price: "12.50".to_string(),
        description: "Reseller".to_string(),
        usercode: "AU1001".to_string(),
        created_at: None,
        update_date: None,
    }
}

pub fn sample_profile(aucode: &str, name: &str) -> Profile {
    Profile {
        id: 7,
        name: name.to_string(),
        aucode: aucode.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        phone: "+14155550199".to_string(),
        password: "secret".to_string(),
    }
}

pub fn sample_number(code: i64, number: &str) -> UnallocatedNumber {
    UnallocatedNumber {
        number_code: code,
        number: number.to_string(),
        allocated: false,
    }
}

pub fn sample_assignment(number: &str, days_left: &str) -> NumberAssignment {
    NumberAssignment {
        number_code: 1,
        plan_code: 2,
        number: number.to_string(),
        buying_price: "1.00".to_string(),
        validity: "30 days".to_string(),
        days_left: days_left.to_string(),
        aucode: "AU1001".to_string(),
        user_email: "ops@example.com".to_string(),
        created_at: None,
    }
}

pub fn sample_call_log(call_id: &str, result: &str) -> CallLog {
    CallLog {
        user: "ops".to_string(),
        call_id: call_id.to_string(),
        caller_number: "+14155550100".to_string(),
        event: "call.ended".to_string(),
        result: result.to_string(),
        started_at: Some("2025-07-01 10:00:00".to_string()),
    }
}

/// Builds a `ServiceContext` over fresh mocks, no session established.
pub fn create_test_context() -> (Arc<ServiceContext>, Arc<MockSessionStore>, Arc<MockGateway>) {
    let store = Arc::new(MockSessionStore::new());
    let gateway = Arc::new(MockGateway::new());
    let ctx = Arc::new(ServiceContext::new(store.clone(), gateway.clone()));
    (ctx, store, gateway)
}

/// Same, with [`test_session`] already established and persisted.
pub async fn create_authed_context() -> (Arc<ServiceContext>, Arc<MockSessionStore>, Arc<MockGateway>)
{
    let (ctx, store, gateway) = create_test_context();
    ctx.sessions
        .establish(test_session())
        .await
        .expect("mock store cannot fail");
    (ctx, store, gateway)
}
