//! Authentication flows
//!
//! Login, self-registration, the OTP password-reset sequence, logout and
//! startup session restore. Every successful login goes through the session
//! manager so the rest of the system observes it.

use std::sync::Arc;

use dialer_console_api::{
    ApiError, LoginRequest, RegisterRequest, ResetPasswordRequest, SendOtpRequest,
    VerifyOtpRequest,
};

use crate::error::{CoreError, CoreResult};
use crate::services::ServiceContext;
use crate::types::Session;
use crate::utils::validation;

/// Seconds a user must wait before requesting another OTP.
pub const OTP_RESEND_COOLDOWN_SECS: u64 = 60;

/// Purpose value the backend expects on password-reset OTPs.
const RESET_PASSWORD_PURPOSE: &str = "reset_password";

/// Self-registration form as entered
///
/// The confirmation field never leaves the client; `role` is fixed to `user`
/// by the request builder.
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub document: String,
    pub password: String,
    pub confirm_password: String,
}

/// Authentication service
pub struct AuthService {
    ctx: Arc<ServiceContext>,
}

impl AuthService {
    /// Creates an authentication service instance
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// Logs in and establishes the session.
    pub async fn login(&self, email: &str, password: &str) -> CoreResult<Session> {
        // 1. Validate the form
        validation::required(email, "Email")?;
        validation::required(password, "Password")?;

        // 2. Exchange credentials for a token
        let request = LoginRequest {
            email: email.trim().to_string(),
            password: password.to_string(),
        };
        let response = match self.ctx.gateway.login(&request).await {
            Ok(response) => response,
            Err(err) => return Err(map_login_error(err)),
        };

        // 3. Build and persist the session
        let session = Session::from_login(&response, email.trim());
        self.ctx.sessions.establish(session.clone()).await?;
        log::info!("Login succeeded for {}", session.display_name());

        Ok(session)
    }

    /// Registers a new account. The session is untouched; the user logs in
    /// afterwards.
    pub async fn register(&self, form: &RegistrationForm) -> CoreResult<()> {
        // 1. Validate the form
        let fields = [
            &form.name,
            &form.email,
            &form.phone,
            &form.document,
            &form.password,
            &form.confirm_password,
        ];
        if fields.iter().any(|field| field.trim().is_empty()) {
            return Err(CoreError::ValidationError(
                "All fields are required".to_string(),
            ));
        }
        validation::require_matching_passwords(&form.password, &form.confirm_password)?;

        // 2. Submit
        let request = RegisterRequest::new(
            form.name.trim(),
            form.email.trim(),
            form.phone.trim(),
            form.document.trim(),
            form.password.clone(),
        );
        match self.ctx.gateway.register(&request).await {
            Ok(()) => Ok(()),
            Err(err) => Err(self.ctx.handle_api_error(err).await),
        }
    }

    /// Requests a password-reset OTP for `email`.
    pub async fn send_reset_otp(&self, email: &str) -> CoreResult<()> {
        validation::require_email(email)?;

        let request = SendOtpRequest {
            email: email.trim().to_string(),
            purpose: RESET_PASSWORD_PURPOSE.to_string(),
        };
        match self.ctx.gateway.send_otp(&request).await {
            Ok(()) => Ok(()),
            Err(err) => Err(self.ctx.handle_api_error(err).await),
        }
    }

    /// Checks a reset OTP before letting the user pick a new password.
    pub async fn verify_reset_otp(&self, email: &str, otp: &str) -> CoreResult<()> {
        validation::require_otp(otp)?;

        let request = VerifyOtpRequest {
            email: email.trim().to_string(),
            otp: otp.trim().to_string(),
        };
        match self.ctx.gateway.verify_otp(&request).await {
            Ok(()) => Ok(()),
            Err(err) => Err(self.ctx.handle_api_error(err).await),
        }
    }

    /// Completes the reset with a verified OTP and a new password.
    pub async fn reset_password(
        &self,
        email: &str,
        otp: &str,
        new_password: &str,
        confirm_password: &str,
    ) -> CoreResult<()> {
        // 1. Validate the form
        validation::require_otp(otp)?;
        validation::require_new_password(new_password)?;
        validation::require_matching_passwords(new_password, confirm_password)?;

        // 2. Submit
        let request = ResetPasswordRequest {
            email: email.trim().to_string(),
            otp: otp.trim().to_string(),
            new_password: new_password.to_string(),
        };
        match self.ctx.gateway.reset_password(&request).await {
            Ok(()) => Ok(()),
            Err(err) => Err(self.ctx.handle_api_error(err).await),
        }
    }

    /// Logs out: drops the session everywhere.
    pub async fn logout(&self) -> CoreResult<()> {
        self.ctx.sessions.purge().await?;
        log::info!("Logged out");
        Ok(())
    }

    /// Restores the persisted session at startup, if any.
    pub async fn restore(&self) -> CoreResult<Option<Session>> {
        self.ctx.sessions.restore().await
    }
}

/// Login failures surface the backend's message when it sent one; a bare
/// rejection gets fixed copy. Connectivity failures keep their own class.
fn map_login_error(err: ApiError) -> CoreError {
    match err {
        ApiError::Unauthorized { raw_message, .. }
        | ApiError::PermissionDenied { raw_message, .. }
        | ApiError::NotFound { raw_message, .. } => CoreError::LoginRejected {
            message: raw_message,
        },
        ApiError::RequestFailed {
            status, message, ..
        } if status < 500 => CoreError::LoginRejected { message },
        ApiError::EnvelopeFailure { message, .. } => CoreError::LoginRejected { message },
        other => CoreError::Api(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{create_test_context, registration_form, test_stored_session};
    use crate::traits::SessionStore;

    fn service(ctx: Arc<ServiceContext>) -> AuthService {
        AuthService::new(ctx)
    }

    // ===== Login =====

    #[tokio::test]
    async fn login_establishes_session() {
        let (ctx, store, _) = create_test_context();
        let svc = service(ctx.clone());

        let session = svc.login("ops@example.com", "secret").await.unwrap();

        assert_eq!(session.role, "admin");
        assert!(ctx.sessions.is_authenticated().await);
        assert!(store.stored().await.unwrap().authenticated);
    }

    #[tokio::test]
    async fn login_requires_email() {
        let (ctx, _, gateway) = create_test_context();
        let svc = service(ctx);

        let err = svc.login("   ", "secret").await.unwrap_err();

        assert_eq!(err.user_message(), "Email is required");
        assert_eq!(gateway.call_count().await, 0, "no request may be issued");
    }

    #[tokio::test]
    async fn login_requires_password() {
        let (ctx, _, gateway) = create_test_context();
        let svc = service(ctx);

        let err = svc.login("ops@example.com", "").await.unwrap_err();

        assert_eq!(err.user_message(), "Password is required");
        assert_eq!(gateway.call_count().await, 0);
    }

    #[tokio::test]
    async fn rejected_login_uses_fixed_copy() {
        let (ctx, _, gateway) = create_test_context();
        gateway
            .set_login_error(ApiError::Unauthorized {
                endpoint: "auth/login".to_string(),
                raw_message: None,
            })
            .await;
        let svc = service(ctx.clone());

        let err = svc.login("ops@example.com", "wrong").await.unwrap_err();

        assert!(matches!(err, CoreError::LoginRejected { .. }));
        assert_eq!(
            err.user_message(),
            "Login failed. Please check your credentials."
        );
        assert!(!ctx.sessions.is_authenticated().await);
    }

    #[tokio::test]
    async fn rejected_login_passes_server_message_through() {
        let (ctx, _, gateway) = create_test_context();
        gateway
            .set_login_error(ApiError::RequestFailed {
                endpoint: "auth/login".to_string(),
                status: 404,
                message: Some("User does not exist".to_string()),
            })
            .await;
        let svc = service(ctx);

        let err = svc.login("ops@example.com", "pw").await.unwrap_err();

        assert_eq!(err.user_message(), "User does not exist");
    }

    #[tokio::test]
    async fn login_network_failure_keeps_its_class() {
        let (ctx, _, gateway) = create_test_context();
        gateway
            .set_login_error(ApiError::NetworkError {
                endpoint: "auth/login".to_string(),
                detail: "connection refused".to_string(),
            })
            .await;
        let svc = service(ctx);

        let err = svc.login("ops@example.com", "pw").await.unwrap_err();

        assert!(matches!(err, CoreError::Api(ApiError::NetworkError { .. })));
    }

    // ===== Registration =====

    #[tokio::test]
    async fn register_submits_with_fixed_role() {
        let (ctx, _, gateway) = create_test_context();
        let svc = service(ctx);

        svc.register(&registration_form()).await.unwrap();

        let sent = gateway.registrations.read().await;
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].role, "user");
    }

    #[tokio::test]
    async fn register_requires_every_field() {
        let (ctx, _, gateway) = create_test_context();
        let svc = service(ctx);
        let mut form = registration_form();
        form.document = String::new();

        let err = svc.register(&form).await.unwrap_err();

        assert_eq!(err.user_message(), "All fields are required");
        assert_eq!(gateway.call_count().await, 0);
    }

    #[tokio::test]
    async fn register_requires_matching_passwords() {
        let (ctx, _, gateway) = create_test_context();
        let svc = service(ctx);
        let mut form = registration_form();
        form.confirm_password = "different1".to_string();

        let err = svc.register(&form).await.unwrap_err();

        assert_eq!(err.user_message(), "Passwords do not match");
        assert_eq!(gateway.call_count().await, 0);
    }

    // ===== Password reset =====

    #[tokio::test]
    async fn send_otp_requires_email() {
        let (ctx, _, gateway) = create_test_context();
        let svc = service(ctx);

        let err = svc.send_reset_otp("").await.unwrap_err();

        assert_eq!(err.user_message(), "Please enter a valid email address");
        assert_eq!(gateway.call_count().await, 0);
    }

    #[tokio::test]
    async fn send_otp_carries_reset_purpose() {
        let (ctx, _, gateway) = create_test_context();
        let svc = service(ctx);

        svc.send_reset_otp("ops@example.com").await.unwrap();

        let sent = gateway.otp_requests.read().await;
        assert_eq!(sent[0].purpose, "reset_password");
    }

    #[tokio::test]
    async fn verify_rejects_short_otp() {
        let (ctx, _, gateway) = create_test_context();
        let svc = service(ctx);

        let err = svc.verify_reset_otp("ops@example.com", "123").await.unwrap_err();

        assert_eq!(err.user_message(), "Please enter a complete 6-digit OTP");
        assert_eq!(gateway.call_count().await, 0);
    }

    #[tokio::test]
    async fn reset_password_enforces_length_then_match() {
        let (ctx, _, _) = create_test_context();
        let svc = service(ctx);

        let err = svc
            .reset_password("ops@example.com", "123456", "short", "short")
            .await
            .unwrap_err();
        assert_eq!(
            err.user_message(),
            "Password must be at least 8 characters long"
        );

        let err = svc
            .reset_password("ops@example.com", "123456", "longenough", "different")
            .await
            .unwrap_err();
        assert_eq!(err.user_message(), "Passwords do not match");
    }

    #[tokio::test]
    async fn reset_password_submits() {
        let (ctx, _, gateway) = create_test_context();
        let svc = service(ctx);

        svc.reset_password("ops@example.com", "123456", "newsecret1", "newsecret1")
            .await
            .unwrap();

        let sent = gateway.password_resets.read().await;
        assert_eq!(sent[0].new_password, "newsecret1");
        assert_eq!(sent[0].otp, "123456");
    }

    // ===== Logout / restore =====

    #[tokio::test]
    async fn logout_purges_everywhere() {
        let (ctx, store, _) = create_test_context();
        let svc = service(ctx.clone());
        svc.login("ops@example.com", "secret").await.unwrap();

        svc.logout().await.unwrap();

        assert!(!ctx.sessions.is_authenticated().await);
        assert!(store.stored().await.is_none());
    }

    #[tokio::test]
    async fn restore_skips_login_when_record_present() {
        let (ctx, store, _) = create_test_context();
        store.save(&test_stored_session()).await.unwrap();
        let svc = service(ctx.clone());

        let restored = svc.restore().await.unwrap();

        assert!(restored.is_some());
        assert!(ctx.sessions.is_authenticated().await);
    }
}
