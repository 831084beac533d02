//! Business logic service layer

mod auth_service;
mod call_log_service;
mod number_service;
mod plan_service;
mod profile_service;
mod session_manager;
mod vendor_service;

pub use auth_service::{AuthService, OTP_RESEND_COOLDOWN_SECS, RegistrationForm};
pub use call_log_service::CallLogService;
pub use number_service::NumberService;
pub use plan_service::PlanService;
pub use profile_service::ProfileService;
pub use session_manager::{SessionEpoch, SessionManager};
pub use vendor_service::{VendorForm, VendorService};

use std::sync::Arc;

use dialer_console_api::{ApiError, DialerGateway};

use crate::error::{CoreError, CoreResult};
use crate::traits::SessionStore;
use crate::types::Session;

/// Service context - holds all dependencies
///
/// The platform layer creates this context and injects its storage
/// implementation; every service borrows it through an `Arc`.
pub struct ServiceContext {
    /// Durable session storage
    pub session_store: Arc<dyn SessionStore>,
    /// Remote API gateway
    pub gateway: Arc<dyn DialerGateway>,
    /// Single authority over the current session
    pub sessions: Arc<SessionManager>,
}

impl ServiceContext {
    /// Creates the service context
    #[must_use]
    pub fn new(session_store: Arc<dyn SessionStore>, gateway: Arc<dyn DialerGateway>) -> Self {
        let sessions = Arc::new(SessionManager::new(session_store.clone()));
        Self {
            session_store,
            gateway,
            sessions,
        }
    }

    /// Auth guard: every protected operation calls this before touching the
    /// network. Refuses with [`CoreError::AuthenticationRequired`] when no
    /// session is cached, so no authenticated request is ever issued without
    /// a token.
    pub async fn ensure_authorized(&self) -> CoreResult<Session> {
        self.sessions
            .current()
            .await
            .ok_or(CoreError::AuthenticationRequired)
    }

    /// Maps an API error into the core taxonomy, purging the session when the
    /// backend reports the token expired.
    pub async fn handle_api_error(&self, err: ApiError) -> CoreError {
        if err.is_auth_expired() && self.sessions.is_authenticated().await {
            if let Err(purge_err) = self.sessions.purge().await {
                log::error!("Failed to purge expired session: {purge_err}");
            } else {
                log::warn!("Session purged after authentication expiry: {err}");
            }
        }
        CoreError::Api(err)
    }
}
