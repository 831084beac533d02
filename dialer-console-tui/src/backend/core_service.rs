//! Bridge between the synchronous event loop and the async services
//!
//! [`CoreService`] owns the tokio runtime. Every operation is one spawned
//! task that reports a single completion event over an unbounded channel;
//! the main loop drains that channel every tick. There is no cancellation:
//! a screen that navigates away simply ignores a late result.

use std::future::Future;
use std::sync::Arc;

use anyhow::Context;
use tokio::runtime::Runtime;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::sync::watch;

use dialer_console_api::{CreatePlanRequest, DialerClient, DialerGateway, Plan, Profile};
use dialer_console_core::error::{CoreError, CoreResult};
use dialer_console_core::services::{
    AuthService, CallLogService, NumberService, PlanService, ProfileService, RegistrationForm,
    SessionEpoch, VendorForm, VendorService,
};
use dialer_console_core::types::{Session, UiPrefs};
use dialer_console_core::{ServiceContext, SessionStore};

use crate::message::{BackendEvent, TaskError, TaskResult};

use super::config_service::{AppConfig, ConfigService};
use super::session_store::JsonSessionStore;

pub struct CoreService {
    runtime: Runtime,
    ctx: Arc<ServiceContext>,
    config: ConfigService,
    events_tx: UnboundedSender<BackendEvent>,
    events_rx: UnboundedReceiver<BackendEvent>,
    epochs: watch::Receiver<SessionEpoch>,
}

impl CoreService {
    /// Assembles the backend against the configured base URL.
    pub fn new(config: &AppConfig, config_service: ConfigService) -> anyhow::Result<Self> {
        // 1. One HTTP client for the whole process
        let gateway: Arc<dyn DialerGateway> = Arc::new(DialerClient::new(config.base_url.clone()));

        // 2. Session persistence under the user config directory
        let store: Arc<dyn SessionStore> = Arc::new(JsonSessionStore::new());

        // 3. Shared context the services hang off
        let ctx = Arc::new(ServiceContext::new(store, gateway));

        // 4. Runtime the spawned operations run on
        let runtime = Runtime::new().context("failed to start the backend runtime")?;

        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let epochs = ctx.sessions.subscribe();

        Ok(Self {
            runtime,
            ctx,
            config: config_service,
            events_tx,
            events_rx,
            epochs,
        })
    }

    /// The next finished task, if any. Never blocks; the loop drains until
    /// empty on every tick.
    pub fn try_recv_event(&mut self) -> Option<BackendEvent> {
        self.events_rx.try_recv().ok()
    }

    /// True once per session transition (login, logout, expiry purge).
    pub fn session_changed(&mut self) -> bool {
        if self.epochs.has_changed().unwrap_or(false) {
            self.epochs.borrow_and_update();
            true
        } else {
            false
        }
    }

    /// Snapshot of the cached session.
    pub fn current_session(&self) -> Option<Session> {
        self.runtime.block_on(self.ctx.sessions.current())
    }

    /// Startup restore from disk. A failed read logs and starts signed out.
    pub fn restore_session(&self) -> Option<Session> {
        let auth = self.auth();
        match self.runtime.block_on(auth.restore()) {
            Ok(session) => session,
            Err(err) => {
                log::warn!("Could not restore the stored session: {err}");
                None
            }
        }
    }

    pub fn load_prefs(&self) -> UiPrefs {
        match self.runtime.block_on(self.ctx.session_store.load_prefs()) {
            Ok(prefs) => prefs,
            Err(err) => {
                log::warn!("Could not load preferences: {err}");
                UiPrefs::default()
            }
        }
    }

    /// Fire-and-forget preference write.
    pub fn save_prefs(&self, prefs: UiPrefs) {
        let store = self.ctx.session_store.clone();
        self.runtime.spawn(async move {
            if let Err(err) = store.save_prefs(&prefs).await {
                log::warn!("Could not save preferences: {err}");
            }
        });
    }

    pub fn save_config(&self, config: &AppConfig) {
        if let Err(err) = self.config.save(config) {
            log::warn!("Could not save config: {err}");
        }
    }

    fn auth(&self) -> AuthService {
        AuthService::new(self.ctx.clone())
    }

    fn plans(&self) -> PlanService {
        PlanService::new(self.ctx.clone())
    }

    fn vendors(&self) -> VendorService {
        VendorService::new(self.ctx.clone())
    }

    fn profiles(&self) -> ProfileService {
        ProfileService::new(self.ctx.clone())
    }

    fn numbers(&self) -> NumberService {
        NumberService::new(self.ctx.clone())
    }

    fn call_logs(&self) -> CallLogService {
        CallLogService::new(self.ctx.clone())
    }

    fn emit(&self, task: impl Future<Output = BackendEvent> + Send + 'static) {
        let tx = self.events_tx.clone();
        self.runtime.spawn(async move {
            // The receiver only goes away on shutdown.
            let _ = tx.send(task.await);
        });
    }

    pub fn spawn_login(&self, email: String, password: String) {
        let auth = self.auth();
        self.emit(async move {
            match auth.login(&email, &password).await {
                Ok(session) => BackendEvent::LoggedIn(session),
                Err(err) => {
                    log_failure("login", &err);
                    BackendEvent::LoginFailed(err.user_message())
                }
            }
        });
    }

    pub fn spawn_register(&self, form: RegistrationForm) {
        let auth = self.auth();
        self.emit(async move {
            match auth.register(&form).await {
                Ok(()) => BackendEvent::RegisterDone,
                Err(err) => {
                    log_failure("registration", &err);
                    BackendEvent::RegisterFailed(err.user_message())
                }
            }
        });
    }

    pub fn spawn_send_reset_otp(&self, email: String) {
        let auth = self.auth();
        self.emit(async move {
            match auth.send_reset_otp(&email).await {
                Ok(()) => BackendEvent::OtpSent,
                Err(err) => {
                    log_failure("sending the reset OTP", &err);
                    BackendEvent::OtpSendFailed(err.user_message())
                }
            }
        });
    }

    pub fn spawn_verify_reset_otp(&self, email: String, otp: String) {
        let auth = self.auth();
        self.emit(async move {
            match auth.verify_reset_otp(&email, &otp).await {
                Ok(()) => BackendEvent::OtpVerified,
                Err(err) => {
                    log_failure("verifying the reset OTP", &err);
                    BackendEvent::OtpVerifyFailed(err.user_message())
                }
            }
        });
    }

    pub fn spawn_reset_password(
        &self,
        email: String,
        otp: String,
        new_password: String,
        confirm_password: String,
    ) {
        let auth = self.auth();
        self.emit(async move {
            match auth
                .reset_password(&email, &otp, &new_password, &confirm_password)
                .await
            {
                Ok(()) => BackendEvent::PasswordResetDone,
                Err(err) => {
                    log_failure("resetting the password", &err);
                    BackendEvent::PasswordResetFailed(err.user_message())
                }
            }
        });
    }

    pub fn spawn_logout(&self) {
        let auth = self.auth();
        self.emit(async move {
            if let Err(err) = auth.logout().await {
                log_failure("logout", &err);
            }
            // The cached session is gone even when clearing the disk failed.
            BackendEvent::LoggedOut
        });
    }

    pub fn spawn_fetch_plans(&self) {
        let plans = self.plans();
        self.emit(async move { BackendEvent::PlansLoaded(finish("loading plans", plans.list().await)) });
    }

    pub fn spawn_create_plan(&self, request: CreatePlanRequest) {
        let plans = self.plans();
        self.emit(async move {
            BackendEvent::PlanSaved(finish("creating the plan", plans.create(&request).await))
        });
    }

    pub fn spawn_update_plan(&self, plan: Plan) {
        let plans = self.plans();
        self.emit(async move {
            BackendEvent::PlanSaved(finish("updating the plan", plans.update(&plan).await))
        });
    }

    pub fn spawn_fetch_vendors(&self) {
        let vendors = self.vendors();
        self.emit(async move {
            BackendEvent::VendorsLoaded(finish("loading vendors", vendors.list().await))
        });
    }

    pub fn spawn_create_vendor(&self, form: VendorForm) {
        let vendors = self.vendors();
        self.emit(async move {
            BackendEvent::VendorSaved(finish("creating the vendor", vendors.create(&form).await))
        });
    }

    pub fn spawn_update_vendor(&self, vendor_code: String, form: VendorForm) {
        let vendors = self.vendors();
        self.emit(async move {
            BackendEvent::VendorSaved(finish(
                "updating the vendor",
                vendors.update(&vendor_code, &form).await,
            ))
        });
    }

    pub fn spawn_fetch_profiles(&self) {
        let profiles = self.profiles();
        self.emit(async move {
            BackendEvent::ProfilesLoaded(finish("loading profiles", profiles.list().await))
        });
    }

    pub fn spawn_update_profile(&self, profile: Profile) {
        let profiles = self.profiles();
        self.emit(async move {
            BackendEvent::ProfileSaved(finish(
                "updating the profile",
                profiles.update(&profile).await,
            ))
        });
    }

    pub fn spawn_delete_profile(&self, aucode: String) {
        let profiles = self.profiles();
        self.emit(async move {
            BackendEvent::ProfileDeleted(finish(
                "deleting the profile",
                profiles.delete(&aucode).await,
            ))
        });
    }

    pub fn spawn_fetch_numbers(&self) {
        let numbers = self.numbers();
        self.emit(async move {
            BackendEvent::NumbersLoaded(finish(
                "loading unallocated numbers",
                numbers.unallocated().await,
            ))
        });
    }

    pub fn spawn_fetch_assignments(&self) {
        let numbers = self.numbers();
        self.emit(async move {
            BackendEvent::AssignmentsLoaded(finish(
                "loading the assignment report",
                numbers.assignment_report().await,
            ))
        });
    }

    pub fn spawn_fetch_call_logs(&self) {
        let call_logs = self.call_logs();
        self.emit(async move {
            BackendEvent::CallLogsLoaded(finish("loading call logs", call_logs.list().await))
        });
    }
}

/// Logs one task failure and converts the outcome for the event channel.
fn finish<T>(operation: &str, result: CoreResult<T>) -> TaskResult<T> {
    if let Err(err) = &result {
        log_failure(operation, err);
    }
    result.map_err(|err| TaskError::from(&err))
}

fn log_failure(operation: &str, err: &CoreError) {
    if err.is_expected() {
        log::warn!("{operation} failed: {err}");
    } else {
        log::error!("{operation} failed: {err}");
    }
}
