//! Call log feed
//!
//! Read-only access to normalized call events. The upstream feed accepts this
//! call without authentication, but the client gates it on the session anyway
//! so every screen behaves the same.

use std::sync::Arc;

use dialer_console_api::CallLog;

use crate::error::CoreResult;
use crate::services::ServiceContext;

/// Call log service
pub struct CallLogService {
    ctx: Arc<ServiceContext>,
}

impl CallLogService {
    /// Creates a call log service instance
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// Fetches the normalized call event rows.
    pub async fn list(&self) -> CoreResult<Vec<CallLog>> {
        let session = self.ctx.ensure_authorized().await?;
        match self.ctx.gateway.call_events(&session.token).await {
            Ok(logs) => Ok(logs),
            Err(err) => Err(self.ctx.handle_api_error(err).await),
        }
    }
}
