//! Profile management
//!
//! Listing, editing and removal of user profiles. Edits submit the whole
//! record as fetched; removal is keyed by account code.

use std::sync::Arc;

use dialer_console_api::Profile;

use crate::error::CoreResult;
use crate::services::ServiceContext;

/// Profile management service
pub struct ProfileService {
    ctx: Arc<ServiceContext>,
}

impl ProfileService {
    /// Creates a profile service instance
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// Fetches every profile.
    pub async fn list(&self) -> CoreResult<Vec<Profile>> {
        let session = self.ctx.ensure_authorized().await?;
        match self.ctx.gateway.list_profiles(&session.token).await {
            Ok(profiles) => Ok(profiles),
            Err(err) => Err(self.ctx.handle_api_error(err).await),
        }
    }

    /// Pushes an edited profile back, whole record.
    pub async fn update(&self, profile: &Profile) -> CoreResult<()> {
        let session = self.ctx.ensure_authorized().await?;
        match self
            .ctx
            .gateway
            .update_profile(&session.token, profile)
            .await
        {
            Ok(()) => {
                log::info!("Updated profile {}", profile.aucode);
                Ok(())
            }
            Err(err) => Err(self.ctx.handle_api_error(err).await),
        }
    }

    /// Deletes the profile with the given account code.
    pub async fn delete(&self, aucode: &str) -> CoreResult<()> {
        let session = self.ctx.ensure_authorized().await?;
        match self
            .ctx
            .gateway
            .delete_profile(&session.token, aucode.trim())
            .await
        {
            Ok(()) => {
                log::info!("Deleted profile {}", aucode.trim());
                Ok(())
            }
            Err(err) => Err(self.ctx.handle_api_error(err).await),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::test_utils::{create_authed_context, create_test_context, sample_profile};
    use dialer_console_api::ApiError;

    // ===== Listing =====

    #[tokio::test]
    async fn list_returns_rows() {
        let (ctx, _, gateway) = create_authed_context().await;
        gateway
            .set_profiles(vec![sample_profile("AU2001", "Dana"), sample_profile("AU2002", "Eli")])
            .await;
        let svc = ProfileService::new(ctx);

        let profiles = svc.list().await.unwrap();

        assert_eq!(profiles.len(), 2);
        assert_eq!(profiles[0].aucode, "AU2001");
    }

    #[tokio::test]
    async fn list_refuses_without_session() {
        let (ctx, _, _) = create_test_context();
        let svc = ProfileService::new(ctx);

        assert!(matches!(
            svc.list().await.unwrap_err(),
            CoreError::AuthenticationRequired
        ));
    }

    // ===== Updates =====

    #[tokio::test]
    async fn update_submits_whole_record() {
        let (ctx, _, gateway) = create_authed_context().await;
        let svc = ProfileService::new(ctx);
        let mut profile = sample_profile("AU2001", "Dana");
        profile.phone = String::new();

        svc.update(&profile).await.unwrap();

        let sent = gateway.updated_profiles.read().await;
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].id, profile.id);
        assert!(sent[0].phone.is_empty(), "record goes out as entered");
    }

    // ===== Deletion =====

    #[tokio::test]
    async fn delete_is_keyed_by_aucode() {
        let (ctx, _, gateway) = create_authed_context().await;
        let svc = ProfileService::new(ctx);

        svc.delete(" AU2001 ").await.unwrap();

        let sent = gateway.deleted_profiles.read().await;
        assert_eq!(sent.as_slice(), ["AU2001"]);
    }

    #[tokio::test]
    async fn delete_surfaces_missing_profile() {
        let (ctx, _, gateway) = create_authed_context().await;
        gateway
            .set_failure(ApiError::NotFound {
                endpoint: "profile/users/aucode/AU9999".to_string(),
                resource: "AU9999".to_string(),
                raw_message: Some("User not found".to_string()),
            })
            .await;
        let svc = ProfileService::new(ctx.clone());

        let err = svc.delete("AU9999").await.unwrap_err();

        assert!(matches!(err, CoreError::Api(ApiError::NotFound { .. })));
        assert!(ctx.sessions.is_authenticated().await, "404 must not purge");
    }
}
