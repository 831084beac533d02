//! Plan management
//!
//! Listing, creation and editing of SIM plans. The backend owns plan codes
//! and pricing formats; this layer only gates on the signed-in session and
//! checks the create form before submitting.

use std::sync::Arc;

use dialer_console_api::{CreatePlanRequest, Plan};

use crate::error::CoreResult;
use crate::services::ServiceContext;
use crate::utils::validation;

/// Plan management service
pub struct PlanService {
    ctx: Arc<ServiceContext>,
}

impl PlanService {
    /// Creates a plan service instance
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// Fetches every plan.
    pub async fn list(&self) -> CoreResult<Vec<Plan>> {
        let session = self.ctx.ensure_authorized().await?;
        match self.ctx.gateway.list_plans(&session.token).await {
            Ok(plans) => Ok(plans),
            Err(err) => Err(self.ctx.handle_api_error(err).await),
        }
    }

    /// Creates a plan.
    pub async fn create(&self, request: &CreatePlanRequest) -> CoreResult<()> {
        // 1. Validate the form
        validation::required_field(&request.planname, "planname")?;
        validation::required_field(&request.country, "country")?;
        validation::required_field(&request.price, "price")?;
        validation::required_field(&request.validity, "validity")?;

        // 2. Submit
        let session = self.ctx.ensure_authorized().await?;
        match self
            .ctx
            .gateway
            .create_plan(&session.token, &session.role, request)
            .await
        {
            Ok(()) => {
                log::info!("Created plan {}", request.planname);
                Ok(())
            }
            Err(err) => Err(self.ctx.handle_api_error(err).await),
        }
    }

    /// Pushes an edited plan back. The edit form starts from a fetched row,
    /// so the client sends it as-is and lets the backend validate.
    pub async fn update(&self, plan: &Plan) -> CoreResult<()> {
        let session = self.ctx.ensure_authorized().await?;
        match self
            .ctx
            .gateway
            .update_plan(&session.token, &session.role, plan)
            .await
        {
            Ok(()) => {
                log::info!("Updated plan {}", plan.plan_code);
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
    use crate::test_utils::{create_authed_context, create_test_context, sample_plan};
    use dialer_console_api::ApiError;

    // ===== Listing =====

    #[tokio::test]
    async fn list_returns_rows() {
        let (ctx, _, gateway) = create_authed_context().await;
        gateway
            .set_plans(vec![sample_plan(1, "Starter"), sample_plan(2, "Pro")])
            .await;
        let svc = PlanService::new(ctx);

        let plans = svc.list().await.unwrap();

        assert_eq!(plans.len(), 2);
        assert_eq!(plans[0].plan_name, "Starter");
    }

    #[tokio::test]
    async fn list_refuses_without_session() {
        let (ctx, _, gateway) = create_test_context();
        let svc = PlanService::new(ctx);

        let err = svc.list().await.unwrap_err();

        assert!(matches!(err, CoreError::AuthenticationRequired));
        assert_eq!(gateway.call_count().await, 0);
    }

    #[tokio::test]
    async fn list_purges_session_when_token_expires() {
        let (ctx, store, gateway) = create_authed_context().await;
        gateway
            .set_failure(ApiError::Unauthorized {
                endpoint: "plan/sinchplan".to_string(),
                raw_message: None,
            })
            .await;
        let svc = PlanService::new(ctx.clone());

        let err = svc.list().await.unwrap_err();

        assert!(matches!(err, CoreError::Api(ApiError::Unauthorized { .. })));
        assert!(!ctx.sessions.is_authenticated().await);
        assert!(store.stored().await.is_none());
    }

    // ===== Creation =====

    #[tokio::test]
    async fn create_validates_before_submitting() {
        let (ctx, _, gateway) = create_authed_context().await;
        let svc = PlanService::new(ctx);
        let request = CreatePlanRequest {
            country: "US".to_string(),
            price: "10".to_string(),
            validity: "30 days".to_string(),
            ..CreatePlanRequest::default()
        };

        let err = svc.create(&request).await.unwrap_err();

        assert_eq!(err.user_message(), "Planname is required");
        assert_eq!(gateway.call_count().await, 0);
    }

    #[tokio::test]
    async fn create_reports_each_missing_field() {
        let (ctx, _, _) = create_authed_context().await;
        let svc = PlanService::new(ctx);
        let request = CreatePlanRequest {
            planname: "Starter".to_string(),
            country: "US".to_string(),
            price: "10".to_string(),
            ..CreatePlanRequest::default()
        };

        let err = svc.create(&request).await.unwrap_err();

        assert_eq!(err.user_message(), "Validity is required");
    }

    #[tokio::test]
    async fn create_submits_with_defaults_kept() {
        let (ctx, _, gateway) = create_authed_context().await;
        let svc = PlanService::new(ctx);
        let request = CreatePlanRequest {
            planname: "Starter".to_string(),
            country: "US".to_string(),
            price: "10".to_string(),
            validity: "30 days".to_string(),
            ..CreatePlanRequest::default()
        };

        svc.create(&request).await.unwrap();

        let sent = gateway.created_plans.read().await;
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].flag, "create");
        assert_eq!(sent[0].number_assign, "2");
    }

    // ===== Updates =====

    #[tokio::test]
    async fn update_sends_row_as_is() {
        let (ctx, _, gateway) = create_authed_context().await;
        let svc = PlanService::new(ctx);
        let mut plan = sample_plan(7, "Starter");
        plan.price = String::new();

        svc.update(&plan).await.unwrap();

        let sent = gateway.updated_plans.read().await;
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].plan_code, 7);
        assert!(sent[0].price.is_empty(), "client must not reject blanks");
    }

    #[tokio::test]
    async fn update_refuses_without_session() {
        let (ctx, _, _) = create_test_context();
        let svc = PlanService::new(ctx);

        let err = svc.update(&sample_plan(7, "Starter")).await.unwrap_err();

        assert!(matches!(err, CoreError::AuthenticationRequired));
    }
}
