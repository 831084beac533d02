//! DID number inventory
//!
//! Read-only views over the number stock: the unallocated pool and the
//! number-to-plan assignment report with its aggregate call allowance.

use std::sync::Arc;

use dialer_console_api::{NumberAssignmentReport, UnallocatedNumber};

use crate::error::CoreResult;
use crate::services::ServiceContext;

/// Number inventory service
pub struct NumberService {
    ctx: Arc<ServiceContext>,
}

impl NumberService {
    /// Creates a number service instance
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// Fetches the unallocated number pool.
    pub async fn unallocated(&self) -> CoreResult<Vec<UnallocatedNumber>> {
        let session = self.ctx.ensure_authorized().await?;
        match self.ctx.gateway.unallocated_numbers(&session.token).await {
            Ok(numbers) => Ok(numbers),
            Err(err) => Err(self.ctx.handle_api_error(err).await),
        }
    }

    /// Fetches the assignment report, rows plus the aggregate call limit.
    pub async fn assignment_report(&self) -> CoreResult<NumberAssignmentReport> {
        let session = self.ctx.ensure_authorized().await?;
        match self.ctx.gateway.number_assignments(&session.token).await {
            Ok(report) => Ok(report),
            Err(err) => Err(self.ctx.handle_api_error(err).await),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::test_utils::{
        create_authed_context, create_test_context, sample_assignment, sample_number,
    };

    #[tokio::test]
    async fn unallocated_returns_pool() {
        let (ctx, _, gateway) = create_authed_context().await;
        gateway
            .set_numbers(vec![sample_number(1, "+14155550100"), sample_number(2, "+14155550101")])
            .await;
        let svc = NumberService::new(ctx);

        let numbers = svc.unallocated().await.unwrap();

        assert_eq!(numbers.len(), 2);
        assert_eq!(numbers[0].number, "+14155550100");
    }

    #[tokio::test]
    async fn report_carries_rows_and_aggregate() {
        let (ctx, _, gateway) = create_authed_context().await;
        gateway
            .set_report(NumberAssignmentReport {
                assignments: vec![
                    sample_assignment("+14155550100", "3 days"),
                    sample_assignment("+14155550101", "20 days"),
                ],
                total_call_limit: 500,
            })
            .await;
        let svc = NumberService::new(ctx);

        let report = svc.assignment_report().await.unwrap();

        assert_eq!(report.assignments.len(), 2);
        assert_eq!(report.total_call_limit, 500);
    }

    #[tokio::test]
    async fn both_views_refuse_without_session() {
        let (ctx, _, _) = create_test_context();
        let svc = NumberService::new(ctx);

        assert!(matches!(
            svc.unallocated().await.unwrap_err(),
            CoreError::AuthenticationRequired
        ));
        assert!(matches!(
            svc.assignment_report().await.unwrap_err(),
            CoreError::AuthenticationRequired
        ));
    }
}
