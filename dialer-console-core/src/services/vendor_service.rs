//! Vendor management
//!
//! Listing, creation and editing of vendors. The vendor endpoints take price
//! as a number while the form captures text, so this layer owns the parse;
//! the owning user code comes from the signed-in session, not the form.

use std::sync::Arc;

use dialer_console_api::{CreateVendorRequest, UpdateVendorRequest, Vendor};

use crate::error::{CoreError, CoreResult};
use crate::services::ServiceContext;
use crate::utils::validation;

/// Vendor form as entered. `price` stays text until submit.
#[derive(Debug, Clone, Default)]
pub struct VendorForm {
    pub vendor_name: String,
    pub vendor_planlist: String,
    pub price: String,
    pub description: String,
}

impl VendorForm {
    /// Pre-fills the form from an existing row for editing.
    #[must_use]
    pub fn from_vendor(vendor: &Vendor) -> Self {
        Self {
            vendor_name: vendor.vendor_name.clone(),
            vendor_planlist: vendor.vendor_planlist.clone(),
            price: vendor.price.clone(),
            description: vendor.description.clone(),
        }
    }

    /// Checks the required fields and parses the price.
    fn validate(&self) -> CoreResult<f64> {
        validation::required_field(&self.vendor_name, "vendor_name")?;
        validation::required_field(&self.vendor_planlist, "vendor_planlist")?;
        validation::required_field(&self.price, "price")?;
        self.price
            .trim()
            .parse::<f64>()
            .map_err(|_| CoreError::ValidationError("Price must be a number".to_string()))
    }
}

/// Vendor management service
pub struct VendorService {
    ctx: Arc<ServiceContext>,
}

impl VendorService {
    /// Creates a vendor service instance
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// Fetches every vendor.
    pub async fn list(&self) -> CoreResult<Vec<Vendor>> {
        let session = self.ctx.ensure_authorized().await?;
        match self.ctx.gateway.list_vendors(&session.token).await {
            Ok(vendors) => Ok(vendors),
            Err(err) => Err(self.ctx.handle_api_error(err).await),
        }
    }

    /// Creates a vendor owned by the signed-in account.
    pub async fn create(&self, form: &VendorForm) -> CoreResult<()> {
        // 1. Validate the form
        let price = form.validate()?;

        // 2. Submit under the session's account code
        let session = self.ctx.ensure_authorized().await?;
        let request = CreateVendorRequest {
            vendor_name: form.vendor_name.trim().to_string(),
            vendor_planlist: form.vendor_planlist.trim().to_string(),
            price,
            description: form.description.trim().to_string(),
            usercode: session.user.aucode.clone().unwrap_or_default(),
        };
        match self
            .ctx
            .gateway
            .create_vendor(&session.token, &session.role, &request)
            .await
        {
            Ok(()) => {
                log::info!("Created vendor {}", request.vendor_name);
                Ok(())
            }
            Err(err) => Err(self.ctx.handle_api_error(err).await),
        }
    }

    /// Pushes an edited vendor back under its server-assigned code.
    pub async fn update(&self, vendor_code: &str, form: &VendorForm) -> CoreResult<()> {
        // 1. Validate the form
        let price = form.validate()?;

        // 2. Submit
        let session = self.ctx.ensure_authorized().await?;
        let request = UpdateVendorRequest {
            vendor_name: form.vendor_name.trim().to_string(),
            vendor_planlist: form.vendor_planlist.trim().to_string(),
            price,
            description: form.description.trim().to_string(),
        };
        match self
            .ctx
            .gateway
            .update_vendor(&session.token, &session.role, vendor_code, &request)
            .await
        {
            Ok(()) => {
                log::info!("Updated vendor {vendor_code}");
                Ok(())
            }
            Err(err) => Err(self.ctx.handle_api_error(err).await),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{create_authed_context, create_test_context, sample_vendor};
    use dialer_console_api::ApiError;

    fn filled_form() -> VendorForm {
        VendorForm {
            vendor_name: "Acme Telecom".to_string(),
            vendor_planlist: "Starter,Pro".to_string(),
            price: "12.50".to_string(),
            description: "Bulk reseller".to_string(),
        }
    }

    // ===== Listing =====

    #[tokio::test]
    async fn list_returns_rows() {
        let (ctx, _, gateway) = create_authed_context().await;
        gateway
            .set_vendors(vec![sample_vendor("VC1", "Acme"), sample_vendor("VC2", "Breeze")])
            .await;
        let svc = VendorService::new(ctx);

        let vendors = svc.list().await.unwrap();

        assert_eq!(vendors.len(), 2);
        assert_eq!(vendors[1].vendor_code, "VC2");
    }

    #[tokio::test]
    async fn list_refuses_without_session() {
        let (ctx, _, _) = create_test_context();
        let svc = VendorService::new(ctx);

        assert!(matches!(
            svc.list().await.unwrap_err(),
            CoreError::AuthenticationRequired
        ));
    }

    // ===== Creation =====

    #[tokio::test]
    async fn create_requires_name() {
        let (ctx, _, gateway) = create_authed_context().await;
        let svc = VendorService::new(ctx);
        let mut form = filled_form();
        form.vendor_name = "  ".to_string();

        let err = svc.create(&form).await.unwrap_err();

        assert_eq!(err.user_message(), "Vendor Name is required");
        assert_eq!(gateway.call_count().await, 0);
    }

    #[tokio::test]
    async fn create_requires_plan_list() {
        let (ctx, _, _) = create_authed_context().await;
        let svc = VendorService::new(ctx);
        let mut form = filled_form();
        form.vendor_planlist = String::new();

        let err = svc.create(&form).await.unwrap_err();

        assert_eq!(err.user_message(), "Vendor Planlist is required");
    }

    #[tokio::test]
    async fn create_rejects_unparseable_price() {
        let (ctx, _, gateway) = create_authed_context().await;
        let svc = VendorService::new(ctx);
        let mut form = filled_form();
        form.price = "twelve".to_string();

        let err = svc.create(&form).await.unwrap_err();

        assert_eq!(err.user_message(), "Price must be a number");
        assert_eq!(gateway.call_count().await, 0);
    }

    #[tokio::test]
    async fn create_fills_usercode_from_session() {
        let (ctx, _, gateway) = create_authed_context().await;
        let svc = VendorService::new(ctx);

        svc.create(&filled_form()).await.unwrap();

        let sent = gateway.created_vendors.read().await;
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].usercode, "AU1001");
        assert!((sent[0].price - 12.50).abs() < f64::EPSILON);
    }

    // ===== Updates =====

    #[tokio::test]
    async fn update_addresses_vendor_by_code() {
        let (ctx, _, gateway) = create_authed_context().await;
        let svc = VendorService::new(ctx);

        svc.update("VC9", &filled_form()).await.unwrap();

        let sent = gateway.updated_vendors.read().await;
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, "VC9");
        assert_eq!(sent[0].1.vendor_name, "Acme Telecom");
    }

    #[tokio::test]
    async fn update_validates_like_create() {
        let (ctx, _, gateway) = create_authed_context().await;
        let svc = VendorService::new(ctx);
        let mut form = filled_form();
        form.price = String::new();

        let err = svc.update("VC9", &form).await.unwrap_err();

        assert_eq!(err.user_message(), "Price is required");
        assert_eq!(gateway.call_count().await, 0);
    }

    #[tokio::test]
    async fn update_surfaces_missing_vendor() {
        let (ctx, _, gateway) = create_authed_context().await;
        gateway
            .set_failure(ApiError::NotFound {
                endpoint: "vendor/updatevendor/VC9".to_string(),
                resource: "VC9".to_string(),
                raw_message: None,
            })
            .await;
        let svc = VendorService::new(ctx.clone());

        let err = svc.update("VC9", &filled_form()).await.unwrap_err();

        assert!(matches!(err, CoreError::Api(ApiError::NotFound { .. })));
        assert!(ctx.sessions.is_authenticated().await, "404 must not purge");
    }
}
