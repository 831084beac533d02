//! Staging API integration tests.
//!
//! How to run:
//! ```bash
//! DIALER_API_EMAIL=xxx DIALER_API_PASSWORD=xxx \
//!     cargo test -p dialer-console-api --test staging_test -- --ignored --nocapture --test-threads=1
//! ```

mod common;

use common::TestContext;
use dialer_console_api::{AccessToken, ApiError, DialerGateway, LoginRequest};

// ============ Authentication ============

#[tokio::test]
#[ignore]
async fn test_staging_login() {
    skip_if_no_credentials!("DIALER_API_EMAIL", "DIALER_API_PASSWORD");

    let ctx = TestContext::from_env().expect("failed to build test context");
    let request = LoginRequest {
        email: ctx.email.clone(),
        password: ctx.password.clone(),
    };

    let response = require_ok!(ctx.client.login(&request).await, "login failed");
    assert!(!response.token.trim().is_empty(), "token should not be blank");

    println!("✓ login succeeded");
}

#[tokio::test]
#[ignore]
async fn test_staging_login_rejects_bad_password() {
    skip_if_no_credentials!("DIALER_API_EMAIL", "DIALER_API_PASSWORD");

    let ctx = TestContext::from_env().expect("failed to build test context");
    let request = LoginRequest {
        email: ctx.email.clone(),
        password: "definitely-not-the-password".to_string(),
    };

    let result = ctx.client.login(&request).await;
    assert!(result.is_err(), "login with a bad password should fail");

    println!("✓ bad password rejected: {:?}", result.err());
}

#[tokio::test]
#[ignore]
async fn test_staging_rejects_bad_token() {
    skip_if_no_credentials!("DIALER_API_EMAIL", "DIALER_API_PASSWORD");

    let ctx = TestContext::from_env().expect("failed to build test context");
    let token = AccessToken::new("not-a-real-token");

    let result = ctx.client.list_plans(&token).await;
    match result {
        Err(ApiError::Unauthorized { .. }) => println!("✓ bad token rejected with 401"),
        other => panic!("expected Unauthorized, got {other:?}"),
    }
}

// ============ Listings ============

#[tokio::test]
#[ignore]
async fn test_staging_list_plans() {
    skip_if_no_credentials!("DIALER_API_EMAIL", "DIALER_API_PASSWORD");

    let ctx = TestContext::from_env().expect("failed to build test context");
    let token = ctx.login().await.expect("login failed");

    let plans = require_ok!(ctx.client.list_plans(&token).await, "list_plans failed");
    for plan in &plans {
        assert!(!plan.plan_name.is_empty(), "plan without a name: {plan:?}");
    }

    println!("✓ list_plans returned {} plans", plans.len());
}

#[tokio::test]
#[ignore]
async fn test_staging_list_vendors() {
    skip_if_no_credentials!("DIALER_API_EMAIL", "DIALER_API_PASSWORD");

    let ctx = TestContext::from_env().expect("failed to build test context");
    let token = ctx.login().await.expect("login failed");

    let vendors = require_ok!(ctx.client.list_vendors(&token).await, "list_vendors failed");

    println!("✓ list_vendors returned {} vendors", vendors.len());
}

#[tokio::test]
#[ignore]
async fn test_staging_list_profiles() {
    skip_if_no_credentials!("DIALER_API_EMAIL", "DIALER_API_PASSWORD");

    let ctx = TestContext::from_env().expect("failed to build test context");
    let token = ctx.login().await.expect("login failed");

    let profiles = require_ok!(
        ctx.client.list_profiles(&token).await,
        "list_profiles failed"
    );

    println!("✓ list_profiles returned {} profiles", profiles.len());
}

#[tokio::test]
#[ignore]
async fn test_staging_unallocated_numbers() {
    skip_if_no_credentials!("DIALER_API_EMAIL", "DIALER_API_PASSWORD");

    let ctx = TestContext::from_env().expect("failed to build test context");
    let token = ctx.login().await.expect("login failed");

    let numbers = require_ok!(
        ctx.client.unallocated_numbers(&token).await,
        "unallocated_numbers failed"
    );

    println!("✓ unallocated_numbers returned {} numbers", numbers.len());
}

#[tokio::test]
#[ignore]
async fn test_staging_number_assignments() {
    skip_if_no_credentials!("DIALER_API_EMAIL", "DIALER_API_PASSWORD");

    let ctx = TestContext::from_env().expect("failed to build test context");
    let token = ctx.login().await.expect("login failed");

    let report = require_ok!(
        ctx.client.number_assignments(&token).await,
        "number_assignments failed"
    );

    println!(
        "✓ number_assignments returned {} rows, total call limit {}",
        report.assignments.len(),
        report.total_call_limit
    );
}

#[tokio::test]
#[ignore]
async fn test_staging_call_events() {
    skip_if_no_credentials!("DIALER_API_EMAIL", "DIALER_API_PASSWORD");

    let ctx = TestContext::from_env().expect("failed to build test context");
    let token = ctx.login().await.expect("login failed");

    let logs = require_ok!(ctx.client.call_events(&token).await, "call_events failed");
    for log in logs.iter().take(5) {
        assert!(!log.call_id.is_empty(), "call log without an id: {log:?}");
    }

    println!("✓ call_events returned {} rows", logs.len());
}
