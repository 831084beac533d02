//! Shared helpers for the staging API integration tests.

#![allow(dead_code)]

use std::env;

use dialer_console_api::{AccessToken, DialerClient, LoginRequest};

/// Skips the current test when any of the named environment variables is missing.
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("skipping test: missing environment variable {}", $var);
                return;
            }
        )+
    };
}

/// Asserts that a `Result` is `Ok` and unwraps it, failing the test otherwise.
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// Test context wrapping a client pointed at the staging deployment.
pub struct TestContext {
    pub client: DialerClient,
    pub email: String,
    pub password: String,
}

impl TestContext {
    /// Builds a context from `DIALER_API_EMAIL` / `DIALER_API_PASSWORD`.
    ///
    /// `DIALER_API_BASE_URL` overrides the default staging base URL.
    pub fn from_env() -> Option<Self> {
        let email = env::var("DIALER_API_EMAIL").ok()?;
        let password = env::var("DIALER_API_PASSWORD").ok()?;

        let client = match env::var("DIALER_API_BASE_URL") {
            Ok(base) => DialerClient::new(&base),
            Err(_) => DialerClient::staging(),
        };

        Some(Self {
            client,
            email,
            password,
        })
    }

    /// Logs in with the configured credentials and returns the issued token.
    pub async fn login(&self) -> Option<AccessToken> {
        use dialer_console_api::DialerGateway;

        let request = LoginRequest {
            email: self.email.clone(),
            password: self.password.clone(),
        };
        let response = self.client.login(&request).await.ok()?;
        Some(AccessToken::new(response.token))
    }
}
