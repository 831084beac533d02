//! Dialer Console Core Library
//!
//! Business logic for the dialer admin console, including:
//! - Authentication flows (login, registration, OTP password reset)
//! - Plan, vendor and profile management
//! - Number inventory and call log views
//! - Session lifecycle with durable storage behind a trait
//!
//! This library is platform-independent: the storage layer is abstracted
//! through traits so terminal and server frontends can share it.

pub mod error;
pub mod services;
pub mod traits;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use services::ServiceContext;
pub use traits::SessionStore;
