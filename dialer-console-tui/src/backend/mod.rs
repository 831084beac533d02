//! Platform layer behind the update loop
//!
//! Everything the pure model/update/view stack must not touch directly lives
//! here: the tokio runtime, the HTTP-backed services, the JSON session store
//! and the configuration file.

mod config_service;
mod core_service;
mod session_store;

pub use config_service::{AppConfig, ConfigService};
pub use core_service::CoreService;
pub use session_store::JsonSessionStore;

use std::path::PathBuf;

/// Directory every console file lives in.
pub(crate) fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("dialer-console")
}
