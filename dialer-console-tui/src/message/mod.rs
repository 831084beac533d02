//! Messages driving the update layer
//!
//! Input events and backend completions are both expressed as messages, so
//! the update layer is the only place state changes.

mod app;
mod auth;
mod backend;
mod content;
mod modal;
mod navigation;

pub use app::AppMessage;
pub use auth::AuthMessage;
pub use backend::{BackendEvent, TaskError, TaskResult};
pub use content::ContentMessage;
pub use modal::ModalMessage;
pub use navigation::NavigationMessage;
