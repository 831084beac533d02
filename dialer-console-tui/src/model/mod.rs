//! Application state (the "model" of the Elm-style loop)
//!
//! ```text
//! terminal input -> event  -> message -> update -> App (here) -> view
//! backend tasks  -> events -^
//! ```
//!
//! `App` is the single mutable state tree. The event layer turns terminal
//! input into messages, the update layer applies them, the view only reads.

mod app;
mod focus;
mod navigation;
mod page;
pub mod state;

pub use app::App;
pub use focus::FocusPanel;
pub use navigation::{NavItem, NavItemId, NavigationState};
pub use page::Page;
