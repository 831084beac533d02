//! Widgets shared across pages

pub mod modal;
pub mod navigation;
pub mod statusbar;
