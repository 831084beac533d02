//! Render layer
//!
//! A read-only projection of [`crate::model::App`] onto the frame, redrawn
//! every tick. Nothing in here mutates state.

pub mod components;
mod layout;
pub mod pages;
pub mod theme;

pub use layout::render;
