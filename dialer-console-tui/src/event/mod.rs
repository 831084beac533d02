//! Terminal event polling and key dispatch

mod handler;
mod keymap;

pub use handler::handle_event;
pub use keymap::{DefaultKeymap, KeyBinding};

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event};

/// Waits up to `timeout` for the next terminal event; `None` means the tick
/// elapsed quietly.
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}
