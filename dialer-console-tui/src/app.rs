//! Application main loop
//!
//! Roughly every 100 ms (sooner when input arrives) one iteration folds
//! finished backend tasks into the model, applies any session transition the
//! backend flagged, redraws, and handles the next input event. Backend
//! results are drained before drawing so a completed fetch never waits a
//! tick behind its own loading screen.

use std::time::Duration;

use anyhow::Result;

use crate::backend::CoreService;
use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// Runs the main loop until the model asks to quit.
pub fn run(terminal: &mut Term, app: &mut App, backend: &mut CoreService) -> Result<()> {
    loop {
        // 1. Fold in finished backend tasks
        while let Some(event) = backend.try_recv_event() {
            update::update(app, AppMessage::Backend(event), backend);
        }

        // 2. Session expiry or logout flagged by the session watcher
        if backend.session_changed() {
            update::apply_session_transition(app, backend);
        }

        // 3. Render
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 4. Quit check
        if app.should_quit {
            break;
        }

        // 5. Poll input (100 ms timeout) and apply it
        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            let msg = event::handle_event(event, app);
            update::update(app, msg, backend);
        }
    }

    Ok(())
}
