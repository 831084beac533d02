//! Dialer Console
//!
//! Elm-style terminal frontend for the dialer admin API:
//! - **Model**: application state (`model/`)
//! - **Message**: input and task-completion messages (`message/`)
//! - **Update**: state transitions (`update/`)
//! - **View**: rendering (`view/`)
//! - **Event**: terminal input handling (`event/`)
//! - **Backend**: bridge to the async services (`backend/`)

mod app;
mod backend;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

use anyhow::Result;

use backend::{ConfigService, CoreService};
use model::{NavItemId, Page};
use util::{init_terminal, restore_terminal};

fn main() -> Result<()> {
    // 1. Configuration, loaded before anything async exists
    let config_service = ConfigService::new();
    let config = config_service.load();

    // 2. Backend bridge: HTTP client, session store, runtime
    let mut backend = CoreService::new(&config, config_service)?;

    // 3. Application state seeded from config and saved preferences
    let mut app = model::App::new();
    app.settings.apply_theme(config.theme);
    app.settings.page_size = config.page_size;
    app.set_page_size(config.page_size);
    app.base_url = config.base_url.clone();
    app.sidebar_open = backend.load_prefs().sidebar_open;

    // 4. A restorable session skips the login page
    if let Some(session) = backend.restore_session() {
        app.session = Some(session);
        app.navigation.select_id(NavItemId::Home);
        app.current_page = Page::Home;
    }

    // 5. Run, then restore the terminal whether the loop succeeded or not
    let mut terminal = init_terminal()?;
    let result = app::run(&mut terminal, &mut app, &mut backend);
    restore_terminal(&mut terminal)?;

    result
}
