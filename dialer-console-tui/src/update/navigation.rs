//! Sidebar navigation messages

use crate::backend::CoreService;
use crate::message::NavigationMessage;
use crate::model::{App, NavItemId, Page};

pub fn update(app: &mut App, msg: NavigationMessage, backend: &CoreService) {
    match msg {
        NavigationMessage::SelectPrevious => {
            app.navigation.select_previous();
        }

        NavigationMessage::SelectNext => {
            app.navigation.select_next();
        }

        NavigationMessage::SelectFirst => {
            app.navigation.select_first();
        }

        NavigationMessage::SelectLast => {
            app.navigation.select_last();
        }

        NavigationMessage::Confirm => {
            if let Some(id) = app.navigation.current_id() {
                enter(app, id, backend);
            }
        }
    }
}

fn enter(app: &mut App, id: NavItemId, backend: &CoreService) {
    let page = page_from_nav_id(id);
    if page == app.current_page {
        return;
    }
    super::enter_page(app, page, backend);
}

fn page_from_nav_id(id: NavItemId) -> Page {
    match id {
        NavItemId::Home => Page::Home,
        NavItemId::Plans => Page::Plans,
        NavItemId::Vendors => Page::Vendors,
        NavItemId::Profiles => Page::Profiles,
        NavItemId::Numbers => Page::Numbers,
        NavItemId::Assignments => Page::Assignments,
        NavItemId::CallLogs => Page::CallLogs,
        NavItemId::Settings => Page::Settings,
    }
}
