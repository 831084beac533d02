//! Content panel messages
//!
//! Everything here keys off `app.current_page`: the same message moves the
//! plan list on one page and the vendor list on another.

use crate::backend::{AppConfig, CoreService};
use crate::message::ContentMessage;
use crate::model::state::SettingItem;
use crate::model::{App, Page};

pub fn update(app: &mut App, msg: ContentMessage, backend: &CoreService) {
    match msg {
        // ========== List navigation ==========
        ContentMessage::SelectPrevious => {
            handle_select_previous(app);
        }
        ContentMessage::SelectNext => {
            handle_select_next(app);
        }
        ContentMessage::SelectFirst => {
            handle_select_first(app);
        }
        ContentMessage::SelectLast => {
            handle_select_last(app);
        }
        ContentMessage::PrevPage => {
            handle_prev_page(app);
        }
        ContentMessage::NextPage => {
            handle_next_page(app);
        }
        ContentMessage::Confirm => {
            handle_confirm(app);
        }

        // ========== Row actions ==========
        ContentMessage::Add => {
            handle_add(app);
        }
        ContentMessage::Edit => {
            handle_edit(app);
        }
        ContentMessage::Delete => {
            handle_delete(app);
        }

        // ========== Keyword search ==========
        ContentMessage::StartSearch => {
            handle_start_search(app);
        }
        ContentMessage::SearchInput(ch) => {
            handle_search_input(app, ch);
        }
        ContentMessage::SearchBackspace => {
            handle_search_backspace(app);
        }
        ContentMessage::SearchAccept => {
            app.searching = false;
        }
        ContentMessage::SearchCancel => {
            app.searching = false;
            handle_search_clear(app);
        }

        // ========== Facet filters ==========
        ContentMessage::CycleEventFilter => {
            if app.current_page == Page::CallLogs {
                app.call_logs.cycle_event_filter();
            }
        }
        ContentMessage::CycleResultFilter => {
            if app.current_page == Page::CallLogs {
                app.call_logs.cycle_result_filter();
            }
        }
        ContentMessage::CycleBucketFilter => {
            if app.current_page == Page::Assignments {
                app.assignments.cycle_bucket();
            }
        }

        // ========== Settings page ==========
        ContentMessage::TogglePrev => {
            handle_toggle(app, backend, false);
        }
        ContentMessage::ToggleNext => {
            handle_toggle(app, backend, true);
        }
    }
}

fn handle_select_previous(app: &mut App) {
    match app.current_page {
        Page::Plans => app.plans.select_previous(),
        Page::Vendors => app.vendors.select_previous(),
        Page::Profiles => app.profiles.select_previous(),
        Page::Numbers => app.numbers.select_previous(),
        Page::Assignments => app.assignments.select_previous(),
        Page::CallLogs => app.call_logs.select_previous(),
        Page::Settings => app.settings.select_previous(),
        _ => {}
    }
}

fn handle_select_next(app: &mut App) {
    match app.current_page {
        Page::Plans => app.plans.select_next(),
        Page::Vendors => app.vendors.select_next(),
        Page::Profiles => app.profiles.select_next(),
        Page::Numbers => app.numbers.select_next(),
        Page::Assignments => app.assignments.select_next(),
        Page::CallLogs => app.call_logs.select_next(),
        Page::Settings => app.settings.select_next(),
        _ => {}
    }
}

fn handle_select_first(app: &mut App) {
    match app.current_page {
        Page::Plans => app.plans.select_first(),
        Page::Vendors => app.vendors.select_first(),
        Page::Profiles => app.profiles.select_first(),
        Page::Numbers => app.numbers.select_first(),
        Page::Assignments => app.assignments.select_first(),
        Page::CallLogs => app.call_logs.select_first(),
        _ => {}
    }
}

fn handle_select_last(app: &mut App) {
    match app.current_page {
        Page::Plans => app.plans.select_last(),
        Page::Vendors => app.vendors.select_last(),
        Page::Profiles => app.profiles.select_last(),
        Page::Numbers => app.numbers.select_last(),
        Page::Assignments => app.assignments.select_last(),
        Page::CallLogs => app.call_logs.select_last(),
        _ => {}
    }
}

fn handle_prev_page(app: &mut App) {
    match app.current_page {
        Page::Plans => app.plans.prev_page(),
        Page::Vendors => app.vendors.prev_page(),
        Page::Profiles => app.profiles.prev_page(),
        Page::Numbers => app.numbers.prev_page(),
        Page::Assignments => app.assignments.prev_page(),
        Page::CallLogs => app.call_logs.prev_page(),
        _ => {}
    }
}

fn handle_next_page(app: &mut App) {
    match app.current_page {
        Page::Plans => app.plans.next_page(),
        Page::Vendors => app.vendors.next_page(),
        Page::Profiles => app.profiles.next_page(),
        Page::Numbers => app.numbers.next_page(),
        Page::Assignments => app.assignments.next_page(),
        Page::CallLogs => app.call_logs.next_page(),
        _ => {}
    }
}

/// Enter on a row opens the same editor as the edit chord.
fn handle_confirm(app: &mut App) {
    handle_edit(app);
}

fn handle_add(app: &mut App) {
    match app.current_page {
        Page::Plans => app.modal.show_plan_create(),
        Page::Vendors => app.modal.show_vendor_create(),
        _ => {}
    }
}

fn handle_edit(app: &mut App) {
    match app.current_page {
        Page::Plans => {
            if let Some(plan) = app.plans.selected_plan() {
                app.modal.show_plan_edit(&plan);
            }
        }
        Page::Vendors => {
            if let Some(vendor) = app.vendors.selected_vendor() {
                app.modal.show_vendor_edit(&vendor);
            }
        }
        Page::Profiles => {
            if let Some(profile) = app.profiles.selected_profile() {
                app.modal.show_profile_edit(&profile);
            }
        }
        _ => {}
    }
}

fn handle_delete(app: &mut App) {
    if app.current_page == Page::Profiles {
        if let Some(profile) = app.profiles.selected_profile() {
            app.modal.show_confirm_delete_profile(&profile);
        }
    }
}

fn handle_start_search(app: &mut App) {
    if matches!(
        app.current_page,
        Page::Plans
            | Page::Vendors
            | Page::Profiles
            | Page::Numbers
            | Page::Assignments
            | Page::CallLogs
    ) {
        app.searching = true;
    }
}

fn handle_search_input(app: &mut App, ch: char) {
    match app.current_page {
        Page::Plans => app.plans.push_search(ch),
        Page::Vendors => app.vendors.push_search(ch),
        Page::Profiles => app.profiles.push_search(ch),
        Page::Numbers => app.numbers.push_search(ch),
        Page::Assignments => app.assignments.push_search(ch),
        Page::CallLogs => app.call_logs.push_search(ch),
        _ => {}
    }
}

fn handle_search_backspace(app: &mut App) {
    match app.current_page {
        Page::Plans => app.plans.pop_search(),
        Page::Vendors => app.vendors.pop_search(),
        Page::Profiles => app.profiles.pop_search(),
        Page::Numbers => app.numbers.pop_search(),
        Page::Assignments => app.assignments.pop_search(),
        Page::CallLogs => app.call_logs.pop_search(),
        _ => {}
    }
}

fn handle_search_clear(app: &mut App) {
    match app.current_page {
        Page::Plans => app.plans.clear_search(),
        Page::Vendors => app.vendors.clear_search(),
        Page::Profiles => app.profiles.clear_search(),
        Page::Numbers => app.numbers.clear_search(),
        Page::Assignments => app.assignments.clear_search(),
        Page::CallLogs => app.call_logs.clear_search(),
        _ => {}
    }
}

fn handle_toggle(app: &mut App, backend: &CoreService, forward: bool) {
    if app.current_page != Page::Settings {
        return;
    }
    if forward {
        app.settings.toggle_next();
    } else {
        app.settings.toggle_prev();
    }
    // Page-size changes reset every listing back to page one.
    if app.settings.current_item() == Some(SettingItem::PageSize) {
        app.set_page_size(app.settings.page_size);
    }
    backend.save_config(&AppConfig {
        base_url: app.base_url.clone(),
        theme: app.settings.theme,
        page_size: app.settings.page_size,
    });
}
