//! Keyboard dispatch: terminal events to messages
//!
//! Routing order matters: an open dialog captures everything, the pre-login
//! pages and the search box swallow printable keys, and only then do the
//! global chords and the per-panel keys apply.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::message::{AppMessage, AuthMessage, ContentMessage, ModalMessage, NavigationMessage};
use crate::model::state::Modal;
use crate::model::{App, Page};

use super::keymap::DefaultKeymap;

/// Maps a terminal event onto an application message.
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key) => handle_key_event(key, app),
        Event::Resize(_, _) => AppMessage::Noop,
        _ => AppMessage::Noop,
    }
}

fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // Release and repeat events would double every keystroke on Windows.
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if app.modal.is_open() {
        return handle_modal_keys(key, app);
    }

    if app.current_page.is_auth_page() {
        return handle_auth_keys(key, app);
    }

    if app.searching {
        return handle_search_keys(key);
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    if DefaultKeymap::HELP.matches(&key) || key.code == KeyCode::Char('?') {
        return AppMessage::ShowHelp;
    }
    if DefaultKeymap::REFRESH.matches(&key) {
        return AppMessage::Refresh;
    }
    if DefaultKeymap::LOGOUT.matches(&key) {
        return AppMessage::Logout;
    }
    if DefaultKeymap::TOGGLE_SIDEBAR.matches(&key) {
        return AppMessage::ToggleSidebar;
    }
    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::GoBack;
    }
    if key.code == KeyCode::Tab {
        return AppMessage::ToggleFocus;
    }

    if app.focus.is_navigation() {
        handle_navigation_keys(key)
    } else {
        handle_content_keys(key, app)
    }
}

/// Printable input: bare keys and shifted keys, nothing with Alt or Ctrl.
fn is_text_input(key: &KeyEvent) -> bool {
    key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT
}

fn handle_navigation_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            AppMessage::Navigation(NavigationMessage::SelectPrevious)
        }
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Navigation(NavigationMessage::SelectNext),
        KeyCode::Home => AppMessage::Navigation(NavigationMessage::SelectFirst),
        KeyCode::End => AppMessage::Navigation(NavigationMessage::SelectLast),
        KeyCode::Enter => AppMessage::Navigation(NavigationMessage::Confirm),
        _ => AppMessage::Noop,
    }
}

fn handle_content_keys(key: KeyEvent, app: &App) -> AppMessage {
    match app.current_page {
        Page::Settings => handle_settings_keys(key),
        Page::Home => AppMessage::Noop,
        _ => handle_list_keys(key, app),
    }
}

fn handle_list_keys(key: KeyEvent, app: &App) -> AppMessage {
    if DefaultKeymap::ACTION_ADD.matches(&key) {
        return AppMessage::Content(ContentMessage::Add);
    }
    if DefaultKeymap::ACTION_EDIT.matches(&key) {
        return AppMessage::Content(ContentMessage::Edit);
    }
    if DefaultKeymap::ACTION_DELETE.matches(&key) {
        return AppMessage::Content(ContentMessage::Delete);
    }
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Content(ContentMessage::SelectPrevious),
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Content(ContentMessage::SelectNext),
        KeyCode::Left | KeyCode::Char('h') => AppMessage::Content(ContentMessage::PrevPage),
        KeyCode::Right | KeyCode::Char('l') => AppMessage::Content(ContentMessage::NextPage),
        KeyCode::Home => AppMessage::Content(ContentMessage::SelectFirst),
        KeyCode::End => AppMessage::Content(ContentMessage::SelectLast),
        KeyCode::Enter => AppMessage::Content(ContentMessage::Confirm),
        KeyCode::Char('/') => AppMessage::Content(ContentMessage::StartSearch),
        KeyCode::Char('e') if app.current_page == Page::CallLogs => {
            AppMessage::Content(ContentMessage::CycleEventFilter)
        }
        KeyCode::Char('f') if app.current_page == Page::CallLogs => {
            AppMessage::Content(ContentMessage::CycleResultFilter)
        }
        KeyCode::Char('f') if app.current_page == Page::Assignments => {
            AppMessage::Content(ContentMessage::CycleBucketFilter)
        }
        _ => AppMessage::Noop,
    }
}

fn handle_settings_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Content(ContentMessage::SelectPrevious),
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Content(ContentMessage::SelectNext),
        KeyCode::Left => AppMessage::Content(ContentMessage::TogglePrev),
        KeyCode::Right => AppMessage::Content(ContentMessage::ToggleNext),
        _ => AppMessage::Noop,
    }
}

fn handle_search_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    match key.code {
        KeyCode::Enter => AppMessage::Content(ContentMessage::SearchAccept),
        KeyCode::Esc => AppMessage::Content(ContentMessage::SearchCancel),
        KeyCode::Backspace => AppMessage::Content(ContentMessage::SearchBackspace),
        KeyCode::Char(ch) if is_text_input(&key) => {
            AppMessage::Content(ContentMessage::SearchInput(ch))
        }
        _ => AppMessage::Noop,
    }
}

fn handle_auth_keys(key: KeyEvent, app: &App) -> AppMessage {
    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    // Esc backs out of the secondary forms onto the login page.
    if DefaultKeymap::BACK.matches(&key) && app.current_page != Page::Login {
        return AppMessage::GoBack;
    }
    match key.code {
        KeyCode::Tab | KeyCode::Down => AppMessage::Auth(AuthMessage::NextField),
        KeyCode::BackTab | KeyCode::Up => AppMessage::Auth(AuthMessage::PrevField),
        KeyCode::Enter => AppMessage::Auth(AuthMessage::Confirm),
        KeyCode::Backspace => AppMessage::Auth(AuthMessage::Backspace),
        KeyCode::Char(ch) if is_text_input(&key) => AppMessage::Auth(AuthMessage::Input(ch)),
        _ => AppMessage::Noop,
    }
}

fn handle_modal_keys(key: KeyEvent, app: &App) -> AppMessage {
    // Esc and Ctrl+C always dismiss, whatever the dialog.
    if DefaultKeymap::BACK.matches(&key) || DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Modal(ModalMessage::Close);
    }
    match &app.modal.active {
        Some(Modal::PlanForm { .. } | Modal::VendorForm { .. } | Modal::ProfileForm { .. }) => {
            handle_form_modal_keys(key)
        }
        Some(Modal::ConfirmDeleteProfile { .. }) => handle_confirm_delete_keys(key),
        Some(Modal::Help | Modal::Error { .. }) => match key.code {
            KeyCode::Enter => AppMessage::Modal(ModalMessage::Close),
            _ => AppMessage::Noop,
        },
        None => AppMessage::Noop,
    }
}

fn handle_form_modal_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Tab | KeyCode::Down => AppMessage::Modal(ModalMessage::NextField),
        KeyCode::BackTab | KeyCode::Up => AppMessage::Modal(ModalMessage::PrevField),
        KeyCode::Enter => AppMessage::Modal(ModalMessage::Confirm),
        KeyCode::Backspace => AppMessage::Modal(ModalMessage::Backspace),
        KeyCode::Char(ch) if is_text_input(&key) => AppMessage::Modal(ModalMessage::Input(ch)),
        _ => AppMessage::Noop,
    }
}

fn handle_confirm_delete_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Left | KeyCode::Right | KeyCode::Tab => {
            AppMessage::Modal(ModalMessage::ToggleDeleteFocus)
        }
        KeyCode::Enter => AppMessage::Modal(ModalMessage::Confirm),
        _ => AppMessage::Noop,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FocusPanel;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn alt(ch: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(ch), KeyModifiers::ALT)
    }

    fn main_page_app(page: Page) -> App {
        let mut app = App::new();
        app.current_page = page;
        app.focus = FocusPanel::Content;
        app
    }

    #[test]
    fn typing_q_on_the_login_page_is_input_not_quit() {
        let app = App::new();
        let message = handle_event(Event::Key(key(KeyCode::Char('q'))), &app);
        assert!(matches!(message, AppMessage::Auth(AuthMessage::Input('q'))));
    }

    #[test]
    fn alt_q_quits_on_main_pages() {
        let app = main_page_app(Page::Plans);
        let message = handle_event(Event::Key(alt('q')), &app);
        assert!(matches!(message, AppMessage::Quit));
    }

    #[test]
    fn slash_starts_search_on_a_listing() {
        let app = main_page_app(Page::Vendors);
        let message = handle_event(Event::Key(key(KeyCode::Char('/'))), &app);
        assert!(matches!(
            message,
            AppMessage::Content(ContentMessage::StartSearch)
        ));
    }

    #[test]
    fn search_mode_swallows_printable_keys() {
        let mut app = main_page_app(Page::Plans);
        app.searching = true;
        let message = handle_event(Event::Key(key(KeyCode::Char('k'))), &app);
        assert!(matches!(
            message,
            AppMessage::Content(ContentMessage::SearchInput('k'))
        ));
    }

    #[test]
    fn uppercase_input_passes_the_shift_modifier() {
        let app = App::new();
        let shifted = KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT);
        let message = handle_event(Event::Key(shifted), &app);
        assert!(matches!(message, AppMessage::Auth(AuthMessage::Input('A'))));
    }

    #[test]
    fn esc_closes_an_open_dialog_before_anything_else() {
        let mut app = main_page_app(Page::Plans);
        app.modal.show_plan_create();
        let message = handle_event(Event::Key(key(KeyCode::Esc)), &app);
        assert!(matches!(message, AppMessage::Modal(ModalMessage::Close)));
    }

    #[test]
    fn f_cycles_the_bucket_only_on_the_assignments_page() {
        let assignments = main_page_app(Page::Assignments);
        let message = handle_event(Event::Key(key(KeyCode::Char('f'))), &assignments);
        assert!(matches!(
            message,
            AppMessage::Content(ContentMessage::CycleBucketFilter)
        ));

        let plans = main_page_app(Page::Plans);
        let message = handle_event(Event::Key(key(KeyCode::Char('f'))), &plans);
        assert!(matches!(message, AppMessage::Noop));
    }

    #[test]
    fn release_events_are_ignored() {
        let app = main_page_app(Page::Plans);
        let mut released = alt('q');
        released.kind = KeyEventKind::Release;
        let message = handle_event(Event::Key(released), &app);
        assert!(matches!(message, AppMessage::Noop));
    }

    #[test]
    fn tab_toggles_focus_on_main_pages() {
        let app = main_page_app(Page::Plans);
        let message = handle_event(Event::Key(key(KeyCode::Tab)), &app);
        assert!(matches!(message, AppMessage::ToggleFocus));
    }
}
