//! Top-level frame layout
//!
//! Three rows everywhere: title bar, content, status bar. Signed-in pages
//! split the content row into the navigation sidebar and the page panel;
//! the auth pages take the full width.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::model::{App, Page};

use super::components;
use super::pages;
use super::theme::{Styles, colors};

pub fn render(app: &App, frame: &mut Frame) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title bar
            Constraint::Min(1),    // content
            Constraint::Length(1), // status bar
        ])
        .split(frame.area());

    render_title_bar(app, frame, rows[0]);

    if app.current_page.is_auth_page() {
        render_page_content(app, frame, rows[1]);
    } else {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(sidebar_constraints(app))
            .split(rows[1]);

        components::navigation::render(app, frame, columns[0]);
        render_page_content(app, frame, columns[1]);
    }

    components::statusbar::render(app, frame, rows[2]);

    // Dialogs paint over everything else.
    components::modal::render(app, frame);
}

/// Collapsed sidebars keep a narrow icon rail instead of vanishing.
fn sidebar_constraints(app: &App) -> [Constraint; 2] {
    if app.sidebar_open {
        [Constraint::Percentage(20), Constraint::Percentage(80)]
    } else {
        [Constraint::Length(6), Constraint::Min(1)]
    }
}

fn render_title_bar(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let mut spans = vec![Span::styled(
        " Dialer Console",
        Style::default().add_modifier(Modifier::BOLD),
    )];
    if let Some(session) = &app.session {
        if let Some(email) = &session.user.email {
            spans.push(Span::raw(format!("  ·  {email}")));
        }
    }
    let title =
        Paragraph::new(Line::from(spans)).style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(title, area);
}

fn render_page_content(app: &App, frame: &mut Frame, area: Rect) {
    // Auth pages are single-panel, so their border always reads as focused.
    let is_focused = app.focus.is_content() || app.current_page.is_auth_page();
    let border_style = if is_focused {
        Styles::border_focused()
    } else {
        Styles::border()
    };

    let block = Block::default()
        .title(format!(" {} ", app.current_page.title()))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(border_style);

    let inner = block.inner(area);
    frame.render_widget(block, area);

    match app.current_page {
        Page::Login => pages::login::render(app, frame, inner),
        Page::Register => pages::register::render(app, frame, inner),
        Page::ForgotPassword => pages::forgot_password::render(app, frame, inner),
        Page::Home => pages::home::render(app, frame, inner),
        Page::Plans => pages::plans::render(app, frame, inner),
        Page::Vendors => pages::vendors::render(app, frame, inner),
        Page::Profiles => pages::profiles::render(app, frame, inner),
        Page::Numbers => pages::numbers::render(app, frame, inner),
        Page::Assignments => pages::assignments::render(app, frame, inner),
        Page::CallLogs => pages::call_logs::render(app, frame, inner),
        Page::Settings => pages::settings::render(app, frame, inner),
    }
}
