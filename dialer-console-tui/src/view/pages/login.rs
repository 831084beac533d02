//! Sign-in page view

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::Paragraph,
};

use crate::model::App;
use crate::view::theme::colors;

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let login = &app.login;
    let form = super::centered_rect(44, 16, area);

    let mut lines = vec![
        Line::from(""),
        Line::styled(
            "  Sign in to Dialer Console",
            Style::default()
                .fg(c.highlight)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        super::field_label("Email", login.focus == 0),
        super::field_value(&login.email, login.focus == 0, false),
        super::field_label("Password", login.focus == 1),
        super::field_value(&login.password, login.focus == 1, true),
        Line::from(""),
        super::button_line("Sign in", login.focus == 2),
        Line::from(""),
        super::link_line("Create an account", login.focus == 3),
        super::link_line("Forgot password?", login.focus == 4),
        Line::from(""),
    ];

    if let Some(err) = &login.error {
        lines.push(Line::styled(
            format!("  ⚠ {err}"),
            Style::default().fg(c.error),
        ));
    } else if login.loading {
        lines.push(Line::styled(
            "  Signing in...",
            Style::default().fg(c.warning),
        ));
    }

    frame.render_widget(Paragraph::new(lines), form);
}
