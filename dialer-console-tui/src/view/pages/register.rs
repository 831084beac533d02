//! Registration page view

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
    let register = &app.register;
    let form = super::centered_rect(46, 24, area);

    let fields: [(&str, &String, bool); 6] = [
        ("Name", &register.name, false),
        ("Email", &register.email, false),
        ("Phone", &register.phone, false),
        ("ID document", &register.document, false),
        ("Password", &register.password, true),
        ("Confirm password", &register.confirm_password, true),
    ];

    let mut lines = vec![
        Line::from(""),
        Line::styled(
            "  Create an account",
            Style::default()
                .fg(c.highlight)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
    ];

    for (i, (label, value, secret)) in fields.iter().enumerate() {
        lines.push(super::field_label(label, register.focus == i));
        lines.push(super::field_value(value, register.focus == i, *secret));
    }

    lines.push(Line::from(""));
    lines.push(super::button_line("Create account", register.focus == 6));
    lines.push(Line::from(""));
    lines.push(super::link_line("Back to sign in", register.focus == 7));
    lines.push(Line::from(""));

    if let Some(err) = &register.error {
        lines.push(Line::styled(
            format!("  ⚠ {err}"),
            Style::default().fg(c.error),
        ));
    } else if register.loading {
        lines.push(Line::styled(
            "  Creating account...",
            Style::default().fg(c.warning),
        ));
    }

    frame.render_widget(Paragraph::new(lines), form);
}
