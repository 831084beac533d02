//! Dashboard view

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::model::App;
use crate::view::theme::colors;

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(1)])
        .split(area);

    let welcome = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  Welcome to Dialer Console",
            Style::default()
                .fg(c.highlight)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "  Manage plans, vendors, numbers and call logs from the sidebar.",
            Style::default().fg(c.muted),
        )),
        Line::from(""),
    ];
    frame.render_widget(Paragraph::new(welcome), layout[0]);

    let blocks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(layout[1]);

    render_session_block(app, frame, blocks[0]);
    render_backend_block(app, frame, blocks[1]);
}

fn render_session_block(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let block = Block::default()
        .title(" Session ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border));

    let mut lines = vec![Line::from("")];
    if let Some(session) = &app.session {
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(
                session.display_name(),
                Style::default().fg(c.success).add_modifier(Modifier::BOLD),
            ),
        ]));
        if let Some(email) = &session.user.email {
            lines.push(Line::styled(
                format!("  {email}"),
                Style::default().fg(c.muted),
            ));
        }
        lines.push(Line::styled(
            format!("  role: {}", session.role),
            Style::default().fg(c.muted),
        ));
    } else {
        lines.push(Line::styled(
            "  Not signed in",
            Style::default().fg(c.muted),
        ));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_backend_block(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let block = Block::default()
        .title(" Backend ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border));

    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(app.base_url.clone(), Style::default().fg(c.fg)),
        ]),
        Line::styled(
            "  Listings load when you open their page.",
            Style::default().fg(c.muted),
        ),
        Line::from(""),
        Line::styled(
            "  Press Alt+h for the key reference.",
            Style::default().fg(c.muted),
        ),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
