//! User profile list view

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, List, ListItem, ListState, Paragraph},
};

use crate::model::App;
use crate::view::theme::colors;

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let state = &app.profiles;
    let paged = state.page();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    frame.render_widget(
        Paragraph::new(super::search_line(&state.query.keyword, app.searching, None)),
        rows[0],
    );
    render_header(frame, rows[1]);

    if state.loading {
        super::notice(frame, rows[2], "Loading profiles...");
    } else if let Some(err) = &state.error {
        super::error_notice(frame, rows[2], err);
    } else if paged.items.is_empty() {
        super::notice(frame, rows[2], "No profiles found.");
    } else {
        render_list(app, frame, rows[2]);
    }

    frame.render_widget(Paragraph::new(super::footer_line(&paged)), rows[3]);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let c = colors();
    let header = format!(
        "  {:<12} {:<22} {:<28} {}",
        "ACCOUNT", "NAME", "EMAIL", "PHONE"
    );
    frame.render_widget(
        Paragraph::new(Line::styled(
            header,
            Style::default().fg(c.muted).add_modifier(Modifier::BOLD),
        )),
        area,
    );
}

fn render_list(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let paged = app.profiles.page();
    let items: Vec<ListItem> = paged
        .items
        .iter()
        .enumerate()
        .map(|(i, profile)| {
            let is_selected = i == app.profiles.selected;
            let style = if is_selected {
                Style::default()
                    .fg(c.selected_fg)
                    .bg(c.selected_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(c.fg)
            };
            let dim_style = if is_selected {
                Style::default().fg(c.selected_fg).bg(c.selected_bg)
            } else {
                Style::default().fg(c.muted)
            };

            let line = Line::from(vec![
                Span::raw("  "),
                Span::styled(
                    format!("{:<12}", super::fit(&profile.aucode, 12)),
                    dim_style,
                ),
                Span::raw(" "),
                Span::styled(format!("{:<22}", super::fit(&profile.name, 22)), style),
                Span::raw(" "),
                Span::styled(format!("{:<28}", super::fit(&profile.email, 28)), style),
                Span::raw(" "),
                Span::styled(super::fit(&profile.phone, 16), dim_style),
            ]);
            ListItem::new(line)
        })
        .collect();

    let list = List::new(items)
        .block(Block::default())
        .highlight_style(Style::default());

    let mut list_state = ListState::default();
    list_state.select(Some(app.profiles.selected));

    frame.render_stateful_widget(list, area, &mut list_state);
}
