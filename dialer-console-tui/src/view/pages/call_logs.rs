//! Call event feed view

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, List, ListItem, ListState, Paragraph},
};

use dialer_console_core::types::classify_call_result;

use crate::model::App;
use crate::view::theme::{call_result_color, colors};

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let state = &app.call_logs;
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

    let mut filters = Vec::new();
    if let Some(event) = &state.event_filter {
        filters.push(format!("event: {event}"));
    }
    if let Some(result) = &state.result_filter {
        filters.push(format!("result: {result}"));
    }
    let facets = if filters.is_empty() {
        None
    } else {
        Some(filters.join(" · "))
    };

    frame.render_widget(
        Paragraph::new(super::search_line(
            &state.query.keyword,
            app.searching,
            facets,
        )),
        rows[0],
    );
    render_header(frame, rows[1]);

    if state.loading {
        super::notice(frame, rows[2], "Loading call logs...");
    } else if let Some(err) = &state.error {
        super::error_notice(frame, rows[2], err);
    } else if paged.items.is_empty() {
        render_empty(frame, rows[2]);
    } else {
        render_list(app, frame, rows[2]);
    }

    frame.render_widget(Paragraph::new(super::footer_line(&paged)), rows[3]);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let c = colors();
    let header = format!(
        "  {:<20} {:<16} {:<18} {:<12} {}",
        "STARTED", "CALLER", "EVENT", "RESULT", "CALL ID"
    );
    frame.render_widget(
        Paragraph::new(Line::styled(
            header,
            Style::default().fg(c.muted).add_modifier(Modifier::BOLD),
        )),
        area,
    );
}

fn render_empty(frame: &mut Frame, area: Rect) {
    let c = colors();
    let content = vec![
        Line::from(""),
        Line::styled("  No call events.", Style::default().fg(c.muted)),
        Line::from(""),
        Line::styled(
            "  Events arrive from the trunk webhook.",
            Style::default().fg(c.muted),
        ),
    ];
    frame.render_widget(Paragraph::new(content), area);
}

fn render_list(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let paged = app.call_logs.page();
    let items: Vec<ListItem> = paged
        .items
        .iter()
        .enumerate()
        .map(|(i, log)| {
            let is_selected = i == app.call_logs.selected;
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

            let result_color = call_result_color(classify_call_result(&log.result));
            let result_style = if is_selected {
                Style::default().fg(result_color).bg(c.selected_bg)
            } else {
                Style::default().fg(result_color)
            };

            let started = log.started_at.as_deref().unwrap_or("-");

            let line = Line::from(vec![
                Span::raw("  "),
                Span::styled(format!("{:<20}", super::fit(started, 20)), dim_style),
                Span::raw(" "),
                Span::styled(
                    format!("{:<16}", super::fit(&log.caller_number, 16)),
                    style,
                ),
                Span::raw(" "),
                Span::styled(format!("{:<18}", super::fit(&log.event, 18)), style),
                Span::raw(" "),
                Span::styled(format!("{:<12}", super::fit(&log.result, 12)), result_style),
                Span::raw(" "),
                Span::styled(super::fit(&log.call_id, 24), dim_style),
            ]);
            ListItem::new(line)
        })
        .collect();

    let list = List::new(items)
        .block(Block::default())
        .highlight_style(Style::default());

    let mut list_state = ListState::default();
    list_state.select(Some(app.call_logs.selected));

    frame.render_stateful_widget(list, area, &mut list_state);
}
