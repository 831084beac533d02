//! Number-to-plan assignment view
//!
//! On top of the usual listing chrome this page shows the active validity
//! bucket next to the search echo, a colored days-left badge per row and the
//! aggregate call limit in the footer.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, List, ListItem, ListState, Paragraph},
};

use dialer_console_core::types::days_left_severity;

use crate::model::App;
use crate::view::theme::{colors, days_left_color};

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let state = &app.assignments;
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

    let facets = state
        .bucket
        .map(|bucket| format!("validity: {}", bucket.label()));
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
        super::notice(frame, rows[2], "Loading assignments...");
    } else if let Some(err) = &state.error {
        super::error_notice(frame, rows[2], err);
    } else if paged.items.is_empty() {
        render_empty(frame, rows[2]);
    } else {
        render_list(app, frame, rows[2]);
    }

    render_footer(app, frame, rows[3]);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let c = colors();
    let header = format!(
        "  {:<18} {:<6} {:<10} {:<24} {:<8} {:<10} {:<10} {}",
        "NUMBER", "PLAN", "ACCOUNT", "EMAIL", "PRICE", "ASSIGNED", "VALIDITY", "DAYS LEFT"
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
        Line::styled("  No assignments match.", Style::default().fg(c.muted)),
        Line::from(""),
        Line::styled(
            "  Press f to change the validity filter.",
            Style::default().fg(c.muted),
        ),
    ];
    frame.render_widget(Paragraph::new(content), area);
}

fn render_list(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let paged = app.assignments.page();
    let items: Vec<ListItem> = paged
        .items
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let is_selected = i == app.assignments.selected;
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

            let badge_color = days_left_color(days_left_severity(&row.days_left));
            let badge_style = if is_selected {
                Style::default().fg(badge_color).bg(c.selected_bg)
            } else {
                Style::default().fg(badge_color)
            };

            let assigned = row
                .created_at
                .map(|at| at.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| "-".to_string());

            let line = Line::from(vec![
                Span::raw("  "),
                Span::styled(format!("{:<18}", super::fit(&row.number, 18)), style),
                Span::raw(" "),
                Span::styled(format!("{:<6}", row.plan_code), dim_style),
                Span::raw(" "),
                Span::styled(format!("{:<10}", super::fit(&row.aucode, 10)), dim_style),
                Span::raw(" "),
                Span::styled(format!("{:<24}", super::fit(&row.user_email, 24)), style),
                Span::raw(" "),
                Span::styled(
                    format!("{:<8}", super::fit(&row.buying_price, 8)),
                    dim_style,
                ),
                Span::raw(" "),
                Span::styled(format!("{assigned:<10}"), dim_style),
                Span::raw(" "),
                Span::styled(format!("{:<10}", super::fit(&row.validity, 10)), dim_style),
                Span::raw(" "),
                Span::styled(super::fit(&row.days_left, 12), badge_style),
            ]);
            ListItem::new(line)
        })
        .collect();

    let list = List::new(items)
        .block(Block::default())
        .highlight_style(Style::default());

    let mut list_state = ListState::default();
    list_state.select(Some(app.assignments.selected));

    frame.render_stateful_widget(list, area, &mut list_state);
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let paged = app.assignments.page();
    let line = Line::from(vec![
        Span::styled(
            format!(
                "  Page {}/{} · {} rows",
                paged.page,
                paged.page_count.max(1),
                paged.total_count
            ),
            Style::default().fg(c.muted),
        ),
        Span::styled(
            format!("   total call limit {}", app.assignments.total_call_limit),
            Style::default().fg(c.fg),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
