//! Plan catalogue view

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
    let state = &app.plans;
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
        super::notice(frame, rows[2], "Loading plans...");
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
        "  {:<8} {:<20} {:<10} {:<8} {:<8} {:<8} {:<8} {}",
        "CODE", "NAME", "COUNTRY", "PRICE", "CALLS", "SMS", "DATA", "VALIDITY"
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
        Line::styled("  No plans found.", Style::default().fg(c.muted)),
        Line::from(""),
        Line::styled(
            "  Press Alt+a to create a plan.",
            Style::default().fg(c.muted),
        ),
    ];
    frame.render_widget(Paragraph::new(content), area);
}

fn render_list(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let paged = app.plans.page();
    let items: Vec<ListItem> = paged
        .items
        .iter()
        .enumerate()
        .map(|(i, plan)| {
            let is_selected = i == app.plans.selected;
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
                Span::styled(format!("{:<8}", plan.plan_code), dim_style),
                Span::raw(" "),
                Span::styled(format!("{:<20}", super::fit(&plan.plan_name, 20)), style),
                Span::raw(" "),
                Span::styled(format!("{:<10}", super::fit(&plan.country, 10)), style),
                Span::raw(" "),
                Span::styled(format!("{:<8}", super::fit(&plan.price, 8)), style),
                Span::raw(" "),
                Span::styled(format!("{:<8}", super::fit(&plan.call_limit, 8)), dim_style),
                Span::raw(" "),
                Span::styled(format!("{:<8}", super::fit(&plan.sms_limit, 8)), dim_style),
                Span::raw(" "),
                Span::styled(format!("{:<8}", super::fit(&plan.data_limit, 8)), dim_style),
                Span::raw(" "),
                Span::styled(super::fit(&plan.validity, 14), style),
            ]);
            ListItem::new(line)
        })
        .collect();

    let list = List::new(items)
        .block(Block::default())
        .highlight_style(Style::default());

    let mut list_state = ListState::default();
    list_state.select(Some(app.plans.selected));

    frame.render_stateful_widget(list, area, &mut list_state);
}
