//! Page views
//!
//! One module per screen, plus the line helpers the listing and auth pages
//! share: the search echo, the pager footer and the form field styling.

pub mod assignments;
pub mod call_logs;
pub mod forgot_password;
pub mod home;
pub mod login;
pub mod numbers;
pub mod plans;
pub mod profiles;
pub mod register;
pub mod settings;
pub mod vendors;

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use dialer_console_core::types::Paged;

use crate::view::theme::colors;

/// Search echo above a listing. Shows the cursor while search input is
/// active, the sticky keyword after, and the facet summary when one is on.
pub(crate) fn search_line(keyword: &str, searching: bool, facets: Option<String>) -> Line<'static> {
    let c = colors();
    let mut spans = vec![Span::raw("  ")];
    if searching {
        spans.push(Span::styled("/ ", Style::default().fg(Color::Yellow)));
        spans.push(Span::styled(
            format!("{keyword}▎"),
            Style::default().fg(c.highlight),
        ));
    } else if keyword.is_empty() {
        spans.push(Span::styled(
            "Press / to search",
            Style::default().fg(c.muted),
        ));
    } else {
        spans.push(Span::styled("/ ", Style::default().fg(c.muted)));
        spans.push(Span::styled(
            keyword.to_string(),
            Style::default().fg(c.fg),
        ));
    }
    if let Some(facets) = facets {
        spans.push(Span::raw("   "));
        spans.push(Span::styled(facets, Style::default().fg(Color::Yellow)));
    }
    Line::from(spans)
}

/// Pager footer under a listing.
pub(crate) fn footer_line<T>(paged: &Paged<T>) -> Line<'static> {
    let c = colors();
    Line::styled(
        format!(
            "  Page {}/{} · {} rows",
            paged.page,
            paged.page_count.max(1),
            paged.total_count
        ),
        Style::default().fg(c.muted),
    )
}

/// Muted one-liner for loading and empty states.
pub(crate) fn notice(frame: &mut Frame, area: Rect, text: &str) {
    let c = colors();
    let content = vec![
        Line::from(""),
        Line::styled(format!("  {text}"), Style::default().fg(c.muted)),
    ];
    frame.render_widget(Paragraph::new(content), area);
}

/// Load failure shown in place of the rows.
pub(crate) fn error_notice(frame: &mut Frame, area: Rect, text: &str) {
    let c = colors();
    let content = vec![
        Line::from(""),
        Line::styled(format!("  ⚠ {text}"), Style::default().fg(c.error)),
        Line::from(""),
        Line::styled(
            "  Press Alt+r to retry.",
            Style::default().fg(c.muted),
        ),
    ];
    frame.render_widget(Paragraph::new(content), area);
}

/// Char-safe column fit; longer values end in `...`.
pub(crate) fn fit(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let cut: String = value.chars().take(width.saturating_sub(3)).collect();
    format!("{cut}...")
}

/// Centers a fixed-size box inside `area`.
pub(crate) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

// ========== Auth form lines ==========

pub(crate) fn field_label(label: &str, focused: bool) -> Line<'static> {
    let c = colors();
    let style = if focused {
        Style::default()
            .fg(c.highlight)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.muted)
    };
    Line::styled(format!("  {label}"), style)
}

pub(crate) fn field_value(value: &str, focused: bool, secret: bool) -> Line<'static> {
    let c = colors();
    let shown = if secret && !value.is_empty() {
        "•".repeat(value.chars().count().min(20))
    } else {
        value.to_string()
    };
    if focused {
        Line::styled(format!("  {shown}▎"), Style::default().fg(c.highlight))
    } else {
        Line::styled(format!("  {shown}"), Style::default().fg(c.fg))
    }
}

pub(crate) fn button_line(label: &str, focused: bool) -> Line<'static> {
    let c = colors();
    let style = if focused {
        Style::default()
            .fg(c.selected_fg)
            .bg(c.highlight)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.fg)
    };
    Line::from(vec![
        Span::raw("  "),
        Span::styled(format!(" {label} "), style),
    ])
}

pub(crate) fn link_line(label: &str, focused: bool) -> Line<'static> {
    let c = colors();
    let style = if focused {
        Style::default()
            .fg(c.highlight)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    } else {
        Style::default().fg(c.muted)
    };
    Line::from(vec![Span::raw("  "), Span::styled(label.to_string(), style)])
}
