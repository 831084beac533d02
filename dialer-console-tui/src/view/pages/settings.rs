//! Settings page view

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use unicode_width::UnicodeWidthStr;

use crate::model::App;
use crate::model::state::SettingItem;
use crate::view::theme::colors;

/// Label column width, by display width
const LABEL_WIDTH: usize = 18;
/// Value area width, including the arrow marks
const VALUE_WIDTH: usize = 16;

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let settings = &app.settings;

    let mut lines = vec![Line::from("")];

    for (i, item) in SettingItem::ALL.iter().enumerate() {
        let value = match item {
            SettingItem::Theme => settings.theme.label().to_string(),
            SettingItem::PageSize => settings.page_size.to_string(),
        };
        lines.push(render_setting_row(
            item.label(),
            &value,
            settings.selected_index == i,
        ));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("  ↑↓", Style::default().fg(Color::Yellow)),
        Span::styled(" Move | ", Style::default().fg(c.muted)),
        Span::styled("←→", Style::default().fg(Color::Yellow)),
        Span::styled(" Change | ", Style::default().fg(c.muted)),
        Span::styled("Tab", Style::default().fg(Color::Yellow)),
        Span::styled(" Panel", Style::default().fg(c.muted)),
    ]));
    lines.push(Line::from(""));
    lines.push(Line::styled(
        "  Changes are saved to the config file right away.",
        Style::default().fg(c.muted),
    ));

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_setting_row(label: &str, value: &str, is_selected: bool) -> Line<'static> {
    let c = colors();
    let prefix = if is_selected { "▶ " } else { "  " };

    let label_style = if is_selected {
        Style::default().fg(c.fg).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.muted)
    };
    let value_style = if is_selected {
        Style::default()
            .fg(c.highlight)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.highlight)
    };

    let label_padding = LABEL_WIDTH.saturating_sub(label.width());

    // Center the value between the arrow marks.
    let available = VALUE_WIDTH.saturating_sub(4);
    let left_padding = available.saturating_sub(value.width()) / 2;
    let right_padding = available
        .saturating_sub(value.width())
        .saturating_sub(left_padding);

    let mut spans = vec![
        Span::styled(prefix.to_string(), label_style),
        Span::styled(format!("  {label}"), label_style),
        Span::raw(format!("{:width$}", "", width = label_padding)),
        Span::styled(": ", Style::default().fg(c.muted)),
    ];

    if is_selected {
        spans.push(Span::styled("◀ ", Style::default().fg(Color::Yellow)));
    } else {
        spans.push(Span::raw("  "));
    }
    spans.push(Span::raw(format!("{:width$}", "", width = left_padding)));
    spans.push(Span::styled(value.to_string(), value_style));
    spans.push(Span::raw(format!("{:width$}", "", width = right_padding)));
    if is_selected {
        spans.push(Span::styled(" ▶", Style::default().fg(Color::Yellow)));
    }

    Line::from(spans)
}
