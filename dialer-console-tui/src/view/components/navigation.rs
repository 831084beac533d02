//! Navigation sidebar

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
};

use crate::model::App;
use crate::view::theme::{Styles, colors};

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let border_style = if app.focus.is_navigation() {
        Styles::border_focused()
    } else {
        Styles::border()
    };

    let block = Block::default()
        .title(" Menu ")
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(border_style);

    let items: Vec<ListItem> = app
        .navigation
        .items
        .iter()
        .enumerate()
        .map(|(i, nav_item)| {
            let is_selected = i == app.navigation.selected;
            let prefix = if is_selected { "▶ " } else { "  " };

            // Collapsed rails show just the icons.
            let content = if app.sidebar_open {
                format!("{}{} {}", prefix, nav_item.icon, nav_item.label)
            } else {
                format!("{}{}", prefix, nav_item.icon)
            };

            let style = if is_selected {
                Style::default()
                    .bg(c.selected_bg)
                    .fg(c.selected_fg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(c.fg)
            };

            ListItem::new(Line::from(Span::styled(content, style)))
        })
        .collect();

    let list = List::new(items).block(block).highlight_style(
        Style::default()
            .bg(c.selected_bg)
            .fg(c.selected_fg)
            .add_modifier(Modifier::BOLD),
    );

    let mut state = ListState::default();
    state.select(Some(app.navigation.selected));

    frame.render_stateful_widget(list, area, &mut state);
}
