//! Status bar: context key hints plus the one-line notice

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::model::state::Modal;
use crate::model::{App, FocusPanel, Page};
use crate::view::theme::Styles;

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let hints = get_hints(app);

    let mut spans = Vec::new();
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    if let Some(message) = &app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(
            message.clone(),
            Style::default().fg(Color::Yellow),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    if let Some(modal) = &app.modal.active {
        return match modal {
            Modal::ConfirmDeleteProfile { .. } => {
                vec![("←→", "Choose"), ("Enter", "Confirm"), ("Esc", "Cancel")]
            }
            Modal::Help | Modal::Error { .. } => vec![("Enter", "Close")],
            _ => vec![("Tab", "Next field"), ("Enter", "Save"), ("Esc", "Cancel")],
        };
    }

    if app.current_page.is_auth_page() {
        let mut hints = vec![("Tab", "Next field"), ("Enter", "Confirm")];
        if app.current_page != Page::Login {
            hints.push(("Esc", "Back"));
        }
        hints.push(("Alt+q", "Quit"));
        return hints;
    }

    if app.searching {
        return vec![("Type", "Filter"), ("Enter", "Done"), ("Esc", "Clear")];
    }

    let mut hints = vec![("Tab", "Panel")];
    match app.focus {
        FocusPanel::Navigation => {
            hints.push(("↑↓", "Move"));
            hints.push(("Enter", "Open"));
        }
        FocusPanel::Content => match app.current_page {
            Page::Plans | Page::Vendors => {
                hints.push(("↑↓", "Select"));
                hints.push(("←→", "Page"));
                hints.push(("/", "Search"));
                hints.push(("Alt+a", "Add"));
                hints.push(("Alt+e", "Edit"));
            }
            Page::Profiles => {
                hints.push(("↑↓", "Select"));
                hints.push(("←→", "Page"));
                hints.push(("/", "Search"));
                hints.push(("Alt+e", "Edit"));
                hints.push(("Alt+d", "Delete"));
            }
            Page::Numbers => {
                hints.push(("↑↓", "Select"));
                hints.push(("←→", "Page"));
                hints.push(("/", "Search"));
            }
            Page::Assignments => {
                hints.push(("↑↓", "Select"));
                hints.push(("←→", "Page"));
                hints.push(("/", "Search"));
                hints.push(("f", "Validity"));
            }
            Page::CallLogs => {
                hints.push(("↑↓", "Select"));
                hints.push(("←→", "Page"));
                hints.push(("/", "Search"));
                hints.push(("e", "Event"));
                hints.push(("f", "Result"));
            }
            Page::Settings => {
                hints.push(("↑↓", "Select"));
                hints.push(("←→", "Change"));
            }
            _ => {}
        },
    }
    hints.push(("Alt+h", "Help"));
    hints
}
