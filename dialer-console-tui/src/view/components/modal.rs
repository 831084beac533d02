//! Dialog rendering
//!
//! The form dialogs share one compact layout: a label column and a value
//! column per field, the inline error or the in-flight note under the
//! fields, and the key hints at the bottom.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::model::App;
use crate::model::state::Modal;

pub fn render(app: &App, frame: &mut Frame) {
    let Some(modal) = &app.modal.active else {
        return;
    };

    match modal {
        Modal::PlanForm { .. } => render_plan_form(frame, modal),
        Modal::VendorForm { .. } => render_vendor_form(frame, modal),
        Modal::ProfileForm { .. } => render_profile_form(frame, modal),
        Modal::ConfirmDeleteProfile { .. } => render_confirm_delete(frame, modal),
        Modal::Help => render_help(frame),
        Modal::Error { title, message } => render_error(frame, title, message),
    }
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

fn render_plan_form(frame: &mut Frame, modal: &Modal) {
    let Modal::PlanForm {
        plan_code,
        plan_name,
        country,
        description,
        price,
        call_limit,
        sms_limit,
        data_limit,
        validity,
        focus,
        error,
        loading,
        ..
    } = modal
    else {
        return;
    };

    let title = if plan_code.is_some() {
        " Edit Plan "
    } else {
        " New Plan "
    };
    let fields: [(&str, &String); 8] = [
        ("Plan name", plan_name),
        ("Country", country),
        ("Description", description),
        ("Price", price),
        ("Call limit", call_limit),
        ("SMS limit", sms_limit),
        ("Data limit", data_limit),
        ("Validity", validity),
    ];
    render_form(
        frame,
        title,
        None,
        &fields,
        *focus,
        error.as_deref(),
        *loading,
        None,
    );
}

fn render_vendor_form(frame: &mut Frame, modal: &Modal) {
    let Modal::VendorForm {
        vendor_code,
        vendor_name,
        vendor_planlist,
        price,
        description,
        focus,
        error,
        loading,
        ..
    } = modal
    else {
        return;
    };

    let title = if vendor_code.is_some() {
        " Edit Vendor "
    } else {
        " New Vendor "
    };
    let fields: [(&str, &String); 4] = [
        ("Vendor name", vendor_name),
        ("Plan list", vendor_planlist),
        ("Price", price),
        ("Description", description),
    ];
    render_form(
        frame,
        title,
        None,
        &fields,
        *focus,
        error.as_deref(),
        *loading,
        None,
    );
}

fn render_profile_form(frame: &mut Frame, modal: &Modal) {
    let Modal::ProfileForm {
        aucode,
        name,
        email,
        phone,
        password,
        focus,
        error,
        loading,
        ..
    } = modal
    else {
        return;
    };

    let subtitle = format!("Account {aucode}");
    let fields: [(&str, &String); 4] = [
        ("Name", name),
        ("Email", email),
        ("Phone", phone),
        ("Password", password),
    ];
    render_form(
        frame,
        " Edit Profile ",
        Some(&subtitle),
        &fields,
        *focus,
        error.as_deref(),
        *loading,
        // Passwords stay masked.
        Some(3),
    );
}

#[allow(clippy::too_many_arguments)]
fn render_form(
    frame: &mut Frame,
    title: &str,
    subtitle: Option<&str>,
    fields: &[(&str, &String)],
    focus: usize,
    error: Option<&str>,
    loading: bool,
    secret_index: Option<usize>,
) {
    let extra = u16::from(subtitle.is_some());
    let height = fields.len() as u16 + 7 + extra;
    let area = centered_rect(56, height, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(title)
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));
    frame.render_widget(block, area);

    let inner = Rect::new(
        area.x + 2,
        area.y + 1,
        area.width.saturating_sub(4),
        area.height.saturating_sub(2),
    );

    let mut lines = Vec::new();
    if let Some(subtitle) = subtitle {
        lines.push(Line::styled(
            format!("  {subtitle}"),
            Style::default().fg(Color::DarkGray),
        ));
    }
    lines.push(Line::from(""));

    for (i, (label, value)) in fields.iter().enumerate() {
        let secret = secret_index == Some(i);
        lines.push(field_line(label, value, i == focus, secret));
    }

    lines.push(Line::from(""));
    if let Some(err) = error {
        lines.push(Line::styled(
            format!("  ⚠ {err}"),
            Style::default().fg(Color::Red),
        ));
    } else if loading {
        lines.push(Line::styled(
            "  Saving...",
            Style::default().fg(Color::Yellow),
        ));
    } else {
        lines.push(Line::from(""));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("  Tab", Style::default().fg(Color::Yellow)),
        Span::styled(" Next | ", Style::default().fg(Color::DarkGray)),
        Span::styled("Enter", Style::default().fg(Color::Yellow)),
        Span::styled(" Save | ", Style::default().fg(Color::DarkGray)),
        Span::styled("Esc", Style::default().fg(Color::Yellow)),
        Span::styled(" Cancel", Style::default().fg(Color::DarkGray)),
    ]));

    frame.render_widget(Paragraph::new(lines), inner);
}

/// One label + value row. The focused row carries the cursor mark.
fn field_line(label: &str, value: &str, focused: bool, secret: bool) -> Line<'static> {
    let label_style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    let value_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::White)
    };

    let shown = if secret && !value.is_empty() {
        "•".repeat(value.chars().count().min(20))
    } else {
        value.to_string()
    };
    let display = if focused { format!("{shown}▎") } else { shown };

    Line::from(vec![
        Span::raw("  "),
        Span::styled(format!("{label:<13}"), label_style),
        Span::styled(display, value_style),
    ])
}

fn render_confirm_delete(frame: &mut Frame, modal: &Modal) {
    let Modal::ConfirmDeleteProfile {
        name,
        aucode,
        focus,
        loading,
    } = modal
    else {
        return;
    };

    let area = centered_rect(44, 9, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Confirm Deletion ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .style(Style::default().bg(Color::Black));
    frame.render_widget(block, area);

    let inner = Rect::new(
        area.x + 2,
        area.y + 1,
        area.width.saturating_sub(4),
        area.height.saturating_sub(2),
    );

    let cancel_style = if *focus == 0 {
        Style::default().fg(Color::Black).bg(Color::White)
    } else {
        Style::default().fg(Color::White)
    };
    let delete_style = if *focus == 1 {
        Style::default().fg(Color::Black).bg(Color::Red)
    } else {
        Style::default().fg(Color::Red)
    };

    let action_line = if *loading {
        Line::styled("    Deleting...", Style::default().fg(Color::Yellow))
    } else {
        Line::from(vec![
            Span::raw("    "),
            Span::styled(" Cancel ", cancel_style),
            Span::raw("    "),
            Span::styled(" Delete ", delete_style),
        ])
    };

    let lines = vec![
        Line::from(""),
        Line::styled(
            format!("  Delete profile \"{name}\"?"),
            Style::default().fg(Color::White),
        ),
        Line::styled(
            format!("  Account {aucode}"),
            Style::default().fg(Color::Yellow),
        ),
        Line::from(""),
        action_line,
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_error(frame: &mut Frame, title: &str, message: &str) {
    let area = centered_rect(50, 8, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .style(Style::default().bg(Color::Black));
    frame.render_widget(block, area);

    let inner = Rect::new(
        area.x + 2,
        area.y + 2,
        area.width.saturating_sub(4),
        area.height.saturating_sub(4),
    );

    let lines = vec![
        Line::styled(message.to_string(), Style::default().fg(Color::White)),
        Line::from(""),
        Line::styled(
            "Press Esc or Enter to close",
            Style::default().fg(Color::DarkGray),
        ),
    ];

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

fn render_help(frame: &mut Frame) {
    let area = centered_rect(56, 20, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));
    frame.render_widget(block, area);

    let inner = Rect::new(
        area.x + 2,
        area.y + 1,
        area.width.saturating_sub(4),
        area.height.saturating_sub(2),
    );

    let key = |k: &'static str| Span::styled(k, Style::default().fg(Color::Yellow));
    let desc = |d: &'static str| Span::styled(d, Style::default().fg(Color::White));
    let section = |s: &'static str| {
        Line::styled(
            s,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )
    };

    let lines = vec![
        section("Global"),
        Line::from(""),
        Line::from(vec![key("  Tab     "), desc("Switch panel")]),
        Line::from(vec![key("  ↑↓ / jk "), desc("Move")]),
        Line::from(vec![key("  Enter   "), desc("Confirm / open")]),
        Line::from(vec![key("  Esc     "), desc("Back / cancel")]),
        Line::from(vec![key("  Alt+r   "), desc("Refresh page")]),
        Line::from(vec![key("  Alt+s   "), desc("Collapse sidebar")]),
        Line::from(vec![key("  Alt+l   "), desc("Log out")]),
        Line::from(vec![key("  Alt+q   "), desc("Quit")]),
        Line::from(""),
        section("Lists"),
        Line::from(""),
        Line::from(vec![key("  ←→ / hl "), desc("Previous / next page")]),
        Line::from(vec![key("  /       "), desc("Keyword search")]),
        Line::from(vec![key("  Alt+a/e/d"), desc(" Add / edit / delete")]),
        Line::from(vec![key("  e, f    "), desc("Cycle column filters")]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
