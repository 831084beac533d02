//! Password reset page view
//!
//! One view for all three steps. The focus indices per step match the form
//! state: every step keeps its fields first and its action slots after.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::Paragraph,
};

use crate::model::App;
use crate::model::state::ResetStep;
use crate::view::theme::colors;

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let forgot = &app.forgot;
    let form = super::centered_rect(46, 18, area);

    let mut lines = vec![
        Line::from(""),
        Line::styled(
            "  Reset your password",
            Style::default()
                .fg(c.highlight)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
    ];

    match forgot.step {
        ResetStep::Email => {
            lines.push(Line::styled(
                "  We will send a one-time code to your email.",
                Style::default().fg(c.muted),
            ));
            lines.push(Line::from(""));
            lines.push(super::field_label("Email", forgot.focus == 0));
            lines.push(super::field_value(&forgot.email, forgot.focus == 0, false));
            lines.push(Line::from(""));
            lines.push(super::button_line("Send OTP", forgot.focus == 1));
            lines.push(Line::from(""));
            lines.push(super::link_line("Back to sign in", forgot.focus == 2));
        }
        ResetStep::Otp => {
            lines.push(Line::styled(
                format!("  Enter the 6-digit code sent to {}", forgot.email),
                Style::default().fg(c.muted),
            ));
            lines.push(Line::from(""));
            lines.push(super::field_label("OTP", forgot.focus == 0));
            lines.push(super::field_value(&forgot.otp, forgot.focus == 0, false));
            lines.push(Line::from(""));
            lines.push(super::button_line("Verify", forgot.focus == 1));
            lines.push(Line::from(""));
            let resend_label = match forgot.resend_wait_secs() {
                Some(wait) => format!("Resend OTP ({wait}s)"),
                None => "Resend OTP".to_string(),
            };
            lines.push(super::link_line(&resend_label, forgot.focus == 2));
            lines.push(super::link_line("Back to sign in", forgot.focus == 3));
        }
        ResetStep::NewPassword => {
            lines.push(Line::styled(
                "  Choose a new password (at least 8 characters).",
                Style::default().fg(c.muted),
            ));
            lines.push(Line::from(""));
            lines.push(super::field_label("New password", forgot.focus == 0));
            lines.push(super::field_value(
                &forgot.new_password,
                forgot.focus == 0,
                true,
            ));
            lines.push(super::field_label("Confirm password", forgot.focus == 1));
            lines.push(super::field_value(
                &forgot.confirm_password,
                forgot.focus == 1,
                true,
            ));
            lines.push(Line::from(""));
            lines.push(super::button_line("Reset password", forgot.focus == 2));
        }
    }

    lines.push(Line::from(""));
    if let Some(err) = &forgot.error {
        lines.push(Line::styled(
            format!("  ⚠ {err}"),
            Style::default().fg(c.error),
        ));
    } else if forgot.loading {
        let label = match forgot.step {
            ResetStep::Email => "  Sending OTP...",
            ResetStep::Otp => "  Verifying...",
            ResetStep::NewPassword => "  Resetting password...",
        };
        lines.push(Line::styled(label, Style::default().fg(c.warning)));
    }

    frame.render_widget(Paragraph::new(lines), form);
}
