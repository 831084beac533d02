//! Color themes
//!
//! The active theme lives in a process-wide atomic so every render helper can
//! read it without threading state through the view tree. The settings page
//! writes it; everything else only reads.

use std::sync::atomic::{AtomicU8, Ordering};

use ratatui::style::{Color, Modifier, Style};

use dialer_console_core::types::{CallResultKind, DaysLeftSeverity};

/// Index into the theme table: 0 = dark, 1 = light.
static CURRENT_THEME: AtomicU8 = AtomicU8::new(0);

/// Switches the active theme.
pub fn set_theme_index(index: u8) {
    CURRENT_THEME.store(index, Ordering::Relaxed);
}

/// The active theme's palette.
pub fn colors() -> ThemeColors {
    match CURRENT_THEME.load(Ordering::Relaxed) {
        1 => ThemeColors::light(),
        _ => ThemeColors::dark(),
    }
}

/// Palette of one theme
#[derive(Debug, Clone, Copy)]
pub struct ThemeColors {
    pub bg: Color,
    pub fg: Color,
    pub border: Color,
    pub border_focused: Color,
    pub highlight: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub muted: Color,
}

impl ThemeColors {
    pub fn dark() -> Self {
        Self {
            bg: Color::Rgb(24, 24, 28),
            fg: Color::Rgb(214, 214, 214),
            border: Color::Rgb(72, 72, 78),
            border_focused: Color::Rgb(0, 140, 160),
            highlight: Color::Rgb(0, 140, 160),
            selected_bg: Color::Rgb(22, 76, 86),
            selected_fg: Color::White,
            success: Color::Rgb(86, 196, 120),
            warning: Color::Rgb(228, 180, 80),
            error: Color::Rgb(224, 88, 88),
            muted: Color::Rgb(130, 130, 136),
        }
    }

    pub fn light() -> Self {
        Self {
            bg: Color::Rgb(248, 248, 245),
            fg: Color::Rgb(40, 40, 40),
            border: Color::Rgb(188, 188, 188),
            border_focused: Color::Rgb(0, 118, 138),
            highlight: Color::Rgb(0, 118, 138),
            selected_bg: Color::Rgb(198, 228, 234),
            selected_fg: Color::Black,
            success: Color::Rgb(22, 138, 70),
            warning: Color::Rgb(176, 128, 22),
            error: Color::Rgb(188, 42, 42),
            muted: Color::Rgb(138, 138, 138),
        }
    }
}

/// Style presets shared across components
pub struct Styles;

impl Styles {
    pub fn border() -> Style {
        Style::default().fg(colors().border)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(colors().border_focused)
    }

    pub fn selected() -> Style {
        let c = colors();
        Style::default()
            .bg(c.selected_bg)
            .fg(c.selected_fg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn title() -> Style {
        Style::default().fg(colors().fg).add_modifier(Modifier::BOLD)
    }

    pub fn statusbar() -> Style {
        Style::default().bg(colors().highlight).fg(Color::White)
    }

    pub fn hint_key() -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    pub fn hint_desc() -> Style {
        Style::default().fg(Color::Rgb(180, 180, 180))
    }
}

/// Badge color for a remaining-validity value.
pub fn days_left_color(severity: Option<DaysLeftSeverity>) -> Color {
    let c = colors();
    match severity {
        Some(DaysLeftSeverity::Critical) => c.error,
        Some(DaysLeftSeverity::Warning) => c.warning,
        Some(DaysLeftSeverity::Healthy) => c.success,
        None => c.muted,
    }
}

/// Color for a call result value.
pub fn call_result_color(kind: CallResultKind) -> Color {
    let c = colors();
    match kind {
        CallResultKind::Completed => c.success,
        CallResultKind::Failed => c.error,
        CallResultKind::InProgress => c.warning,
        CallResultKind::Other => c.muted,
    }
}
