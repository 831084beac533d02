//! Settings page state

use serde::{Deserialize, Serialize};

use dialer_console_core::types::DEFAULT_PAGE_SIZE;

/// Available color themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn label(self) -> &'static str {
        match self {
            Self::Dark => "Dark",
            Self::Light => "Light",
        }
    }

    /// With two themes, previous and next are the same toggle.
    pub fn next(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Index into the render-side theme table.
    pub fn index(self) -> u8 {
        match self {
            Self::Dark => 0,
            Self::Light => 1,
        }
    }
}

/// Rows-per-page choices offered on the settings page.
pub const PAGE_SIZES: [u32; 3] = [10, 20, 50];

/// One row of the settings page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingItem {
    Theme,
    PageSize,
}

impl SettingItem {
    pub const ALL: [Self; 2] = [Self::Theme, Self::PageSize];

    pub fn label(self) -> &'static str {
        match self {
            Self::Theme => "Theme",
            Self::PageSize => "Rows per page",
        }
    }
}

/// Settings page selection and the current values
#[derive(Debug, Clone)]
pub struct SettingsState {
    pub selected_index: usize,
    pub theme: Theme,
    pub page_size: u32,
}

impl SettingsState {
    pub fn new() -> Self {
        Self {
            selected_index: 0,
            theme: Theme::Dark,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn select_previous(&mut self) {
        let count = SettingItem::ALL.len();
        self.selected_index = (self.selected_index + count - 1) % count;
    }

    pub fn select_next(&mut self) {
        self.selected_index = (self.selected_index + 1) % SettingItem::ALL.len();
    }

    pub fn current_item(&self) -> Option<SettingItem> {
        SettingItem::ALL.get(self.selected_index).copied()
    }

    /// Right arrow: advance the focused setting's value.
    pub fn toggle_next(&mut self) {
        match self.current_item() {
            Some(SettingItem::Theme) => self.apply_theme(self.theme.next()),
            Some(SettingItem::PageSize) => {
                let index = PAGE_SIZES
                    .iter()
                    .position(|size| *size == self.page_size)
                    .unwrap_or(0);
                self.page_size = PAGE_SIZES[(index + 1) % PAGE_SIZES.len()];
            }
            None => {}
        }
    }

    /// Left arrow: step the focused setting's value back.
    pub fn toggle_prev(&mut self) {
        match self.current_item() {
            Some(SettingItem::Theme) => self.apply_theme(self.theme.next()),
            Some(SettingItem::PageSize) => {
                let index = PAGE_SIZES
                    .iter()
                    .position(|size| *size == self.page_size)
                    .unwrap_or(0);
                self.page_size = PAGE_SIZES[(index + PAGE_SIZES.len() - 1) % PAGE_SIZES.len()];
            }
            None => {}
        }
    }

    /// Sets the theme and keeps the render-side atomic in sync.
    pub fn apply_theme(&mut self, theme: Theme) {
        self.theme = theme;
        crate::view::theme::set_theme_index(theme.index());
    }
}

impl Default for SettingsState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_wraps_around() {
        let mut settings = SettingsState::new();
        settings.select_previous();
        assert_eq!(settings.current_item(), Some(SettingItem::PageSize));
        settings.select_next();
        assert_eq!(settings.current_item(), Some(SettingItem::Theme));
    }

    #[test]
    fn theme_toggles_between_the_two_options() {
        let mut settings = SettingsState::new();
        settings.toggle_next();
        assert_eq!(settings.theme, Theme::Light);
        settings.toggle_prev();
        assert_eq!(settings.theme, Theme::Dark);
    }

    #[test]
    fn page_size_cycles_through_the_offered_values() {
        let mut settings = SettingsState::new();
        settings.select_next(); // rows per page
        assert_eq!(settings.page_size, 10);

        settings.toggle_next();
        assert_eq!(settings.page_size, 20);
        settings.toggle_next();
        assert_eq!(settings.page_size, 50);
        settings.toggle_next();
        assert_eq!(settings.page_size, 10);

        settings.toggle_prev();
        assert_eq!(settings.page_size, 50);
    }

    #[test]
    fn theme_serializes_lowercase() {
        let json = serde_json::to_string(&Theme::Light).unwrap();
        assert_eq!(json, "\"light\"");
        let back: Theme = serde_json::from_str("\"dark\"").unwrap();
        assert_eq!(back, Theme::Dark);
    }
}
