//! Key binding table

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// One chord: a key code plus the exact modifier set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn alt(ch: char) -> Self {
        Self::new(KeyModifiers::ALT, KeyCode::Char(ch))
    }

    pub const fn ctrl(ch: char) -> Self {
        Self::new(KeyModifiers::CONTROL, KeyCode::Char(ch))
    }

    /// Exact match: the modifier set must be identical, so `alt('a')` never
    /// fires on a bare `a`.
    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.code == self.code && key.modifiers == self.modifiers
    }
}

/// The fixed chords. Alt is used for actions so bare letters stay free for
/// list movement and the search box.
pub struct DefaultKeymap;

impl DefaultKeymap {
    pub const QUIT: KeyBinding = KeyBinding::alt('q');
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl('c');
    pub const HELP: KeyBinding = KeyBinding::alt('h');
    pub const REFRESH: KeyBinding = KeyBinding::alt('r');
    pub const BACK: KeyBinding = KeyBinding::key(KeyCode::Esc);
    pub const LOGOUT: KeyBinding = KeyBinding::alt('l');
    pub const TOGGLE_SIDEBAR: KeyBinding = KeyBinding::alt('s');
    pub const ACTION_ADD: KeyBinding = KeyBinding::alt('a');
    pub const ACTION_EDIT: KeyBinding = KeyBinding::alt('e');
    pub const ACTION_DELETE: KeyBinding = KeyBinding::alt('d');
}
