//! Sidebar navigation state

/// Identity of one sidebar entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItemId {
    Home,
    Plans,
    Vendors,
    Profiles,
    Numbers,
    Assignments,
    CallLogs,
    Settings,
}

/// One sidebar entry
#[derive(Debug, Clone)]
pub struct NavItem {
    pub id: NavItemId,
    pub label: &'static str,
    pub icon: &'static str,
}

/// Sidebar list with its selection
#[derive(Debug, Clone)]
pub struct NavigationState {
    pub items: Vec<NavItem>,
    pub selected: usize,
}

impl NavigationState {
    pub fn new() -> Self {
        Self {
            items: vec![
                NavItem {
                    id: NavItemId::Home,
                    label: "Home",
                    icon: "⌂",
                },
                NavItem {
                    id: NavItemId::Plans,
                    label: "Plans",
                    icon: "●",
                },
                NavItem {
                    id: NavItemId::Vendors,
                    label: "Vendors",
                    icon: "◆",
                },
                NavItem {
                    id: NavItemId::Profiles,
                    label: "Profiles",
                    icon: "@",
                },
                NavItem {
                    id: NavItemId::Numbers,
                    label: "Numbers",
                    icon: "#",
                },
                NavItem {
                    id: NavItemId::Assignments,
                    label: "Number Plans",
                    icon: "+",
                },
                NavItem {
                    id: NavItemId::CallLogs,
                    label: "Call Logs",
                    icon: "☎",
                },
                NavItem {
                    id: NavItemId::Settings,
                    label: "Settings",
                    icon: "≡",
                },
            ],
            selected: 0,
        }
    }

    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.items.len() {
            self.selected += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.items.len().saturating_sub(1);
    }

    pub fn current_item(&self) -> Option<&NavItem> {
        self.items.get(self.selected)
    }

    pub fn current_id(&self) -> Option<NavItemId> {
        self.current_item().map(|item| item.id)
    }

    /// Moves the highlight onto the entry for `id`, if present.
    pub fn select_id(&mut self, id: NavItemId) {
        if let Some(index) = self.items.iter().position(|item| item.id == id) {
            self.selected = index;
        }
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new()
    }
}
