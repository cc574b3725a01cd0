//! Local UI chrome state (sidebar collapse, navigation entries).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of page state. Nothing here is
//! persisted; a reload always starts with the sidebar expanded.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// A sidebar destination.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub path: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

/// Sidebar destinations in display order.
pub const NAV_ITEMS: [NavItem; 2] = [
    NavItem { path: "/", label: "Инструкция", icon: "ℹ" },
    NavItem { path: "/campaigns", label: "Кампании", icon: "▦" },
];

impl NavItem {
    /// Whether this entry should be highlighted for the current location.
    ///
    /// The root entry matches only `/`. Other entries match their own path
    /// and anything nested below it; campaign detail pages count as part of
    /// the campaigns section.
    #[must_use]
    pub fn is_active(&self, current: &str) -> bool {
        if self.path == "/" {
            return current == "/";
        }
        current == self.path
            || current.starts_with(&format!("{}/", self.path))
            || (self.path == "/campaigns" && current.starts_with("/campaign/"))
    }
}

/// UI state shared through context.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub sidebar_collapsed: bool,
}

impl UiState {
    pub fn toggle_sidebar(&mut self) {
        self.sidebar_collapsed = !self.sidebar_collapsed;
    }

    /// Tooltip and accessible name for the collapse toggle.
    #[must_use]
    pub fn toggle_label(&self) -> &'static str {
        if self.sidebar_collapsed { "Развернуть меню" } else { "Свернуть меню" }
    }
}
