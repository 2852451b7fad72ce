//! Page chrome state.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Navigation chrome shared through context.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub menu_open: bool,
}

impl UiState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Collapse the mobile menu, e.g. after following one of its links.
    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }
}
