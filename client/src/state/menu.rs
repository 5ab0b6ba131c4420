//! Profile dropdown open/closed state.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

impl MenuState {
    /// Trigger click.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Document click; `inside` is true when the target lies within the
    /// trigger or the menu itself.
    pub fn click(&mut self, inside: bool) {
        if !inside {
            self.open = false;
        }
    }
}
