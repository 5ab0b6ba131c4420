//! Custom cursor position and hover state.

#[cfg(test)]
#[path = "cursor_test.rs"]
mod cursor_test;

/// Interactive elements that switch the cursor to its hovered look.
pub const HOVER_SELECTORS: &[&str] = &[
    "a",
    "button",
    "input",
    "select",
    "textarea",
    ".vote-button",
    ".suggestion-item",
    ".profile-toggle",
    ".theme-toggle",
    ".logout-link",
    ".nav-button-secondary",
    ".nav-button-primary",
    ".nav-button-login",
    ".tool-card",
    ".modal-close",
];

/// Body class applied while hovering an interactive element.
pub const HOVERED_CLASS: &str = "cursor-hovered";

/// Joined selector for `Element::closest`.
pub fn hover_selector() -> String {
    HOVER_SELECTORS.join(", ")
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorState {
    pub x: f64,
    pub y: f64,
    pub hovered: bool,
    pub visible: bool,
}

impl Default for CursorState {
    fn default() -> Self {
        Self { x: 0.0, y: 0.0, hovered: false, visible: true }
    }
}

impl CursorState {
    pub fn moved(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    /// Pointer left (`false`) or re-entered (`true`) the window.
    pub fn set_in_window(&mut self, inside: bool) {
        self.visible = inside;
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    pub fn opacity(&self) -> &'static str {
        if self.visible { "1" } else { "0" }
    }

    /// Inline `left` value.
    pub fn left(&self) -> String {
        format!("{}px", self.x)
    }

    /// Inline `top` value.
    pub fn top(&self) -> String {
        format!("{}px", self.y)
    }
}
