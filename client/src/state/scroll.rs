//! Scroll-driven presentation: navbar shading, the showcase image switcher,
//! and one-shot reveal animations.
//!
//! The DOM side (`util::observer`) feeds showcase intersections in as plain
//! `ShowcaseEntry` values so the selection rule stays testable.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Vertical scroll offset (px) past which the navbar is marked `scrolled`.
pub const NAVBAR_SCROLL_THRESHOLD: f64 = 20.0;
/// Visibility ratio at which a showcase text block activates its image.
pub const SHOWCASE_THRESHOLD: f64 = 0.5;
/// Visibility ratio at which a reveal element gets its `is-visible` class.
pub const REVEAL_THRESHOLD: f64 = 0.1;
/// Elements faded in once on first intersection.
pub const REVEAL_SELECTOR: &str = ".reveal-on-scroll";
/// Class added on reveal; never removed.
pub const REVEALED_CLASS: &str = "is-visible";

pub fn navbar_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAVBAR_SCROLL_THRESHOLD
}

/// One observed showcase text block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShowcaseEntry {
    /// Value of the block's `data-image-id` attribute, if any.
    pub image_id: Option<String>,
    pub intersecting: bool,
}

/// Which showcase image card is active. At most one at a time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShowcaseState {
    pub active: Option<String>,
}

impl ShowcaseState {
    /// Apply one observer batch. The last intersecting entry wins; a batch
    /// with no intersecting entries leaves the current image active.
    pub fn observe(&mut self, entries: &[ShowcaseEntry]) {
        if let Some(entry) = entries.iter().rev().find(|e| e.intersecting) {
            self.active = entry.image_id.clone();
        }
    }

    pub fn is_active(&self, image_id: &str) -> bool {
        self.active.as_deref() == Some(image_id)
    }
}
