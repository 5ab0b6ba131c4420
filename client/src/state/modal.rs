//! Tool detail modal lifecycle.
//!
//! DESIGN
//! ======
//! Opening and closing both go through a short timer so CSS transitions can
//! run: `Hidden -> Mounted -> Visible` on open, `Visible -> Closing -> Hidden`
//! on close. Every transition bumps a generation counter and timers carry the
//! generation they were scheduled for, so a timer that fires after a newer
//! open/close simply does nothing.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

use crate::net::types::Tool;

use super::catalog::Catalog;

/// Delay between mounting the modal and adding the `visible` class.
pub const OPEN_DELAY_MS: u32 = 10;
/// Delay between removing `visible` and hiding the element.
pub const CLOSE_DELAY_MS: u32 = 300;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalPhase {
    #[default]
    Hidden,
    /// Displayed without the `visible` class (transition start).
    Mounted,
    Visible,
    /// `visible` removed, still displayed until the close timer fires.
    Closing,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ModalState {
    pub phase: ModalPhase,
    pub tool: Option<Tool>,
    generation: u64,
}

impl ModalState {
    /// Open the modal for `tool_id`. Unknown ids are a no-op.
    ///
    /// Returns the generation the reveal timer must pass to [`Self::reveal`].
    pub fn open(&mut self, catalog: &Catalog, tool_id: u32) -> Option<u64> {
        let tool = catalog.find(tool_id)?.clone();
        self.tool = Some(tool);
        self.phase = ModalPhase::Mounted;
        self.generation += 1;
        Some(self.generation)
    }

    /// Reveal timer callback.
    pub fn reveal(&mut self, generation: u64) {
        if generation == self.generation && self.phase == ModalPhase::Mounted {
            self.phase = ModalPhase::Visible;
        }
    }

    /// Start closing. Returns the generation for [`Self::finish_close`], or
    /// `None` when nothing is displayed.
    pub fn close(&mut self) -> Option<u64> {
        match self.phase {
            ModalPhase::Hidden | ModalPhase::Closing => None,
            ModalPhase::Mounted | ModalPhase::Visible => {
                self.phase = ModalPhase::Closing;
                self.generation += 1;
                Some(self.generation)
            }
        }
    }

    /// Close timer callback.
    pub fn finish_close(&mut self, generation: u64) {
        if generation == self.generation && self.phase == ModalPhase::Closing {
            self.phase = ModalPhase::Hidden;
        }
    }

    /// Whether the modal element is displayed at all.
    pub fn is_displayed(&self) -> bool {
        self.phase != ModalPhase::Hidden
    }

    /// Whether the `visible` class is applied.
    pub fn is_visible(&self) -> bool {
        self.phase == ModalPhase::Visible
    }
}
