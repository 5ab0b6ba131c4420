//! Flash message expiry.
//!
//! Each message fades after `BASE_DELAY_MS + index * STAGGER_MS` and is
//! removed `FADE_MS` later, so several messages leave one after another.
//! Timers address messages by a stable key; a timer whose message is already
//! gone is a no-op.

#[cfg(test)]
#[path = "flash_test.rs"]
mod flash_test;

use crate::net::types::Flash;

pub const BASE_DELAY_MS: u32 = 4000;
pub const STAGGER_MS: u32 = 500;
/// Length of the fade-out transition before removal.
pub const FADE_MS: u32 = 500;

/// Delay before message `index` starts fading.
pub fn dismiss_delay_ms(index: usize) -> u32 {
    let index = u32::try_from(index).unwrap_or(u32::MAX);
    BASE_DELAY_MS.saturating_add(index.saturating_mul(STAGGER_MS))
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlashEntry {
    pub key: usize,
    pub flash: Flash,
    pub fading: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FlashQueue {
    entries: Vec<FlashEntry>,
}

impl FlashQueue {
    pub fn new(flashes: Vec<Flash>) -> Self {
        let entries = flashes
            .into_iter()
            .enumerate()
            .map(|(key, flash)| FlashEntry { key, flash, fading: false })
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[FlashEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Start the fade for `key`. Returns false when the message is gone.
    pub fn begin_fade(&mut self, key: usize) -> bool {
        match self.entries.iter_mut().find(|e| e.key == key) {
            Some(entry) => {
                entry.fading = true;
                true
            }
            None => false,
        }
    }

    pub fn is_fading(&self, key: usize) -> bool {
        self.entries.iter().any(|e| e.key == key && e.fading)
    }

    /// Remove `key` (dismiss button or fade timer).
    pub fn remove(&mut self, key: usize) {
        self.entries.retain(|e| e.key != key);
    }
}
