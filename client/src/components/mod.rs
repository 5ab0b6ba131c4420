//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each interactive component installs its own listeners when mounted and
//! removes them on cleanup, reading the shared catalog and page data from
//! Leptos context.

pub mod custom_cursor;
pub mod flash_messages;
pub mod navbar;
pub mod profile_menu;
pub mod scroll_effects;
pub mod search_box;
pub mod theme_toggle;
pub mod tool_card;
pub mod tool_modal;
pub mod vote_button;
