//! Client state: the shared catalog plus one plain state type per
//! interactive component, each updated through pure transitions.

pub mod catalog;
pub mod cursor;
pub mod flash;
pub mod menu;
pub mod modal;
pub mod scroll;
pub mod search;
pub mod vote;
