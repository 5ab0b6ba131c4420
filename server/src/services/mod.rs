//! Domain services used by the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own business logic and persistence concerns so route
//! handlers can stay focused on protocol translation and session plumbing.

pub mod accounts;
pub mod session;
pub mod store;
pub mod submission;
