//! Networking and page-payload modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles the vote REST call, `embedded` reads the JSON payloads the
//! server renders into the page, and `types` defines the shared wire schema.

pub mod api;
pub mod embedded;
pub mod types;
