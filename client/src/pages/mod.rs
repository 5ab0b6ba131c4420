//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The server resolves each request to a `PageRoute` and embeds it in the
//! page data; `app::App` picks the matching page. Pages are plain
//! server-rendered documents whose forms post back to the server, and they
//! delegate interactive pieces to `components`.

pub mod home;
pub mod login;
pub mod not_found;
pub mod signup;
pub mod submit;
pub mod tool_detail;
