//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the tool/user store, the session table, and the Leptos options
//! used to render pages. Clone is required by Axum; every field is cheap to
//! clone.

use std::sync::Arc;

use axum::extract::FromRef;
use leptos::prelude::LeptosOptions;

use crate::services::session::SessionStore;
use crate::services::store::Store;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Store>,
    pub sessions: SessionStore,
    pub leptos_options: LeptosOptions,
    /// Mark the session cookie `Secure`.
    pub cookie_secure: bool,
}

impl AppState {
    #[must_use]
    pub fn new(store: Store, leptos_options: LeptosOptions, cookie_secure: bool) -> Self {
        Self { store: Arc::new(store), sessions: SessionStore::new(), leptos_options, cookie_secure }
    }
}

impl FromRef<AppState> for LeptosOptions {
    fn from_ref(state: &AppState) -> Self {
        state.leptos_options.clone()
    }
}

#[cfg(test)]
#[path = "state_helpers_test.rs"]
pub mod test_helpers;
