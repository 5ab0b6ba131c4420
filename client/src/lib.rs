//! # client
//!
//! Leptos + WASM frontend for the toolshelf AI tool directory.
//!
//! The same components render on the server (`ssr`) and hydrate in the
//! browser (`hydrate`). Interactive behavior (search suggestions, optimistic
//! voting, the detail modal, theme, scroll effects, cursor, flash expiry) is
//! modeled as plain state types under [`state`] so it can be tested without a
//! DOM; components under [`components`] wire those states to browser events.

#![recursion_limit = "512"]

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: read the embedded page payloads and hydrate `<body>`.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use leptos::prelude::*;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    util::theme::apply(util::theme::read_preference());

    let catalog = state::catalog::Catalog::new(net::embedded::read_catalog());
    let page = net::embedded::read_page_data();
    log::info!("hydrating {:?} with {} catalog tools", page.route, catalog.len());

    leptos::mount::hydrate_body(move || {
        provide_context(catalog);
        provide_context(page);
        view! { <app::App/> }
    });
}
