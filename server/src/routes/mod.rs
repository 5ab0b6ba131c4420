//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the SSR page routes, the form and vote endpoints, and the static
//! `/pkg` assets under a single Axum router. Unknown paths fall through to
//! the page renderer, which answers with the not-found page.

pub mod auth;
pub mod pages;
pub mod session;
pub mod tools;
pub mod votes;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Full application router.
pub fn app(state: AppState) -> Router {
    let site_root = PathBuf::from(state.leptos_options.site_root.as_ref());

    Router::new()
        .route("/", get(pages::render_page))
        .route("/login", get(pages::render_page))
        .route("/signup", get(pages::render_page))
        .route("/submit", get(pages::render_page))
        .route("/ai/{id}", get(pages::render_page))
        .route("/ai/{id}/review", post(tools::add_review))
        .route("/tools", post(tools::submit_tool))
        .route("/vote/{id}", post(votes::vote))
        .route("/auth/login", post(auth::login))
        .route("/auth/signup", post(auth::signup))
        .route("/auth/logout", get(auth::logout))
        .route("/healthz", get(healthz))
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .fallback(pages::render_page)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
