//! Server-side rendering of the Leptos pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page request resolves its `PageRoute`, snapshots the catalog and
//! the viewer, drains queued flashes, and renders `client::app::shell` with
//! those values in context. The shell embeds the same values as JSON for
//! hydration.

use axum::extract::{Query, Request, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use client::net::types::{Flash, PageData, PageRoute, Viewer};
use client::state::catalog::Catalog;
use leptos::prelude::provide_context;
use serde::Deserialize;

use crate::routes::session::SessionContext;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct PageQuery {
    search: Option<String>,
}

/// HTTP status for a resolved page.
pub(crate) fn page_status(route: &PageRoute, catalog: &Catalog) -> StatusCode {
    match route {
        PageRoute::NotFound => StatusCode::NOT_FOUND,
        PageRoute::ToolDetail { id } if catalog.find(*id).is_none() => StatusCode::NOT_FOUND,
        _ => StatusCode::OK,
    }
}

/// `GET /`, `/login`, `/signup`, `/submit`, `/ai/{id}`, and the fallback.
pub async fn render_page(
    State(state): State<AppState>,
    session: SessionContext,
    Query(query): Query<PageQuery>,
    req: Request,
) -> Response {
    let route = PageRoute::from_path(req.uri().path(), query.search.as_deref());
    if route == PageRoute::Submit && !session.signed_in() {
        session.flash(Flash::error("You must be logged in to submit an AI tool."));
        return session.respond(Redirect::to("/login"));
    }

    let catalog = Catalog::new(state.store.tools().await);
    let status = page_status(&route, &catalog);
    let voted = match session.username.as_deref() {
        Some(username) => state.store.voted_by(username).await,
        None => Vec::new(),
    };
    let page = PageData {
        route,
        viewer: Viewer { username: session.username.clone(), voted },
        flashes: session.take_flashes(),
    };
    tracing::debug!(route = ?page.route, %status, flashes = page.flashes.len(), "render page");

    let options = state.leptos_options.clone();
    let handler = leptos_axum::render_app_to_stream_with_context(
        move || {
            provide_context(catalog.clone());
            provide_context(page.clone());
        },
        move || client::app::shell(options.clone()),
    );
    let mut response = handler(req).await.into_response();
    *response.status_mut() = status;
    session.respond(response)
}

#[cfg(test)]
#[path = "pages_test.rs"]
mod tests;
