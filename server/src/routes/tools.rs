//! Tool submission and review form handlers.

use axum::Form;
use axum::extract::{Path, State};
use axum::response::{Redirect, Response};
use client::net::types::Flash;
use serde::Deserialize;

use crate::routes::auth::GENERIC_FAILURE;
use crate::routes::session::SessionContext;
use crate::services::store::StoreError;
use crate::services::submission::{self, ToolForm};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct SubmitToolForm {
    #[serde(rename = "ai-name", default)]
    name: String,
    #[serde(rename = "ai-url", default)]
    url: String,
    #[serde(rename = "ai-category", default)]
    category: String,
    #[serde(rename = "ai-description", default)]
    description: String,
    #[serde(rename = "ai-long-description", default)]
    long_description: String,
    #[serde(rename = "ai-team", default)]
    team: String,
    #[serde(rename = "ai-pricing", default)]
    pricing: String,
}

impl From<SubmitToolForm> for ToolForm {
    fn from(form: SubmitToolForm) -> Self {
        Self {
            name: form.name,
            url: form.url,
            category: form.category,
            description: form.description,
            long_description: form.long_description,
            team: form.team,
            pricing: form.pricing,
        }
    }
}

#[derive(Deserialize)]
pub struct ReviewForm {
    #[serde(default)]
    rating: String,
    #[serde(default)]
    comment: String,
}

/// `POST /tools`
pub async fn submit_tool(
    State(state): State<AppState>,
    session: SessionContext,
    Form(form): Form<SubmitToolForm>,
) -> Response {
    if !session.signed_in() {
        session.flash(Flash::error("You must be logged in to submit an AI tool."));
        return session.respond(Redirect::to("/login"));
    }
    let new_tool = match submission::build_tool(&form.into()) {
        Ok(tool) => tool,
        Err(e) => {
            session.flash(Flash::error(e.to_string()));
            return session.respond(Redirect::to("/submit"));
        }
    };
    match state.store.add_tool(new_tool).await {
        Ok(id) => {
            tracing::info!(tool_id = id, username = ?session.username, "tool submitted");
            session.flash(Flash::success("Your AI tool has been submitted successfully!"));
            session.respond(Redirect::to("/"))
        }
        Err(e) => {
            tracing::error!(error = %e, "tool submission not saved");
            session.flash(Flash::error(GENERIC_FAILURE));
            session.respond(Redirect::to("/submit"))
        }
    }
}

/// `POST /ai/{id}/review`
pub async fn add_review(
    State(state): State<AppState>,
    session: SessionContext,
    Path(id): Path<u32>,
    Form(form): Form<ReviewForm>,
) -> Response {
    let detail = format!("/ai/{id}");
    let Some(username) = session.username.clone() else {
        session.flash(Flash::error("You must be logged in to submit a review."));
        return session.respond(Redirect::to(&detail));
    };
    if state.store.find_tool(id).await.is_none() {
        session.flash(Flash::error("AI tool not found."));
        return session.respond(Redirect::to("/"));
    }
    let today = time::OffsetDateTime::now_utc().date();
    let review = match submission::build_review(&username, &form.rating, &form.comment, today) {
        Ok(review) => review,
        Err(e) => {
            session.flash(Flash::error(e.to_string()));
            return session.respond(Redirect::to(&detail));
        }
    };
    match state.store.add_review(id, review).await {
        Ok(()) => {
            session.flash(Flash::success("Your review has been submitted!"));
            session.respond(Redirect::to(&detail))
        }
        Err(StoreError::ToolNotFound(_)) => {
            session.flash(Flash::error("AI tool not found."));
            session.respond(Redirect::to("/"))
        }
        Err(e) => {
            tracing::error!(tool_id = id, error = %e, "review not saved");
            session.flash(Flash::error(GENERIC_FAILURE));
            session.respond(Redirect::to(&detail))
        }
    }
}

#[cfg(test)]
#[path = "tools_test.rs"]
mod tests;
