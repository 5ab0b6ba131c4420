//! JSON vote endpoint used by the optimistic vote buttons.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use client::net::types::VoteResponse;

use crate::routes::session::SessionContext;
use crate::services::store::StoreError;
use crate::state::AppState;

/// `POST /vote/{id}`: toggle the viewer's vote and return the new count.
pub async fn vote(
    State(state): State<AppState>,
    session: SessionContext,
    Path(id): Path<u32>,
) -> (StatusCode, Json<VoteResponse>) {
    let Some(username) = session.username.as_deref() else {
        return (StatusCode::UNAUTHORIZED, Json(VoteResponse::failure("You must be logged in to vote.")));
    };
    match state.store.toggle_vote(id, username).await {
        Ok(tally) => {
            tracing::debug!(tool_id = id, %username, voted = tally.voted, count = tally.new_count, "vote");
            (StatusCode::OK, Json(VoteResponse::confirmed(tally.new_count, tally.voted)))
        }
        Err(StoreError::ToolNotFound(_)) => (StatusCode::NOT_FOUND, Json(VoteResponse::failure("Tool not found."))),
        Err(e) => {
            tracing::error!(tool_id = id, error = %e, "vote not saved");
            (StatusCode::INTERNAL_SERVER_ERROR, Json(VoteResponse::failure("Could not save your vote.")))
        }
    }
}

#[cfg(test)]
#[path = "votes_test.rs"]
mod tests;
