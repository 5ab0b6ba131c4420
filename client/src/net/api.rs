//! REST helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since voting is only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure mode (network error, non-2xx status, `success: false`,
//! malformed body) collapses into `Err(String)` so the vote control has a
//! single rollback path.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::VoteReceipt;
#[cfg(feature = "hydrate")]
use super::types::VoteResponse;

#[cfg(any(test, feature = "hydrate"))]
fn vote_endpoint(tool_id: u32) -> String {
    format!("/vote/{tool_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn vote_failed_message(status: u16) -> String {
    format!("vote request failed: {status}")
}

/// Toggle the current user's vote on `tool_id` via `POST /vote/{tool_id}`.
///
/// # Errors
///
/// Returns an error string if the request fails, the server responds with a
/// non-OK status, or the body does not confirm the vote.
pub async fn cast_vote(tool_id: u32) -> Result<VoteReceipt, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&vote_endpoint(tool_id))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(vote_failed_message(resp.status()));
        }
        let body: VoteResponse = resp.json().await.map_err(|e| e.to_string())?;
        body.into_receipt()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = tool_id;
        Err("not available on server".to_owned())
    }
}
