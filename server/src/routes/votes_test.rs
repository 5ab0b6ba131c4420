use axum::body::Body;
use axum::http::Request;
use tower::ServiceExt;

use super::*;
use crate::routes::app;
use crate::state::test_helpers::{body_string, seeded_app_state, signed_in_cookie};

fn vote_request(id: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("POST").uri(format!("/vote/{id}"));
    if let Some(cookie) = cookie {
        builder = builder.header("cookie", cookie);
    }
    builder.body(Body::empty()).unwrap()
}

async fn decode(response: axum::response::Response) -> VoteResponse {
    serde_json::from_str(&body_string(response).await).unwrap()
}

#[tokio::test]
async fn vote_requires_login() {
    let dir = tempfile::tempdir().unwrap();
    let state = seeded_app_state(&dir).await;
    let response = app(state).oneshot(vote_request("1", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(decode(response).await, VoteResponse::failure("You must be logged in to vote."));
}

#[tokio::test]
async fn vote_unknown_tool_is_404() {
    let dir = tempfile::tempdir().unwrap();
    let state = seeded_app_state(&dir).await;
    let cookie = signed_in_cookie(&state, "ana");
    let response = app(state).oneshot(vote_request("404", Some(&cookie))).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(decode(response).await, VoteResponse::failure("Tool not found."));
}

#[tokio::test]
async fn vote_toggles_up_then_down() {
    let dir = tempfile::tempdir().unwrap();
    let state = seeded_app_state(&dir).await;
    let cookie = signed_in_cookie(&state, "ana");

    let up = app(state.clone()).oneshot(vote_request("1", Some(&cookie))).await.unwrap();
    assert_eq!(up.status(), StatusCode::OK);
    assert_eq!(decode(up).await, VoteResponse::confirmed(11, true));

    let down = app(state.clone()).oneshot(vote_request("1", Some(&cookie))).await.unwrap();
    assert_eq!(decode(down).await, VoteResponse::confirmed(10, false));
    assert!(state.store.voted_by("ana").await.is_empty());
}

#[tokio::test]
async fn votes_from_different_users_accumulate() {
    let dir = tempfile::tempdir().unwrap();
    let state = seeded_app_state(&dir).await;
    let ana = signed_in_cookie(&state, "ana");
    let bob = signed_in_cookie(&state, "bob");

    app(state.clone()).oneshot(vote_request("3", Some(&ana))).await.unwrap();
    let response = app(state).oneshot(vote_request("3", Some(&bob))).await.unwrap();
    assert_eq!(decode(response).await, VoteResponse::confirmed(22, true));
}
