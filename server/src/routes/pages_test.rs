use tower::ServiceExt;

use super::*;
use crate::routes::app;
use crate::state::test_helpers::{
    body_string, dummy_tool, get_request, location, seeded_app_state, session_cookie, signed_in_cookie,
};

// =============================================================================
// page_status
// =============================================================================

#[test]
fn page_status_known_and_unknown_tools() {
    let catalog = Catalog::new(vec![dummy_tool(1, "Alpha", "Chatbot", 1).tool]);
    assert_eq!(page_status(&PageRoute::ToolDetail { id: 1 }, &catalog), StatusCode::OK);
    assert_eq!(page_status(&PageRoute::ToolDetail { id: 9 }, &catalog), StatusCode::NOT_FOUND);
    assert_eq!(page_status(&PageRoute::NotFound, &catalog), StatusCode::NOT_FOUND);
    assert_eq!(page_status(&PageRoute::Login, &catalog), StatusCode::OK);
}

// =============================================================================
// rendering
// =============================================================================

#[tokio::test]
async fn home_renders_top_tools_and_embeds_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let state = seeded_app_state(&dir).await;
    let response = app(state).oneshot(get_request("/", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_string(response).await;
    assert!(html.contains("Top 3 AI Tools"));
    assert!(html.contains("id=\"all-tools-data\""));
    assert!(html.contains("id=\"page-data\""));
    assert!(html.contains("search-input"));
    assert!(html.contains("Gamma"));
}

#[tokio::test]
async fn home_search_lists_matches() {
    let dir = tempfile::tempdir().unwrap();
    let state = seeded_app_state(&dir).await;
    let response = app(state).oneshot(get_request("/?search=ALPHA", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_string(response).await;
    assert!(html.contains("Found 1 results for"));
    assert!(html.contains("\"search\":\"alpha\""));
}

#[tokio::test]
async fn detail_page_renders_tool() {
    let dir = tempfile::tempdir().unwrap();
    let state = seeded_app_state(&dir).await;
    let response = app(state).oneshot(get_request("/ai/2", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_string(response).await;
    assert!(html.contains("Beta"));
    assert!(html.contains("No reviews yet"));
    assert!(html.contains("to leave a review."));
}

#[tokio::test]
async fn detail_page_unknown_tool_is_404() {
    let dir = tempfile::tempdir().unwrap();
    let state = seeded_app_state(&dir).await;
    let response = app(state).oneshot(get_request("/ai/99", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_string(response).await.contains("AI tool not found."));
}

#[tokio::test]
async fn signed_in_detail_page_shows_review_form_and_votes() {
    let dir = tempfile::tempdir().unwrap();
    let state = seeded_app_state(&dir).await;
    state.store.toggle_vote(2, "ana").await.unwrap();
    let cookie = signed_in_cookie(&state, "ana");

    let response = app(state).oneshot(get_request("/ai/2", Some(&cookie))).await.unwrap();
    let html = body_string(response).await;
    assert!(html.contains("/ai/2/review"));
    assert!(html.contains("\"username\":\"ana\""));
    assert!(html.contains("\"voted\":[2]"));
}

// =============================================================================
// submit gating + flashes
// =============================================================================

#[tokio::test]
async fn submit_page_requires_login_and_flashes_once() {
    let dir = tempfile::tempdir().unwrap();
    let state = seeded_app_state(&dir).await;

    let response = app(state.clone()).oneshot(get_request("/submit", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login");
    let cookie = session_cookie(&response).expect("session cookie set");

    let login = app(state.clone()).oneshot(get_request("/login", Some(&cookie))).await.unwrap();
    assert!(body_string(login).await.contains("You must be logged in to submit an AI tool."));

    let again = app(state).oneshot(get_request("/login", Some(&cookie))).await.unwrap();
    assert!(!body_string(again).await.contains("You must be logged in to submit an AI tool."));
}

#[tokio::test]
async fn plain_page_view_sets_no_cookie() {
    let dir = tempfile::tempdir().unwrap();
    let state = seeded_app_state(&dir).await;
    let response = app(state).oneshot(get_request("/login", None)).await.unwrap();
    assert!(session_cookie(&response).is_none());
}

#[tokio::test]
async fn signed_in_submit_page_renders_form() {
    let dir = tempfile::tempdir().unwrap();
    let state = seeded_app_state(&dir).await;
    let cookie = signed_in_cookie(&state, "ana");
    let response = app(state).oneshot(get_request("/submit", Some(&cookie))).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await.contains("ai-long-description"));
}
