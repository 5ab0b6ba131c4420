//! Upvote button with optimistic update and rollback.

use leptos::prelude::*;

use crate::state::catalog::use_page_data;
use crate::state::vote::{VoteAction, VoteState};
use crate::util::dom;

#[cfg(feature = "hydrate")]
use crate::state::vote::{VoteOutcome, VoteResolution};

/// Notice shown when a signed-out viewer clicks a vote button.
pub const SIGN_IN_NOTICE: &str = "Please sign in to vote!";

/// Each button owns its own `VoteState`; nothing is shared between buttons.
#[component]
pub fn VoteButton(tool_id: u32, count: i64) -> impl IntoView {
    let viewer = use_page_data().viewer;
    let disabled = !viewer.signed_in();
    let vote = RwSignal::new(VoteState::new(tool_id, viewer.has_voted(tool_id), count, disabled));

    let on_click = move |ev: leptos::ev::MouseEvent| {
        // Never reach the enclosing card (which would open the modal).
        ev.stop_propagation();
        match vote.try_update(VoteState::click) {
            Some(VoteAction::SignInRequired) => dom::alert(SIGN_IN_NOTICE),
            Some(VoteAction::Submit { tool_id, token }) => {
                #[cfg(feature = "hydrate")]
                leptos::task::spawn_local(async move {
                    let outcome = VoteOutcome::from(crate::net::api::cast_vote(tool_id).await);
                    match vote.try_update(|v| v.resolve(token, outcome)) {
                        Some(VoteResolution::RolledBack { reason }) => {
                            log::error!("vote on tool {tool_id} failed, rolled back: {reason}");
                        }
                        Some(VoteResolution::Stale) => log::debug!("ignoring stale vote response {token} for tool {tool_id}"),
                        Some(VoteResolution::Applied) | None => {}
                    }
                });
                #[cfg(not(feature = "hydrate"))]
                let _ = (tool_id, token);
            }
            None => {}
        }
    };

    view! {
        <button
            type="button"
            class="vote-button"
            class:voted=move || vote.get().voted
            class:is-disabled=disabled
            aria-disabled=disabled.to_string()
            aria-pressed=move || vote.get().voted.to_string()
            data-tool-id=tool_id
            title=if disabled { "Sign in to vote" } else { "Upvote" }
            on:click=on_click
        >
            <span class="vote-arrow" aria-hidden="true">"▲"</span>
            <span class="vote-count">{move || vote.get().count}</span>
        </button>
    }
}
