//! Listing card for one tool.

use leptos::prelude::*;

use crate::components::tool_modal::open_tool_modal;
use crate::components::vote_button::VoteButton;
use crate::net::types::Tool;
use crate::state::catalog::use_catalog;
use crate::state::modal::ModalState;

/// Clicking anywhere on the card opens the detail modal; the vote button and
/// the details link keep their own behavior.
#[component]
pub fn ToolCard(tool: Tool) -> impl IntoView {
    let catalog = use_catalog();
    let modal = use_context::<RwSignal<ModalState>>();
    let tool_id = tool.id;

    let on_click = move |_| {
        if let Some(modal) = modal {
            open_tool_modal(modal, &catalog, tool_id);
        }
    };

    view! {
        <article class="tool-card reveal-on-scroll" data-tool-id=tool_id on:click=on_click>
            <div class="tool-card__header">
                <img class="tool-logo" src=tool.logo_url.clone() alt=format!("{} logo", tool.name) loading="lazy"/>
                <div class="tool-card__title">
                    <h3 class="tool-name">{tool.name.clone()}</h3>
                    <span class="tool-category">{tool.category.clone()}</span>
                </div>
            </div>
            <p class="tool-description">{tool.description.clone()}</p>
            <div class="tool-card__footer">
                <a
                    class="tool-details-link"
                    href=format!("/ai/{tool_id}")
                    on:click=move |ev| ev.stop_propagation()
                >
                    "Details →"
                </a>
                <VoteButton tool_id count=tool.upvotes/>
            </div>
        </article>
    }
}
