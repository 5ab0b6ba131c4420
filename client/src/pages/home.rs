//! Landing page: hero search, the tool listing, and the showcase.

use leptos::prelude::*;

use crate::components::scroll_effects::{ScrollArrow, Showcase};
use crate::components::search_box::SearchBox;
use crate::components::tool_card::ToolCard;
use crate::components::tool_modal::ToolModal;
use crate::state::catalog::{home_listing, use_catalog};

#[component]
pub fn HomePage(search: Option<String>) -> impl IntoView {
    let catalog = use_catalog();
    let listing = home_listing(catalog.tools(), search.as_deref());
    let searching = search.is_some();

    let grid = if listing.tools.is_empty() {
        view! { <p class="empty-state">"No tools matched your search. Try a different name or category."</p> }
            .into_any()
    } else {
        view! {
            <div class="tools-grid">
                {listing.tools.into_iter().map(|tool| view! { <ToolCard tool/> }).collect_view()}
            </div>
        }
        .into_any()
    };

    view! {
        <section class="hero">
            <div class="hero-content">
                <h1 class="hero-title">"Find the right AI tool"</h1>
                <p class="hero-subtitle">"Search, compare, and vote on the AI tools the community relies on."</p>
                <SearchBox initial=search.unwrap_or_default()/>
            </div>
            <ScrollArrow target="#tools"/>
        </section>
        <section id="tools" class="tools-section">
            <h2 class="section-heading">{listing.heading}</h2>
            {grid}
            <Show when=move || searching>
                <a href="/" class="nav-button-secondary tools-section__reset">"Show top tools"</a>
            </Show>
        </section>
        <Showcase/>
        <ToolModal/>
    }
}
