//! Hero search form with live suggestions.
//!
//! The form is a plain `GET /?search=` submission; suggestions only help fill
//! it. All filtering and keyboard rules live in `state::search`; this
//! component renders that state and performs the DOM side of each
//! `SearchCommand`.

use leptos::prelude::*;

use crate::state::catalog::use_catalog;
use crate::state::search::{NavKey, SearchCommand, SearchState, suggestion_href};

#[cfg(feature = "hydrate")]
use crate::util::dom;

#[component]
pub fn SearchBox(#[prop(optional, into)] initial: String) -> impl IntoView {
    let catalog = use_catalog();
    let search = RwSignal::new(SearchState::default());
    let form_ref = NodeRef::<leptos::html::Form>::new();
    let input_ref = NodeRef::<leptos::html::Input>::new();
    let panel_ref = NodeRef::<leptos::html::Div>::new();

    let submit = move || {
        #[cfg(feature = "hydrate")]
        {
            if let Some(form) = form_ref.get_untracked() {
                let _ = form.submit();
            }
        }
    };

    // Same effect as clicking suggestion `index`: fill the input, submit.
    let choose = move |index: usize| {
        let Some(name) = search.with_untracked(|s| s.suggestion_name(index)) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            if let Some(input) = input_ref.get_untracked() {
                input.set_value(&name);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = name;
        submit();
    };

    let highlight = move |index: usize| {
        #[cfg(feature = "hydrate")]
        {
            let item = panel_ref
                .get_untracked()
                .and_then(|panel| panel.query_selector_all(".suggestion-item").ok())
                .and_then(|items| items.item(u32::try_from(index).ok()?))
                .and_then(|node| wasm_bindgen::JsCast::dyn_into::<web_sys::Element>(node).ok());
            if let Some(item) = item {
                dom::scroll_into_view_nearest(&item);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = index;
    };

    let on_input = move |ev| {
        let raw = event_target_value(&ev);
        search.update(|s| s.on_input(&raw, catalog.tools()));
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        let Some(key) = NavKey::from_key(&ev.key()) else {
            return;
        };
        let Some(command) = search.try_update(|s| s.on_key(key)).flatten() else {
            return;
        };
        ev.prevent_default();
        match command {
            SearchCommand::Highlight(index) => highlight(index),
            SearchCommand::SubmitQuery => submit(),
            SearchCommand::Choose(index) => choose(index),
        }
    };

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::click, move |ev| {
            if !search.with_untracked(|s| s.open) {
                return;
            }
            let inside = dom::event_within(
                &ev,
                &[input_ref.get_untracked().map(Into::into), panel_ref.get_untracked().map(Into::into)],
            );
            if !inside {
                search.update(SearchState::dismiss);
            }
        });
        on_cleanup(move || handle.remove());
    }

    let remaining = move || search.with(|s| s.suggestions.remaining());

    view! {
        <form class="search-form" id="hero-search-container" action="/" method="get" node_ref=form_ref>
            <div class="search-field">
                <input
                    type="search"
                    name="search"
                    id="search-input"
                    placeholder="Search AI tools by name or category..."
                    autocomplete="off"
                    value=initial
                    node_ref=input_ref
                    on:input=on_input
                    on:keydown=on_keydown
                />
                <div
                    id="search-suggestions"
                    class="search-suggestions"
                    style:display=move || if search.with(|s| s.open) { "block" } else { "none" }
                    node_ref=panel_ref
                >
                    <For
                        each=move || search.with(|s| s.suggestions.items.clone().into_iter().enumerate().collect::<Vec<_>>())
                        key=|(index, item)| (*index, item.id)
                        children=move |(index, item)| {
                            view! {
                                <a
                                    class="suggestion-item"
                                    class:active=move || search.with(|s| s.active == Some(index))
                                    href=suggestion_href(&item.name)
                                    on:click=move |ev| {
                                        ev.prevent_default();
                                        choose(index);
                                    }
                                >
                                    <img src=item.logo_url.clone() alt=format!("{} logo", item.name)/>
                                    <span class="name">{item.name.clone()}</span>
                                    <span class="category">{item.category.clone()}</span>
                                </a>
                            }
                        }
                    />
                    <Show when=move || { remaining() > 0 }>
                        <div class="suggestion-footer">{move || format!("{} more results...", remaining())}</div>
                    </Show>
                </div>
            </div>
            <button type="submit" class="search-button">"Search"</button>
        </form>
    }
}
