//! Signed-in user dropdown.

use leptos::prelude::*;

use crate::state::menu::MenuState;

#[cfg(feature = "hydrate")]
use crate::util::dom;

/// Avatar button with a dropdown holding the logout link.
#[component]
pub fn ProfileMenu(username: String) -> impl IntoView {
    let menu = RwSignal::new(MenuState::default());
    let toggle_ref = NodeRef::<leptos::html::Button>::new();
    let dropdown_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::click, move |ev| {
            if !menu.with_untracked(|m| m.open) {
                return;
            }
            let inside = dom::event_within(
                &ev,
                &[toggle_ref.get_untracked().map(Into::into), dropdown_ref.get_untracked().map(Into::into)],
            );
            menu.update(|m| m.click(inside));
        });
        on_cleanup(move || handle.remove());
    }

    let initial = username.chars().next().map(|c| c.to_uppercase().to_string()).unwrap_or_default();

    view! {
        <div class="profile-menu">
            <button
                type="button"
                id="profile-toggle-btn"
                class="profile-toggle"
                class:active=move || menu.get().open
                aria-haspopup="true"
                aria-expanded=move || menu.get().open.to_string()
                node_ref=toggle_ref
                on:click=move |ev| {
                    ev.stop_propagation();
                    menu.update(MenuState::toggle);
                }
            >
                <span class="profile-avatar">{initial}</span>
                <span class="profile-name">{username.clone()}</span>
            </button>
            <div
                id="profile-dropdown-menu"
                class="profile-dropdown"
                class:active=move || menu.get().open
                node_ref=dropdown_ref
            >
                <span class="profile-dropdown__user">"Signed in as " <strong>{username}</strong></span>
                <a href="/submit">"Submit an AI tool"</a>
                <a href="/auth/logout" class="logout-link">"Log out"</a>
            </div>
        </div>
    }
}
