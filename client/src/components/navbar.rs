//! Top navigation bar.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered on every page. Shows the theme switch and either the profile
//! menu or login/signup links depending on the embedded viewer, and shades
//! itself once the page scrolls.

use leptos::prelude::*;

use crate::components::profile_menu::ProfileMenu;
use crate::components::theme_toggle::ThemeToggle;
use crate::state::catalog::use_page_data;

#[cfg(feature = "hydrate")]
use crate::{state::scroll::navbar_scrolled, util::dom};

#[component]
pub fn Navbar() -> impl IntoView {
    let viewer = use_page_data().viewer;
    let scrolled = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || scrolled.set(navbar_scrolled(dom::scroll_y())));
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            scrolled.set(navbar_scrolled(dom::scroll_y()));
        });
        on_cleanup(move || handle.remove());
    }

    let account = match viewer.username {
        Some(username) => view! { <ProfileMenu username/> }.into_any(),
        None => view! {
            <a href="/login" class="nav-button-login">"Log in"</a>
            <a href="/signup" class="nav-button-primary">"Sign up"</a>
        }
        .into_any(),
    };

    view! {
        <nav class="navbar" class:scrolled=move || scrolled.get()>
            <a href="/" class="nav-brand">
                <span class="nav-brand__mark">"◆"</span>
                "Toolshelf"
            </a>
            <div class="nav-links">
                <a href="/submit" class="nav-button-secondary">"Submit AI"</a>
                <ThemeToggle/>
                {account}
            </div>
        </nav>
    }
}
