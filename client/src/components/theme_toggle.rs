//! Light/dark switch in the navbar.

use leptos::prelude::*;

use crate::util::theme::{self, Theme};

/// Checkbox slider mirroring the stored theme (checked = light).
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let current = RwSignal::new(Theme::default());

    // Server render assumes the default; the stored value arrives on mount.
    Effect::new(move || current.set(theme::read_preference()));

    let on_change = move |ev| {
        let next = Theme::from_checkbox(event_target_checked(&ev));
        theme::store(next);
        current.set(next);
    };

    view! {
        <label class="theme-toggle" title="Toggle light/dark theme">
            <input
                type="checkbox"
                id="theme-slider-checkbox"
                prop:checked=move || current.get().is_light()
                on:change=on_change
            />
            <span class="theme-slider" aria-hidden="true"></span>
        </label>
    }
}
