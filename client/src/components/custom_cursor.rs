//! Dot + outline cursor that follows the pointer.

use leptos::prelude::*;

use crate::state::cursor::CursorState;

#[cfg(feature = "hydrate")]
use crate::{
    state::cursor::{HOVERED_CLASS, hover_selector},
    util::dom,
};

#[component]
pub fn CustomCursor() -> impl IntoView {
    let cursor = RwSignal::new(CursorState::default());

    #[cfg(feature = "hydrate")]
    {
        let selector = hover_selector();
        let on_move = window_event_listener(leptos::ev::mousemove, move |ev| {
            cursor.update(|c| c.moved(f64::from(ev.client_x()), f64::from(ev.client_y())));
        });
        let on_over = window_event_listener(leptos::ev::mouseover, move |ev| {
            let hovered = dom::event_matches(&ev, &selector);
            cursor.update(|c| {
                c.set_in_window(true);
                c.set_hovered(hovered);
            });
        });
        // `relatedTarget == null` means the pointer left the document.
        let on_out = window_event_listener(leptos::ev::mouseout, move |ev| {
            if ev.related_target().is_none() {
                cursor.update(|c| c.set_in_window(false));
            }
        });
        let hovered = Memo::new(move |_| cursor.with(|c| c.hovered));
        Effect::new(move || dom::set_body_class(HOVERED_CLASS, hovered.get()));
        on_cleanup(move || {
            on_move.remove();
            on_over.remove();
            on_out.remove();
            dom::set_body_class(HOVERED_CLASS, false);
        });
    }

    view! {
        <div
            id="cursor-dot"
            class="cursor-dot"
            style:left=move || cursor.with(CursorState::left)
            style:top=move || cursor.with(CursorState::top)
            style:opacity=move || cursor.with(CursorState::opacity)
            aria-hidden="true"
        ></div>
        <div
            id="cursor-outline"
            class="cursor-outline"
            style:left=move || cursor.with(CursorState::left)
            style:top=move || cursor.with(CursorState::top)
            style:opacity=move || cursor.with(CursorState::opacity)
            aria-hidden="true"
        ></div>
    }
}
