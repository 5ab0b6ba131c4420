//! Tool detail modal shared by every card on the page.
//!
//! DESIGN
//! ======
//! One `RwSignal<ModalState>` is provided by `App`; cards open it and the
//! modal renders whichever tool it currently holds. The show/hide timers
//! carry a generation so a late timer cannot act on a newer open/close.

use leptos::prelude::*;

use crate::net::types::Tool;
use crate::state::catalog::Catalog;
use crate::state::modal::ModalState;

#[cfg(feature = "hydrate")]
use crate::state::modal::{CLOSE_DELAY_MS, OPEN_DELAY_MS};
#[cfg(feature = "hydrate")]
use crate::util::dom;

/// Open the modal for `tool_id`; unknown ids are ignored.
pub fn open_tool_modal(modal: RwSignal<ModalState>, catalog: &Catalog, tool_id: u32) {
    let Some(generation) = modal.try_update(|m| m.open(catalog, tool_id)).flatten() else {
        return;
    };
    #[cfg(feature = "hydrate")]
    gloo_timers::callback::Timeout::new(OPEN_DELAY_MS, move || {
        modal.try_update(|m| m.reveal(generation));
    })
    .forget();
    #[cfg(not(feature = "hydrate"))]
    let _ = generation;
}

/// Drop `is-visible` now and hide once the transition has run.
pub fn close_tool_modal(modal: RwSignal<ModalState>) {
    let Some(generation) = modal.try_update(ModalState::close).flatten() else {
        return;
    };
    #[cfg(feature = "hydrate")]
    gloo_timers::callback::Timeout::new(CLOSE_DELAY_MS, move || {
        modal.try_update(|m| m.finish_close(generation));
    })
    .forget();
    #[cfg(not(feature = "hydrate"))]
    let _ = generation;
}

fn tool_field(modal: RwSignal<ModalState>, read: fn(&Tool) -> String) -> impl Fn() -> String + Copy + Send + Sync + 'static {
    move || modal.with(|m| m.tool.as_ref().map(read).unwrap_or_default())
}

#[component]
pub fn ToolModal() -> impl IntoView {
    let Some(modal) = use_context::<RwSignal<ModalState>>() else {
        return ().into_any();
    };
    let root_ref = NodeRef::<leptos::html::Div>::new();

    let logo = tool_field(modal, |t| t.logo_url.clone());
    let name = tool_field(modal, |t| t.name.clone());
    let category = tool_field(modal, |t| t.category.clone());
    let detail = tool_field(modal, |t| t.detail_text().to_owned());
    let url = tool_field(modal, |t| t.url.clone());
    let detail_href = tool_field(modal, |t| format!("/ai/{}", t.id));

    let on_backdrop = move |ev: leptos::ev::MouseEvent| {
        #[cfg(feature = "hydrate")]
        {
            if root_ref.get_untracked().is_some_and(|root| dom::event_targets(&ev, &root)) {
                close_tool_modal(modal);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };

    view! {
        <div
            id="tool-modal"
            class="modal"
            class:is-visible=move || modal.with(ModalState::is_visible)
            style:display=move || if modal.with(ModalState::is_displayed) { "grid" } else { "none" }
            role="dialog"
            aria-modal="true"
            aria-labelledby="modal-name"
            node_ref=root_ref
            on:click=on_backdrop
        >
            <div class="modal-content">
                <button
                    type="button"
                    id="modal-close-btn"
                    class="modal-close"
                    aria-label="Close"
                    on:click=move |_| close_tool_modal(modal)
                >
                    "×"
                </button>
                <div class="modal-header">
                    <img id="modal-logo" class="modal-logo" src=logo alt=move || format!("{} logo", name())/>
                    <div>
                        <h2 id="modal-name">{name}</h2>
                        <span id="modal-category" class="tool-category">{category}</span>
                    </div>
                </div>
                <p id="modal-long-description">{detail}</p>
                <div class="modal-actions">
                    <a id="modal-visit-link" class="nav-button-primary" href=url target="_blank" rel="noopener noreferrer">
                        "Visit website"
                    </a>
                    <a class="nav-button-secondary" href=detail_href>"Reviews & details"</a>
                </div>
            </div>
        </div>
    }
    .into_any()
}
