//! Server-queued flash messages with staggered auto-dismiss.

use leptos::prelude::*;

use crate::state::catalog::use_page_data;
use crate::state::flash::FlashQueue;

#[cfg(feature = "hydrate")]
use crate::state::flash::{FADE_MS, dismiss_delay_ms};

#[component]
pub fn FlashMessages() -> impl IntoView {
    let queue = RwSignal::new(FlashQueue::new(use_page_data().flashes));

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let keys: Vec<usize> = queue.with_untracked(|q| q.entries().iter().map(|e| e.key).collect());
        for (index, key) in keys.into_iter().enumerate() {
            gloo_timers::callback::Timeout::new(dismiss_delay_ms(index), move || {
                if queue.try_update(|q| q.begin_fade(key)) == Some(true) {
                    gloo_timers::callback::Timeout::new(FADE_MS, move || {
                        queue.try_update(|q| q.remove(key));
                    })
                    .forget();
                }
            })
            .forget();
        }
    });

    view! {
        <Show when=move || !queue.with(FlashQueue::is_empty)>
            <div id="flash-container" class="flash-container">
                <For
                    each=move || queue.with(|q| q.entries().to_vec())
                    key=|entry| entry.key
                    children=move |entry| {
                        let key = entry.key;
                        view! {
                            <div
                                class=format!("flash-message flash-{}", entry.flash.category.as_str())
                                class:is-fading=move || queue.with(|q| q.is_fading(key))
                                role="status"
                            >
                                <span class="flash-text">{entry.flash.message}</span>
                                <button
                                    type="button"
                                    class="flash-close"
                                    aria-label="Dismiss"
                                    on:click=move |_| queue.update(|q| q.remove(key))
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    }
                />
            </div>
        </Show>
    }
}
