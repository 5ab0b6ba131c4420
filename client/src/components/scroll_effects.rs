//! Scroll-driven effects: the hero arrow, the sticky showcase, and
//! fade-in reveals.

use leptos::prelude::*;

use crate::state::scroll::ShowcaseState;
use crate::util::dom;

#[cfg(feature = "hydrate")]
use crate::state::scroll::{REVEAL_SELECTOR, REVEAL_THRESHOLD, REVEALED_CLASS, SHOWCASE_THRESHOLD, ShowcaseEntry};
#[cfg(feature = "hydrate")]
use crate::util::observer::IntersectionWatch;

/// Hero arrow that smooth-scrolls to an in-page target.
#[component]
pub fn ScrollArrow(target: &'static str) -> impl IntoView {
    view! {
        <a
            href=target
            class="scroll-down-arrow"
            aria-label="Scroll to tools"
            on:click=move |ev| {
                if let Some(selector) = dom::fragment_selector(target) {
                    ev.prevent_default();
                    dom::smooth_scroll_to(selector);
                }
            }
        >
            "↓"
        </a>
    }
}

struct ShowcaseStep {
    image_id: &'static str,
    icon: &'static str,
    title: &'static str,
    body: &'static str,
}

const SHOWCASE_STEPS: &[ShowcaseStep] = &[
    ShowcaseStep {
        image_id: "showcase-discover",
        icon: "⌕",
        title: "Discover",
        body: "Search the whole catalog as you type. Suggestions match tool names and categories.",
    },
    ShowcaseStep {
        image_id: "showcase-compare",
        icon: "⚖",
        title: "Compare",
        body: "Open any card for the full description, pricing, the team behind it, and community reviews.",
    },
    ShowcaseStep {
        image_id: "showcase-vote",
        icon: "▲",
        title: "Vote",
        body: "Upvote the tools you rely on. The top three rise to the front page every day.",
    },
    ShowcaseStep {
        image_id: "showcase-share",
        icon: "＋",
        title: "Share",
        body: "Found something new? Submit it with a link and a short pitch and let the community weigh in.",
    },
];

/// Text blocks scroll past a sticky column of image cards; the block in
/// view selects which card is active.
#[component]
pub fn Showcase() -> impl IntoView {
    let showcase = RwSignal::new(ShowcaseState::default());
    let root_ref = NodeRef::<leptos::html::Section>::new();

    #[cfg(feature = "hydrate")]
    {
        let watch = StoredValue::new_local(None::<IntersectionWatch>);
        Effect::new(move || {
            let Some(root) = root_ref.get() else {
                return;
            };
            let observer = IntersectionWatch::new(SHOWCASE_THRESHOLD, move |batch, _| {
                let entries: Vec<ShowcaseEntry> = batch
                    .iter()
                    .map(|hit| ShowcaseEntry {
                        image_id: hit.target.get_attribute("data-image-id"),
                        intersecting: hit.intersecting,
                    })
                    .collect();
                showcase.try_update(|s| s.observe(&entries));
            });
            if let Some(observer) = observer {
                observer.observe_all(&root, ".text-block");
                watch.set_value(Some(observer));
            }
        });
    }

    view! {
        <section class="showcase" node_ref=root_ref>
            <div class="showcase-text">
                {SHOWCASE_STEPS
                    .iter()
                    .map(|step| {
                        view! {
                            <div class="text-block" data-image-id=step.image_id>
                                <h3>{step.title}</h3>
                                <p>{step.body}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="showcase-images">
                {SHOWCASE_STEPS
                    .iter()
                    .map(|step| {
                        let id = step.image_id;
                        view! {
                            <div class="image-card" id=id class:active=move || showcase.with(|s| s.is_active(id))>
                                <span class="image-card__icon">{step.icon}</span>
                                <span class="image-card__label">{step.title}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

/// Adds a permanent `is-visible` class to `.reveal-on-scroll` elements the
/// first time they enter the viewport. Renders nothing.
#[component]
pub fn RevealWatcher() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    watch_reveals();
}

#[cfg(feature = "hydrate")]
fn watch_reveals() {
    let watch = StoredValue::new_local(None::<IntersectionWatch>);
    Effect::new(move || {
        let Some(root) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) else {
            return;
        };
        let observer = IntersectionWatch::new(REVEAL_THRESHOLD, |batch, observer| {
            for hit in batch.into_iter().filter(|hit| hit.intersecting) {
                let _ = hit.target.class_list().add_1(REVEALED_CLASS);
                observer.unobserve(&hit.target);
            }
        });
        if let Some(observer) = observer {
            let count = observer.observe_all(&root, REVEAL_SELECTOR);
            log::debug!("watching {count} reveal elements");
            watch.set_value(Some(observer));
        }
    });
}
