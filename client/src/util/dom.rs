//! Small browser helpers shared by components.
//!
//! Every helper is a no-op (or returns a neutral value) outside the
//! `hydrate` build so server rendering and native tests stay deterministic.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

/// Blocking notice via `window.alert`.
pub fn alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
    }
}

/// Add or remove a class on `<body>`.
pub fn set_body_class(class: &str, on: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
            let _ = body.class_list().toggle_with_force(class, on);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (class, on);
    }
}

/// Current vertical scroll offset, `0.0` when unavailable.
pub fn scroll_y() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Smooth-scroll the element matching `selector` into view. Unknown or
/// invalid selectors are ignored.
pub fn smooth_scroll_to(selector: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(target) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.query_selector(selector).ok().flatten())
        else {
            return;
        };
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        target.scroll_into_view_with_scroll_into_view_options(&options);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = selector;
    }
}

/// Scroll `el` the minimum distance needed to make it visible.
#[cfg(feature = "hydrate")]
pub fn scroll_into_view_nearest(el: &web_sys::Element) {
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_block(web_sys::ScrollLogicalPosition::Nearest);
    el.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Whether the event target lies inside any of `containers`.
#[cfg(feature = "hydrate")]
pub fn event_within(event: &web_sys::Event, containers: &[Option<web_sys::Element>]) -> bool {
    use wasm_bindgen::JsCast;

    let Some(target) = event.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok()) else {
        return false;
    };
    containers.iter().flatten().any(|c| c.contains(Some(&target)))
}

/// Whether `el` itself (not a descendant) is the event target.
#[cfg(feature = "hydrate")]
pub fn event_targets(event: &web_sys::Event, el: &web_sys::Element) -> bool {
    let el: &wasm_bindgen::JsValue = el.as_ref();
    event.target().is_some_and(|t| {
        let target: &wasm_bindgen::JsValue = t.as_ref();
        target == el
    })
}

/// Whether the event target is, or sits inside, an element matching `selector`.
#[cfg(feature = "hydrate")]
pub fn event_matches(event: &web_sys::Event, selector: &str) -> bool {
    use wasm_bindgen::JsCast;

    event
        .target()
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        .and_then(|el| el.closest(selector).ok().flatten())
        .is_some()
}

/// Fragment target of an in-page link (`"#tools"`), if `href` is one.
pub fn fragment_selector(href: &str) -> Option<&str> {
    (href.len() > 1 && href.starts_with('#')).then_some(href)
}
