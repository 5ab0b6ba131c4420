//! `IntersectionObserver` wrapper.
//!
//! Owns the JS callback closure alongside the observer and disconnects on
//! drop, so a component can keep one in a `StoredValue` and have it torn
//! down with the component's owner.

#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, JsValue, closure::Closure};

/// One entry of an observer batch, reduced to what components need.
#[cfg(feature = "hydrate")]
pub struct Intersection {
    pub target: web_sys::Element,
    pub intersecting: bool,
}

#[cfg(feature = "hydrate")]
type Callback = Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>;

#[cfg(feature = "hydrate")]
pub struct IntersectionWatch {
    observer: web_sys::IntersectionObserver,
    _callback: Callback,
}

#[cfg(feature = "hydrate")]
impl IntersectionWatch {
    /// Create a viewport observer firing at `threshold` visibility.
    ///
    /// The handler receives each batch plus the observer, so it can
    /// `unobserve` targets that only need one notification.
    pub fn new(
        threshold: f64,
        mut on_batch: impl FnMut(Vec<Intersection>, &web_sys::IntersectionObserver) + 'static,
    ) -> Option<Self> {
        let callback: Callback = Closure::new(move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            let batch = entries
                .iter()
                .filter_map(|value| value.dyn_into::<web_sys::IntersectionObserverEntry>().ok())
                .map(|entry| Intersection { target: entry.target(), intersecting: entry.is_intersecting() })
                .collect();
            on_batch(batch, &observer);
        });

        let init = web_sys::IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        let observer = web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(|e| log::warn!("intersection observer unavailable: {e:?}"))
            .ok()?;
        Some(Self { observer, _callback: callback })
    }

    pub fn observe(&self, target: &web_sys::Element) {
        self.observer.observe(target);
    }

    /// Observe every element matching `selector` inside `root`.
    pub fn observe_all(&self, root: &web_sys::Element, selector: &str) -> u32 {
        let Ok(nodes) = root.query_selector_all(selector) else {
            return 0;
        };
        let mut count = 0;
        for i in 0..nodes.length() {
            if let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<web_sys::Element>().ok()) {
                self.observe(&el);
                count += 1;
            }
        }
        count
    }
}

#[cfg(feature = "hydrate")]
impl Drop for IntersectionWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
