//! Theme initialization and toggle.
//!
//! Reads the stored theme from `localStorage` (default dark) and applies it
//! as a `data-theme` attribute on `<html>` plus a `--color-surface-rgb`
//! custom property used by translucent surfaces. Requires a browser
//! environment; non-hydrate builds no-op.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// `localStorage` key holding `"light"` or `"dark"`.
pub const STORAGE_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value; anything unrecognized is `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// RGB triple written to `--color-surface-rgb`.
    pub fn surface_rgb(self) -> &'static str {
        match self {
            Self::Light => "246, 248, 250",
            Self::Dark => "22, 27, 34",
        }
    }

    /// Theme selected by the toggle switch (checked means light).
    pub fn from_checkbox(checked: bool) -> Self {
        if checked { Self::Light } else { Self::Dark }
    }

    pub fn is_light(self) -> bool {
        self == Self::Light
    }
}

/// Read the stored theme, falling back to dark.
pub fn read_preference() -> Theme {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten())
            .and_then(|raw| Theme::parse(&raw))
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Theme::default()
    }
}

/// Apply `data-theme` and the surface color token on `<html>`.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            return;
        };
        let _ = el.set_attribute("data-theme", theme.as_str());
        if let Ok(html) = el.dyn_into::<web_sys::HtmlElement>() {
            let _ = html.style().set_property("--color-surface-rgb", theme.surface_rgb());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Apply `theme` and persist it.
pub fn store(theme: Theme) {
    apply(theme);
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(STORAGE_KEY, theme.as_str());
        }
    }
}
