//! JSON payloads embedded in the server-rendered page.
//!
//! The server writes the catalog and the per-request page data into
//! `<script type="application/json">` tags in `<head>`; hydration reads them
//! back once at startup. Reads never fail: a missing or malformed payload
//! yields an empty catalog / default page data.

#[cfg(test)]
#[path = "embedded_test.rs"]
mod embedded_test;

use serde::Serialize;

use super::types::{PageData, Tool};

/// Element id of the catalog payload.
pub const CATALOG_ELEMENT_ID: &str = "all-tools-data";
/// Element id of the viewer/route/flash payload.
pub const PAGE_DATA_ELEMENT_ID: &str = "page-data";

/// Serialize `value` for inclusion inside a `<script>` element.
///
/// `</` is escaped as `<\/` (still valid JSON) so tool text can never close
/// the surrounding tag.
pub fn script_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value)
        .unwrap_or_else(|_| "null".to_owned())
        .replace("</", "<\\/")
}

/// Parse a catalog payload, treating anything malformed as empty.
pub fn parse_catalog(raw: &str) -> Vec<Tool> {
    serde_json::from_str(raw).unwrap_or_default()
}

/// Parse a page-data payload, treating anything malformed as the default.
pub fn parse_page_data(raw: &str) -> PageData {
    serde_json::from_str(raw).unwrap_or_default()
}

/// Read the embedded catalog from the live document.
pub fn read_catalog() -> Vec<Tool> {
    read_script_text(CATALOG_ELEMENT_ID)
        .map(|raw| parse_catalog(&raw))
        .unwrap_or_default()
}

/// Read the embedded page data from the live document.
pub fn read_page_data() -> PageData {
    read_script_text(PAGE_DATA_ELEMENT_ID)
        .map(|raw| parse_page_data(&raw))
        .unwrap_or_default()
}

fn read_script_text(element_id: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()?
            .document()?
            .get_element_by_id(element_id)?
            .text_content()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = element_id;
        None
    }
}
