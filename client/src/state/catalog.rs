//! Read-only tool catalog shared by the modal, search, and listing views.
//!
//! DESIGN
//! ======
//! The catalog is parsed once per page and never mutated, so it is shared
//! through Leptos context as a cheap `Arc` clone rather than a signal.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use std::sync::Arc;

use leptos::prelude::*;

use crate::net::types::{PageData, Tool};

/// Number of tools shown on the landing page when no search is active.
pub const TOP_TOOLS: usize = 3;

/// The page's tool catalog, in server (file) order.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    tools: Arc<Vec<Tool>>,
}

impl Catalog {
    pub fn new(tools: Vec<Tool>) -> Self {
        Self { tools: Arc::new(tools) }
    }

    pub fn tools(&self) -> &[Tool] {
        &self.tools
    }

    pub fn find(&self, id: u32) -> Option<&Tool> {
        self.tools.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

/// Tools and heading for the landing page.
#[derive(Clone, Debug, PartialEq)]
pub struct HomeListing {
    pub heading: String,
    pub tools: Vec<Tool>,
}

/// Build the landing listing.
///
/// Without a query: the `TOP_TOOLS` most upvoted. With a query: every tool
/// whose name, description, or category contains it (case-insensitive).
/// Both views are ordered by upvotes, descending; ties keep catalog order.
pub fn home_listing(tools: &[Tool], search: Option<&str>) -> HomeListing {
    let mut ranked: Vec<Tool> = tools.to_vec();
    ranked.sort_by(|a, b| b.upvotes.cmp(&a.upvotes));

    let query = search.map(str::to_lowercase).filter(|q| !q.is_empty());
    match query {
        Some(q) => {
            let matches: Vec<Tool> = ranked
                .into_iter()
                .filter(|t| {
                    t.name.to_lowercase().contains(&q)
                        || t.description.to_lowercase().contains(&q)
                        || t.category.to_lowercase().contains(&q)
                })
                .collect();
            HomeListing { heading: format!("Found {} results for \"{q}\"", matches.len()), tools: matches }
        }
        None => {
            ranked.truncate(TOP_TOOLS);
            HomeListing { heading: format!("Today's Top {TOP_TOOLS} AI Tools"), tools: ranked }
        }
    }
}

/// Catalog from context, or an empty one when none was provided.
pub fn use_catalog() -> Catalog {
    use_context::<Catalog>().unwrap_or_default()
}

/// Page data from context, or the default when none was provided.
pub fn use_page_data() -> PageData {
    use_context::<PageData>().unwrap_or_default()
}
