//! Live search suggestions with keyboard navigation.
//!
//! DESIGN
//! ======
//! `SearchState` owns the query, the capped suggestion list, and the active
//! index. Input and key events are pure transitions on it; the `SearchBox`
//! component renders the state and performs the returned `SearchCommand`
//! (scrolling, form submission) against the DOM.
//!
//! Navigation states are "no selection" (`active == None`) and "suggestion i
//! selected". Arrow keys wrap in both directions; any new input resets the
//! selection.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use crate::net::types::Tool;

/// Maximum number of suggestions rendered under the input.
pub const MAX_SUGGESTIONS: usize = 5;

/// One rendered suggestion row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Suggestion {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub logo_url: String,
}

impl From<&Tool> for Suggestion {
    fn from(tool: &Tool) -> Self {
        Self {
            id: tool.id,
            name: tool.name.clone(),
            category: tool.category.clone(),
            logo_url: tool.logo_url.clone(),
        }
    }
}

/// The displayed slice of matches plus the total match count.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SuggestionSet {
    pub items: Vec<Suggestion>,
    pub total: usize,
}

impl SuggestionSet {
    /// Matches not displayed (shown as "N more results...").
    pub fn remaining(&self) -> usize {
        self.total - self.items.len()
    }
}

/// Lowercase then trim raw input.
pub fn normalize_query(raw: &str) -> String {
    raw.to_lowercase().trim().to_owned()
}

/// Whether `tool`'s name or category contains the already-normalized query.
pub fn matches(tool: &Tool, query: &str) -> bool {
    tool.name.to_lowercase().contains(query) || tool.category.to_lowercase().contains(query)
}

/// Linear, order-preserving scan of the catalog; keeps the first
/// `MAX_SUGGESTIONS` matches and counts the rest.
pub fn suggest(tools: &[Tool], query: &str) -> SuggestionSet {
    if query.is_empty() {
        return SuggestionSet::default();
    }
    let mut set = SuggestionSet::default();
    for tool in tools.iter().filter(|t| matches(t, query)) {
        if set.items.len() < MAX_SUGGESTIONS {
            set.items.push(Suggestion::from(tool));
        }
        set.total += 1;
    }
    set
}

/// `/?search=...` link for a suggestion (also the form's GET target).
pub fn suggestion_href(name: &str) -> String {
    format!("/?search={}", urlencoding::encode(name))
}

/// Keys the suggestion list reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavKey {
    Down,
    Up,
    Enter,
}

impl NavKey {
    /// Map a `KeyboardEvent.key` value.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowDown" => Some(Self::Down),
            "ArrowUp" => Some(Self::Up),
            "Enter" => Some(Self::Enter),
            _ => None,
        }
    }
}

/// Side effect the component must perform after a handled key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchCommand {
    /// Re-highlight and scroll suggestion `index` into view.
    Highlight(usize),
    /// Submit the form with the raw query as typed.
    SubmitQuery,
    /// Activate suggestion `index` (same as clicking it).
    Choose(usize),
}

/// Search session state for one input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchState {
    pub query: String,
    pub active: Option<usize>,
    pub suggestions: SuggestionSet,
    pub open: bool,
}

impl SearchState {
    /// Recompute suggestions for new input. Always clears the selection.
    pub fn on_input(&mut self, raw: &str, tools: &[Tool]) {
        self.query = normalize_query(raw);
        self.active = None;
        self.suggestions = suggest(tools, &self.query);
        self.open = !self.suggestions.items.is_empty();
    }

    /// Number of suggestions currently navigable (zero while hidden).
    pub fn visible_count(&self) -> usize {
        if self.open { self.suggestions.items.len() } else { 0 }
    }

    /// Apply a navigation key.
    ///
    /// Returns `None` when nothing is displayed: the key is not handled and
    /// the input keeps its default behavior (Enter submits natively).
    /// `Some` means the caller must prevent the default action.
    pub fn on_key(&mut self, key: NavKey) -> Option<SearchCommand> {
        let count = self.visible_count();
        if count == 0 {
            return None;
        }
        match key {
            NavKey::Down => {
                let next = self.active.map_or(0, |i| (i + 1) % count);
                self.active = Some(next);
                Some(SearchCommand::Highlight(next))
            }
            NavKey::Up => {
                let next = self.active.map_or(count - 1, |i| (i + count - 1) % count);
                self.active = Some(next);
                Some(SearchCommand::Highlight(next))
            }
            NavKey::Enter => Some(self.active.map_or(SearchCommand::SubmitQuery, SearchCommand::Choose)),
        }
    }

    /// Name to place in the input when suggestion `index` is activated.
    pub fn suggestion_name(&self, index: usize) -> Option<String> {
        self.suggestions.items.get(index).map(|s| s.name.clone())
    }

    /// Hide the panel after an outside click; the query is kept.
    pub fn dismiss(&mut self) {
        self.open = false;
    }
}
