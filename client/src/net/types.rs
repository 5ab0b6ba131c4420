//! Shared wire DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! The server serializes these into the page (`all-tools-data`, `page-data`)
//! and into the vote endpoint's JSON body; the browser deserializes the same
//! types, so both sides stay schema-aligned without a separate contract crate.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A catalog entry as embedded in the page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tool {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub description: String,
    /// Optional longer copy shown in the modal and on the detail page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
    #[serde(default)]
    pub logo_url: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub upvotes: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pricing: Option<String>,
    #[serde(default)]
    pub ceo_team: Vec<String>,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

impl Tool {
    /// Long description when present and non-blank, otherwise the short one.
    pub fn detail_text(&self) -> &str {
        match self.long_description.as_deref() {
            Some(text) if !text.trim().is_empty() => text,
            _ => &self.description,
        }
    }

    /// Mean review rating, or `None` when there are no reviews.
    pub fn average_rating(&self) -> Option<f64> {
        if self.reviews.is_empty() {
            return None;
        }
        let total: u32 = self.reviews.iter().map(|r| u32::from(r.rating)).sum();
        #[allow(clippy::cast_precision_loss)]
        let mean = f64::from(total) / self.reviews.len() as f64;
        Some(mean)
    }
}

/// A user review attached to a tool.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub username: String,
    pub rating: u8,
    pub comment: String,
    /// Submission date formatted as `MM/DD/YYYY`.
    pub date: String,
}

/// The browsing user as seen by the page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewer {
    /// Signed-in username; `None` disables voting and review forms.
    #[serde(default)]
    pub username: Option<String>,
    /// Tool ids this user has upvoted.
    #[serde(default)]
    pub voted: Vec<u32>,
}

impl Viewer {
    pub fn signed_in(&self) -> bool {
        self.username.is_some()
    }

    pub fn has_voted(&self, tool_id: u32) -> bool {
        self.voted.contains(&tool_id)
    }
}

/// Severity of a flash message; maps to a `flash-{category}` CSS class.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashCategory {
    Success,
    Error,
    #[default]
    Info,
}

impl FlashCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
        }
    }
}

/// One server-queued notification shown once on the next rendered page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    pub category: FlashCategory,
    pub message: String,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self { category: FlashCategory::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { category: FlashCategory::Error, message: message.into() }
    }
}

/// Which page a request resolved to.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum PageRoute {
    Home {
        #[serde(default)]
        search: Option<String>,
    },
    Login,
    Signup,
    Submit,
    ToolDetail {
        id: u32,
    },
    #[default]
    NotFound,
}

impl PageRoute {
    /// Resolve a request path (and the raw `search` query value) to a page.
    pub fn from_path(path: &str, search: Option<&str>) -> Self {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Self::Home { search: search.map(str::to_lowercase).filter(|q| !q.is_empty()) },
            ["login"] => Self::Login,
            ["signup"] => Self::Signup,
            ["submit"] => Self::Submit,
            ["ai", id] => id.parse().map_or(Self::NotFound, |id| Self::ToolDetail { id }),
            _ => Self::NotFound,
        }
    }

    /// Document title for the page.
    pub fn title(&self) -> String {
        match self {
            Self::Home { search: Some(q) } => format!("Search: {q} · Toolshelf"),
            Self::Home { search: None } => "Toolshelf · Discover AI tools".to_owned(),
            Self::Login => "Log in · Toolshelf".to_owned(),
            Self::Signup => "Sign up · Toolshelf".to_owned(),
            Self::Submit => "Submit an AI tool · Toolshelf".to_owned(),
            Self::ToolDetail { .. } => "AI tool · Toolshelf".to_owned(),
            Self::NotFound => "Not found · Toolshelf".to_owned(),
        }
    }
}

/// Per-request payload embedded next to the catalog.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageData {
    #[serde(default)]
    pub route: PageRoute,
    #[serde(default)]
    pub viewer: Viewer,
    #[serde(default)]
    pub flashes: Vec<Flash>,
}

/// JSON body of `POST /vote/{toolId}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_count: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voted: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Authoritative vote state returned by a successful vote request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VoteReceipt {
    pub new_count: i64,
    pub voted: bool,
}

impl VoteResponse {
    pub fn confirmed(new_count: i64, voted: bool) -> Self {
        Self { success: true, new_count: Some(new_count), voted: Some(voted), error: None }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self { success: false, new_count: None, voted: None, error: Some(error.into()) }
    }

    /// Interpret the body: a success without both fields counts as malformed.
    ///
    /// # Errors
    ///
    /// Returns the server's error text (or a generic message) when the vote
    /// was not applied or the payload is incomplete.
    pub fn into_receipt(self) -> Result<VoteReceipt, String> {
        if !self.success {
            return Err(self.error.unwrap_or_else(|| "Vote failed".to_owned()));
        }
        match (self.new_count, self.voted) {
            (Some(new_count), Some(voted)) => Ok(VoteReceipt { new_count, voted }),
            _ => Err("malformed vote response".to_owned()),
        }
    }
}
