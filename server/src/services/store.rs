//! JSON-file-backed tool and user records.
//!
//! ARCHITECTURE
//! ============
//! Both files are loaded into memory at startup. Reads clone out of a
//! `tokio::sync::RwLock`; every mutation holds the write lock while it
//! rewrites the file (temp file + rename), so concurrent votes serialize and
//! the file never lags behind what handlers have observed.
//!
//! TRADE-OFFS
//! ==========
//! Reads are forgiving: a missing file is an empty store and a malformed one
//! is logged and treated as empty. Write failures surface as `StoreError`
//! and leave the in-memory state unchanged.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use client::net::types::{Review, Tool};
use serde::{Deserialize, Serialize};
use serde::de::DeserializeOwned;
use tokio::sync::RwLock;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("tool {0} not found")]
    ToolNotFound(u32),
    #[error("username {0} already exists")]
    UsernameTaken(String),
    #[error("email already registered")]
    EmailTaken,
    #[error("io error on {path}: {source}")]
    Io { path: PathBuf, source: std::io::Error },
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A stored tool: the public catalog fields plus who has voted for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolRecord {
    #[serde(flatten)]
    pub tool: Tool,
    #[serde(default)]
    pub voted_by: Vec<String>,
}

/// A stored account. Passwords are kept as salted SHA-256 digests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub email: String,
    pub password_hash: String,
    pub salt: String,
}

/// Result of toggling a vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoteTally {
    pub new_count: i64,
    pub voted: bool,
}

/// Fields of a new tool before an id is assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTool {
    pub name: String,
    pub category: String,
    pub description: String,
    pub long_description: String,
    pub url: String,
    pub logo_url: String,
    pub ceo_team: Vec<String>,
    pub pricing: String,
}

pub struct Store {
    tools_path: PathBuf,
    users_path: PathBuf,
    tools: RwLock<Vec<ToolRecord>>,
    users: RwLock<BTreeMap<String, UserRecord>>,
}

impl Store {
    /// Load both data files.
    ///
    /// # Errors
    ///
    /// Returns an error only when a file exists but cannot be read.
    pub async fn open(tools_path: impl Into<PathBuf>, users_path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let tools_path = tools_path.into();
        let users_path = users_path.into();
        let tools: Vec<ToolRecord> = read_json(&tools_path).await?;
        let users: BTreeMap<String, UserRecord> = read_json(&users_path).await?;
        tracing::info!(tools = tools.len(), users = users.len(), path = %tools_path.display(), "store loaded");
        Ok(Self { tools_path, users_path, tools: RwLock::new(tools), users: RwLock::new(users) })
    }

    /// Public catalog in file order.
    pub async fn tools(&self) -> Vec<Tool> {
        self.tools.read().await.iter().map(|r| r.tool.clone()).collect()
    }

    pub async fn find_tool(&self, id: u32) -> Option<Tool> {
        self.tools.read().await.iter().find(|r| r.tool.id == id).map(|r| r.tool.clone())
    }

    /// Ids of tools `username` currently votes for.
    pub async fn voted_by(&self, username: &str) -> Vec<u32> {
        self.tools
            .read()
            .await
            .iter()
            .filter(|r| r.voted_by.iter().any(|u| u == username))
            .map(|r| r.tool.id)
            .collect()
    }

    /// Add or remove `username`'s vote on tool `id` and persist.
    ///
    /// # Errors
    ///
    /// `ToolNotFound` for an unknown id, or a write failure.
    pub async fn toggle_vote(&self, id: u32, username: &str) -> Result<VoteTally, StoreError> {
        self.mutate_tools(|tools| {
            let record = tools.iter_mut().find(|r| r.tool.id == id).ok_or(StoreError::ToolNotFound(id))?;
            let voted = if let Some(pos) = record.voted_by.iter().position(|u| u == username) {
                record.voted_by.remove(pos);
                record.tool.upvotes -= 1;
                false
            } else {
                record.voted_by.push(username.to_owned());
                record.tool.upvotes += 1;
                true
            };
            Ok(VoteTally { new_count: record.tool.upvotes, voted })
        })
        .await
    }

    /// Append a review to tool `id` and persist.
    ///
    /// # Errors
    ///
    /// `ToolNotFound` for an unknown id, or a write failure.
    pub async fn add_review(&self, id: u32, review: Review) -> Result<(), StoreError> {
        self.mutate_tools(|tools| {
            let record = tools.iter_mut().find(|r| r.tool.id == id).ok_or(StoreError::ToolNotFound(id))?;
            record.tool.reviews.push(review);
            Ok(())
        })
        .await
    }

    /// Append a tool with the next free id (max + 1) and persist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub async fn add_tool(&self, new: NewTool) -> Result<u32, StoreError> {
        self.mutate_tools(|tools| {
            let id = tools.iter().map(|r| r.tool.id).max().unwrap_or(0) + 1;
            tools.push(ToolRecord {
                tool: Tool {
                    id,
                    name: new.name,
                    category: new.category,
                    description: new.description,
                    long_description: Some(new.long_description),
                    logo_url: new.logo_url,
                    url: new.url,
                    upvotes: 0,
                    pricing: Some(new.pricing),
                    ceo_team: new.ceo_team,
                    reviews: Vec::new(),
                },
                voted_by: Vec::new(),
            });
            Ok(id)
        })
        .await
    }

    pub async fn find_user(&self, username: &str) -> Option<UserRecord> {
        self.users.read().await.get(username).cloned()
    }

    /// Add a new account and persist. Both uniqueness checks run under the
    /// write lock, so concurrent signups cannot claim the same name or email.
    ///
    /// # Errors
    ///
    /// `UsernameTaken` or `EmailTaken` (case-insensitive) on a conflict, or a
    /// write failure.
    pub async fn insert_user(&self, username: &str, record: UserRecord) -> Result<(), StoreError> {
        let mut users = self.users.write().await;
        if users.contains_key(username) {
            return Err(StoreError::UsernameTaken(username.to_owned()));
        }
        if users.values().any(|u| u.email.eq_ignore_ascii_case(&record.email)) {
            return Err(StoreError::EmailTaken);
        }
        let mut next = users.clone();
        next.insert(username.to_owned(), record);
        write_json(&self.users_path, &next).await?;
        *users = next;
        Ok(())
    }

    /// Apply `f` to a copy of the tools and commit it once the file is written.
    async fn mutate_tools<T>(
        &self,
        f: impl FnOnce(&mut Vec<ToolRecord>) -> Result<T, StoreError>,
    ) -> Result<T, StoreError> {
        let mut tools = self.tools.write().await;
        let mut next = tools.clone();
        let out = f(&mut next)?;
        write_json(&self.tools_path, &next).await?;
        *tools = next;
        Ok(out)
    }
}

async fn read_json<T: DeserializeOwned + Default>(path: &Path) -> Result<T, StoreError> {
    let raw = match tokio::fs::read_to_string(path).await {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::warn!(path = %path.display(), "data file missing, starting empty");
            return Ok(T::default());
        }
        Err(source) => return Err(StoreError::Io { path: path.to_owned(), source }),
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Ok(value),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "malformed data file, starting empty");
            Ok(T::default())
        }
    }
}

async fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), StoreError> {
    let body = serde_json::to_vec_pretty(value)?;
    let io_err = |source| StoreError::Io { path: path.to_owned(), source };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await.map_err(io_err)?;
    }
    let tmp = path.with_extension("json.tmp");
    tokio::fs::write(&tmp, body).await.map_err(io_err)?;
    tokio::fs::rename(&tmp, path).await.map_err(io_err)?;
    Ok(())
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
