//! Environment-driven server settings.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read once in `main` after `dotenvy` has loaded any `.env` file. Leptos
//! asset options are loaded separately through `get_configuration`.

use std::path::PathBuf;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_TOOLS_FILE: &str = "data/tools.json";
const DEFAULT_USERS_FILE: &str = "data/users.json";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0:?}")]
    InvalidPort(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub tools_file: PathBuf,
    pub users_file: PathBuf,
    /// Mark the session cookie `Secure` (HTTPS deployments).
    pub cookie_secure: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            tools_file: PathBuf::from(DEFAULT_TOOLS_FILE),
            users_file: PathBuf::from(DEFAULT_USERS_FILE),
            cookie_secure: false,
        }
    }
}

impl ServerConfig {
    /// Load settings from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is set but is not a valid port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => defaults.port,
        };
        Ok(Self {
            port,
            tools_file: lookup("TOOLS_FILE").map_or(defaults.tools_file, PathBuf::from),
            users_file: lookup("USERS_FILE").map_or(defaults.users_file, PathBuf::from),
            cookie_secure: lookup("COOKIE_SECURE").as_deref().and_then(parse_bool).unwrap_or(false),
        })
    }
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
