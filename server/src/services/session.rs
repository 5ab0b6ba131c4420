//! Cookie-keyed session table.
//!
//! ARCHITECTURE
//! ============
//! A session is created lazily: a visitor gets a fresh random token on every
//! request until something (a login, a flash) is stored under it. Entries
//! hold the signed-in username and flashes queued for the next page.
//!
//! TRADE-OFFS
//! ==========
//! Sessions live in process memory, so a restart logs everyone out. The
//! lock is a `std::sync::Mutex` and is never held across an `.await`.
//!
//! Anonymous entries exist only to carry flashes: they are removed once
//! drained, and any left idle past `ANONYMOUS_IDLE` (a visitor that never
//! came back for its redirect) are swept whenever a new entry is created.

use std::collections::HashMap;
use std::fmt::Write;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};

use client::net::types::Flash;
use rand::Rng;

pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}

/// Generate a cryptographically random 32-byte hex token.
#[must_use]
pub fn generate_token() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    bytes_to_hex(&bytes)
}

const ANONYMOUS_IDLE: Duration = Duration::from_secs(10 * 60);

#[derive(Debug, Clone)]
struct Session {
    username: Option<String>,
    flashes: Vec<Flash>,
    touched: Instant,
}

impl Session {
    fn new() -> Self {
        Self { username: None, flashes: Vec::new(), touched: Instant::now() }
    }

    fn is_empty(&self) -> bool {
        self.username.is_none() && self.flashes.is_empty()
    }
}

type Table = HashMap<String, Session>;

/// Fetch or create the entry for `token`, sweeping idle anonymous entries
/// before a new one is added.
fn entry<'a>(table: &'a mut Table, token: &str) -> &'a mut Session {
    if !table.contains_key(token) {
        sweep(table, ANONYMOUS_IDLE);
    }
    let session = table.entry(token.to_owned()).or_insert_with(Session::new);
    session.touched = Instant::now();
    session
}

fn sweep(table: &mut Table, max_idle: Duration) -> usize {
    let before = table.len();
    table.retain(|_, s| s.username.is_some() || s.touched.elapsed() < max_idle);
    before - table.len()
}

#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<Mutex<Table>>,
}

impl SessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Table> {
        // A poisoned table still holds consistent data: no write leaves an
        // entry half-updated.
        self.inner.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// Whether `token` names a stored session.
    pub fn contains(&self, token: &str) -> bool {
        self.lock().contains_key(token)
    }

    pub fn username(&self, token: &str) -> Option<String> {
        self.lock().get(token).and_then(|s| s.username.clone())
    }

    pub fn sign_in(&self, token: &str, username: &str) {
        entry(&mut self.lock(), token).username = Some(username.to_owned());
    }

    /// Forget the username. The entry survives only while it still holds
    /// flashes.
    pub fn sign_out(&self, token: &str) {
        let mut table = self.lock();
        if let Some(session) = table.get_mut(token) {
            session.username = None;
            if session.is_empty() {
                table.remove(token);
            }
        }
    }

    /// Move the session stored under `old` (if any) to a fresh token and
    /// return it. The old token stops resolving.
    pub fn rotate(&self, old: &str) -> String {
        let mut table = self.lock();
        let mut session = table.remove(old).unwrap_or_else(Session::new);
        session.touched = Instant::now();
        let token = generate_token();
        table.insert(token.clone(), session);
        token
    }

    pub fn push_flash(&self, token: &str, flash: Flash) {
        entry(&mut self.lock(), token).flashes.push(flash);
    }

    /// Drain the flashes queued for `token`, oldest first. An anonymous
    /// session is removed once drained.
    pub fn take_flashes(&self, token: &str) -> Vec<Flash> {
        let mut table = self.lock();
        let Some(session) = table.get_mut(token) else {
            return Vec::new();
        };
        let flashes = std::mem::take(&mut session.flashes);
        if session.is_empty() {
            table.remove(token);
        }
        flashes
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
