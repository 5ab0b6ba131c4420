//! Per-request session handle.
//!
//! `SessionContext` resolves the `session_token` cookie against the session
//! table. Visitors without a known token get a fresh one, and the cookie is
//! only sent back once something has been stored under it.

use std::convert::Infallible;

use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use axum::response::{IntoResponse, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use client::net::types::Flash;

use crate::services::session::{SessionStore, generate_token};
use crate::state::AppState;

pub(crate) const COOKIE_NAME: &str = "session_token";

pub struct SessionContext {
    pub token: String,
    pub username: Option<String>,
    sessions: SessionStore,
    fresh: bool,
    secure: bool,
}

impl<S> FromRequestParts<S> for SessionContext
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        let jar = CookieJar::from_headers(&parts.headers);
        let known = jar
            .get(COOKIE_NAME)
            .map(Cookie::value)
            .filter(|token| app_state.sessions.contains(token))
            .map(str::to_owned);
        let (token, fresh) = match known {
            Some(token) => (token, false),
            None => (generate_token(), true),
        };
        Ok(Self {
            username: app_state.sessions.username(&token),
            token,
            sessions: app_state.sessions.clone(),
            fresh,
            secure: app_state.cookie_secure,
        })
    }
}

impl SessionContext {
    pub fn signed_in(&self) -> bool {
        self.username.is_some()
    }

    pub fn flash(&self, flash: Flash) {
        self.sessions.push_flash(&self.token, flash);
    }

    pub fn take_flashes(&self) -> Vec<Flash> {
        self.sessions.take_flashes(&self.token)
    }

    /// Sign in under a new token; a token the visitor arrived with never
    /// becomes authenticated.
    pub fn sign_in(&mut self, username: &str) {
        if !self.fresh {
            self.token = self.sessions.rotate(&self.token);
            self.fresh = true;
        }
        self.sessions.sign_in(&self.token, username);
        self.username = Some(username.to_owned());
    }

    pub fn sign_out(&mut self) {
        self.sessions.sign_out(&self.token);
        self.username = None;
    }

    /// Attach the session cookie when a new session was stored this request.
    pub fn respond(self, response: impl IntoResponse) -> Response {
        if !(self.fresh && self.sessions.contains(&self.token)) {
            return response.into_response();
        }
        let cookie = Cookie::build((COOKIE_NAME, self.token))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(self.secure);
        (CookieJar::new().add(cookie), response).into_response()
    }
}
