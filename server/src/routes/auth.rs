//! Login, signup, and logout form handlers.

use axum::Form;
use axum::extract::State;
use axum::response::{Redirect, Response};
use client::net::types::Flash;
use serde::Deserialize;

use crate::routes::session::SessionContext;
use crate::services::accounts::{self, AccountError, Signup};
use crate::state::AppState;

pub(crate) const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

#[derive(Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    username: String,
    #[serde(default)]
    password: String,
}

#[derive(Deserialize)]
pub struct SignupForm {
    #[serde(default)]
    email: String,
    #[serde(default)]
    username: String,
    #[serde(default)]
    password: String,
    #[serde(default)]
    confirm_password: String,
}

fn account_flash(err: &AccountError) -> Flash {
    if err.is_user_facing() {
        Flash::error(err.to_string())
    } else {
        tracing::error!(error = %err, "account operation failed");
        Flash::error(GENERIC_FAILURE)
    }
}

/// `POST /auth/login`
pub async fn login(State(state): State<AppState>, mut session: SessionContext, Form(form): Form<LoginForm>) -> Response {
    match accounts::login(&state.store, &form.username, &form.password).await {
        Ok(username) => {
            session.sign_in(&username);
            session.flash(Flash::success("Logged in successfully!"));
            tracing::info!(%username, "login");
            session.respond(Redirect::to("/"))
        }
        Err(e) => {
            session.flash(account_flash(&e));
            session.respond(Redirect::to("/login"))
        }
    }
}

/// `POST /auth/signup`
pub async fn signup(State(state): State<AppState>, session: SessionContext, Form(form): Form<SignupForm>) -> Response {
    let form = Signup {
        email: form.email,
        username: form.username,
        password: form.password,
        confirm_password: form.confirm_password,
    };
    match accounts::signup(&state.store, &form).await {
        Ok(_) => {
            session.flash(Flash::success("Account created successfully! Please log in."));
            session.respond(Redirect::to("/login"))
        }
        Err(e) => {
            session.flash(account_flash(&e));
            session.respond(Redirect::to("/signup"))
        }
    }
}

/// `GET /auth/logout`
pub async fn logout(mut session: SessionContext) -> Response {
    session.sign_out();
    session.flash(Flash::success("You have been logged out."));
    session.respond(Redirect::to("/"))
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
