//! Account creation form.
//!
//! The server performs the authoritative checks; the page only hints at a
//! password mismatch while typing.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;

/// Hint shown while the confirmation differs from the password.
pub const MISMATCH_HINT: &str = "Passwords do not match.";

/// True once the confirmation has been typed and differs from the password.
pub fn passwords_mismatch(password: &str, confirm: &str) -> bool {
    !confirm.is_empty() && password != confirm
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let mismatch = move || password.with(|p| confirm.with(|c| passwords_mismatch(p, c)));

    view! {
        <section class="auth-page">
            <div class="auth-card panel">
                <h1>"Create your account"</h1>
                <form class="auth-form" action="/auth/signup" method="post">
                    <label for="signup-email">"Email"</label>
                    <input id="signup-email" class="auth-input" type="email" name="email" autocomplete="email" required/>
                    <label for="signup-username">"Username"</label>
                    <input id="signup-username" class="auth-input" type="text" name="username" autocomplete="username" required/>
                    <label for="signup-password">"Password"</label>
                    <input
                        id="signup-password"
                        class="auth-input"
                        type="password"
                        name="password"
                        autocomplete="new-password"
                        required
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <label for="signup-confirm">"Confirm password"</label>
                    <input
                        id="signup-confirm"
                        class="auth-input"
                        class:is-invalid=mismatch
                        type="password"
                        name="confirm_password"
                        autocomplete="new-password"
                        required
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                    <Show when=mismatch>
                        <p class="auth-hint">{MISMATCH_HINT}</p>
                    </Show>
                    <button class="nav-button-primary auth-submit" type="submit">"Sign up"</button>
                </form>
                <p class="auth-card__switch">
                    "Already registered? "
                    <a href="/login">"Log in"</a>
                </p>
            </div>
        </section>
    }
}
