//! Username + password login form. Posts to the server, which answers with
//! a redirect and a flash message.

use leptos::prelude::*;

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <section class="auth-page">
            <div class="auth-card panel">
                <h1>"Welcome back"</h1>
                <p class="auth-card__subtitle">"Log in to vote, review, and submit tools."</p>
                <form class="auth-form" action="/auth/login" method="post">
                    <label for="login-username">"Username"</label>
                    <input id="login-username" class="auth-input" type="text" name="username" autocomplete="username" required/>
                    <label for="login-password">"Password"</label>
                    <input
                        id="login-password"
                        class="auth-input"
                        type="password"
                        name="password"
                        autocomplete="current-password"
                        required
                    />
                    <button class="nav-button-primary auth-submit" type="submit">"Log in"</button>
                </form>
                <p class="auth-card__switch">
                    "New here? "
                    <a href="/signup">"Create an account"</a>
                </p>
            </div>
        </section>
    }
}
