//! Tool submission form (signed-in users only; the server redirects
//! everyone else to the login page before this renders).

use leptos::prelude::*;

/// Pricing choices offered by the form; the server defaults to the first.
pub const PRICING_OPTIONS: &[&str] = &["Free", "Freemium", "Paid", "Subscription", "Open Source"];

#[component]
pub fn SubmitPage() -> impl IntoView {
    view! {
        <section class="submit-page">
            <div class="panel submit-card">
                <h1>"Submit an AI tool"</h1>
                <p class="auth-card__subtitle">"Share something useful with the community."</p>
                <form class="submit-form" action="/tools" method="post">
                    <label for="ai-name">"Name"</label>
                    <input id="ai-name" class="auth-input" type="text" name="ai-name" required/>
                    <label for="ai-url">"Website"</label>
                    <input id="ai-url" class="auth-input" type="text" name="ai-url" placeholder="example.com" required/>
                    <label for="ai-category">"Category"</label>
                    <input id="ai-category" class="auth-input" type="text" name="ai-category" required/>
                    <label for="ai-description">"Short description"</label>
                    <input id="ai-description" class="auth-input" type="text" name="ai-description" required/>
                    <label for="ai-long-description">"Long description"</label>
                    <textarea id="ai-long-description" class="auth-input" name="ai-long-description" rows="5"></textarea>
                    <label for="ai-team">"Team (comma separated)"</label>
                    <input id="ai-team" class="auth-input" type="text" name="ai-team"/>
                    <label for="ai-pricing">"Pricing"</label>
                    <select id="ai-pricing" class="auth-input" name="ai-pricing">
                        {PRICING_OPTIONS.iter().map(|p| view! { <option value=*p>{*p}</option> }).collect_view()}
                    </select>
                    <button class="nav-button-primary auth-submit" type="submit">"Submit tool"</button>
                </form>
            </div>
        </section>
    }
}
