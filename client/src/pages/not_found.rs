use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="detail-page detail-page--missing">
            <div class="panel">
                <h1>"Page not found."</h1>
                <a href="/" class="nav-button-primary">"Back to all tools"</a>
            </div>
        </section>
    }
}
