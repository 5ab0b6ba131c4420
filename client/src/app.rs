//! Root application component and the server-rendered HTML shell.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};

use crate::components::{
    custom_cursor::CustomCursor, flash_messages::FlashMessages, navbar::Navbar, scroll_effects::RevealWatcher,
};
use crate::net::embedded::{CATALOG_ELEMENT_ID, PAGE_DATA_ELEMENT_ID, script_json};
use crate::net::types::PageRoute;
use crate::pages::{
    home::HomePage, login::LoginPage, not_found::NotFoundPage, signup::SignupPage, submit::SubmitPage,
    tool_detail::ToolDetailPage,
};
use crate::state::catalog::{use_catalog, use_page_data};
use crate::state::modal::ModalState;

/// HTML shell rendered on the server for SSR + hydration.
///
/// Expects the request's `Catalog` and `PageData` in context; both are
/// embedded as JSON so hydration sees exactly what the server rendered.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let catalog_json = script_json(&use_catalog().tools());
    let page_json = script_json(&use_page_data());

    view! {
        <!DOCTYPE html>
        <html lang="en" data-theme="dark">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <script id=CATALOG_ELEMENT_ID type="application/json" inner_html=catalog_json></script>
                <script id=PAGE_DATA_ELEMENT_ID type="application/json" inner_html=page_json></script>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the modal state and renders the chrome around the page the
/// server resolved for this request.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let route = use_page_data().route;
    provide_context(RwSignal::new(ModalState::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/toolshelf.css"/>
        <Title text=route.title()/>

        <CustomCursor/>
        <Navbar/>
        <FlashMessages/>
        <main class="page">{render_route(route)}</main>
        <RevealWatcher/>
        <footer class="site-footer">
            <p>"Toolshelf · community-ranked AI tools"</p>
        </footer>
    }
}

fn render_route(route: PageRoute) -> AnyView {
    match route {
        PageRoute::Home { search } => view! { <HomePage search/> }.into_any(),
        PageRoute::Login => view! { <LoginPage/> }.into_any(),
        PageRoute::Signup => view! { <SignupPage/> }.into_any(),
        PageRoute::Submit => view! { <SubmitPage/> }.into_any(),
        PageRoute::ToolDetail { id } => view! { <ToolDetailPage id/> }.into_any(),
        PageRoute::NotFound => view! { <NotFoundPage/> }.into_any(),
    }
}
