mod config;
mod routes;
mod services;
mod state;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid configuration");
    let leptos_options = leptos::prelude::get_configuration(None)
        .expect("leptos configuration missing (run through cargo-leptos or set LEPTOS_* env vars)")
        .leptos_options;

    let store = services::store::Store::open(config.tools_file.clone(), config.users_file.clone())
        .await
        .expect("failed to load data files");
    let state = state::AppState::new(store, leptos_options, config.cookie_secure);

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, "toolshelf listening");
    axum::serve(listener, app).await.expect("server failed");
}
