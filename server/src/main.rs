mod config;
mod routes;
mod state;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    if let Err(e) = dotenvy::dotenv() {
        tracing::debug!(error = %e, "no .env file loaded");
    }

    let config = config::ServerConfig::from_env().expect("invalid configuration");
    let state = state::AppState::new(&config).expect("http client init failed");
    let app = routes::app(state).expect("leptos app init failed");

    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, upstream = %config.api_url, "volops listening");
    axum::serve(listener, app).await.expect("server failed");
}
