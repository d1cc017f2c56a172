mod asr;
mod config;
mod error;
mod handlers;
mod routes;
mod state;
mod translate;
mod utils;

use anyhow::Result;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    let env_filter = if config.debug {
        "vaani_backend=debug,tower_http=debug"
    } else {
        "vaani_backend=info,tower_http=info"
    };
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let app_state = AppState::new(config.clone());

    // Permissive CORS so the static frontend can talk to us from any origin.
    let app = Router::new()
        .merge(routes::create_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    info!("Starting server on {}:{}", config.host, config.port);

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
