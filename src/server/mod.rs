pub mod handlers;
pub mod types;

use crate::{config::Config, gemini::GeminiClient, Result};
use axum::{
    routing::{get, post},
    Router,
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::info;

/// Builds the application router with its shared read-only state.
pub fn router(config: Arc<Config>) -> Router {
    let http = reqwest::Client::new();
    let gemini = GeminiClient::new(http.clone(), config.gemini.clone());

    let app_state = handlers::AppState {
        config,
        http,
        gemini,
    };

    Router::new()
        .route("/health", get(handlers::health))
        .route("/analyze-onedrive-image", post(handlers::analyze))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

pub async fn run(config: Config) -> Result<()> {
    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);
    let app = router(Arc::new(config));

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
