use std::{path::Path, sync::Arc};

pub mod core;
pub mod error_handler;
pub mod routes;

use axum::{
    Router,
    routing::{get, post},
};
use overview_engine::OverviewAnalyzer;
use serp_api_service::{SearchProvider, SerpApiClient, SerpConfig};
use tokio::signal;
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing::{info, warn};

use crate::{
    core::app_state::{AppState, ServerConfig},
    error_handler::AppError,
    routes::{analyze::analyze_route::analyze, health_route::health},
};

/// Builds the application router.
///
/// Any path not matched by the API is served from `static_dir`, falling
/// back to `static_dir/index.html`.
pub fn router<P>(state: Arc<AppState<P>>, static_dir: &Path) -> Router
where
    P: SearchProvider + 'static,
{
    let front_end =
        ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        .route("/analyze", post(analyze::<P>))
        .route("/health", get(health))
        .fallback_service(front_end)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Wires the SerpApi client into the pipeline and serves until Ctrl+C.
pub async fn start(server: ServerConfig, serp: SerpConfig) -> Result<(), AppError> {
    let client = SerpApiClient::new(&serp)?;
    let analyzer = OverviewAnalyzer::new(client, serp.search.clone());
    let state = Arc::new(AppState::new(analyzer));

    if !server.static_dir.join("index.html").is_file() {
        warn!(dir = %server.static_dir.display(), "front-end index.html not found");
    }

    let app = router(state, &server.static_dir);

    let listener = tokio::net::TcpListener::bind(server.address)
        .await
        .map_err(AppError::Bind)?;
    info!(address = %server.address, "server listening");

    // Start server with graceful shutdown on Ctrl+C
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::Server)?;

    info!("server stopped");
    Ok(())
}

/// Returns a future that resolves when Ctrl+C is pressed
async fn shutdown_signal() {
    if let Err(err) = signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
