pub mod handlers;
pub mod state;

pub use state::AppState;

use crate::config::ServerConfig;
use crate::error::Result;
use axum::{
    routing::{get, post},
    Router,
};
use std::future::Future;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Create the router with all routes
pub fn create_router(state: AppState, cors: bool) -> Router {
    let router = Router::new()
        .route("/health", get(handlers::health_check))
        .route("/check-weather", post(handlers::check_weather))
        .route("/check-weather/summary", post(handlers::check_weather_summary))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    if cors {
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}

/// Bind and serve until the process is stopped.
pub async fn serve(state: AppState, config: &ServerConfig) -> Result<()> {
    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;

    tracing::info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, create_router(state, config.cors))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    wait_for_shutdown(tokio::signal::ctrl_c()).await;
}

/// Resolves when `signal` fires. If the handler cannot be installed the
/// server keeps running instead of stopping straight after bind.
async fn wait_for_shutdown(signal: impl Future<Output = std::io::Result<()>>) {
    if let Err(e) = signal.await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
