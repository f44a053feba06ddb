//! Server initialization and routing
//!
//! This module handles the Axum server setup including:
//! - Router configuration (lookup endpoint + web UI fallback)
//! - Middleware stack (CORS, timeout, request id, logging)
//! - Graceful shutdown handling

use crate::config::ServerConfig;
use crate::middleware::{log_requests, request_id};
use crate::routes::{api, ui};
use crate::state::AppState;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, StatusCode};
use axum::middleware::from_fn;
use axum::routing::get;
use axum::Router;
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

/// Build the Axum router with all routes and middleware.
///
/// Two routes only: `GET /api` for JSON lookups and a fallback that serves
/// the web UI for every other path. `OPTIONS` preflights are answered by the
/// CORS layer with the advertised surface (`GET, OPTIONS` / `Content-Type`).
///
/// Public so integration tests can drive the real router with
/// `tower::ServiceExt::oneshot` and a stubbed resolver.
pub fn build_router(state: AppState) -> Router {
    // CORS layer
    let cors = if state.config.enable_cors {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::OPTIONS])
            .allow_headers([CONTENT_TYPE])
    } else {
        CorsLayer::new()
    };

    Router::new()
        .route("/api", get(api::lookup))
        .fallback(ui::page)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            state.config.timeout(),
        ))
        .layer(cors)
        .layer(from_fn(request_id))
        .layer(from_fn(log_requests))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the tikfetch HTTP server.
///
/// Initializes logging, builds the router around the real TikWM client, and
/// listens until SIGTERM or Ctrl+C.
pub async fn start_server(config: ServerConfig) -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_level))
        .with_target(false)
        .json()
        .init();

    // Create server state
    let state = AppState::new(config.clone());

    // Build router
    let app = build_router(state);

    // Parse bind address
    let addr: SocketAddr = config.socket_addr()?;

    tracing::info!(
        "Starting tikfetch on {} (upstream: {})",
        addr,
        config.upstream_base_url
    );
    tracing::info!(
        "Timeout: {}s, CORS: {}",
        config.timeout_secs,
        config.enable_cors
    );

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Shutdown signal handler
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down..."),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down..."),
    }
}
