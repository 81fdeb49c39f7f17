// ABOUTME: HTTP server assembly: router, middleware layers, and graceful shutdown
// ABOUTME: Merges coaching and health routes and answers unknown paths with a JSON 404
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! HTTP server for the swim coach backend

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::Uri;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::{info, warn, Level};

use crate::constants::limits;
use crate::errors::{AppError, AppResult};
use crate::middleware::setup_cors;
use crate::resources::ServerResources;
use crate::routes::{CoachingRoutes, HealthRoutes};

async fn not_found(uri: Uri) -> AppError {
    AppError::not_found(format!("Route {}", uri.path()))
}

/// Level of per-request spans and events
///
/// Debug mode raises them to `info` so the default filter shows every request;
/// otherwise they stay at `debug` and appear only with `RUST_LOG=debug`.
#[must_use]
pub const fn request_log_level(debug: bool) -> Level {
    if debug {
        Level::INFO
    } else {
        Level::DEBUG
    }
}

/// Request tracing; debug mode also records request headers
fn trace_layer(debug: bool) -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    let level = request_log_level(debug);
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(level).include_headers(debug))
        .on_request(DefaultOnRequest::new().level(level))
        .on_response(DefaultOnResponse::new().level(level))
}

/// Build the application router with all layers applied
pub fn build_router(resources: Arc<ServerResources>) -> Router {
    let cors = setup_cors(&resources.config.cors);
    let trace = trace_layer(resources.config.debug);

    Router::new()
        .merge(CoachingRoutes::routes(Arc::clone(&resources)))
        .merge(HealthRoutes::routes())
        .fallback(not_found)
        .layer(RequestBodyLimitLayer::new(limits::MAX_REQUEST_BODY_BYTES))
        .layer(cors)
        .layer(trace)
}

/// Resolve when the process receives Ctrl-C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received, draining connections");
}

/// Bind and serve until a shutdown signal arrives
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails
pub async fn run(resources: ServerResources) -> AppResult<()> {
    let addr = format!(
        "{}:{}",
        resources.config.host, resources.config.http_port
    );
    let app = build_router(Arc::new(resources));

    let listener = TcpListener::bind(&addr).await.map_err(|e| {
        AppError::internal(format!("Failed to bind {addr}: {e}")).with_source(e)
    })?;
    let local: SocketAddr = listener
        .local_addr()
        .map_err(|e| AppError::internal(format!("Failed to read bound address: {e}")))?;
    info!("Listening on http://{}", local);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("HTTP server error: {e}")).with_source(e))?;

    info!("Server stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_mode_raises_request_log_level() {
        assert_eq!(request_log_level(true), Level::INFO);
        assert_eq!(request_log_level(false), Level::DEBUG);
    }
}
