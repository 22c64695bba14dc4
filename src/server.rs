// ABOUTME: HTTP server assembly with tracing, request-id and body-limit middleware
// ABOUTME: Binds the configured address and serves until Ctrl-C or SIGTERM
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! HTTP server
//!
//! [`build_app`] is the full router with middleware and is what integration
//! tests drive; [`serve`] binds it to a socket.

use crate::constants::defaults;
use crate::errors::{AppError, AppResult};
use crate::resources::ServerResources;
use crate::routes;
use axum::Router;
use http::HeaderName;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{
    limit::RequestBodyLimitLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};

/// Router with every route and the standard middleware stack
pub fn build_app(resources: &Arc<ServerResources>) -> Router {
    let request_id_header = HeaderName::from_static(defaults::REQUEST_ID_HEADER);

    // Layers run bottom-up on the request: id is set before tracing sees it
    routes::router(resources)
        .layer(RequestBodyLimitLayer::new(
            resources.config.max_request_body_bytes,
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
}

/// Serve until a shutdown signal arrives
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails.
pub async fn serve(resources: Arc<ServerResources>) -> AppResult<()> {
    let address = resources.config.bind_address();
    let listener = TcpListener::bind(&address).await.map_err(|e| {
        AppError::config(format!("Failed to bind {address}: {e}")).with_source(e)
    })?;

    info!(address = %address, "Nutrition service listening");

    axum::serve(listener, build_app(&resources))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")).with_source(e))?;

    info!("Nutrition service stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl-C");
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
                warn!(error = %e, "Failed to listen for SIGTERM");
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

    info!("Shutdown signal received");
}
