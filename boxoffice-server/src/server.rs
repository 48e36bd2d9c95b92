//! Axum server setup and router configuration.

use crate::api;
use crate::shutdown::shutdown_signal;
use crate::state::AppState;
use axum::extract::{Request, State};
use axum::{Json, Router, http::StatusCode, response::IntoResponse, routing::get};
use boxoffice_core::entities::PartyId;
use boxoffice_sdk::headers::PARTY_HEADER;
use serde::Serialize;
use std::net::SocketAddr;
use tokio::net::TcpListener;

/// Largest request body the fallback will echo into the log.
const FALLBACK_BODY_LIMIT: usize = 4096;

/// Build the main application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check endpoint
        .route("/health", get(health_check))
        // User and admin APIs
        .nest("/api/v1", api::user::router())
        .nest("/api/v1/admin", api::admin::router())
        // Anything else is an unmatched call: captured, not rejected silently
        .fallback(unmatched_call)
        // Add state to all routes
        .with_state(state)
}

/// Health check response.
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

/// Simple health check - returns OK if the server is running.
async fn health_check() -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Fallback for invocations that match no known operation.
///
/// Fail-open logging path: the call is captured and reported as a
/// notice, then answered with 404. This is deliberately different from
/// the fail-closed validation in the real operations.
async fn unmatched_call(State(state): State<AppState>, req: Request) -> impl IntoResponse {
    let caller = req
        .headers()
        .get(PARTY_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(PartyId::from);

    let method = req.method().clone();
    let uri = req.uri().clone();
    let body = axum::body::to_bytes(req.into_body(), FALLBACK_BODY_LIMIT)
        .await
        .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
        .unwrap_or_default();

    let payload = if body.is_empty() {
        format!("{method} {uri}")
    } else {
        format!("{method} {uri} {body}")
    };

    state.office.lock().await.log_unmatched_call(caller, payload).await;

    (StatusCode::NOT_FOUND, "no such operation")
}

/// Run the server with graceful shutdown support.
pub async fn run_server(router: Router, addr: SocketAddr) -> Result<(), std::io::Error> {
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
}
