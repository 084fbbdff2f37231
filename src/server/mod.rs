//! HTTP surface serving the sentiment analysis report.
//!
//! The router exposes exactly one route, `GET /analyze`. Unknown paths and
//! unsupported methods both answer with a fixed 400 plain-text body. Each
//! accepted connection is handled as an independent task, so a failure in
//! one request never affects other in-flight requests, and the accept loop
//! keeps running until the operator stops the process.

pub mod analyze;

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use tokio::net::TcpListener;
use tokio::signal;

use crate::github::{AnalysisError, IssueCommentGateway};
use crate::sentiment::SentimentAnalyzer;

use analyze::analyze_route;

/// Fixed body for requests that match no supported route or method.
const INVALID_REQUEST_BODY: &str = "Invalid request";

/// Process-wide handles shared read-only by every request.
///
/// Constructed once at startup and injected through axum state; no field
/// is mutated after construction.
pub struct AppState {
    gateway: Arc<dyn IssueCommentGateway>,
    analyzer: SentimentAnalyzer,
    fetch_timeout: Duration,
}

impl AppState {
    /// Bundles the fetch and scoring handles used by the request pipeline.
    #[must_use]
    pub const fn new(
        gateway: Arc<dyn IssueCommentGateway>,
        analyzer: SentimentAnalyzer,
        fetch_timeout: Duration,
    ) -> Self {
        Self {
            gateway,
            analyzer,
            fetch_timeout,
        }
    }
}

/// Builds the application router around the single analysis route.
#[must_use]
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/analyze", get(analyze_route))
        .fallback(invalid_request)
        .method_not_allowed_fallback(invalid_request)
        .with_state(state)
}

/// Binds the listener and serves requests until the operator stops the
/// process with Ctrl+C.
///
/// # Errors
///
/// Returns [`AnalysisError::Server`] when the address cannot be bound or
/// the serve loop fails.
pub async fn serve(bind_address: &str, state: Arc<AppState>) -> Result<(), AnalysisError> {
    let listener = TcpListener::bind(bind_address)
        .await
        .map_err(|error| AnalysisError::Server {
            message: format!("failed to bind {bind_address}: {error}"),
        })?;

    tracing::info!(address = bind_address, "listening for analysis requests");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|error| AnalysisError::Server {
            message: error.to_string(),
        })
}

async fn invalid_request() -> Response {
    (StatusCode::BAD_REQUEST, INVALID_REQUEST_BODY).into_response()
}

/// Resolves when the operator presses Ctrl+C.
async fn shutdown_signal() {
    let _ignored = signal::ctrl_c().await;
}
