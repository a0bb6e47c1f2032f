pub mod config;
pub mod error;
pub mod handlers;
pub mod services;
pub mod state;

use axum::Router;
use state::AppState;
use tower_http::trace::TraceLayer;

/// Request bodies above this size are rejected before deserialization.
const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Builds the HTTP application around an already-wired `AppState`.
pub fn app(state: AppState) -> Router {
    handlers::router()
        .layer(axum::extract::DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
