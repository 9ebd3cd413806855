//! Axum router configuration for liveness and health endpoints.

use axum::{routing::get, Router};

use super::handlers::{health, liveness};

/// Create the health router.
///
/// Stateless, so it merges into a router of any state type.
///
/// # Routes
/// - `GET /` - Liveness text
/// - `GET /api/health` - JSON health check
pub fn health_routes<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(liveness))
        .route("/api/health", get(health))
}
