//! Top-level router assembly.
//!
//! Combines the health and generation routers and applies the cross-cutting
//! layers: request tracing, CORS and the request body limit.

use axum::extract::DefaultBodyLimit;
use axum::Router;
use http::HeaderValue;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

use super::generation::{generation_routes, GenerationAppState};
use super::health::health_routes;

/// Build the complete application router.
///
/// # Routes
/// - `GET /`
/// - `GET /api/health`
/// - `POST /api/suno/generate`
pub fn app_router(state: GenerationAppState, server: &ServerConfig) -> Router {
    Router::new()
        .merge(health_routes())
        .nest("/api/suno", generation_routes())
        .with_state(state)
        // The tower-http limit replaces axum's fixed 2 MB default.
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(server.body_limit_bytes))
        .layer(cors_layer(server))
        .layer(TraceLayer::new_for_http())
}

/// CORS policy: the configured origins, or any origin when none are set.
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let base = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .into_iter()
        .filter_map(|origin| match HeaderValue::from_str(&origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        base.allow_origin(Any)
    } else {
        base.allow_origin(AllowOrigin::list(origins))
    }
}
