//! HTTP adapter for liveness and health endpoints.
//!
//! - `GET /` - Plain-text liveness string
//! - `GET /api/health` - JSON health check

pub mod handlers;
pub mod routes;

pub use handlers::HealthResponse;
pub use routes::health_routes;
