//! Axum router configuration for generation endpoints.

use axum::{routing::post, Router};

use super::handlers::{generate, GenerationAppState};

/// Create the generation API router.
///
/// # Routes
///
/// - `POST /generate` - Verify payment and return the generated versions
///
/// Mounted at `/api/suno`.
pub fn generation_routes() -> Router<GenerationAppState> {
    Router::new().route("/generate", post(generate))
}
