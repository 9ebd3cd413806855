//! Liveness and health handlers. Neither touches the payment provider.

use axum::extract::Json;
use serde::{Deserialize, Serialize};

pub const LIVENESS_TEXT: &str = "Melody Magic Server OK ✅";
pub const HEALTH_MESSAGE: &str = "Melody Magic server running";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub ok: bool,
    pub message: String,
}

/// GET / - Liveness probe
pub async fn liveness() -> &'static str {
    LIVENESS_TEXT
}

/// GET /api/health - Health check
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        ok: true,
        message: HEALTH_MESSAGE.to_string(),
    })
}
