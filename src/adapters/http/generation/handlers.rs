//! HTTP handlers for the generation endpoint.
//!
//! These handlers connect Axum routes to the application layer.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::{GenerateTrackCommand, GenerateTrackHandler};
use crate::domain::foundation::OrderId;
use crate::domain::generation::GenerationRequest;
use crate::domain::payment::VerificationError;
use crate::ports::PaymentGateway;

use super::dto::{text_field, ErrorResponse, GenerateRequest, GenerateResponse};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing all dependencies.
#[derive(Clone)]
pub struct GenerationAppState {
    pub payment_gateway: Arc<dyn PaymentGateway>,
}

impl GenerationAppState {
    pub fn new(payment_gateway: Arc<dyn PaymentGateway>) -> Self {
        Self { payment_gateway }
    }

    /// Create the handler on demand from the shared state.
    pub fn generate_track_handler(&self) -> GenerateTrackHandler {
        GenerateTrackHandler::new(self.payment_gateway.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Command Handlers (POST endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/suno/generate - Generate a song for a paid order
///
/// The body is read raw so that empty bodies and missing content types are
/// accepted; see `GenerateRequest::from_body`.
pub async fn generate(
    State(state): State<GenerationAppState>,
    body: Bytes,
) -> Result<impl IntoResponse, GenerateApiError> {
    let request = GenerateRequest::from_body(&body).map_err(invalid_body)?;

    // Presence first, order id before prompt; field types only after both.
    let order_id = request.order_id().ok_or(GenerateApiError::MissingOrderId)?;
    let prompt = request.prompt().ok_or(GenerateApiError::MissingPrompt)?;

    let order_id = OrderId::new(text_field(order_id).map_err(invalid_body)?)
        .map_err(|_| GenerateApiError::MissingOrderId)?;
    let prompt = text_field(prompt).map_err(invalid_body)?;

    let generation =
        GenerationRequest::new(order_id, prompt).map_err(|_| GenerateApiError::MissingPrompt)?;

    let result = state
        .generate_track_handler()
        .handle(GenerateTrackCommand {
            request: generation,
        })
        .await?;

    Ok(Json(GenerateResponse::from(result)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type for the generation endpoint.
#[derive(Debug)]
pub enum GenerateApiError {
    MissingOrderId,
    MissingPrompt,
    InvalidBody(String),
    VerificationFailed(VerificationError),
}

fn invalid_body(err: serde_json::Error) -> GenerateApiError {
    GenerateApiError::InvalidBody(err.to_string())
}

impl From<VerificationError> for GenerateApiError {
    fn from(err: VerificationError) -> Self {
        GenerateApiError::VerificationFailed(err)
    }
}

impl IntoResponse for GenerateApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, body) = match self {
            GenerateApiError::MissingOrderId => (
                StatusCode::FORBIDDEN,
                ErrorResponse::with_message("Payment required", "Missing PayPal orderId"),
            ),
            GenerateApiError::MissingPrompt => {
                (StatusCode::BAD_REQUEST, ErrorResponse::new("Prompt required"))
            }
            GenerateApiError::InvalidBody(reason) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::with_message("Invalid request body", reason),
            ),
            // Only the error's display text leaves the service; detail stays in logs.
            GenerateApiError::VerificationFailed(err) => (
                StatusCode::FORBIDDEN,
                ErrorResponse::with_message("Payment verification failed", err.to_string()),
            ),
        };

        (status, Json(body)).into_response()
    }
}
