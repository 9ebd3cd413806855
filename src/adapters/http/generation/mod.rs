//! HTTP adapter for the paid generation endpoint.
//!
//! - `POST /api/suno/generate` - Verify a PayPal order, then return mock tracks

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use handlers::{GenerateApiError, GenerationAppState};
pub use routes::generation_routes;
