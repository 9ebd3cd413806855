//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers and error types used across the
//! payment and generation domains.

mod errors;
mod ids;
mod timestamp;

pub use errors::ValidationError;
pub use ids::OrderId;
pub use timestamp::Timestamp;
