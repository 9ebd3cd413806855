//! Validated generation request.

use crate::domain::foundation::{OrderId, ValidationError};

/// A paid request to generate a song from a text prompt.
///
/// Lives for a single call; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    order_id: OrderId,
    prompt: String,
}

impl GenerationRequest {
    /// Creates a request, rejecting an empty prompt.
    pub fn new(order_id: OrderId, prompt: impl Into<String>) -> Result<Self, ValidationError> {
        let prompt = prompt.into();
        if prompt.is_empty() {
            return Err(ValidationError::empty_field("prompt"));
        }
        Ok(Self { order_id, prompt })
    }

    pub fn order_id(&self) -> &OrderId {
        &self.order_id
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }
}
