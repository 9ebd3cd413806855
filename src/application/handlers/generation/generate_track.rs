//! GenerateTrackHandler - Command handler for paid song generation.

use std::sync::Arc;

use crate::application::handlers::payment::{VerifyOrderCommand, VerifyOrderHandler};
use crate::domain::foundation::Timestamp;
use crate::domain::generation::{GenerationRequest, GenerationResult};
use crate::domain::payment::VerificationError;
use crate::ports::PaymentGateway;

/// Command to generate a song for a paid order.
#[derive(Debug, Clone)]
pub struct GenerateTrackCommand {
    pub request: GenerationRequest,
}

/// Handler for song generation.
///
/// Generation only happens after the order passes verification. The result
/// is the fixed mock; the prompt does not influence it.
pub struct GenerateTrackHandler {
    verifier: VerifyOrderHandler,
}

impl GenerateTrackHandler {
    pub fn new(gateway: Arc<dyn PaymentGateway>) -> Self {
        Self {
            verifier: VerifyOrderHandler::new(gateway),
        }
    }

    pub fn with_verifier(verifier: VerifyOrderHandler) -> Self {
        Self { verifier }
    }

    pub async fn handle(
        &self,
        cmd: GenerateTrackCommand,
    ) -> Result<GenerationResult, VerificationError> {
        let verified = self
            .verifier
            .handle(VerifyOrderCommand {
                order_id: cmd.request.order_id().clone(),
            })
            .await?;

        let result = GenerationResult::mock(Timestamp::now());

        tracing::info!(
            order_id = %verified.order_id,
            task_id = %result.task_id,
            prompt_len = cmd.request.prompt().len(),
            "Generation task completed"
        );

        Ok(result)
    }
}
