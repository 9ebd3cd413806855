//! VerifyOrderHandler - Command handler that checks an order was paid.

use std::sync::Arc;

use crate::domain::foundation::OrderId;
use crate::domain::payment::{PaymentRequirement, VerificationError};
use crate::ports::{GatewayError, PaymentGateway};

/// Command to verify that an order unlocks generation.
#[derive(Debug, Clone)]
pub struct VerifyOrderCommand {
    pub order_id: OrderId,
}

/// Result of a successful verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedOrder {
    pub order_id: OrderId,
}

/// Handler for order verification.
///
/// Acquires a fresh access token, fetches the order with it, then applies
/// the [`PaymentRequirement`]. Nothing is cached and nothing is written, so
/// verifying the same order twice succeeds twice.
pub struct VerifyOrderHandler {
    gateway: Arc<dyn PaymentGateway>,
    requirement: PaymentRequirement,
}

impl VerifyOrderHandler {
    pub fn new(gateway: Arc<dyn PaymentGateway>) -> Self {
        Self::with_requirement(gateway, PaymentRequirement::song_generation())
    }

    pub fn with_requirement(
        gateway: Arc<dyn PaymentGateway>,
        requirement: PaymentRequirement,
    ) -> Self {
        Self {
            gateway,
            requirement,
        }
    }

    pub async fn handle(&self, cmd: VerifyOrderCommand) -> Result<VerifiedOrder, VerificationError> {
        let result = self.verify(&cmd.order_id).await;

        match &result {
            Ok(_) => {
                tracing::info!(order_id = %cmd.order_id, "Order verified");
            }
            Err(err) if err.is_business_rule() => {
                tracing::warn!(
                    order_id = %cmd.order_id,
                    code = err.code(),
                    detail = ?err,
                    "Order rejected"
                );
            }
            Err(err) => {
                tracing::error!(
                    order_id = %cmd.order_id,
                    code = err.code(),
                    detail = ?err,
                    "Payment provider failure during verification"
                );
            }
        }

        result.map(|()| VerifiedOrder {
            order_id: cmd.order_id,
        })
    }

    async fn verify(&self, order_id: &OrderId) -> Result<(), VerificationError> {
        let token = self
            .gateway
            .acquire_token()
            .await
            .map_err(token_failure)?;

        let order = self
            .gateway
            .fetch_order(&token, order_id)
            .await
            .map_err(|e| order_failure(order_id, e))?;

        self.requirement.check(&order)
    }
}

fn token_failure(err: GatewayError) -> VerificationError {
    if err.is_network() {
        VerificationError::upstream_unreachable(err.message)
    } else {
        VerificationError::upstream_auth(err.status)
    }
}

fn order_failure(order_id: &OrderId, err: GatewayError) -> VerificationError {
    if err.is_network() {
        VerificationError::upstream_unreachable(err.message)
    } else {
        VerificationError::order_not_found(order_id.as_str(), err.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::paypal::MockPaymentGateway;
    use crate::domain::payment::{Money, Order, OrderStatus, PurchaseUnit};

    fn order_id() -> OrderId {
        OrderId::new("ORDER123").unwrap()
    }

    fn order(status: OrderStatus, value: &str, currency: &str) -> Order {
        Order::new(
            order_id(),
            status,
            vec![PurchaseUnit::with_amount(Money::new(value, currency))],
        )
    }

    fn handler(gateway: &Arc<MockPaymentGateway>) -> VerifyOrderHandler {
        VerifyOrderHandler::new(gateway.clone())
    }

    fn cmd() -> VerifyOrderCommand {
        VerifyOrderCommand {
            order_id: order_id(),
        }
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Success Path
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn paid_order_is_verified() {
        let gateway = Arc::new(MockPaymentGateway::with_paid_order("ORDER123"));

        let result = handler(&gateway).handle(cmd()).await;

        assert_eq!(
            result,
            Ok(VerifiedOrder {
                order_id: order_id()
            })
        );
    }

    #[tokio::test]
    async fn each_verification_acquires_a_fresh_token() {
        let gateway = Arc::new(MockPaymentGateway::with_paid_order("ORDER123"));
        let handler = handler(&gateway);

        handler.handle(cmd()).await.unwrap();
        handler.handle(cmd()).await.unwrap();

        assert_eq!(gateway.token_requests(), 2);
        assert_eq!(gateway.order_requests(), vec!["ORDER123", "ORDER123"]);
    }

    #[tokio::test]
    async fn custom_requirement_is_applied() {
        let gateway = Arc::new(MockPaymentGateway::new());
        gateway.add_order(order(OrderStatus::Completed, "5.00", "EUR"));
        let handler = VerifyOrderHandler::with_requirement(
            gateway.clone(),
            PaymentRequirement::new(Money::new("5.00", "EUR")),
        );

        assert!(handler.handle(cmd()).await.is_ok());
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Rule Failures
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn unknown_order_is_not_found() {
        let gateway = Arc::new(MockPaymentGateway::new());

        let result = handler(&gateway).handle(cmd()).await;

        assert_eq!(
            result,
            Err(VerificationError::order_not_found("ORDER123", Some(404)))
        );
    }

    #[tokio::test]
    async fn undecodable_order_is_not_found() {
        let gateway = Arc::new(MockPaymentGateway::new());
        gateway.fail_orders_with(GatewayError::invalid_response("expected value at line 1"));

        let result = handler(&gateway).handle(cmd()).await;

        assert_eq!(
            result,
            Err(VerificationError::order_not_found("ORDER123", None))
        );
    }

    #[tokio::test]
    async fn approved_but_uncaptured_order_is_incomplete() {
        let gateway = Arc::new(MockPaymentGateway::new());
        gateway.add_order(order(OrderStatus::Approved, "3.00", "USD"));

        let result = handler(&gateway).handle(cmd()).await;

        assert_eq!(
            result,
            Err(VerificationError::payment_incomplete("APPROVED"))
        );
    }

    #[tokio::test]
    async fn wrong_amount_is_mismatch() {
        let gateway = Arc::new(MockPaymentGateway::new());
        gateway.add_order(order(OrderStatus::Completed, "1.00", "USD"));

        let result = handler(&gateway).handle(cmd()).await;

        assert!(matches!(
            result,
            Err(VerificationError::AmountMismatch { .. })
        ));
    }

    #[tokio::test]
    async fn order_without_purchase_units_is_mismatch() {
        let gateway = Arc::new(MockPaymentGateway::new());
        gateway.add_order(Order::new(order_id(), OrderStatus::Completed, vec![]));

        let result = handler(&gateway).handle(cmd()).await;

        assert_eq!(
            result,
            Err(VerificationError::amount_mismatch("3.00 USD", None))
        );
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Provider Failures
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn rejected_token_exchange_is_auth_error_and_skips_order_fetch() {
        let gateway = Arc::new(MockPaymentGateway::with_paid_order("ORDER123"));
        gateway.fail_token_with(GatewayError::rejected(401, "invalid_client"));

        let result = handler(&gateway).handle(cmd()).await;

        assert_eq!(result, Err(VerificationError::upstream_auth(Some(401))));
        assert!(gateway.order_requests().is_empty());
    }

    #[tokio::test]
    async fn token_body_without_access_token_is_auth_error() {
        let gateway = Arc::new(MockPaymentGateway::with_paid_order("ORDER123"));
        gateway.fail_token_with(GatewayError::invalid_response("missing field `access_token`"));

        let result = handler(&gateway).handle(cmd()).await;

        assert_eq!(result, Err(VerificationError::upstream_auth(None)));
    }

    #[tokio::test]
    async fn unreachable_token_endpoint_is_unreachable() {
        let gateway = Arc::new(MockPaymentGateway::with_paid_order("ORDER123"));
        gateway.fail_token_with(GatewayError::network("connection refused"));

        let result = handler(&gateway).handle(cmd()).await;

        assert_eq!(
            result,
            Err(VerificationError::upstream_unreachable("connection refused"))
        );
    }

    #[tokio::test]
    async fn unreachable_order_endpoint_is_unreachable() {
        let gateway = Arc::new(MockPaymentGateway::with_paid_order("ORDER123"));
        gateway.fail_orders_with(GatewayError::network("operation timed out"));

        let result = handler(&gateway).handle(cmd()).await;

        assert!(matches!(
            result,
            Err(VerificationError::UpstreamUnreachable { .. })
        ));
    }
}
