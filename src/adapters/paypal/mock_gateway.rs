//! Mock payment gateway for testing.
//!
//! Provides a configurable in-memory implementation of `PaymentGateway` for
//! unit and integration tests. Supports:
//! - Pre-configured orders
//! - Error injection per operation
//! - Call tracking

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::foundation::OrderId;
use crate::domain::payment::{Money, Order, OrderStatus, PurchaseUnit};
use crate::ports::{AccessToken, GatewayError, PaymentGateway};

/// Mock payment gateway for testing.
///
/// Unknown orders are answered like PayPal does, with a 404 rejection.
/// Orders fetched with a token this mock never issued get a 401 rejection.
///
/// # Example
///
/// ```ignore
/// let gateway = MockPaymentGateway::with_paid_order("ORDER123");
/// gateway.fail_token_with(GatewayError::rejected(401, "invalid_client"));
/// ```
#[derive(Default)]
pub struct MockPaymentGateway {
    inner: Arc<Mutex<MockState>>,
}

#[derive(Default)]
struct MockState {
    /// Orders by id.
    orders: HashMap<String, Order>,

    /// Tokens handed out so far.
    issued_tokens: Vec<String>,

    /// Error returned by every `acquire_token` call.
    token_error: Option<GatewayError>,

    /// Error returned by every `fetch_order` call.
    order_error: Option<GatewayError>,

    /// Recorded calls, in order.
    call_log: Vec<MethodCall>,
}

/// Recorded method call for assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MethodCall {
    AcquireToken,
    FetchOrder { order_id: String },
}

impl MockPaymentGateway {
    /// Create an empty mock: tokens are issued, no orders exist.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock holding one completed order paid at the song price.
    pub fn with_paid_order(order_id: &str) -> Self {
        let mock = Self::new();
        mock.add_order(paid_order(order_id));
        mock
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Configuration Methods
    // ════════════════════════════════════════════════════════════════════════════

    /// Add or replace an order.
    pub fn add_order(&self, order: Order) {
        let id = order.id.as_str().to_string();
        self.inner.lock().unwrap().orders.insert(id, order);
    }

    /// Make every token exchange fail.
    pub fn fail_token_with(&self, error: GatewayError) {
        self.inner.lock().unwrap().token_error = Some(error);
    }

    /// Make every order fetch fail.
    pub fn fail_orders_with(&self, error: GatewayError) {
        self.inner.lock().unwrap().order_error = Some(error);
    }

    /// Clear all configured errors.
    pub fn clear_errors(&self) {
        let mut state = self.inner.lock().unwrap();
        state.token_error = None;
        state.order_error = None;
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Call Tracking
    // ════════════════════════════════════════════════════════════════════════════

    /// Get all recorded method calls.
    pub fn calls(&self) -> Vec<MethodCall> {
        self.inner.lock().unwrap().call_log.clone()
    }

    /// Number of token exchanges attempted.
    pub fn token_requests(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, MethodCall::AcquireToken))
            .count()
    }

    /// Order ids fetched, in call order.
    pub fn order_requests(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                MethodCall::FetchOrder { order_id } => Some(order_id),
                MethodCall::AcquireToken => None,
            })
            .collect()
    }
}

impl Clone for MockPaymentGateway {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

#[async_trait]
impl PaymentGateway for MockPaymentGateway {
    async fn acquire_token(&self) -> Result<AccessToken, GatewayError> {
        let mut state = self.inner.lock().unwrap();
        state.call_log.push(MethodCall::AcquireToken);

        if let Some(error) = &state.token_error {
            return Err(error.clone());
        }

        let token = format!("mock-token-{}", state.issued_tokens.len() + 1);
        state.issued_tokens.push(token.clone());
        Ok(AccessToken::new(token))
    }

    async fn fetch_order(
        &self,
        token: &AccessToken,
        order_id: &OrderId,
    ) -> Result<Order, GatewayError> {
        let mut state = self.inner.lock().unwrap();
        state.call_log.push(MethodCall::FetchOrder {
            order_id: order_id.as_str().to_string(),
        });

        if let Some(error) = &state.order_error {
            return Err(error.clone());
        }

        if !state.issued_tokens.iter().any(|t| t == token.expose()) {
            return Err(GatewayError::rejected(401, "AUTHENTICATION_FAILURE"));
        }

        state
            .orders
            .get(order_id.as_str())
            .cloned()
            .ok_or_else(|| GatewayError::rejected(404, "RESOURCE_NOT_FOUND"))
    }
}

/// A completed order paid at exactly 3.00 USD.
fn paid_order(order_id: &str) -> Order {
    Order::new(
        OrderId::new(order_id).unwrap_or_else(|_| panic!("mock order id must not be empty")),
        OrderStatus::Completed,
        vec![PurchaseUnit::with_amount(Money::new("3.00", "USD"))],
    )
}
