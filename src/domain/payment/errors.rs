//! Payment verification errors.
//!
//! Every way an order can fail to unlock generation. The variants stay
//! distinct internally (logs use [`VerificationError::code`]); clients only
//! ever see the coarse "Payment verification failed" rejection plus the
//! human-readable `Display` text.
//!
//! | Error | Kind | Client message |
//! |-------|------|----------------|
//! | UpstreamUnreachable | provider | Payment provider unreachable |
//! | UpstreamAuth | provider | Failed to get PayPal access token |
//! | OrderNotFound | business | Order not found in PayPal |
//! | PaymentIncomplete | business | Payment not completed |
//! | AmountMismatch | business | Incorrect payment amount |

use thiserror::Error;

/// Reasons an order failed verification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerificationError {
    /// The provider could not be reached (timeout, DNS, connection refused).
    #[error("Payment provider unreachable")]
    UpstreamUnreachable { reason: String },

    /// The provider refused the credential exchange.
    #[error("Failed to get PayPal access token")]
    UpstreamAuth { status: Option<u16> },

    /// The order fetch did not succeed or its body was unreadable.
    #[error("Order not found in PayPal")]
    OrderNotFound {
        order_id: String,
        status: Option<u16>,
    },

    /// The order exists but has not been captured.
    #[error("Payment not completed")]
    PaymentIncomplete { status: String },

    /// The order was captured for the wrong amount or currency.
    #[error("Incorrect payment amount")]
    AmountMismatch {
        expected: String,
        actual: Option<String>,
    },
}

impl VerificationError {
    pub fn upstream_unreachable(reason: impl Into<String>) -> Self {
        VerificationError::UpstreamUnreachable {
            reason: reason.into(),
        }
    }

    pub fn upstream_auth(status: Option<u16>) -> Self {
        VerificationError::UpstreamAuth { status }
    }

    pub fn order_not_found(order_id: impl Into<String>, status: Option<u16>) -> Self {
        VerificationError::OrderNotFound {
            order_id: order_id.into(),
            status,
        }
    }

    pub fn payment_incomplete(status: impl Into<String>) -> Self {
        VerificationError::PaymentIncomplete {
            status: status.into(),
        }
    }

    pub fn amount_mismatch(expected: impl Into<String>, actual: Option<String>) -> Self {
        VerificationError::AmountMismatch {
            expected: expected.into(),
            actual,
        }
    }

    /// Stable machine-readable code, used in logs.
    pub fn code(&self) -> &'static str {
        match self {
            VerificationError::UpstreamUnreachable { .. } => "UPSTREAM_UNREACHABLE",
            VerificationError::UpstreamAuth { .. } => "UPSTREAM_AUTH",
            VerificationError::OrderNotFound { .. } => "ORDER_NOT_FOUND",
            VerificationError::PaymentIncomplete { .. } => "PAYMENT_INCOMPLETE",
            VerificationError::AmountMismatch { .. } => "AMOUNT_MISMATCH",
        }
    }

    /// True for failures caused by the order itself rather than the provider.
    pub fn is_business_rule(&self) -> bool {
        matches!(
            self,
            VerificationError::OrderNotFound { .. }
                | VerificationError::PaymentIncomplete { .. }
                | VerificationError::AmountMismatch { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_client_facing_reasons() {
        assert_eq!(
            VerificationError::upstream_auth(Some(401)).to_string(),
            "Failed to get PayPal access token"
        );
        assert_eq!(
            VerificationError::order_not_found("ORDER123", Some(404)).to_string(),
            "Order not found in PayPal"
        );
        assert_eq!(
            VerificationError::payment_incomplete("APPROVED").to_string(),
            "Payment not completed"
        );
        assert_eq!(
            VerificationError::amount_mismatch("3.00 USD", None).to_string(),
            "Incorrect payment amount"
        );
    }

    #[test]
    fn unreachable_message_hides_transport_detail() {
        let err = VerificationError::upstream_unreachable("dns error: no such host api-m.internal");
        assert_eq!(err.to_string(), "Payment provider unreachable");
    }

    #[test]
    fn codes_are_distinct() {
        let errors = [
            VerificationError::upstream_unreachable("x"),
            VerificationError::upstream_auth(None),
            VerificationError::order_not_found("x", None),
            VerificationError::payment_incomplete("x"),
            VerificationError::amount_mismatch("x", None),
        ];
        let mut codes: Vec<_> = errors.iter().map(|e| e.code()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn business_rules_are_separated_from_provider_failures() {
        assert!(VerificationError::order_not_found("x", None).is_business_rule());
        assert!(VerificationError::payment_incomplete("x").is_business_rule());
        assert!(VerificationError::amount_mismatch("x", None).is_business_rule());

        assert!(!VerificationError::upstream_auth(None).is_business_rule());
        assert!(!VerificationError::upstream_unreachable("x").is_business_rule());
    }
}
