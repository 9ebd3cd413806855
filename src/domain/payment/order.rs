//! Provider order as seen by this service.
//!
//! Only the fields the payment gate reads are modelled: status and the
//! amount of each purchase unit.

use std::fmt;

use crate::domain::foundation::OrderId;

/// Lifecycle status of a checkout order.
///
/// Mirrors the provider's status strings. Values the provider may add later
/// are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderStatus {
    /// Order created, buyer has not approved yet.
    Created,

    /// Order saved for later capture.
    Saved,

    /// Buyer approved, funds not captured yet.
    Approved,

    /// All purchase units voided.
    Voided,

    /// Payment captured. The only status that unlocks generation.
    Completed,

    /// Buyer must take further action.
    PayerActionRequired,

    /// Unrecognised status string.
    Other(String),
}

impl OrderStatus {
    /// Parses a provider status string. Matching is exact.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "CREATED" => OrderStatus::Created,
            "SAVED" => OrderStatus::Saved,
            "APPROVED" => OrderStatus::Approved,
            "VOIDED" => OrderStatus::Voided,
            "COMPLETED" => OrderStatus::Completed,
            "PAYER_ACTION_REQUIRED" => OrderStatus::PayerActionRequired,
            other => OrderStatus::Other(other.to_string()),
        }
    }

    /// Provider string for this status.
    pub fn as_str(&self) -> &str {
        match self {
            OrderStatus::Created => "CREATED",
            OrderStatus::Saved => "SAVED",
            OrderStatus::Approved => "APPROVED",
            OrderStatus::Voided => "VOIDED",
            OrderStatus::Completed => "COMPLETED",
            OrderStatus::PayerActionRequired => "PAYER_ACTION_REQUIRED",
            OrderStatus::Other(raw) => raw,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, OrderStatus::Completed)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Monetary amount exactly as the provider reports it.
///
/// `value` stays a decimal string so that "3.00" and "3.0" remain distinct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Money {
    pub value: String,
    pub currency_code: String,
}

impl Money {
    pub fn new(value: impl Into<String>, currency_code: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            currency_code: currency_code.into(),
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.currency_code)
    }
}

/// One purchase unit of an order. The amount is absent when the provider
/// omits it or reports it only partially.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PurchaseUnit {
    pub amount: Option<Money>,
}

impl PurchaseUnit {
    pub fn with_amount(amount: Money) -> Self {
        Self {
            amount: Some(amount),
        }
    }
}

/// A provider order, read-only from this service's point of view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub id: OrderId,
    pub status: OrderStatus,
    pub purchase_units: Vec<PurchaseUnit>,
}

impl Order {
    pub fn new(id: OrderId, status: OrderStatus, purchase_units: Vec<PurchaseUnit>) -> Self {
        Self {
            id,
            status,
            purchase_units,
        }
    }

    /// Amount of the first purchase unit, if there is one.
    pub fn first_amount(&self) -> Option<&Money> {
        self.purchase_units.first().and_then(|unit| unit.amount.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order_id() -> OrderId {
        OrderId::new("ORDER123").unwrap()
    }

    #[test]
    fn parses_known_statuses() {
        assert_eq!(OrderStatus::parse("COMPLETED"), OrderStatus::Completed);
        assert_eq!(OrderStatus::parse("APPROVED"), OrderStatus::Approved);
        assert_eq!(
            OrderStatus::parse("PAYER_ACTION_REQUIRED"),
            OrderStatus::PayerActionRequired
        );
    }

    #[test]
    fn status_matching_is_case_sensitive() {
        assert_eq!(
            OrderStatus::parse("completed"),
            OrderStatus::Other("completed".to_string())
        );
        assert!(!OrderStatus::parse("completed").is_completed());
    }

    #[test]
    fn status_round_trips_through_as_str() {
        for raw in ["CREATED", "SAVED", "APPROVED", "VOIDED", "COMPLETED", "SOMETHING_NEW"] {
            assert_eq!(OrderStatus::parse(raw).as_str(), raw);
        }
    }

    #[test]
    fn only_completed_is_completed() {
        assert!(OrderStatus::Completed.is_completed());
        assert!(!OrderStatus::Approved.is_completed());
        assert!(!OrderStatus::Created.is_completed());
    }

    #[test]
    fn first_amount_reads_first_purchase_unit() {
        let order = Order::new(
            order_id(),
            OrderStatus::Completed,
            vec![
                PurchaseUnit::with_amount(Money::new("3.00", "USD")),
                PurchaseUnit::with_amount(Money::new("9.99", "EUR")),
            ],
        );
        assert_eq!(order.first_amount(), Some(&Money::new("3.00", "USD")));
    }

    #[test]
    fn first_amount_is_none_without_purchase_units() {
        let order = Order::new(order_id(), OrderStatus::Completed, vec![]);
        assert_eq!(order.first_amount(), None);
    }

    #[test]
    fn first_amount_is_none_when_first_unit_has_no_amount() {
        let order = Order::new(
            order_id(),
            OrderStatus::Completed,
            vec![
                PurchaseUnit::default(),
                PurchaseUnit::with_amount(Money::new("3.00", "USD")),
            ],
        );
        assert_eq!(order.first_amount(), None);
    }

    #[test]
    fn money_displays_value_and_currency() {
        assert_eq!(Money::new("3.00", "USD").to_string(), "3.00 USD");
    }
}
