//! Business rules a fetched order must satisfy.

use super::errors::VerificationError;
use super::order::{Money, Order};

/// Price a song generation must have been paid with.
pub const SONG_PRICE_VALUE: &str = "3.00";

/// Currency the song price is charged in.
pub const SONG_PRICE_CURRENCY: &str = "USD";

/// Required status and amount for an order to unlock generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentRequirement {
    price: Money,
}

impl PaymentRequirement {
    pub fn new(price: Money) -> Self {
        Self { price }
    }

    /// The fixed price of one song generation.
    pub fn song_generation() -> Self {
        Self::new(Money::new(SONG_PRICE_VALUE, SONG_PRICE_CURRENCY))
    }

    pub fn price(&self) -> &Money {
        &self.price
    }

    /// Applies the status rule, then the amount rule. First failure wins.
    ///
    /// Value and currency are compared as exact strings; an order without
    /// a first purchase-unit amount is a mismatch.
    pub fn check(&self, order: &Order) -> Result<(), VerificationError> {
        if !order.status.is_completed() {
            return Err(VerificationError::payment_incomplete(order.status.as_str()));
        }

        match order.first_amount() {
            Some(amount) if amount == &self.price => Ok(()),
            other => Err(VerificationError::amount_mismatch(
                self.price.to_string(),
                other.map(Money::to_string),
            )),
        }
    }
}

impl Default for PaymentRequirement {
    fn default() -> Self {
        Self::song_generation()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::OrderId;
    use crate::domain::payment::{OrderStatus, PurchaseUnit};

    fn order(status: OrderStatus, units: Vec<PurchaseUnit>) -> Order {
        Order::new(OrderId::new("ORDER123").unwrap(), status, units)
    }

    fn paid(value: &str, currency: &str) -> Vec<PurchaseUnit> {
        vec![PurchaseUnit::with_amount(Money::new(value, currency))]
    }

    #[test]
    fn completed_order_with_exact_price_passes() {
        let requirement = PaymentRequirement::song_generation();
        let order = order(OrderStatus::Completed, paid("3.00", "USD"));
        assert!(requirement.check(&order).is_ok());
    }

    #[test]
    fn incomplete_status_is_rejected() {
        let requirement = PaymentRequirement::song_generation();
        for status in [
            OrderStatus::Created,
            OrderStatus::Approved,
            OrderStatus::Voided,
            OrderStatus::PayerActionRequired,
            OrderStatus::Other("PENDING".to_string()),
        ] {
            let result = requirement.check(&order(status.clone(), paid("3.00", "USD")));
            assert_eq!(
                result,
                Err(VerificationError::payment_incomplete(status.as_str()))
            );
        }
    }

    #[test]
    fn status_rule_is_checked_before_amount_rule() {
        let requirement = PaymentRequirement::song_generation();
        let result = requirement.check(&order(OrderStatus::Approved, paid("1.00", "EUR")));
        assert!(matches!(
            result,
            Err(VerificationError::PaymentIncomplete { .. })
        ));
    }

    #[test]
    fn wrong_value_is_rejected() {
        let requirement = PaymentRequirement::song_generation();
        let result = requirement.check(&order(OrderStatus::Completed, paid("2.99", "USD")));
        assert_eq!(
            result,
            Err(VerificationError::amount_mismatch(
                "3.00 USD",
                Some("2.99 USD".to_string())
            ))
        );
    }

    #[test]
    fn numerically_equal_but_differently_formatted_value_is_rejected() {
        let requirement = PaymentRequirement::song_generation();
        for value in ["3", "3.0", "3.000", " 3.00"] {
            let result = requirement.check(&order(OrderStatus::Completed, paid(value, "USD")));
            assert!(
                matches!(result, Err(VerificationError::AmountMismatch { .. })),
                "value {:?} should not match",
                value
            );
        }
    }

    #[test]
    fn wrong_currency_is_rejected() {
        let requirement = PaymentRequirement::song_generation();
        let result = requirement.check(&order(OrderStatus::Completed, paid("3.00", "CAD")));
        assert!(matches!(
            result,
            Err(VerificationError::AmountMismatch { .. })
        ));
    }

    #[test]
    fn missing_purchase_units_is_amount_mismatch() {
        let requirement = PaymentRequirement::song_generation();
        let result = requirement.check(&order(OrderStatus::Completed, vec![]));
        assert_eq!(
            result,
            Err(VerificationError::amount_mismatch("3.00 USD", None))
        );
    }

    #[test]
    fn missing_amount_on_first_unit_is_amount_mismatch() {
        let requirement = PaymentRequirement::song_generation();
        let result =
            requirement.check(&order(OrderStatus::Completed, vec![PurchaseUnit::default()]));
        assert!(matches!(
            result,
            Err(VerificationError::AmountMismatch { actual: None, .. })
        ));
    }

    #[test]
    fn default_requirement_is_song_price() {
        let requirement = PaymentRequirement::default();
        assert_eq!(requirement.price(), &Money::new("3.00", "USD"));
    }
}
