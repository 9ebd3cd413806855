//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Identifier of a payment provider order.
///
/// Opaque to this service: only presence is checked, never format.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    /// Creates a new OrderId, returning error if empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ValidationError::empty_field("order_id"));
        }
        Ok(Self(id))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for OrderId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_id_accepts_any_non_empty_string() {
        let id = OrderId::new("5O190127TN364715T").unwrap();
        assert_eq!(id.as_str(), "5O190127TN364715T");

        let odd = OrderId::new(" with spaces/and slashes ").unwrap();
        assert_eq!(odd.as_str(), " with spaces/and slashes ");
    }

    #[test]
    fn order_id_rejects_empty_string() {
        let result = OrderId::new("");
        match result {
            Err(ValidationError::EmptyField { field }) => assert_eq!(field, "order_id"),
            other => panic!("Expected EmptyField error, got {:?}", other),
        }
    }

    #[test]
    fn order_id_displays_inner_value() {
        let id = OrderId::new("ORDER123").unwrap();
        assert_eq!(format!("{}", id), "ORDER123");
    }

    #[test]
    fn order_id_serializes_transparently() {
        let id = OrderId::new("ORDER123").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"ORDER123\"");
    }
}
