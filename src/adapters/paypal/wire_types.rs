//! PayPal REST API payloads.
//!
//! These types represent PayPal JSON as it arrives over the wire. Every
//! field the gate does not strictly need is optional so that a partial
//! response degrades into a rule failure instead of a decode error.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::domain::foundation::OrderId;
use crate::domain::payment::{Money, Order, OrderStatus, PurchaseUnit};

// ════════════════════════════════════════════════════════════════════════════════
// OAuth2
// ════════════════════════════════════════════════════════════════════════════════

/// Response of `POST /v1/oauth2/token`.
#[derive(Debug, Clone, Deserialize)]
pub struct PayPalTokenResponse {
    pub access_token: String,

    #[serde(default)]
    pub token_type: Option<String>,

    /// Lifetime in seconds. Informational only; tokens are never reused.
    #[serde(default)]
    pub expires_in: Option<u64>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Orders v2
// ════════════════════════════════════════════════════════════════════════════════

/// Response of `GET /v2/checkout/orders/{id}`.
///
/// Decoding never fails on a field of the wrong type or a `null` purchase
/// unit: such values read as absent so the order still reaches the status
/// and amount rules.
#[derive(Debug, Clone, Deserialize)]
pub struct PayPalOrder {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<String>,

    #[serde(default, deserialize_with = "lenient")]
    pub status: Option<String>,

    #[serde(default, deserialize_with = "lenient_units")]
    pub purchase_units: Option<Vec<Option<PayPalPurchaseUnit>>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PayPalPurchaseUnit {
    #[serde(default, deserialize_with = "lenient")]
    pub reference_id: Option<String>,

    #[serde(default, deserialize_with = "lenient")]
    pub amount: Option<PayPalAmount>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PayPalAmount {
    #[serde(default, deserialize_with = "lenient")]
    pub currency_code: Option<String>,

    #[serde(default, deserialize_with = "lenient")]
    pub value: Option<String>,
}

/// Any JSON value; `None` unless it decodes as `T`.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| serde_json::from_value(v).ok()))
}

/// Purchase units decoded one by one, so a bad entry does not hide the others.
fn lenient_units<'de, D>(deserializer: D) -> Result<Option<Vec<Option<PayPalPurchaseUnit>>>, D::Error>
where
    D: Deserializer<'de>,
{
    let units = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Array(items)) => Some(
            items
                .into_iter()
                .map(|item| serde_json::from_value(item).ok())
                .collect(),
        ),
        _ => None,
    };
    Ok(units)
}

impl PayPalOrder {
    /// Converts into the domain order that was requested as `order_id`.
    ///
    /// A missing status becomes an empty `Other` status. A `null` purchase
    /// unit, or an amount missing either half, yields no amount; both then
    /// fail the payment rules.
    pub fn into_domain(self, order_id: OrderId) -> Order {
        let status = self
            .status
            .as_deref()
            .map(OrderStatus::parse)
            .unwrap_or_else(|| OrderStatus::Other(String::new()));

        let purchase_units = self
            .purchase_units
            .unwrap_or_default()
            .into_iter()
            .map(|unit| PurchaseUnit {
                amount: unit.and_then(|unit| unit.amount).and_then(|amount| {
                    match (amount.value, amount.currency_code) {
                        (Some(value), Some(currency)) => Some(Money::new(value, currency)),
                        _ => None,
                    }
                }),
            })
            .collect();

        Order::new(order_id, status, purchase_units)
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Errors
// ════════════════════════════════════════════════════════════════════════════════

/// Error body returned by PayPal.
///
/// OAuth endpoints use `error`/`error_description`; REST endpoints use
/// `name`/`message`/`debug_id`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PayPalErrorBody {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub message: Option<String>,

    #[serde(default)]
    pub debug_id: Option<String>,

    #[serde(default)]
    pub error: Option<String>,

    #[serde(default)]
    pub error_description: Option<String>,
}

impl PayPalErrorBody {
    /// Best-effort parse; falls back to an empty body.
    pub fn parse(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }

    /// Short diagnostic summary for logs and gateway errors.
    pub fn summary(&self) -> String {
        let code = self.name.as_deref().or(self.error.as_deref());
        let detail = self
            .message
            .as_deref()
            .or(self.error_description.as_deref());

        match (code, detail) {
            (Some(code), Some(detail)) => format!("{}: {}", code, detail),
            (Some(code), None) => code.to_string(),
            (None, Some(detail)) => detail.to_string(),
            (None, None) => "no error detail".to_string(),
        }
    }
}
