//! PayPal payment gateway adapter.
//!
//! Implements the `PaymentGateway` port for PayPal, including:
//! - OAuth2 client-credentials token exchange
//! - Orders v2 lookup
//!
//! # Security
//!
//! - Client secret and access tokens are handled via `secrecy::SecretString`
//! - Tokens are fetched per verification and never stored
//!
//! # Configuration
//!
//! Built from `config::PaymentConfig`:
//! - `MELODY_MAGIC__PAYPAL__MODE`: `sandbox` (default) or `live`
//! - `MELODY_MAGIC__PAYPAL__CLIENT_ID` / `MELODY_MAGIC__PAYPAL__CLIENT_SECRET`

mod mock_gateway;
mod paypal_adapter;
mod wire_types;

pub use mock_gateway::{MethodCall, MockPaymentGateway};
pub use paypal_adapter::{PayPalConfig, PayPalGateway};
pub use wire_types::{
    PayPalAmount, PayPalErrorBody, PayPalOrder, PayPalPurchaseUnit, PayPalTokenResponse,
};
