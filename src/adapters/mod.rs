//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - Inbound REST API (axum)
//! - `paypal` - Outbound payment gateway (PayPal REST API)

pub mod http;
pub mod paypal;

pub use http::{app_router, GenerationAppState};
pub use paypal::{MockPaymentGateway, PayPalConfig, PayPalGateway};
