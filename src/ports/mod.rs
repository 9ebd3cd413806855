//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `PaymentGateway` - Token exchange and order lookup at the payment provider

mod payment_gateway;

pub use payment_gateway::{AccessToken, GatewayError, GatewayErrorCode, PaymentGateway};
