//! Payment gateway port for order verification.
//!
//! Defines the contract for talking to the payment provider (e.g., PayPal).
//! Implementations exchange client credentials for a bearer token and read
//! checkout orders with it.
//!
//! # Design
//!
//! - **Two calls per verification**: token first, then order; the second
//!   depends on the first
//! - **No caching**: every verification acquires a fresh token
//! - **Read-only**: nothing is written to the provider

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use std::fmt;

use crate::domain::foundation::OrderId;
use crate::domain::payment::Order;

/// Port for payment provider integrations.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Exchange the service's client credentials for a bearer token.
    ///
    /// Called once per verification; the token is never stored.
    async fn acquire_token(&self) -> Result<AccessToken, GatewayError>;

    /// Fetch an order using a token from [`PaymentGateway::acquire_token`].
    async fn fetch_order(
        &self,
        token: &AccessToken,
        order_id: &OrderId,
    ) -> Result<Order, GatewayError>;
}

/// Short-lived bearer token issued by the provider.
///
/// Redacted in `Debug` output.
#[derive(Debug, Clone)]
pub struct AccessToken(SecretString);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(SecretString::new(token.into()))
    }

    /// Raw token value for building the Authorization header.
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

/// Errors from payment gateway operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayError {
    /// Error code for categorization.
    pub code: GatewayErrorCode,

    /// Diagnostic message. May contain provider detail; not for clients.
    pub message: String,

    /// HTTP status returned by the provider, if a response was received.
    pub status: Option<u16>,
}

impl GatewayError {
    /// Create a new gateway error.
    pub fn new(code: GatewayErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            status: None,
        }
    }

    /// Attach the provider's HTTP status.
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    /// The provider could not be reached.
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(GatewayErrorCode::NetworkError, message)
    }

    /// The provider answered with a non-success status.
    pub fn rejected(status: u16, message: impl Into<String>) -> Self {
        Self::new(GatewayErrorCode::Rejected, message).with_status(status)
    }

    /// The provider answered with success but the body was unusable.
    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::new(GatewayErrorCode::InvalidResponse, message)
    }

    pub fn is_network(&self) -> bool {
        self.code == GatewayErrorCode::NetworkError
    }
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Some(status) => write!(f, "{} ({}): {}", self.code, status, self.message),
            None => write!(f, "{}: {}", self.code, self.message),
        }
    }
}

impl std::error::Error for GatewayError {}

/// Gateway error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatewayErrorCode {
    /// Timeout, DNS failure, refused connection.
    NetworkError,

    /// Non-success HTTP status.
    Rejected,

    /// Success status with an undecodable or incomplete body.
    InvalidResponse,
}

impl fmt::Display for GatewayErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GatewayErrorCode::NetworkError => "network_error",
            GatewayErrorCode::Rejected => "rejected",
            GatewayErrorCode::InvalidResponse => "invalid_response",
        };
        write!(f, "{}", s)
    }
}
