//! PayPal payment gateway adapter.
//!
//! Implements the `PaymentGateway` trait against the PayPal REST API:
//! OAuth2 client-credentials exchange and Orders v2 lookup.
//!
//! # Security
//!
//! - The client secret and access tokens are held in `secrecy` wrappers and
//!   never logged
//! - Order ids are percent-encoded as a single path segment
//!
//! # Configuration
//!
//! ```ignore
//! let config = PayPalConfig::new(client_id, client_secret)
//!     .with_base_url("https://api-m.sandbox.paypal.com");
//! let gateway = PayPalGateway::new(config)?;
//! ```

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Response, Url};
use secrecy::{ExposeSecret, SecretString};

use crate::config::{PaymentConfig, PAYPAL_SANDBOX_BASE_URL};
use crate::domain::foundation::OrderId;
use crate::domain::payment::Order;
use crate::ports::{AccessToken, GatewayError, PaymentGateway};

use super::wire_types::{PayPalErrorBody, PayPalOrder, PayPalTokenResponse};

/// Default timeout for each PayPal call.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// PayPal API configuration.
#[derive(Debug, Clone)]
pub struct PayPalConfig {
    /// REST app client ID.
    client_id: String,

    /// REST app client secret.
    client_secret: SecretString,

    /// Base URL for the PayPal API, without trailing slash.
    api_base_url: String,

    /// Timeout applied to every outbound request.
    timeout: Duration,
}

impl PayPalConfig {
    /// Create a sandbox configuration with the given credentials.
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: SecretString::new(client_secret.into()),
            api_base_url: PAYPAL_SANDBOX_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Build from the application's payment settings.
    pub fn from_settings(settings: &PaymentConfig) -> Self {
        Self {
            client_id: settings.client_id.clone(),
            client_secret: settings.client_secret.clone(),
            api_base_url: settings.resolved_base_url(),
            timeout: Duration::from_secs(settings.timeout_secs),
        }
    }

    /// Set a custom API base URL (live mode, tests, local fakes).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.api_base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

/// PayPal payment gateway adapter.
///
/// Holds one pooled `reqwest::Client`; no per-request state.
pub struct PayPalGateway {
    config: PayPalConfig,
    http_client: reqwest::Client,
}

impl PayPalGateway {
    /// Create a new PayPal gateway with the given configuration.
    pub fn new(config: PayPalConfig) -> Result<Self, reqwest::Error> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            config,
            http_client,
        })
    }

    pub fn config(&self) -> &PayPalConfig {
        &self.config
    }

    /// Join path segments onto the base URL, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, GatewayError> {
        let mut url = Url::parse(&self.config.api_base_url).map_err(|e| {
            GatewayError::network(format!(
                "Invalid PayPal base URL '{}': {}",
                self.config.api_base_url, e
            ))
        })?;

        url.path_segments_mut()
            .map_err(|_| {
                GatewayError::network(format!(
                    "PayPal base URL '{}' cannot carry a path",
                    self.config.api_base_url
                ))
            })?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }

    fn token_url(&self) -> Result<Url, GatewayError> {
        self.endpoint(&["v1", "oauth2", "token"])
    }

    fn order_url(&self, order_id: &OrderId) -> Result<Url, GatewayError> {
        self.endpoint(&["v2", "checkout", "orders", order_id.as_str()])
    }
}

/// Classify a transport failure.
fn transport_error(err: reqwest::Error) -> GatewayError {
    if err.is_timeout() {
        GatewayError::network(format!("Request timed out: {}", err))
    } else if err.is_connect() {
        GatewayError::network(format!("Connection failed: {}", err))
    } else {
        GatewayError::network(err.to_string())
    }
}

/// Turn a non-success response into a `Rejected` gateway error.
async fn rejection(response: Response, operation: &'static str) -> GatewayError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let error_body = PayPalErrorBody::parse(&body);

    tracing::warn!(
        operation,
        status = status.as_u16(),
        paypal_debug_id = error_body.debug_id.as_deref().unwrap_or("-"),
        error = %error_body.summary(),
        "PayPal request rejected"
    );

    GatewayError::rejected(status.as_u16(), error_body.summary())
}

#[async_trait]
impl PaymentGateway for PayPalGateway {
    async fn acquire_token(&self) -> Result<AccessToken, GatewayError> {
        let url = self.token_url()?;

        let response = self
            .http_client
            .post(url)
            .basic_auth(
                &self.config.client_id,
                Some(self.config.client_secret.expose_secret()),
            )
            .header(ACCEPT, "application/json")
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await
            .map_err(transport_error)?;

        if !response.status().is_success() {
            return Err(rejection(response, "oauth2_token").await);
        }

        let body = response.text().await.map_err(transport_error)?;
        let token: PayPalTokenResponse = serde_json::from_str(&body).map_err(|e| {
            tracing::warn!(error = %e, "Failed to parse PayPal token response");
            GatewayError::invalid_response(format!("Invalid token response: {}", e))
        })?;

        if token.access_token.is_empty() {
            return Err(GatewayError::invalid_response(
                "Token response carried an empty access_token",
            ));
        }

        tracing::debug!(
            token_type = token.token_type.as_deref().unwrap_or("-"),
            expires_in = token.expires_in,
            "PayPal access token acquired"
        );

        Ok(AccessToken::new(token.access_token))
    }

    async fn fetch_order(
        &self,
        token: &AccessToken,
        order_id: &OrderId,
    ) -> Result<Order, GatewayError> {
        let url = self.order_url(order_id)?;

        let response = self
            .http_client
            .get(url)
            .bearer_auth(token.expose())
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(transport_error)?;

        if !response.status().is_success() {
            return Err(rejection(response, "get_order").await);
        }

        let body = response.text().await.map_err(transport_error)?;
        let order: PayPalOrder = serde_json::from_str(&body).map_err(|e| {
            tracing::warn!(order_id = %order_id, error = %e, "Failed to parse PayPal order");
            GatewayError::invalid_response(format!("Invalid order response: {}", e))
        })?;

        tracing::debug!(
            order_id = %order_id,
            status = order.status.as_deref().unwrap_or("-"),
            "PayPal order fetched"
        );

        Ok(order.into_domain(order_id.clone()))
    }
}
