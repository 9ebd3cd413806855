//! Payment configuration (PayPal)

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;

/// PayPal REST API base URL for live payments.
pub const PAYPAL_LIVE_BASE_URL: &str = "https://api-m.paypal.com";

/// PayPal REST API base URL for sandbox payments.
pub const PAYPAL_SANDBOX_BASE_URL: &str = "https://api-m.sandbox.paypal.com";

/// Payment configuration (PayPal)
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentConfig {
    /// Which PayPal environment to talk to
    #[serde(default)]
    pub mode: PayPalMode,

    /// REST app client ID
    #[serde(default)]
    pub client_id: String,

    /// REST app client secret
    #[serde(default = "empty_secret")]
    pub client_secret: SecretString,

    /// Explicit API base URL, overriding `mode`
    pub base_url: Option<String>,

    /// Timeout for each outbound PayPal call, in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

/// PayPal environment selector.
///
/// Only the exact, lowercase word `live` selects live mode; anything
/// else falls back to the sandbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "String")]
pub enum PayPalMode {
    #[default]
    Sandbox,
    Live,
}

impl From<String> for PayPalMode {
    fn from(value: String) -> Self {
        if value == "live" {
            PayPalMode::Live
        } else {
            PayPalMode::Sandbox
        }
    }
}

impl PayPalMode {
    /// Default API base URL for this mode
    pub fn base_url(&self) -> &'static str {
        match self {
            PayPalMode::Live => PAYPAL_LIVE_BASE_URL,
            PayPalMode::Sandbox => PAYPAL_SANDBOX_BASE_URL,
        }
    }
}

impl PaymentConfig {
    /// Base URL used for all PayPal calls, without a trailing slash.
    pub fn resolved_base_url(&self) -> String {
        self.base_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| self.mode.base_url())
            .trim_end_matches('/')
            .to_string()
    }

    /// Check if using PayPal live mode
    pub fn is_live_mode(&self) -> bool {
        self.mode == PayPalMode::Live
    }

    /// Whether both client credentials are set.
    ///
    /// Missing credentials are not a configuration error: PayPal rejects the
    /// token exchange and every verification fails with an auth error.
    pub fn has_credentials(&self) -> bool {
        !self.client_id.is_empty() && !self.client_secret.expose_secret().is_empty()
    }

    /// Validate payment configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.timeout_secs == 0 || self.timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout);
        }

        let base_url = self.resolved_base_url();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ValidationError::InvalidPayPalBaseUrl(base_url));
        }
        if self.is_live_mode() && !base_url.starts_with("https://") {
            return Err(ValidationError::LiveModeRequiresHttps);
        }

        Ok(())
    }
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            mode: PayPalMode::default(),
            client_id: String::new(),
            client_secret: empty_secret(),
            base_url: None,
            timeout_secs: default_timeout(),
        }
    }
}

fn empty_secret() -> SecretString {
    SecretString::new(String::new())
}

fn default_timeout() -> u64 {
    30
}
