//! SMS gateway configuration
//!
//! The gateway API key is deliberately not part of this struct: it is a
//! credential fetched per request through the key provider, so a missing key
//! fails a single request instead of preventing startup.

use serde::{Deserialize, Serialize};

/// Default SMS Masivos send endpoint
pub const DEFAULT_GATEWAY_URL: &str = "http://servicio.smsmasivos.com.ar/enviar_sms.asp";

/// Default bound on the outbound gateway call, in seconds
pub const DEFAULT_GATEWAY_TIMEOUT_SECS: u64 = 10;

/// Default brand name prefixed to every outbound message
pub const DEFAULT_BRAND_NAME: &str = "CheckSMS";

/// Outbound SMS gateway configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GatewayConfig {
    /// Full URL of the gateway send endpoint (without query string)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Timeout applied to the single outbound request
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Brand name used as the message prefix
    #[serde(default = "default_brand_name")]
    pub brand_name: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            brand_name: default_brand_name(),
        }
    }
}

impl GatewayConfig {
    /// Read `SMS_GATEWAY_URL`, `SMS_GATEWAY_TIMEOUT_SECS` and `SMS_BRAND_NAME`
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            base_url: non_blank("SMS_GATEWAY_URL").unwrap_or_else(default_base_url),
            timeout_secs: non_blank("SMS_GATEWAY_TIMEOUT_SECS")
                .and_then(|v| v.trim().parse().ok())
                .filter(|secs| *secs > 0)
                .unwrap_or(DEFAULT_GATEWAY_TIMEOUT_SECS),
            brand_name: non_blank("SMS_BRAND_NAME").unwrap_or_else(default_brand_name),
        }
    }

    /// Timeout as a `Duration`
    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.timeout_secs)
    }
}

fn default_base_url() -> String {
    DEFAULT_GATEWAY_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_GATEWAY_TIMEOUT_SECS
}

fn default_brand_name() -> String {
    DEFAULT_BRAND_NAME.to_string()
}
