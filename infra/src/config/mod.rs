//! Configuration management for infrastructure services
//!
//! Handles:
//! - SMS provider selection and gateway settings
//! - The gateway API key (see [`api_key`])

pub mod api_key;

use cs_shared::config::GatewayConfig;
use serde::{Deserialize, Serialize};

pub use api_key::{EnvApiKeyProvider, StaticApiKeyProvider, API_KEY_VAR};

/// SMS transport configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmsConfig {
    /// Transport to use ("smsmasivos", "mock")
    pub provider: String,
    /// Gateway endpoint, timeout and branding
    pub gateway: GatewayConfig,
}

impl Default for SmsConfig {
    fn default() -> Self {
        Self {
            provider: "smsmasivos".to_string(),
            gateway: GatewayConfig::default(),
        }
    }
}

impl SmsConfig {
    /// Select the provider from the environment, reading `.env` first when
    /// present
    ///
    /// The gateway section comes from the already loaded application
    /// configuration; only `SMS_PROVIDER` is read here.
    pub fn from_env(gateway: GatewayConfig) -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(gateway, |key| std::env::var(key).ok())
    }

    /// Select the provider from an arbitrary variable source
    pub fn from_lookup<F>(gateway: GatewayConfig, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            provider: lookup("SMS_PROVIDER")
                .map(|p| p.trim().to_lowercase())
                .filter(|p| !p.is_empty())
                .unwrap_or_else(|| "smsmasivos".to_string()),
            gateway,
        }
    }
}
