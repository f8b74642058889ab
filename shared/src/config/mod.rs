//! Configuration module with business-specific sub-modules
//!
//! - `environment` - Environment detection and logging configuration
//! - `gateway` - Outbound SMS gateway endpoint, timeout and message branding
//! - `server` - HTTP server bind configuration
//!
//! Every loader has a `from_lookup` variant that takes the variable source as
//! a closure, so configuration can be built without touching the process
//! environment.

pub mod environment;
pub mod gateway;
pub mod server;

use serde::{Deserialize, Serialize};

pub use environment::{Environment, LoggingConfig};
pub use gateway::GatewayConfig;
pub use server::ServerConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// SMS gateway configuration
    pub gateway: GatewayConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            server: ServerConfig::default(),
            gateway: GatewayConfig::default(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}

impl AppConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = Environment::from_lookup(&lookup);
        let mut logging = LoggingConfig::for_environment(environment);
        if let Some(level) = lookup("LOG_LEVEL") {
            logging.level = level;
        }

        Self {
            environment,
            server: ServerConfig::from_lookup(&lookup),
            gateway: GatewayConfig::from_lookup(&lookup),
            logging,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_app_config_defaults() {
        let config = AppConfig::from_lookup(|_| None);
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.gateway.timeout_secs, 10);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_app_config_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("ENVIRONMENT", "production"),
            ("SERVER_PORT", "9090"),
            ("SMS_BRAND_NAME", "Limite"),
            ("LOG_LEVEL", "trace"),
        ]));
        assert!(config.environment.is_production());
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.gateway.brand_name, "Limite");
        assert_eq!(config.logging.level, "trace");
    }
}
