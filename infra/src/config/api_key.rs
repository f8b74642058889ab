//! Gateway API-key providers
//!
//! The key is looked up on every request. A missing or blank key fails
//! that request with a configuration error and the gateway is not called.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use cs_core::errors::DispatchError;
use cs_core::ApiKeyProvider;

/// Environment variable holding the SMS Masivos API key
pub const API_KEY_VAR: &str = "SMS_API_KEY";

type Lookup = Arc<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Reads the key from the process environment on each call
#[derive(Clone)]
pub struct EnvApiKeyProvider {
    var_name: String,
    lookup: Lookup,
}

impl EnvApiKeyProvider {
    pub fn new() -> Self {
        Self::with_var(API_KEY_VAR)
    }

    /// Read the key from a different variable
    pub fn with_var(var_name: impl Into<String>) -> Self {
        Self::with_lookup(var_name, |key| std::env::var(key).ok())
    }

    /// Read the key through an arbitrary variable source
    pub fn with_lookup<F>(var_name: impl Into<String>, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        Self {
            var_name: var_name.into(),
            lookup: Arc::new(lookup),
        }
    }
}

impl fmt::Debug for EnvApiKeyProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvApiKeyProvider")
            .field("var_name", &self.var_name)
            .finish_non_exhaustive()
    }
}

impl Default for EnvApiKeyProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ApiKeyProvider for EnvApiKeyProvider {
    async fn api_key(&self) -> Result<String, DispatchError> {
        non_blank((self.lookup)(&self.var_name))
    }
}

/// Fixed key, mainly for tests and embedded setups
#[derive(Debug, Clone)]
pub struct StaticApiKeyProvider {
    key: Option<String>,
}

impl StaticApiKeyProvider {
    pub fn new(key: Option<String>) -> Self {
        Self { key }
    }
}

#[async_trait]
impl ApiKeyProvider for StaticApiKeyProvider {
    async fn api_key(&self) -> Result<String, DispatchError> {
        non_blank(self.key.clone())
    }
}

fn non_blank(key: Option<String>) -> Result<String, DispatchError> {
    key.map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty())
        .ok_or_else(DispatchError::missing_api_key)
}
