//! Traits for gateway transport and credential lookup

use async_trait::async_trait;

use crate::errors::{DispatchError, TransportError};

/// Query parameters of one gateway send
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayQuery {
    pub api_key: String,
    pub to: String,
    pub text: String,
}

impl GatewayQuery {
    /// Parameters in the order the gateway documents them
    pub fn params(&self) -> [(&'static str, &str); 5] {
        [
            ("api", "1"),
            ("APIKEY", self.api_key.as_str()),
            ("TOS", self.to.as_str()),
            ("TEXTO", self.text.as_str()),
            ("RESPUESTANUMERICA", "1"),
        ]
    }
}

/// Trait for the HTTP leg of a gateway send
#[async_trait]
pub trait GatewayTransport: Send + Sync {
    /// Perform exactly one GET with the query and return the raw body
    async fn send(&self, query: &GatewayQuery) -> Result<String, TransportError>;

    /// Name of the gateway provider, for logs
    fn provider_name(&self) -> &str;
}

#[async_trait]
impl<T: GatewayTransport + ?Sized> GatewayTransport for Box<T> {
    async fn send(&self, query: &GatewayQuery) -> Result<String, TransportError> {
        (**self).send(query).await
    }

    fn provider_name(&self) -> &str {
        (**self).provider_name()
    }
}

/// Trait for the configuration store holding the gateway API key
#[async_trait]
pub trait ApiKeyProvider: Send + Sync {
    /// Fetch the API key, failing with `DispatchError::Configuration` when
    /// it is absent
    async fn api_key(&self) -> Result<String, DispatchError>;
}
