//! SMS Masivos HTTP transport
//!
//! One GET to `enviar_sms.asp` per send. The HTTP status is not inspected:
//! the gateway reports every outcome, errors included, as a numeric body.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

use cs_core::errors::TransportError;
use cs_core::{GatewayQuery, GatewayTransport};
use cs_shared::config::GatewayConfig;
use cs_shared::phone::mask_phone_number;

use crate::InfrastructureError;

/// SMS Masivos transport backed by a pooled reqwest client
pub struct SmsMasivosTransport {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl SmsMasivosTransport {
    /// Create a new transport
    pub fn new(config: &GatewayConfig) -> Result<Self, InfrastructureError> {
        let timeout = config.timeout();
        let client = Client::builder().timeout(timeout).build()?;

        tracing::info!(
            base_url = %config.base_url,
            timeout_secs = config.timeout_secs,
            "SMS Masivos transport initialized"
        );

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            timeout,
        })
    }

    fn map_error(&self, error: reqwest::Error) -> TransportError {
        if error.is_timeout() {
            TransportError::Timeout {
                seconds: self.timeout.as_secs(),
            }
        } else {
            TransportError::Failed(error.to_string())
        }
    }
}

#[async_trait]
impl GatewayTransport for SmsMasivosTransport {
    async fn send(&self, query: &GatewayQuery) -> Result<String, TransportError> {
        debug!("Sending gateway request for {}", mask_phone_number(&query.to));

        let response = self
            .client
            .get(&self.base_url)
            .query(&query.params())
            .send()
            .await
            .map_err(|e| self.map_error(e))?;

        let status = response.status();
        if !status.is_success() {
            warn!("SMS gateway answered HTTP {}", status);
        }

        let body = response.text().await.map_err(|e| self.map_error(e))?;
        debug!(body = %body.trim(), "SMS gateway response");
        Ok(body)
    }

    fn provider_name(&self) -> &str {
        "SMS Masivos"
    }
}
