//! Gateway dispatcher implementation

use std::sync::Arc;

use cs_shared::phone::mask_phone_number;

use super::traits::{GatewayQuery, GatewayTransport};
use crate::domain::{GatewayOutcome, VerificationRequest};
use crate::errors::{DispatchError, DomainResult, TransportError};

/// Sends verification SMS through the gateway and normalizes the answer
pub struct GatewayDispatcher<T: GatewayTransport> {
    transport: Arc<T>,
    brand_name: String,
}

impl<T: GatewayTransport> GatewayDispatcher<T> {
    /// Create a new dispatcher
    ///
    /// # Arguments
    ///
    /// * `transport` - HTTP transport reaching the gateway
    /// * `brand_name` - Prefix of every outbound message
    pub fn new(transport: Arc<T>, brand_name: impl Into<String>) -> Self {
        Self {
            transport,
            brand_name: brand_name.into(),
        }
    }

    /// Build the gateway query for a request
    pub fn build_query(&self, request: &VerificationRequest, api_key: &str) -> GatewayQuery {
        GatewayQuery {
            api_key: api_key.to_string(),
            to: request.phone_number.clone(),
            text: request.compose_message(&self.brand_name),
        }
    }

    /// Send one verification SMS
    ///
    /// Gateway rejections and unreadable bodies come back as `Ok` with an
    /// unsuccessful outcome. A timeout also yields the generic error
    /// outcome, since the send may or may not have happened. Any other
    /// transport failure is returned as `DispatchError::Transport`.
    ///
    /// # Arguments
    ///
    /// * `request` - Phone number, code and branch label (not validated here)
    /// * `api_key` - Gateway credential supplied by the caller
    pub async fn dispatch(
        &self,
        request: &VerificationRequest,
        api_key: &str,
    ) -> DomainResult<GatewayOutcome> {
        let query = self.build_query(request, api_key);
        let masked = mask_phone_number(&request.phone_number);

        tracing::info!(
            phone = %masked,
            provider = self.transport.provider_name(),
            message_length = query.text.chars().count(),
            event = "sms_dispatch",
            "Dispatching verification SMS"
        );

        let body = match self.transport.send(&query).await {
            Ok(body) => body,
            Err(TransportError::Timeout { seconds }) => {
                tracing::error!(
                    phone = %masked,
                    timeout_secs = seconds,
                    event = "sms_dispatch_timeout",
                    "Gateway did not answer in time"
                );
                return Ok(GatewayOutcome::timed_out());
            }
            Err(e) => {
                tracing::error!(
                    phone = %masked,
                    error = %e,
                    event = "sms_dispatch_failed",
                    "Failed to reach SMS gateway"
                );
                return Err(DispatchError::Transport(e));
            }
        };

        let outcome = GatewayOutcome::from_body(&body);

        if outcome.success {
            tracing::info!(
                phone = %masked,
                response_code = ?outcome.response_code,
                event = "sms_dispatch_accepted",
                "Gateway accepted verification SMS"
            );
        } else {
            tracing::warn!(
                phone = %masked,
                response_code = ?outcome.response_code,
                reason = %outcome.message,
                event = "sms_dispatch_rejected",
                "Gateway rejected verification SMS"
            );
        }

        Ok(outcome)
    }
}
