//! Main verification service implementation

use std::sync::Arc;

use cs_shared::phone::{is_valid_national_mobile, mask_phone_number};
use cs_shared::validation::{is_valid_dni, not_blank};
use serde::Serialize;

use crate::domain::{GatewayOutcome, Verification, VerificationRequest};
use crate::errors::{DispatchError, DomainResult};
use crate::services::dispatch::{ApiKeyProvider, GatewayDispatcher, GatewayTransport};

/// Verification record together with the dispatch outcome
#[derive(Debug, Clone, Serialize)]
pub struct VerificationResult {
    #[serde(rename = "verificacion")]
    pub verification: Verification,
    #[serde(rename = "resultado")]
    pub outcome: GatewayOutcome,
}

/// Verification service for sending codes through the gateway
pub struct VerificationService<T: GatewayTransport, K: ApiKeyProvider> {
    /// Gateway dispatcher
    dispatcher: Arc<GatewayDispatcher<T>>,
    /// Configuration store holding the gateway key
    api_keys: Arc<K>,
}

impl<T: GatewayTransport, K: ApiKeyProvider> VerificationService<T, K> {
    pub fn new(dispatcher: Arc<GatewayDispatcher<T>>, api_keys: Arc<K>) -> Self {
        Self {
            dispatcher,
            api_keys,
        }
    }

    /// Send a caller-built request
    ///
    /// The API key is fetched first; when it is missing the gateway is never
    /// contacted.
    pub async fn send_code(&self, request: &VerificationRequest) -> DomainResult<GatewayOutcome> {
        let api_key = self.fetch_api_key().await?;
        self.dispatcher.dispatch(request, &api_key).await
    }

    /// Start a verification for an operator submission
    ///
    /// Validates the DNI and phone number, generates a code, dispatches the
    /// SMS and returns the updated record.
    ///
    /// # Arguments
    ///
    /// * `dni` - National ID of the customer (7-8 digits)
    /// * `phone_number` - National-format mobile number (10 digits)
    /// * `branch_label` - Branch the operator works at
    pub async fn start_verification(
        &self,
        dni: &str,
        phone_number: &str,
        branch_label: &str,
    ) -> DomainResult<VerificationResult> {
        if !is_valid_dni(dni) {
            return Err(DispatchError::validation("dni", "El DNI debe tener 7 u 8 dígitos"));
        }
        if !is_valid_national_mobile(phone_number) {
            return Err(DispatchError::validation(
                "celular",
                "El celular debe tener 10 dígitos, sin 0 ni 15",
            ));
        }
        if !not_blank(branch_label) {
            return Err(DispatchError::validation("sucursal", "La sucursal es obligatoria"));
        }

        let api_key = self.fetch_api_key().await?;

        let mut verification = Verification::new(dni, phone_number, branch_label);
        tracing::info!(
            verification_id = %verification.id,
            phone = %mask_phone_number(phone_number),
            branch = branch_label,
            event = "verification_started",
            "Starting branch verification"
        );

        let outcome = self
            .dispatcher
            .dispatch(&verification.to_request(), &api_key)
            .await?;
        verification.apply_outcome(&outcome);

        tracing::info!(
            verification_id = %verification.id,
            status = ?verification.status,
            event = "verification_dispatched",
            "Verification SMS dispatched"
        );

        Ok(VerificationResult {
            verification,
            outcome,
        })
    }

    async fn fetch_api_key(&self) -> DomainResult<String> {
        self.api_keys.api_key().await.map_err(|e| {
            tracing::error!(error = %e, event = "api_key_missing", "SMS gateway key unavailable");
            e
        })
    }
}
