//! SMS dispatch route handlers
//!
//! - `enviar_sms`: forward a caller-built verification SMS
//! - `verificar`: generate a code for an operator submission and send it

pub mod enviar_sms;
pub mod verificar;

use std::sync::Arc;

use actix_web::HttpRequest;
use cs_core::{ApiKeyProvider, GatewayTransport, VerificationService};
use uuid::Uuid;

/// Application state that holds shared services
pub struct AppState<T, K>
where
    T: GatewayTransport,
    K: ApiKeyProvider,
{
    pub verification_service: Arc<VerificationService<T, K>>,
}

impl<T: GatewayTransport, K: ApiKeyProvider> AppState<T, K> {
    pub fn new(verification_service: Arc<VerificationService<T, K>>) -> Self {
        Self {
            verification_service,
        }
    }
}

/// Request ID from `X-Request-Id`, or a fresh one
pub(crate) fn request_id(req: &HttpRequest) -> String {
    req.headers()
        .get("X-Request-Id")
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
        .unwrap_or_else(|| Uuid::new_v4().to_string())
}
