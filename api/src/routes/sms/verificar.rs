use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use cs_core::{ApiKeyProvider, GatewayTransport};
use cs_shared::errors::ErrorResponse;
use cs_shared::phone::mask_phone_number;

use super::{request_id, AppState};
use crate::dto::{describe_validation_errors, VerificarRequest};
use crate::handlers::{dispatch_error_response, outcome_status};

/// Handler for POST /api/v1/verificar
///
/// Generates a six-digit code for the customer and sends it. The response
/// carries the verification record (`verificacion`) and the gateway outcome
/// (`resultado`); the status follows the outcome (200 or 400).
pub async fn verificar<T, K>(
    req: HttpRequest,
    state: web::Data<AppState<T, K>>,
    payload: web::Json<VerificarRequest>,
) -> HttpResponse
where
    T: GatewayTransport + 'static,
    K: ApiKeyProvider + 'static,
{
    let request_id = request_id(&req);
    let payload = payload.into_inner();

    if let Err(errors) = payload.validate() {
        let message = describe_validation_errors(&errors);
        log::warn!("[{}] Validation failed: {}", request_id, message);
        return HttpResponse::BadRequest().json(ErrorResponse::new(message));
    }

    log::info!(
        "[{}] Starting verification for phone: {}, branch: {}",
        request_id,
        mask_phone_number(&payload.celular),
        payload.sucursal
    );

    match state
        .verification_service
        .start_verification(
            payload.dni.trim(),
            payload.celular.trim(),
            payload.sucursal.trim(),
        )
        .await
    {
        Ok(result) => {
            log::info!(
                "[{}] Verification {} is {:?}",
                request_id,
                result.verification.id,
                result.verification.status
            );
            HttpResponse::build(outcome_status(&result.outcome)).json(result)
        }
        Err(error) => dispatch_error_response(&error),
    }
}
