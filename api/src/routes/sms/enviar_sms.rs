use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use cs_core::{ApiKeyProvider, GatewayTransport};
use cs_shared::errors::ErrorResponse;
use cs_shared::phone::mask_phone_number;

use super::{request_id, AppState};
use crate::dto::{describe_validation_errors, EnviarSmsRequest};
use crate::handlers::{dispatch_error_response, outcome_status};

/// Handler for POST /api/v1/enviar-sms
///
/// Forwards one verification SMS to the gateway.
///
/// # Request Body
///
/// ```json
/// {
///     "celular": "3511234567",
///     "codigo": "482193",
///     "sucursal": "776 - Limite Deportes Alberdi"
/// }
/// ```
///
/// # Response
///
/// ## Sent (200 OK)
/// ```json
/// {
///     "success": true,
///     "codigo_respuesta": 0,
///     "mensaje": "Mensaje entregado a las telefónicas",
///     "estado": "enviado"
/// }
/// ```
///
/// ## Rejected by the gateway (400 Bad Request)
/// Same shape with `success: false` and `estado: "error"`.
///
/// ## Errors
/// - 400 `{ "error": ... }` when a field is missing or blank
/// - 500 `{ "error": ... }` when the gateway key is missing or the gateway is unreachable
pub async fn enviar_sms<T, K>(
    req: HttpRequest,
    state: web::Data<AppState<T, K>>,
    payload: web::Json<EnviarSmsRequest>,
) -> HttpResponse
where
    T: GatewayTransport + 'static,
    K: ApiKeyProvider + 'static,
{
    let request_id = request_id(&req);
    let payload = payload.into_inner();

    log::info!(
        "[{}] Processing enviar-sms request for phone: {}",
        request_id,
        mask_phone_number(&payload.celular)
    );

    if let Err(errors) = payload.validate() {
        let message = describe_validation_errors(&errors);
        log::warn!("[{}] Validation failed: {}", request_id, message);
        return HttpResponse::BadRequest().json(ErrorResponse::new(message));
    }

    let request = payload.to_verification_request();
    match state.verification_service.send_code(&request).await {
        Ok(outcome) => {
            log::info!(
                "[{}] Gateway answered {:?} ({})",
                request_id,
                outcome.response_code,
                outcome.message
            );
            HttpResponse::build(outcome_status(&outcome)).json(outcome)
        }
        Err(error) => dispatch_error_response(&error),
    }
}
