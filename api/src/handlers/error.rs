//! Mapping of dispatch results and failures to HTTP responses

use actix_web::{error::JsonPayloadError, http::StatusCode, HttpRequest, HttpResponse};
use cs_core::errors::DispatchError;
use cs_core::GatewayOutcome;
use cs_shared::errors::ErrorResponse;

/// 200 for accepted sends, 400 for gateway rejections
pub fn outcome_status(outcome: &GatewayOutcome) -> StatusCode {
    if outcome.success {
        StatusCode::OK
    } else {
        StatusCode::BAD_REQUEST
    }
}

/// Status for a dispatch failure
///
/// Input problems are the caller's (400); missing configuration and
/// transport failures are ours (500).
pub fn dispatch_error_status(error: &DispatchError) -> StatusCode {
    if error.is_client_error() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

/// Log a dispatch failure and render the `{ "error": ... }` envelope
pub fn dispatch_error_response(error: &DispatchError) -> HttpResponse {
    let status = dispatch_error_status(error);
    if status.is_server_error() {
        log::error!("Error: {}", error);
    } else {
        log::warn!("Rejected request: {}", error);
    }
    HttpResponse::build(status).json(ErrorResponse::new(error.to_string()))
}

/// Error handler for malformed JSON bodies, so they never reach a handler
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    log::warn!("Malformed payload on {}: {}", req.path(), err);
    let response = HttpResponse::BadRequest().json(ErrorResponse::new(format!(
        "Solicitud inválida: {}",
        err
    )));
    actix_web::error::InternalError::from_response(err, response).into()
}

/// Default 404 handler
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(
        ErrorResponse::new("not_found").with_message("The requested resource was not found"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_status() {
        assert_eq!(outcome_status(&GatewayOutcome::from_response_code(0)), StatusCode::OK);
        assert_eq!(outcome_status(&GatewayOutcome::from_response_code(5)), StatusCode::OK);
        assert_eq!(
            outcome_status(&GatewayOutcome::from_response_code(-1)),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(outcome_status(&GatewayOutcome::from_body("??")), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_dispatch_error_status() {
        assert_eq!(
            dispatch_error_status(&DispatchError::missing_api_key()),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            dispatch_error_status(&DispatchError::validation("dni", "x")),
            StatusCode::BAD_REQUEST
        );
    }
}
