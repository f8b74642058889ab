//! Application factory
//!
//! Builds the actix-web `App` around an already constructed `AppState`, so
//! the binary and the integration tests share the same routing.

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::Logger,
    web, App, Error, HttpResponse,
};

use cs_core::{ApiKeyProvider, GatewayTransport};

use crate::handlers::{json_error_handler, not_found};
use crate::middleware::Cors;
use crate::routes::sms::{enviar_sms::enviar_sms, verificar::verificar};
use crate::routes::AppState;

/// Create and configure the application with all dependencies
pub fn create_app<T, K>(
    app_state: web::Data<AppState<T, K>>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
>
where
    T: GatewayTransport + 'static,
    K: ApiKeyProvider + 'static,
{
    App::new()
        .app_data(app_state)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        // CORS answers preflights before anything else runs; Logger is outermost
        .wrap(Cors::new())
        .wrap(Logger::default())
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/api/v1")
                .route("/enviar-sms", web::post().to(enviar_sms::<T, K>))
                .route("/verificar", web::post().to(verificar::<T, K>)),
        )
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "checksms-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
