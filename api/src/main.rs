use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use dotenvy::dotenv;
use log::{info, warn};

use cs_api::app::create_app;
use cs_api::routes::AppState;
use cs_core::{GatewayDispatcher, GatewayTransport, VerificationService};
use cs_infra::config::{EnvApiKeyProvider, SmsConfig};
use cs_infra::sms::create_transport;
use cs_shared::config::AppConfig;

type Transport = Box<dyn GatewayTransport>;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let config = AppConfig::from_env();
    env_logger::init_from_env(
        env_logger::Env::new().default_filter_or(config.logging.level.as_str()),
    );

    info!("Starting CheckSMS API Server ({})", config.environment);

    let sms_config = SmsConfig::from_env(config.gateway.clone());
    if config.environment.is_production() && sms_config.provider != "smsmasivos" {
        warn!("SMS provider '{}' configured in production", sms_config.provider);
    }
    let transport: Transport =
        create_transport(&sms_config).context("failed to create SMS transport")?;
    info!(
        "Gateway: {} ({}s timeout)",
        sms_config.gateway.base_url, sms_config.gateway.timeout_secs
    );

    let dispatcher = Arc::new(GatewayDispatcher::new(
        Arc::new(transport),
        sms_config.gateway.brand_name.clone(),
    ));
    let verification_service = Arc::new(VerificationService::new(
        dispatcher,
        Arc::new(EnvApiKeyProvider::new()),
    ));
    let app_state = web::Data::new(AppState::new(verification_service));

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let mut server = HttpServer::new(move || create_app(app_state.clone()));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await?;

    Ok(())
}
