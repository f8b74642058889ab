//! Shared fixtures for the HTTP tests

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use actix_web::web;
use async_trait::async_trait;

use cs_api::routes::AppState;
use cs_core::errors::{DispatchError, TransportError};
use cs_core::{ApiKeyProvider, GatewayDispatcher, GatewayQuery, GatewayTransport, VerificationService};

/// Gateway stand-in answering every send the same way
pub struct FakeGateway {
    reply: Result<String, TransportError>,
    queries: Mutex<Vec<GatewayQuery>>,
}

impl FakeGateway {
    pub fn answering(body: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(body.to_string()),
            queries: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(error: TransportError) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(error),
            queries: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> usize {
        self.queries.lock().unwrap().len()
    }

    pub fn last_query(&self) -> Option<GatewayQuery> {
        self.queries.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl GatewayTransport for FakeGateway {
    async fn send(&self, query: &GatewayQuery) -> Result<String, TransportError> {
        self.queries.lock().unwrap().push(query.clone());
        self.reply.clone()
    }

    fn provider_name(&self) -> &str {
        "Fake"
    }
}

/// Key store with a fixed (or missing) key
pub struct FixedKey(pub Option<&'static str>);

#[async_trait]
impl ApiKeyProvider for FixedKey {
    async fn api_key(&self) -> Result<String, DispatchError> {
        self.0
            .map(str::to_string)
            .ok_or_else(DispatchError::missing_api_key)
    }
}

pub fn app_state(
    gateway: Arc<FakeGateway>,
    key: Option<&'static str>,
) -> web::Data<AppState<FakeGateway, FixedKey>> {
    let dispatcher = Arc::new(GatewayDispatcher::new(gateway, "CheckSMS"));
    let service = VerificationService::new(dispatcher, Arc::new(FixedKey(key)));
    web::Data::new(AppState::new(Arc::new(service)))
}
