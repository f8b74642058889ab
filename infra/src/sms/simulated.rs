//! Simulated transport for development
//!
//! Answers `1` (the gateway's "simulated send OK" code) and keeps a count,
//! so the whole flow can run without credentials being spent.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::info;

use cs_core::errors::TransportError;
use cs_core::{GatewayQuery, GatewayTransport};
use cs_shared::phone::mask_phone_number;

/// Transport that never leaves the process
#[derive(Clone, Default)]
pub struct SimulatedTransport {
    message_count: Arc<AtomicU64>,
}

impl SimulatedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of sends handled so far
    pub fn message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GatewayTransport for SimulatedTransport {
    async fn send(&self, query: &GatewayQuery) -> Result<String, TransportError> {
        self.message_count.fetch_add(1, Ordering::SeqCst);
        info!(
            phone = %mask_phone_number(&query.to),
            message_length = query.text.chars().count(),
            "[SIMULATED SMS] message accepted"
        );
        Ok("1".to_string())
    }

    fn provider_name(&self) -> &str {
        "Simulated"
    }
}
