//! SMS Gateway Module
//!
//! Transports implementing `cs_core::GatewayTransport`:
//!
//! - **SMS Masivos**: production HTTP transport (single GET, bounded timeout)
//! - **Simulated**: answers every send as a test send without touching the
//!   network, for development
//!
//! Phone numbers are masked in every log line.

pub mod simulated;
pub mod sms_masivos;

pub use simulated::SimulatedTransport;
pub use sms_masivos::SmsMasivosTransport;

use cs_core::GatewayTransport;

use crate::config::SmsConfig;
use crate::InfrastructureError;

#[cfg(test)]
mod tests;

/// Create a gateway transport based on configuration
///
/// Unknown providers are a configuration error rather than a silent
/// fallback, so a typo cannot turn production sends into simulated ones.
pub fn create_transport(config: &SmsConfig) -> Result<Box<dyn GatewayTransport>, InfrastructureError> {
    match config.provider.as_str() {
        "smsmasivos" => {
            let transport = SmsMasivosTransport::new(&config.gateway)?;
            Ok(Box::new(transport))
        }
        "mock" => {
            tracing::warn!("Using simulated SMS transport, no messages will be delivered");
            Ok(Box::new(SimulatedTransport::new()))
        }
        other => Err(InfrastructureError::Config(format!(
            "Unknown SMS provider '{}'",
            other
        ))),
    }
}
