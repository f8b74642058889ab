//! Business services for the CheckSMS core.

pub mod dispatch;
pub mod verification;

pub use dispatch::{ApiKeyProvider, GatewayDispatcher, GatewayQuery, GatewayTransport};
pub use verification::{VerificationResult, VerificationService};
