//! Gateway dispatcher module
//!
//! Turns a [`VerificationRequest`](crate::domain::VerificationRequest) into a
//! single SMS Masivos send and the gateway's numeric answer into a
//! [`GatewayOutcome`](crate::domain::GatewayOutcome):
//! - message composition from the fixed template
//! - query construction (`api`, `APIKEY`, `TOS`, `TEXTO`, `RESPUESTANUMERICA`)
//! - response-code interpretation
//!
//! Sends are at-most-once: no retry, no backoff, no idempotency key.

mod service;
mod traits;


pub use service::GatewayDispatcher;
pub use traits::{ApiKeyProvider, GatewayQuery, GatewayTransport};
