//! # CheckSMS Core
//!
//! Core business logic and domain layer for the CheckSMS backend.
//! This crate contains the verification entities, the SMS gateway response
//! interpreter, the dispatcher service and the collaborator traits that the
//! infrastructure layer implements.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::{
    ApiKeyProvider, GatewayDispatcher, GatewayQuery, GatewayTransport, VerificationResult,
    VerificationService,
};
