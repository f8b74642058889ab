//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the CheckSMS backend.
//! It provides concrete implementations of the collaborator traits declared
//! in `cs_core`:
//! - **SMS**: the SMS Masivos HTTP transport and a simulated transport for
//!   development
//! - **Config**: API-key providers backed by the process environment

use cs_core::errors::DispatchError;

/// Configuration module for infrastructure services
pub mod config;

/// SMS gateway transports
pub mod sms;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// HTTP client error for external services
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// SMS service error
    #[error("SMS service error: {0}")]
    Sms(String),
}

impl From<InfrastructureError> for DispatchError {
    fn from(error: InfrastructureError) -> Self {
        match error {
            InfrastructureError::Config(message) => DispatchError::Configuration { message },
            other => DispatchError::Transport(cs_core::errors::TransportError::Failed(
                other.to_string(),
            )),
        }
    }
}
