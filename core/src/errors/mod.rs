//! Domain-specific error types and error handling.
//!
//! Gateway rejections (negative response codes) are not errors: they are
//! reported as a [`GatewayOutcome`](crate::domain::GatewayOutcome). The
//! variants below cover the failures that abort a dispatch entirely.

use thiserror::Error;

/// Message surfaced when the gateway API key cannot be found
pub const MISSING_API_KEY_MESSAGE: &str = "No se encontró la configuración de SMS Masivos";

/// Failure reported by a gateway transport
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The gateway did not answer within the configured bound
    #[error("Gateway request timed out after {seconds}s")]
    Timeout { seconds: u64 },

    /// Network, DNS or protocol failure reaching the gateway
    #[error("{0}")]
    Failed(String),
}

/// Errors that abort a dispatch
#[derive(Error, Debug)]
pub enum DispatchError {
    /// Gateway credentials are missing or unreadable
    #[error("{message}")]
    Configuration { message: String },

    /// The gateway could not be reached
    #[error("{0}")]
    Transport(#[from] TransportError),

    /// Input rejected before any outbound call
    #[error("{field}: {message}")]
    Validation { field: String, message: String },
}

impl DispatchError {
    /// Missing or blank API key
    pub fn missing_api_key() -> Self {
        DispatchError::Configuration {
            message: MISSING_API_KEY_MESSAGE.to_string(),
        }
    }

    /// Field-level validation failure
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        DispatchError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Whether the error is caused by the caller's input rather than by the
    /// system
    pub fn is_client_error(&self) -> bool {
        matches!(self, DispatchError::Validation { .. })
    }
}

pub type DomainResult<T> = Result<T, DispatchError>;
