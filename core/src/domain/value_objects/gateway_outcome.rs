//! Normalized result of a single gateway dispatch.

use serde::{Deserialize, Serialize};

use super::response_codes::{
    describe_error, parse_response_code, GENERIC_ERROR_MESSAGE, UNKNOWN_ERROR_MESSAGE,
};

const DELIVERED_MESSAGE: &str = "Mensaje entregado a las telefónicas";
const SIMULATED_MESSAGE: &str = "Simulacro de envío OK";
const ACCEPTED_MESSAGE: &str = "SMS enviado correctamente";

/// Outcome category reported to the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DispatchStatus {
    #[serde(rename = "enviado")]
    Sent,
    #[serde(rename = "test")]
    Test,
    #[serde(rename = "error")]
    Error,
}

/// Result of one dispatch, in the shape returned to the caller
///
/// `response_code` is `None` when the gateway answer could not be read as a
/// number (or never arrived); it serializes as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayOutcome {
    pub success: bool,
    #[serde(rename = "codigo_respuesta")]
    pub response_code: Option<i64>,
    #[serde(rename = "mensaje")]
    pub message: String,
    #[serde(rename = "estado")]
    pub status: DispatchStatus,
}

impl GatewayOutcome {
    /// Interpret a numeric gateway response code
    pub fn from_response_code(code: i64) -> Self {
        let (status, message) = match code {
            0 => (DispatchStatus::Sent, DELIVERED_MESSAGE),
            1 => (DispatchStatus::Test, SIMULATED_MESSAGE),
            c if c >= 2 => (DispatchStatus::Sent, ACCEPTED_MESSAGE),
            c => (DispatchStatus::Error, describe_error(c)),
        };

        Self {
            success: code >= 0,
            response_code: Some(code),
            message: message.to_string(),
            status,
        }
    }

    /// Interpret a raw gateway response body
    pub fn from_body(body: &str) -> Self {
        match parse_response_code(body) {
            Some(code) => Self::from_response_code(code),
            None => Self::failure(UNKNOWN_ERROR_MESSAGE),
        }
    }

    /// Outcome for a send whose result is unknown because the gateway never
    /// answered in time
    pub fn timed_out() -> Self {
        Self::failure(GENERIC_ERROR_MESSAGE)
    }

    fn failure(message: &str) -> Self {
        Self {
            success: false,
            response_code: None,
            message: message.to_string(),
            status: DispatchStatus::Error,
        }
    }
}
