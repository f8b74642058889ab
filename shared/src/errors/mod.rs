//! Shared error envelope
//!
//! Every failure that is not a gateway business outcome is reported to
//! callers as a flat `{ "error": "<message>" }` object. The optional
//! `message` field is only used for routing-level errors (404) where a
//! machine-readable code and a human-readable text are both useful.

use serde::{Deserialize, Serialize};

/// Standard error response structure used across all API endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error description, as surfaced to the dashboard
    pub error: String,

    /// Additional human-readable detail
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: None,
        }
    }

    /// Attach a human-readable detail message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_envelope_shape() {
        let json = serde_json::to_value(ErrorResponse::new("boom")).unwrap();
        assert_eq!(json, serde_json::json!({ "error": "boom" }));

        let json = serde_json::to_value(
            ErrorResponse::new("not_found").with_message("The requested resource was not found"),
        )
        .unwrap();
        assert_eq!(json["message"], "The requested resource was not found");
    }
}
