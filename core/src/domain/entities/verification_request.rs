//! Outbound verification request handed to the gateway dispatcher.

use serde::{Deserialize, Serialize};

/// A single verification SMS to send
///
/// Built fresh for every dispatch. The dispatcher does not validate the
/// fields: a malformed phone number is sent as-is and the gateway answers
/// with a negative response code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationRequest {
    /// National-format mobile number (10 digits, no `0` or `15` prefix)
    pub phone_number: String,

    /// Numeric verification code generated by the caller
    pub code: String,

    /// Branch label, inserted verbatim into the message text
    pub branch_label: String,
}

impl VerificationRequest {
    pub fn new(
        phone_number: impl Into<String>,
        code: impl Into<String>,
        branch_label: impl Into<String>,
    ) -> Self {
        Self {
            phone_number: phone_number.into(),
            code: code.into(),
            branch_label: branch_label.into(),
        }
    }

    /// Compose the outbound message text for the given brand
    ///
    /// The gateway only accepts plain text, so the template carries no
    /// accented characters.
    pub fn compose_message(&self, brand_name: &str) -> String {
        format!(
            "{} - Tu codigo de verificacion es: {}. Sucursal: {}",
            brand_name, self.code, self.branch_label
        )
    }
}
