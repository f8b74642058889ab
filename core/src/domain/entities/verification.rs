//! Verification record for a single identity check at a branch.
//!
//! The record is what the dashboard lists: who was checked (DNI), where
//! (branch), which code was sent and how far the check got. This crate
//! builds and updates the record; storing it is the caller's job.

use chrono::{DateTime, Utc};
use rand::{rngs::OsRng, Rng};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::verification_request::VerificationRequest;
use crate::domain::value_objects::GatewayOutcome;

/// Length of generated verification codes
pub const CODE_LENGTH: usize = 6;

/// Lifecycle of a verification record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VerificationStatus {
    /// Created, SMS not yet dispatched
    #[serde(rename = "pendiente")]
    Pending,
    /// Gateway accepted the SMS (including simulated sends)
    #[serde(rename = "enviado")]
    Sent,
    /// The customer confirmed the code
    #[serde(rename = "verificado")]
    Verified,
    /// Gateway rejected the SMS or the response could not be read
    #[serde(rename = "error")]
    Failed,
}

/// Verification record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verification {
    pub id: Uuid,
    pub dni: String,
    #[serde(rename = "celular")]
    pub phone_number: String,
    #[serde(rename = "sucursal")]
    pub branch_label: String,
    #[serde(rename = "codigo")]
    pub code: String,
    #[serde(rename = "estado")]
    pub status: VerificationStatus,
    #[serde(rename = "fecha_creacion")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "fecha_verificacion", skip_serializing_if = "Option::is_none")]
    pub verified_at: Option<DateTime<Utc>>,
}

impl Verification {
    /// Create a pending verification with a freshly generated code
    pub fn new(
        dni: impl Into<String>,
        phone_number: impl Into<String>,
        branch_label: impl Into<String>,
    ) -> Self {
        Self::with_code(dni, phone_number, branch_label, generate_code())
    }

    /// Create a pending verification with a caller-supplied code
    pub fn with_code(
        dni: impl Into<String>,
        phone_number: impl Into<String>,
        branch_label: impl Into<String>,
        code: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            dni: dni.into(),
            phone_number: phone_number.into(),
            branch_label: branch_label.into(),
            code: code.into(),
            status: VerificationStatus::Pending,
            created_at: Utc::now(),
            verified_at: None,
        }
    }

    /// The gateway request for this record
    pub fn to_request(&self) -> VerificationRequest {
        VerificationRequest::new(&self.phone_number, &self.code, &self.branch_label)
    }

    /// Record the dispatch outcome
    ///
    /// Only a pending record moves; a record that was already dispatched
    /// keeps its status.
    pub fn apply_outcome(&mut self, outcome: &GatewayOutcome) {
        if self.status != VerificationStatus::Pending {
            return;
        }
        self.status = if outcome.success {
            VerificationStatus::Sent
        } else {
            VerificationStatus::Failed
        };
    }

    /// Confirm the code the customer read back
    ///
    /// Returns `true` and moves the record to `Verified` only when the SMS
    /// was sent and the code matches.
    pub fn confirm(&mut self, code: &str) -> bool {
        if self.status != VerificationStatus::Sent || self.code != code.trim() {
            return false;
        }
        self.status = VerificationStatus::Verified;
        self.verified_at = Some(Utc::now());
        true
    }
}

/// Generate a random numeric verification code of `CODE_LENGTH` digits
pub fn generate_code() -> String {
    let code: u32 = OsRng.gen_range(0..1_000_000);
    format!("{:0width$}", code, width = CODE_LENGTH)
}
