//! Verification service module
//!
//! Orchestrates a branch verification: fetches the gateway credential,
//! generates the code, dispatches the SMS and records the outcome on the
//! verification record.

mod service;


pub use service::{VerificationResult, VerificationService};
