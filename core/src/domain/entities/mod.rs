//! Domain entities representing core business objects.

pub mod verification;
pub mod verification_request;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use verification::{generate_code, Verification, VerificationStatus, CODE_LENGTH};
pub use verification_request::VerificationRequest;
