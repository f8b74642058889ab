//! Unit tests for the verification record

use crate::domain::entities::{generate_code, Verification, VerificationStatus, CODE_LENGTH};
use crate::domain::value_objects::GatewayOutcome;

#[test]
fn test_new_verification_is_pending() {
    let verification = Verification::new("12345678", "3511234567", "Sucursal A - Centro");

    assert_eq!(verification.status, VerificationStatus::Pending);
    assert_eq!(verification.code.len(), CODE_LENGTH);
    assert!(verification.verified_at.is_none());

    let request = verification.to_request();
    assert_eq!(request.phone_number, "3511234567");
    assert_eq!(request.code, verification.code);
    assert_eq!(request.branch_label, "Sucursal A - Centro");
}

#[test]
fn test_generate_code_format() {
    for _ in 0..100 {
        let code = generate_code();
        assert_eq!(code.len(), CODE_LENGTH);
        assert!(code.chars().all(|c| c.is_ascii_digit()));
    }
}

#[test]
fn test_apply_outcome_success_and_test_mark_sent() {
    let mut verification = Verification::with_code("12345678", "3511234567", "A", "482113");
    verification.apply_outcome(&GatewayOutcome::from_response_code(1));
    assert_eq!(verification.status, VerificationStatus::Sent);
}

#[test]
fn test_apply_outcome_rejection_marks_failed() {
    let mut verification = Verification::with_code("12345678", "3511234567", "A", "482113");
    verification.apply_outcome(&GatewayOutcome::from_response_code(-7));
    assert_eq!(verification.status, VerificationStatus::Failed);

    // A second outcome does not resurrect the record
    verification.apply_outcome(&GatewayOutcome::from_response_code(0));
    assert_eq!(verification.status, VerificationStatus::Failed);
}

#[test]
fn test_confirm_requires_sent_and_matching_code() {
    let mut verification = Verification::with_code("12345678", "3511234567", "A", "482113");
    assert!(!verification.confirm("482113"), "pending records cannot be confirmed");

    verification.apply_outcome(&GatewayOutcome::from_response_code(0));
    assert!(!verification.confirm("000000"));
    assert_eq!(verification.status, VerificationStatus::Sent);

    assert!(verification.confirm(" 482113 "));
    assert_eq!(verification.status, VerificationStatus::Verified);
    assert!(verification.verified_at.is_some());
}

#[test]
fn test_verification_wire_names() {
    let verification = Verification::with_code("12345678", "3511234567", "A", "482113");
    let json = serde_json::to_value(&verification).unwrap();

    assert_eq!(json["estado"], "pendiente");
    assert_eq!(json["celular"], "3511234567");
    assert_eq!(json["sucursal"], "A");
    assert_eq!(json["codigo"], "482113");
    assert!(json.get("fecha_verificacion").is_none());
}
