//! Unit tests for the outbound request and message template

use crate::domain::entities::VerificationRequest;

#[test]
fn test_compose_message_matches_template() {
    let request = VerificationRequest::new("3511234567", "4821", "776 - Limite Deportes Alberdi");
    assert_eq!(
        request.compose_message("CheckSMS"),
        "CheckSMS - Tu codigo de verificacion es: 4821. Sucursal: 776 - Limite Deportes Alberdi"
    );
}

#[test]
fn test_compose_message_uses_brand_and_fields_verbatim() {
    let request = VerificationRequest::new("", "000123", "  Centro  ");
    assert_eq!(
        request.compose_message("Limite"),
        "Limite - Tu codigo de verificacion es: 000123. Sucursal:   Centro  "
    );
}
