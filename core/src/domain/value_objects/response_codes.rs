//! SMS Masivos numeric response codes
//!
//! With `RESPUESTANUMERICA=1` the gateway answers every send with a single
//! integer: `0` delivered to the carriers, `1` simulated send, any negative
//! value a rejection listed below.

use once_cell::sync::Lazy;
use regex::Regex;

/// Message for negative codes missing from [`RESPONSE_CODES`]
pub const GENERIC_ERROR_MESSAGE: &str = "Error en el envío del SMS";

/// Message for a body that carries no integer at all
pub const UNKNOWN_ERROR_MESSAGE: &str = "Error desconocido";

/// Known rejection codes, one entry per code
pub static RESPONSE_CODES: &[(i64, &str)] = &[
    (-1, "El número corresponde a un teléfono fijo"),
    (-2, "El número no puede recibir más mensajes (muchos fallos previos)"),
    (-3, "El número envió la palabra BAJA"),
    (-4, "Mensaje duplicado (enviado hace poco tiempo)"),
    (-5, "El mensaje podría ser categorizado como SPAM"),
    (-6, "El texto del mensaje es muy largo"),
    (-7, "El número debe tener 10 dígitos"),
    (-8, "El número contiene caracteres inválidos"),
    (-9, "El número tiene una característica inválida"),
    (-10, "Destinatario rechazado por la telefónica"),
    (-11, "El texto contiene caracteres inválidos"),
    (-12, "El número nacional debe comenzar con 1, 2 o 3"),
    (-14, "El número se encuentra en el registro No Llame"),
    (-99, GENERIC_ERROR_MESSAGE),
];

// optional sign followed by digits, anything after the digits is ignored
static LEADING_INTEGER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?\d+").expect("valid leading integer regex"));

/// Human-readable description of a rejection code
pub fn describe_error(code: i64) -> &'static str {
    RESPONSE_CODES
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, message)| *message)
        .unwrap_or(GENERIC_ERROR_MESSAGE)
}

/// Parse the gateway body into a response code
///
/// Surrounding whitespace is trimmed and the leading integer is taken, so
/// `" -7\r\n"` and `"0 OK"` both parse. Integers outside `i64` saturate to
/// the nearest bound, keeping their sign. Returns `None` when the body does
/// not start with an integer.
pub fn parse_response_code(body: &str) -> Option<i64> {
    let digits = LEADING_INTEGER.find(body.trim())?.as_str();
    match digits.parse::<i64>() {
        Ok(code) => Some(code),
        Err(_) if digits.starts_with('-') => Some(i64::MIN),
        Err(_) => Some(i64::MAX),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_table_has_one_entry_per_code() {
        let codes: HashSet<i64> = RESPONSE_CODES.iter().map(|(code, _)| *code).collect();
        assert_eq!(codes.len(), RESPONSE_CODES.len());
        assert!(RESPONSE_CODES.iter().all(|(code, _)| *code < 0));
    }

    #[test]
    fn test_describe_error() {
        assert_eq!(describe_error(-1), "El número corresponde a un teléfono fijo");
        assert_eq!(describe_error(-14), "El número se encuentra en el registro No Llame");
        assert_eq!(describe_error(-13), GENERIC_ERROR_MESSAGE);
        assert_eq!(describe_error(-42), GENERIC_ERROR_MESSAGE);
        assert_eq!(describe_error(-99), GENERIC_ERROR_MESSAGE);
    }

    #[test]
    fn test_parse_response_code() {
        assert_eq!(parse_response_code("0"), Some(0));
        assert_eq!(parse_response_code("  -7\r\n"), Some(-7));
        assert_eq!(parse_response_code("+1"), Some(1));
        assert_eq!(parse_response_code("12 OK"), Some(12));
        assert_eq!(parse_response_code(""), None);
        assert_eq!(parse_response_code("OK"), None);
        assert_eq!(parse_response_code("<html>error</html>"), None);
        assert_eq!(parse_response_code("99999999999999999999999"), Some(i64::MAX));
        assert_eq!(parse_response_code("-99999999999999999999999"), Some(i64::MIN));
    }
}
