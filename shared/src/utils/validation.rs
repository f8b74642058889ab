//! Common validation utilities

use once_cell::sync::Lazy;
use regex::Regex;

// Argentine DNI: 7 or 8 digits, no separators
static DNI_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{7,8}$").expect("valid DNI regex"));

/// Check if a string is not blank
pub fn not_blank(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Check if a string is a well-formed DNI number
pub fn is_valid_dni(value: &str) -> bool {
    DNI_REGEX.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_blank() {
        assert!(not_blank("776 - Alberdi"));
        assert!(!not_blank(""));
        assert!(!not_blank("   "));
    }

    #[test]
    fn test_is_valid_dni() {
        assert!(is_valid_dni("12345678"));
        assert!(is_valid_dni("1234567"));
        assert!(!is_valid_dni("123456"));
        assert!(!is_valid_dni("12.345.678"));
    }
}
