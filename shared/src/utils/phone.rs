//! Phone number utilities
//!
//! Argentine mobile numbers are handed to the gateway in national format:
//! exactly 10 digits (area code + subscriber), without the trunk `0` and
//! without the mobile `15` prefix.

use once_cell::sync::Lazy;
use regex::Regex;

// 10 digits; national numbers start with 1, 2 or 3
static NATIONAL_MOBILE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[1-3]\d{9}$").expect("valid national mobile regex")
});

/// Check if a phone number is a valid national-format mobile number
///
/// The check is strict: formatting characters are not stripped first, the
/// value must already be the 10 bare digits sent to the gateway.
pub fn is_valid_national_mobile(phone: &str) -> bool {
    NATIONAL_MOBILE_REGEX.is_match(phone)
}

/// Mask a phone number for logs (e.g., 351****4567)
pub fn mask_phone_number(phone: &str) -> String {
    let chars: Vec<char> = phone.chars().collect();
    if chars.len() >= 7 {
        let head: String = chars[..3].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}****{}", head, tail)
    } else {
        "****".to_string()
    }
}
