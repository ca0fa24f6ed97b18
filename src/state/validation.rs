//! Field validators gating wizard transitions

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Minimum digit count for a mobile number, after stripping formatting
pub const MIN_PHONE_DIGITS: usize = 8;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// Client-side validation failures, shown inline under the offending field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please enter a valid mobile number (at least 8 digits)")]
    InvalidPhone,
    #[error("Please enter a price greater than zero")]
    InvalidPrice,
    #[error("Please enter a weekly volume greater than zero")]
    InvalidVolume,
}

/// `local@domain.tld` shape, no whitespace
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email.trim())
}

/// Counts digits only, so spaces and punctuation are tolerated
pub fn is_valid_phone(phone: &str) -> bool {
    phone.chars().filter(|c| c.is_ascii_digit()).count() >= MIN_PHONE_DIGITS
}

/// Parse a numeric field, keeping only finite values
pub fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Empty, zero, negative and unparsable inputs are all invalid
pub fn parse_positive(raw: &str) -> Option<f64> {
    parse_number(raw).filter(|v| *v > 0.0)
}
