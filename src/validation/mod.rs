//! Input validators for signup fields
//!
//! Pure predicates over a single string. Patterns are compiled once and shared.

use once_cell::sync::Lazy;
use regex::Regex;

/// Letters and digits only, at least one character
static ALLOWLIST_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9]+$").expect("allowlist pattern is valid"));

/// Permitted password alphabet with the minimum length
static PASSWORD_CHARSET_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"^[A-Za-z0-9@$!%*?&]{{{MIN_PASSWORD_LEN},}}$"))
        .expect("password pattern is valid")
});

static HAS_LETTER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z]").expect("letter pattern is valid"));

static HAS_DIGIT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]").expect("digit pattern is valid"));

/// Minimum password length accepted by [`validate_password_strength`]
pub const MIN_PASSWORD_LEN: usize = 8;

/// Check that the input is non-empty and contains only ASCII letters and digits
pub fn allowlist_input(input: &str) -> bool {
    ALLOWLIST_RE.is_match(input)
}

/// Check that a password is at least 8 characters, mixes letters and digits,
/// and uses nothing outside `[A-Za-z0-9@$!%*?&]`.
///
/// This rule is independent of the length tiers shown by the strength
/// indicator; a "Medium" password can still fail here.
pub fn validate_password_strength(password: &str) -> bool {
    PASSWORD_CHARSET_RE.is_match(password)
        && HAS_LETTER_RE.is_match(password)
        && HAS_DIGIT_RE.is_match(password)
}
