//! Live password strength indicator
//!
//! Tiers are keyed on length alone. They are presentational and deliberately
//! looser than [`crate::validation::validate_password_strength`].

use crate::display::StrengthSink;

/// Lengths below this are Weak
pub const MEDIUM_MIN_LEN: usize = 6;
/// Lengths at or above this are Strong
pub const STRONG_MIN_LEN: usize = 10;

/// Coarse strength label derived from password length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrengthTier {
    #[default]
    Weak,
    Medium,
    Strong,
}

impl StrengthTier {
    /// Tier for a password of `len` characters
    pub fn from_len(len: usize) -> Self {
        if len < MEDIUM_MIN_LEN {
            Self::Weak
        } else if len < STRONG_MIN_LEN {
            Self::Medium
        } else {
            Self::Strong
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Weak => "Weak",
            Self::Medium => "Medium",
            Self::Strong => "Strong",
        }
    }

    /// Style class name, e.g. `password-strength weak`
    pub fn class_name(&self) -> &'static str {
        match self {
            Self::Weak => "password-strength weak",
            Self::Medium => "password-strength medium",
            Self::Strong => "password-strength strong",
        }
    }
}

/// Recompute the tier for `password` and write it to `sink`
pub fn check_password_strength(password: &str, sink: &mut impl StrengthSink) -> StrengthTier {
    let tier = StrengthTier::from_len(password.chars().count());
    tracing::trace!(class = tier.class_name(), "Password strength updated");
    sink.set(tier);
    tier
}
