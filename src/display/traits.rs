//! Trait abstraction for display elements to enable mocking in tests

use crate::strength::StrengthTier;

/// Single status element that shows at most one error message
#[cfg_attr(test, mockall::automock)]
pub trait ErrorSink {
    /// Replace the current message
    fn show(&mut self, message: &str);

    /// Empty the current message
    fn clear(&mut self);
}

/// Element that renders the password strength tier
#[cfg_attr(test, mockall::automock)]
pub trait StrengthSink {
    /// Replace the current tier
    fn set(&mut self, tier: StrengthTier);
}
