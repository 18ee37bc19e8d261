//! Terminal-backed display elements

use crate::display::{ErrorSink, StrengthSink};
use crate::strength::StrengthTier;

/// Status line holding the single current error message
#[derive(Debug, Clone, Default)]
pub struct StatusLine {
    message: String,
}

impl StatusLine {
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_empty(&self) -> bool {
        self.message.is_empty()
    }
}

impl ErrorSink for StatusLine {
    fn show(&mut self, message: &str) {
        self.message = message.to_string();
    }

    fn clear(&mut self) {
        self.message.clear();
    }
}

/// Strength label shown under the password field.
/// `None` until the password field is first edited.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrengthIndicator {
    tier: Option<StrengthTier>,
}

impl StrengthIndicator {
    pub fn tier(&self) -> Option<StrengthTier> {
        self.tier
    }

    pub fn reset(&mut self) {
        self.tier = None;
    }
}

impl StrengthSink for StrengthIndicator {
    fn set(&mut self, tier: StrengthTier) {
        self.tier = Some(tier);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_line_last_write_wins() {
        let mut status = StatusLine::default();
        assert!(status.is_empty());
        status.show("All fields are required.");
        status.show("Passwords do not match.");
        assert_eq!(status.message(), "Passwords do not match.");
    }

    #[test]
    fn test_status_line_clear_is_idempotent() {
        let mut status = StatusLine::default();
        status.show("Passwords do not match.");
        status.clear();
        status.clear();
        assert!(status.is_empty());
    }

    #[test]
    fn test_strength_indicator_tracks_latest_tier() {
        let mut indicator = StrengthIndicator::default();
        assert_eq!(indicator.tier(), None);
        indicator.set(StrengthTier::Weak);
        indicator.set(StrengthTier::Strong);
        assert_eq!(indicator.tier(), Some(StrengthTier::Strong));
        indicator.reset();
        assert_eq!(indicator.tier(), None);
    }
}
