//! Application state definitions

use super::indicators::{StatusLine, StrengthIndicator};
use super::forms::{Form, SignupForm};
use crate::controller::SignupFields;
use crate::display::ErrorSink;
use crate::strength::check_password_strength;

/// Complete UI state for the signup screen
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub form: SignupForm,
    pub status: StatusLine,
    pub strength: StrengthIndicator,
    /// Sanitized values from the most recent accepted submission
    pub accepted: Option<SignupFields>,
    /// Whether the acceptance dialog is open
    pub show_accepted_dialog: bool,
}

impl AppState {
    /// Type a character into the active field
    pub fn form_input_char(&mut self, c: char) {
        if let Some(field) = self.form.get_active_field_mut() {
            field.push_char(c);
        }
        self.after_edit();
    }

    /// Remove the last character of the active field
    pub fn form_backspace(&mut self) {
        if let Some(field) = self.form.get_active_field_mut() {
            field.pop_char();
        }
        self.after_edit();
    }

    /// Clear every field, the status line and the strength indicator
    pub fn clear_form(&mut self) {
        self.form.reset();
        self.strength.reset();
        self.status.clear();
    }

    pub fn dismiss_accepted_dialog(&mut self) {
        self.show_accepted_dialog = false;
    }

    /// Password edits refresh the strength indicator
    fn after_edit(&mut self) {
        if self.form.is_password_active() {
            check_password_strength(self.form.password.as_text(), &mut self.strength);
        }
    }
}
