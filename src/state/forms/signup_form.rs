//! Signup form state

use super::field::FormField;
use crate::controller::SignupFields;

/// Index of the password field
pub const PASSWORD_FIELD: usize = 3;
/// Index of the buttons row (after the five text fields)
pub const BUTTONS_ROW: usize = 5;

/// Buttons in the actions panel, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormButton {
    Submit,
    Clear,
    Quit,
}

impl FormButton {
    pub const ALL: [FormButton; 3] = [FormButton::Submit, FormButton::Clear, FormButton::Quit];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Submit => "Sign up",
            Self::Clear => "Clear",
            Self::Quit => "Quit",
        }
    }
}

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    /// Active text field, or `None` on the buttons row
    fn get_active_field_mut(&mut self) -> Option<&mut FormField>;
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

#[derive(Debug, Clone)]
pub struct SignupForm {
    pub first_name: FormField,
    pub last_name: FormField,
    pub email: FormField,
    pub password: FormField,
    pub confirm_password: FormField,
    pub active_field_index: usize,
    /// Index into [`FormButton::ALL`] when the buttons row is active
    pub selected_button: usize,
}

impl SignupForm {
    pub fn new() -> Self {
        Self {
            first_name: FormField::text("firstName", "First name"),
            last_name: FormField::text("lastName", "Last name"),
            email: FormField::text("email", "Email"),
            password: FormField::secret("password", "Password"),
            confirm_password: FormField::secret("confirmPassword", "Confirm password"),
            active_field_index: 0,
            selected_button: 0,
        }
    }

    /// Returns true if the buttons row is currently active
    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == BUTTONS_ROW
    }

    pub fn is_password_active(&self) -> bool {
        self.active_field_index == PASSWORD_FIELD
    }

    pub fn selected_button(&self) -> FormButton {
        FormButton::ALL[self.selected_button % FormButton::ALL.len()]
    }

    /// Move to the next button (wraps around)
    pub fn next_button(&mut self) {
        self.selected_button = (self.selected_button + 1) % FormButton::ALL.len();
    }

    /// Move to the previous button (wraps around)
    pub fn prev_button(&mut self) {
        if self.selected_button == 0 {
            self.selected_button = FormButton::ALL.len() - 1;
        } else {
            self.selected_button -= 1;
        }
    }

    /// Snapshot the current values for a submission attempt
    pub fn values(&self) -> SignupFields {
        SignupFields {
            first_name: self.first_name.as_text().to_string(),
            last_name: self.last_name.as_text().to_string(),
            email: self.email.as_text().to_string(),
            password: self.password.as_text().to_string(),
            confirm_password: self.confirm_password.as_text().to_string(),
        }
    }

    /// Empty every field and return focus to the first one
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for SignupForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for SignupForm {
    fn field_count(&self) -> usize {
        6 // five text fields, buttons
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(BUTTONS_ROW);
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        match self.active_field_index {
            0 => Some(&mut self.first_name),
            1 => Some(&mut self.last_name),
            2 => Some(&mut self.email),
            3 => Some(&mut self.password),
            4 => Some(&mut self.confirm_password),
            _ => None,
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.first_name),
            1 => Some(&self.last_name),
            2 => Some(&self.email),
            3 => Some(&self.password),
            4 => Some(&self.confirm_password),
            _ => None,
        }
    }
}
