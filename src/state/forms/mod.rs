//! Form domain layer

mod field;
mod signup_form;

pub use field::FormField;
pub use signup_form::{Form, FormButton, SignupForm, BUTTONS_ROW, PASSWORD_FIELD};
