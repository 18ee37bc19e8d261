//! Signup form submission handler
//!
//! Runs the fixed check order (presence, name allowlist, password strength,
//! password match), stops at the first failure, and on success produces the
//! sanitized field values.

use crate::display::ErrorSink;
use crate::sanitize::{escape_for_sql_with, sanitize_input, SqlEscapeMode};
use crate::validation::{allowlist_input, validate_password_strength};
use serde::Serialize;
use thiserror::Error;

/// The five values read from the form for one submission attempt
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupFields {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    #[serde(skip_serializing)]
    pub confirm_password: String,
}

impl SignupFields {
    fn any_empty(&self) -> bool {
        [
            &self.first_name,
            &self.last_name,
            &self.email,
            &self.password,
            &self.confirm_password,
        ]
        .iter()
        .any(|value| value.is_empty())
    }
}

/// Reason a submission was rejected. `Display` is the user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("All fields are required.")]
    MissingField,
    #[error("First name and last name can only contain letters and numbers.")]
    InvalidName,
    #[error("Password must be at least 8 characters long and contain both letters and numbers.")]
    WeakPassword,
    #[error("Passwords do not match.")]
    PasswordMismatch,
}

/// Validates and transforms signup submissions
#[derive(Debug, Clone, Copy, Default)]
pub struct FormController {
    sql_mode: SqlEscapeMode,
}

impl FormController {
    pub fn new(sql_mode: SqlEscapeMode) -> Self {
        Self { sql_mode }
    }

    /// Run the checks in order, returning the first failure
    pub fn check(&self, fields: &SignupFields) -> Result<(), ValidationError> {
        if fields.any_empty() {
            return Err(ValidationError::MissingField);
        }
        if !allowlist_input(&fields.first_name) || !allowlist_input(&fields.last_name) {
            return Err(ValidationError::InvalidName);
        }
        if !validate_password_strength(&fields.password) {
            return Err(ValidationError::WeakPassword);
        }
        if fields.password != fields.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        Ok(())
    }

    /// HTML-sanitize every field, then SQL-escape all but the confirmation
    pub fn transform(&self, fields: &SignupFields) -> SignupFields {
        let escape = |value: &str| escape_for_sql_with(&sanitize_input(value), self.sql_mode);
        SignupFields {
            first_name: escape(&fields.first_name),
            last_name: escape(&fields.last_name),
            email: escape(&fields.email),
            password: escape(&fields.password),
            confirm_password: sanitize_input(&fields.confirm_password),
        }
    }

    /// Handle one submission, reporting the outcome through `errors`
    pub fn submit(
        &self,
        fields: &SignupFields,
        errors: &mut impl ErrorSink,
    ) -> Result<SignupFields, ValidationError> {
        if let Err(err) = self.check(fields) {
            tracing::debug!(reason = ?err, "Signup rejected");
            errors.show(&err.to_string());
            return Err(err);
        }

        let sanitized = self.transform(fields);
        errors.clear();
        tracing::debug!("Signup accepted");
        Ok(sanitized)
    }
}

/// Submit handler result: `false` blocks the submission
#[allow(dead_code)]
pub fn validate_form(fields: &SignupFields, errors: &mut impl ErrorSink) -> bool {
    FormController::default().submit(fields, errors).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::MockErrorSink;
    use pretty_assertions::assert_eq;

    fn valid_fields() -> SignupFields {
        SignupFields {
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            email: "j@x.com".to_string(),
            password: "abc12345".to_string(),
            confirm_password: "abc12345".to_string(),
        }
    }

    fn expect_error(message: &'static str) -> MockErrorSink {
        let mut sink = MockErrorSink::new();
        sink.expect_show()
            .withf(move |m| m == message)
            .times(1)
            .return_const(());
        sink
    }

    #[test]
    fn test_valid_submission_is_accepted_and_clears_error() {
        let mut sink = MockErrorSink::new();
        sink.expect_clear().times(1).return_const(());
        assert!(validate_form(&valid_fields(), &mut sink));
    }

    #[test]
    fn test_each_empty_field_is_rejected() {
        let blanks: [fn(&mut SignupFields); 5] = [
            |f| f.first_name.clear(),
            |f| f.last_name.clear(),
            |f| f.email.clear(),
            |f| f.password.clear(),
            |f| f.confirm_password.clear(),
        ];
        for blank in blanks {
            let mut fields = valid_fields();
            blank(&mut fields);
            let mut sink = expect_error("All fields are required.");
            assert!(!validate_form(&fields, &mut sink));
        }
    }

    #[test]
    fn test_invalid_first_name_is_rejected() {
        let fields = SignupFields {
            first_name: "John!".to_string(),
            ..valid_fields()
        };
        let mut sink =
            expect_error("First name and last name can only contain letters and numbers.");
        assert!(!validate_form(&fields, &mut sink));
    }

    #[test]
    fn test_invalid_last_name_is_rejected() {
        let fields = SignupFields {
            last_name: "Van Dyke".to_string(),
            ..valid_fields()
        };
        let mut sink =
            expect_error("First name and last name can only contain letters and numbers.");
        assert!(!validate_form(&fields, &mut sink));
    }

    #[test]
    fn test_short_password_is_rejected() {
        let fields = SignupFields {
            password: "short1".to_string(),
            confirm_password: "short1".to_string(),
            ..valid_fields()
        };
        let mut sink = expect_error(
            "Password must be at least 8 characters long and contain both letters and numbers.",
        );
        assert!(!validate_form(&fields, &mut sink));
    }

    #[test]
    fn test_mismatched_passwords_are_rejected() {
        let fields = SignupFields {
            confirm_password: "abc123456".to_string(),
            ..valid_fields()
        };
        let mut sink = expect_error("Passwords do not match.");
        assert!(!validate_form(&fields, &mut sink));
    }

    #[test]
    fn test_checks_short_circuit_in_order() {
        // Every rule is broken; only the presence error is reported
        let fields = SignupFields {
            first_name: "J!".to_string(),
            last_name: String::new(),
            email: "j@x.com".to_string(),
            password: "x".to_string(),
            confirm_password: "y".to_string(),
        };
        let controller = FormController::default();
        assert_eq!(controller.check(&fields), Err(ValidationError::MissingField));

        let fields = SignupFields {
            last_name: "Doe".to_string(),
            ..fields
        };
        assert_eq!(controller.check(&fields), Err(ValidationError::InvalidName));

        let fields = SignupFields {
            first_name: "John".to_string(),
            ..fields
        };
        assert_eq!(controller.check(&fields), Err(ValidationError::WeakPassword));

        let fields = SignupFields {
            password: "abc12345".to_string(),
            ..fields
        };
        assert_eq!(
            controller.check(&fields),
            Err(ValidationError::PasswordMismatch)
        );
    }

    #[test]
    fn test_email_is_not_validated() {
        let fields = SignupFields {
            email: "<not an email>".to_string(),
            ..valid_fields()
        };
        let mut sink = MockErrorSink::new();
        sink.expect_clear().times(1).return_const(());
        let sanitized = FormController::default().submit(&fields, &mut sink).unwrap();
        assert_eq!(sanitized.email, r"&lt\;not an email&gt\;");
    }

    #[test]
    fn test_transform_sanitizes_then_escapes() {
        let fields = SignupFields {
            email: "o'brien@x.com".to_string(),
            password: "abc1234;".to_string(),
            confirm_password: "abc1234'".to_string(),
            ..valid_fields()
        };
        let out = FormController::default().transform(&fields);
        // Quotes become entities before escaping; the entity's `;` is escaped
        assert_eq!(out.email, r"o&#x27\;brien@x.com");
        assert_eq!(out.password, r"abc1234\;");
        // Confirmation is sanitized but not escaped
        assert_eq!(out.confirm_password, "abc1234&#x27;");
    }

    #[test]
    fn test_transform_escapes_entity_semicolons() {
        let fields = SignupFields {
            email: "a&b@x.com".to_string(),
            ..valid_fields()
        };
        let out = FormController::default().transform(&fields);
        assert_eq!(out.email, r"a&amp\;b@x.com");
    }

    #[test]
    fn test_strict_mode_escapes_comment_sequence() {
        let fields = SignupFields {
            email: "x--y@x.com".to_string(),
            ..valid_fields()
        };
        let legacy = FormController::default().transform(&fields);
        let strict = FormController::new(SqlEscapeMode::Strict).transform(&fields);
        assert_eq!(legacy.email, "x--y@x.com");
        assert_eq!(strict.email, r"x\--y@x.com");
    }

    #[test]
    fn test_input_fields_are_not_modified() {
        let fields = SignupFields {
            email: "a&b@x.com".to_string(),
            ..valid_fields()
        };
        let before = fields.clone();
        let mut sink = MockErrorSink::new();
        sink.expect_clear().return_const(());
        let _ = FormController::default().submit(&fields, &mut sink);
        assert_eq!(fields, before);
    }

    #[test]
    fn test_serialization_omits_passwords() {
        let json = serde_json::to_value(valid_fields()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "firstName": "John",
                "lastName": "Doe",
                "email": "j@x.com",
            })
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ValidationError::MissingField.to_string(),
            "All fields are required."
        );
        assert_eq!(
            ValidationError::PasswordMismatch.to_string(),
            "Passwords do not match."
        );
    }
}
