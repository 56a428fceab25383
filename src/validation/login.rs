use super::email::is_valid_email;
use super::fields::{FieldErrors, FieldId};

/// Raw values of the sign-in form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoginFields {
    pub email: String,
    pub password: String,
}

/// Validate a sign-in attempt. Both fields are checked independently.
pub fn validate_login(fields: &LoginFields) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if fields.email.trim().is_empty() {
        errors.set(FieldId::Email, "Email is required");
    } else if !is_valid_email(&fields.email) {
        errors.set(FieldId::Email, "Please enter a valid email address");
    }

    if fields.password.trim().is_empty() {
        errors.set(FieldId::Password, "Password is required");
    } else if fields.password.chars().count() < 6 {
        errors.set(
            FieldId::Password,
            "Password must be at least 6 characters long",
        );
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(email: &str, password: &str) -> LoginFields {
        LoginFields {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn both_empty_reports_both_required() {
        let errors = validate_login(&fields("", ""));
        assert_eq!(errors.get(FieldId::Email), Some("Email is required"));
        assert_eq!(errors.get(FieldId::Password), Some("Password is required"));
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        let errors = validate_login(&fields("   ", "  \t "));
        assert_eq!(errors.get(FieldId::Email), Some("Email is required"));
        assert_eq!(errors.get(FieldId::Password), Some("Password is required"));
    }

    #[test]
    fn malformed_email_reports_format_error() {
        let errors = validate_login(&fields("not-an-email", "abcdef"));
        assert_eq!(
            errors.get(FieldId::Email),
            Some("Please enter a valid email address")
        );
        assert_eq!(errors.get(FieldId::Password), None);
    }

    #[test]
    fn short_password_reports_length_error() {
        let errors = validate_login(&fields("a@b.com", "abc"));
        assert_eq!(
            errors.get(FieldId::Password),
            Some("Password must be at least 6 characters long")
        );
    }

    #[test]
    fn valid_credentials_produce_empty_result() {
        assert!(validate_login(&fields("a@b.com", "abcdef")).is_valid());
    }

    #[test]
    fn six_characters_is_exactly_enough() {
        assert!(validate_login(&fields("a@b.com", "123456")).is_valid());
        assert!(!validate_login(&fields("a@b.com", "12345")).is_valid());
    }
}
