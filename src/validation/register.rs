use super::email::is_valid_email;
use super::fields::{FieldErrors, FieldId};

/// Raw values of the registration form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RegistrationFields {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Validate a registration attempt.
///
/// All four fields are evaluated independently; an error in one never
/// short-circuits the others. The confirm field compares against the
/// password byte-for-byte, untrimmed.
pub fn validate_registration(fields: &RegistrationFields) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if fields.full_name.trim().is_empty() {
        errors.set(FieldId::FullName, "Full name is required");
    } else if fields.full_name.trim().chars().count() < 2 {
        errors.set(FieldId::FullName, "Full name must be at least 2 characters");
    }

    if fields.email.trim().is_empty() {
        errors.set(FieldId::Email, "Email is required");
    } else if !is_valid_email(&fields.email) {
        errors.set(FieldId::Email, "Please enter a valid email address");
    }

    if fields.password.trim().is_empty() {
        errors.set(FieldId::Password, "Password is required");
    } else if fields.password.chars().count() < 8 {
        errors.set(
            FieldId::Password,
            "Password must be at least 8 characters long",
        );
    } else if !password_composition_ok(&fields.password) {
        errors.set(
            FieldId::Password,
            "Password must contain at least one uppercase letter, one lowercase letter, and one number",
        );
    }

    if fields.confirm_password.trim().is_empty() {
        errors.set(FieldId::ConfirmPassword, "Please confirm your password");
    } else if fields.confirm_password != fields.password {
        errors.set(FieldId::ConfirmPassword, "Passwords do not match");
    }

    errors
}

// One lowercase letter, one uppercase letter, one digit, anywhere in the
// string. Order irrelevant.
fn password_composition_ok(password: &str) -> bool {
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    has_lower && has_upper && has_digit
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_fields() -> RegistrationFields {
        RegistrationFields {
            full_name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            password: "Abcdefgh1".to_string(),
            confirm_password: "Abcdefgh1".to_string(),
        }
    }

    #[test]
    fn fully_valid_form_has_no_errors() {
        assert!(validate_registration(&valid_fields()).is_valid());
    }

    #[test]
    fn all_fields_evaluated_independently() {
        let errors = validate_registration(&RegistrationFields::default());
        assert_eq!(errors.get(FieldId::FullName), Some("Full name is required"));
        assert_eq!(errors.get(FieldId::Email), Some("Email is required"));
        assert_eq!(errors.get(FieldId::Password), Some("Password is required"));
        assert_eq!(
            errors.get(FieldId::ConfirmPassword),
            Some("Please confirm your password")
        );
    }

    #[test]
    fn single_character_name_is_too_short() {
        let mut fields = valid_fields();
        fields.full_name = " A ".to_string();
        assert_eq!(
            validate_registration(&fields).get(FieldId::FullName),
            Some("Full name must be at least 2 characters")
        );
    }

    #[test]
    fn seven_character_password_is_too_short() {
        let mut fields = valid_fields();
        fields.password = "Abcdef1".to_string();
        fields.confirm_password = "Abcdef1".to_string();
        assert_eq!(
            validate_registration(&fields).get(FieldId::Password),
            Some("Password must be at least 8 characters long")
        );
    }

    #[test]
    fn missing_uppercase_reports_composition_error() {
        let mut fields = valid_fields();
        fields.password = "alllowercase1".to_string();
        fields.confirm_password = "alllowercase1".to_string();
        assert_eq!(
            validate_registration(&fields).get(FieldId::Password),
            Some("Password must contain at least one uppercase letter, one lowercase letter, and one number")
        );
    }

    #[test]
    fn missing_digit_reports_composition_error() {
        let mut fields = valid_fields();
        fields.password = "NoDigitsHere".to_string();
        fields.confirm_password = "NoDigitsHere".to_string();
        assert!(!validate_registration(&fields).is_valid());
    }

    #[test]
    fn length_check_wins_over_composition_check() {
        let mut fields = valid_fields();
        fields.password = "abc".to_string();
        fields.confirm_password = "abc".to_string();
        assert_eq!(
            validate_registration(&fields).get(FieldId::Password),
            Some("Password must be at least 8 characters long")
        );
    }

    #[test]
    fn mismatch_is_exactly_one_message_on_confirm() {
        let mut fields = valid_fields();
        fields.confirm_password = "Abcdefgh2".to_string();
        let errors = validate_registration(&fields);
        assert_eq!(
            errors.get(FieldId::ConfirmPassword),
            Some("Passwords do not match")
        );
        // A valid password never piggybacks its own error on a mismatch.
        assert_eq!(errors.get(FieldId::Password), None);
    }

    #[test]
    fn confirm_comparison_is_untrimmed() {
        let mut fields = valid_fields();
        fields.confirm_password = "Abcdefgh1 ".to_string();
        assert_eq!(
            validate_registration(&fields).get(FieldId::ConfirmPassword),
            Some("Passwords do not match")
        );
    }
}
