use std::collections::BTreeMap;

/// Identifies one text input across the sign-in and registration forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FieldId {
    FullName,
    Email,
    Password,
    ConfirmPassword,
}

/// Field-keyed validation outcome.
///
/// Absence of an entry means the field is valid; the whole form is valid
/// exactly when no entries remain.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldErrors {
    errors: BTreeMap<FieldId, String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, field: FieldId, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    pub fn get(&self, field: FieldId) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Drop the entry for one field, typically because the user edited it.
    pub fn clear(&mut self, field: FieldId) {
        self.errors.remove(&field);
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldId, &str)> {
        self.errors.iter().map(|(id, msg)| (*id, msg.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_map_is_valid() {
        assert!(FieldErrors::new().is_valid());
    }

    #[test]
    fn set_get_clear_round_trip() {
        let mut errors = FieldErrors::new();
        errors.set(FieldId::Email, "Email is required");
        assert!(!errors.is_valid());
        assert_eq!(errors.get(FieldId::Email), Some("Email is required"));
        assert_eq!(errors.get(FieldId::Password), None);

        errors.clear(FieldId::Email);
        assert!(errors.is_valid());
    }

    #[test]
    fn later_set_replaces_earlier_message() {
        let mut errors = FieldErrors::new();
        errors.set(FieldId::Password, "first");
        errors.set(FieldId::Password, "second");
        assert_eq!(errors.get(FieldId::Password), Some("second"));
        assert_eq!(errors.iter().count(), 1);
    }
}
