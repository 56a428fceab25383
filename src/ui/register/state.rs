use crate::ui::mvi::UiState;
use crate::validation::{FieldErrors, FieldId, RegistrationFields};

/// Which registration input currently receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegisterFocus {
    #[default]
    FullName,
    Email,
    Password,
    ConfirmPassword,
}

impl RegisterFocus {
    const ORDER: [RegisterFocus; 4] = [
        RegisterFocus::FullName,
        RegisterFocus::Email,
        RegisterFocus::Password,
        RegisterFocus::ConfirmPassword,
    ];

    pub fn next(self) -> Self {
        let idx = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(idx + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        let idx = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(idx + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    pub fn field_id(self) -> FieldId {
        match self {
            RegisterFocus::FullName => FieldId::FullName,
            RegisterFocus::Email => FieldId::Email,
            RegisterFocus::Password => FieldId::Password,
            RegisterFocus::ConfirmPassword => FieldId::ConfirmPassword,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RegisterFormState {
    pub fields: RegistrationFields,
    pub errors: FieldErrors,
    pub focus: RegisterFocus,
    /// Set while a validated submission is in flight.
    pub submitting: bool,
}

impl UiState for RegisterFormState {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_wraps_in_both_directions() {
        assert_eq!(RegisterFocus::ConfirmPassword.next(), RegisterFocus::FullName);
        assert_eq!(RegisterFocus::FullName.prev(), RegisterFocus::ConfirmPassword);

        let mut focus = RegisterFocus::FullName;
        for _ in 0..4 {
            focus = focus.next();
        }
        assert_eq!(focus, RegisterFocus::FullName);
    }
}
