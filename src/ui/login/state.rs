use crate::ui::mvi::UiState;
use crate::validation::{FieldErrors, FieldId, LoginFields};

/// Which sign-in input currently receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginFocus {
    #[default]
    Email,
    Password,
}

impl LoginFocus {
    pub fn next(self) -> Self {
        match self {
            LoginFocus::Email => LoginFocus::Password,
            LoginFocus::Password => LoginFocus::Email,
        }
    }

    pub fn prev(self) -> Self {
        // Two fields: backwards is the same hop.
        self.next()
    }

    pub fn field_id(self) -> FieldId {
        match self {
            LoginFocus::Email => FieldId::Email,
            LoginFocus::Password => FieldId::Password,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoginFormState {
    pub fields: LoginFields,
    pub errors: FieldErrors,
    pub focus: LoginFocus,
    /// Set while a validated submission is in flight; input is ignored
    /// until the backend reply lands.
    pub submitting: bool,
}

impl UiState for LoginFormState {}
