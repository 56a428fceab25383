use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum LoginIntent {
    /// Printable character typed into the focused field.
    Input(char),
    Backspace,
    FocusNext,
    FocusPrev,
    /// Validate; a clean result marks the form as submitting.
    Submit,
    /// Clear the form, e.g. after a successful sign-in or on logout.
    Reset,
}

impl Intent for LoginIntent {}
