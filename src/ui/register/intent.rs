use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum RegisterIntent {
    /// Printable character typed into the focused field.
    Input(char),
    Backspace,
    FocusNext,
    FocusPrev,
    /// Validate all four fields; a clean result marks the form submitting.
    Submit,
    /// Clear the form, e.g. after the account is created.
    Reset,
}

impl Intent for RegisterIntent {}
